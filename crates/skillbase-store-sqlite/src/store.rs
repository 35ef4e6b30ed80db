//! [`SqliteStore`] — the SQLite implementation of [`SkillStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use skillbase_core::{
  Error as CoreError,
  assessment::{EmployeeSkillGrade, NewEmployeeSkillGrade},
  employee::{Employee, NewEmployee},
  grade::{NewSkillGrade, SkillGrade},
  page::{Page, PageRequest},
  profile::{JobProfile, NewJobProfile, NewSkillProfile, SkillProfile},
  skill::{NewSkill, Skill},
  store::SkillStore,
};

use crate::{
  Error, Result,
  assoc::{
    self, EMPLOYEE_JOB_PROFILES, EMPLOYEE_SKILL_PROFILES, JOB_PROFILE_SKILLS,
    LinkTable, Side, entity_exists,
  },
  encode::{
    CATALOG_COLS, EMPLOYEE_COLS, ESG_COLS, RawCatalogRow, RawEmployee,
    RawEmployeeSkillGrade, RawSkillGrade, SKILL_GRADE_COLS, encode_date, encode_dt,
  },
  schema::SCHEMA,
};

// ─── Entity names and dependent tables ───────────────────────────────────────

const EMPLOYEE: &str = "Employee";
const SKILL: &str = "Skill";
const SKILL_PROFILE: &str = "Skill profile";
const JOB_PROFILE: &str = "Job profile";
const SKILL_GRADE: &str = "Skill grade";
const EMPLOYEE_SKILL_GRADE: &str = "Employee skill grade";
const REVIEWER: &str = "Reviewer employee";

/// (table, column) pairs that block a delete while any row references the
/// target. Deletes never cascade; the caller removes dependents first.
const EMPLOYEE_DEPS: &[(&str, &str)] = &[
  ("employee_job_profile", "employee_id"),
  ("employee_skill_profile", "employee_id"),
  ("employee_skill_grade", "employee_id"),
  ("employee_skill_grade", "reviewed_by_employee_id"),
];
const SKILL_DEPS: &[(&str, &str)] =
  &[("skill_grade", "skill_id"), ("job_profile_skill", "skill_id")];
const SKILL_PROFILE_DEPS: &[(&str, &str)] =
  &[("employee_skill_profile", "skill_profile_id")];
const JOB_PROFILE_DEPS: &[(&str, &str)] = &[
  ("employee_job_profile", "job_profile_id"),
  ("job_profile_skill", "job_profile_id"),
];
const SKILL_GRADE_DEPS: &[(&str, &str)] =
  &[("employee_skill_grade", "skill_grade_id")];
const ESG_DEPS: &[(&str, &str)] = &[];

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Skillbase store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── Mutation outcome ────────────────────────────────────────────────────────

/// Outcome of a check-then-write closure. Domain rejections travel through
/// the `Ok` channel so the transaction rolls back on early return and the
/// error is raised after the await.
enum Mutation<T> {
  Done(T),
  Fail(CoreError),
}

fn resolve<T>(m: Mutation<T>) -> Result<T> {
  match m {
    Mutation::Done(v) => Ok(v),
    Mutation::Fail(e) => Err(Error::Domain(e)),
  }
}

// ─── Synchronous row helpers ─────────────────────────────────────────────────
// These run inside `conn.call` closures, against the open transaction.

fn employee_row(
  conn: &rusqlite::Connection,
  id: i64,
) -> rusqlite::Result<Option<RawEmployee>> {
  conn
    .query_row(
      &format!("SELECT {EMPLOYEE_COLS} FROM employee WHERE id = ?1"),
      rusqlite::params![id],
      RawEmployee::from_row,
    )
    .optional()
}

fn catalog_row(
  conn: &rusqlite::Connection,
  table: &str,
  id: i64,
) -> rusqlite::Result<Option<RawCatalogRow>> {
  conn
    .query_row(
      &format!("SELECT {CATALOG_COLS} FROM {table} WHERE id = ?1"),
      rusqlite::params![id],
      RawCatalogRow::from_row,
    )
    .optional()
}

fn skill_grade_row(
  conn: &rusqlite::Connection,
  id: i64,
) -> rusqlite::Result<Option<RawSkillGrade>> {
  conn
    .query_row(
      &format!("SELECT {SKILL_GRADE_COLS} FROM skill_grade WHERE id = ?1"),
      rusqlite::params![id],
      RawSkillGrade::from_row,
    )
    .optional()
}

fn esg_row(
  conn: &rusqlite::Connection,
  id: i64,
) -> rusqlite::Result<Option<RawEmployeeSkillGrade>> {
  conn
    .query_row(
      &format!("SELECT {ESG_COLS} FROM employee_skill_grade WHERE id = ?1"),
      rusqlite::params![id],
      RawEmployeeSkillGrade::from_row,
    )
    .optional()
}

// Uniqueness predicates. Pre-checks for clean error messages; the schema's
// UNIQUE constraints remain the authoritative backstop.

fn email_exists(conn: &rusqlite::Connection, email: &str) -> rusqlite::Result<bool> {
  Ok(
    conn
      .query_row(
        "SELECT 1 FROM employee WHERE email = ?1",
        rusqlite::params![email],
        |_| Ok(true),
      )
      .optional()?
      .unwrap_or(false),
  )
}

fn name_exists(
  conn: &rusqlite::Connection,
  table: &str,
  name: &str,
) -> rusqlite::Result<bool> {
  Ok(
    conn
      .query_row(
        &format!("SELECT 1 FROM {table} WHERE name = ?1"),
        rusqlite::params![name],
        |_| Ok(true),
      )
      .optional()?
      .unwrap_or(false),
  )
}

fn grade_code_exists(
  conn: &rusqlite::Connection,
  skill_id: i64,
  code: &str,
) -> rusqlite::Result<bool> {
  Ok(
    conn
      .query_row(
        "SELECT 1 FROM skill_grade WHERE skill_id = ?1 AND code = ?2",
        rusqlite::params![skill_id, code],
        |_| Ok(true),
      )
      .optional()?
      .unwrap_or(false),
  )
}

fn esg_pair_exists(
  conn: &rusqlite::Connection,
  employee_id: i64,
  skill_grade_id: i64,
) -> rusqlite::Result<bool> {
  Ok(
    conn
      .query_row(
        "SELECT 1 FROM employee_skill_grade
         WHERE employee_id = ?1 AND skill_grade_id = ?2",
        rusqlite::params![employee_id, skill_grade_id],
        |_| Ok(true),
      )
      .optional()?
      .unwrap_or(false),
  )
}

fn has_dependents(
  conn: &rusqlite::Connection,
  deps: &[(&str, &str)],
  id: i64,
) -> rusqlite::Result<bool> {
  for (table, col) in deps {
    let sql = format!("SELECT 1 FROM {table} WHERE {col} = ?1 LIMIT 1");
    let hit = conn
      .query_row(&sql, rusqlite::params![id], |_| Ok(true))
      .optional()?
      .unwrap_or(false);
    if hit {
      return Ok(true);
    }
  }
  Ok(false)
}

/// Escape LIKE wildcards in a user-supplied search term so `%` and `_`
/// match literally. Patterns built from this must use `ESCAPE '\'`.
fn escape_like(term: &str) -> String {
  term
    .replace('\\', "\\\\")
    .replace('%', "\\%")
    .replace('_', "\\_")
}

// ─── Generic internals ───────────────────────────────────────────────────────

impl SqliteStore {
  /// Paged or full listing of a single table ordered by insertion (id).
  async fn list_rows<R, T>(
    &self,
    table: &'static str,
    cols: &'static str,
    page: Option<PageRequest>,
    from_row: fn(&rusqlite::Row<'_>) -> rusqlite::Result<R>,
    decode: fn(R) -> Result<T>,
  ) -> Result<Page<T>>
  where
    R: Send + 'static,
  {
    let (raws, total): (Vec<R>, i64) = self
      .conn
      .call(move |conn| {
        let total: i64 =
          conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |r| r.get(0))?;

        let raws = match page {
          Some(p) => {
            let sql = format!(
              "SELECT {cols} FROM {table} ORDER BY id {} LIMIT ?1 OFFSET ?2",
              p.sort.as_sql()
            );
            let mut stmt = conn.prepare(&sql)?;
            stmt
              .query_map(rusqlite::params![p.size, p.offset()], from_row)?
              .collect::<rusqlite::Result<Vec<_>>>()?
          }
          None => {
            let sql = format!("SELECT {cols} FROM {table} ORDER BY id");
            let mut stmt = conn.prepare(&sql)?;
            stmt
              .query_map([], from_row)?
              .collect::<rusqlite::Result<Vec<_>>>()?
          }
        };

        Ok((raws, total))
      })
      .await?;

    let content = raws.into_iter().map(decode).collect::<Result<Vec<_>>>()?;
    Ok(match page {
      Some(p) => Page::new(content, p.page, p.size, total as u64),
      None => Page::unpaged(content),
    })
  }

  /// Paged employee listing with an optional WHERE clause binding `?1`.
  async fn employees_where(
    &self,
    where_sql: &'static str,
    param: Option<String>,
    page: PageRequest,
  ) -> Result<Page<Employee>> {
    let (raws, total): (Vec<RawEmployee>, i64) = self
      .conn
      .call(move |conn| {
        let count_sql = format!("SELECT COUNT(*) FROM employee {where_sql}");
        let limit_clause = if param.is_some() {
          "LIMIT ?2 OFFSET ?3"
        } else {
          "LIMIT ?1 OFFSET ?2"
        };
        let select_sql = format!(
          "SELECT {EMPLOYEE_COLS} FROM employee {where_sql}
           ORDER BY id {} {limit_clause}",
          page.sort.as_sql()
        );

        let (total, raws) = match &param {
          Some(p) => {
            let total: i64 =
              conn.query_row(&count_sql, rusqlite::params![p], |r| r.get(0))?;
            let mut stmt = conn.prepare(&select_sql)?;
            let raws = stmt
              .query_map(
                rusqlite::params![p, page.size, page.offset()],
                RawEmployee::from_row,
              )?
              .collect::<rusqlite::Result<Vec<_>>>()?;
            (total, raws)
          }
          None => {
            let total: i64 = conn.query_row(&count_sql, [], |r| r.get(0))?;
            let mut stmt = conn.prepare(&select_sql)?;
            let raws = stmt
              .query_map(
                rusqlite::params![page.size, page.offset()],
                RawEmployee::from_row,
              )?
              .collect::<rusqlite::Result<Vec<_>>>()?;
            (total, raws)
          }
        };

        Ok((raws, total))
      })
      .await?;

    let content = raws
      .into_iter()
      .map(RawEmployee::into_employee)
      .collect::<Result<Vec<_>>>()?;
    Ok(Page::new(content, page.page, page.size, total as u64))
  }

  /// Create a row in one of the name-keyed catalog tables.
  async fn create_catalog(
    &self,
    table: &'static str,
    entity: &'static str,
    name: String,
    description: Option<String>,
  ) -> Result<RawCatalogRow> {
    let now = encode_dt(Utc::now());

    let m = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if name_exists(&tx, table, &name)? {
          return Ok(Mutation::Fail(CoreError::Conflict(format!(
            "{entity} with name {name} already exists"
          ))));
        }

        tx.execute(
          &format!(
            "INSERT INTO {table} (name, description, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4)"
          ),
          rusqlite::params![name, description, now, now],
        )?;
        let id = tx.last_insert_rowid();

        let Some(raw) = catalog_row(&tx, table, id)? else {
          return Ok(Mutation::Fail(CoreError::not_found(entity, id)));
        };
        tx.commit()?;
        Ok(Mutation::Done(raw))
      })
      .await?;

    resolve(m)
  }

  async fn get_catalog(
    &self,
    table: &'static str,
    id: i64,
  ) -> Result<Option<RawCatalogRow>> {
    let raw = self.conn.call(move |conn| Ok(catalog_row(conn, table, id)?)).await?;
    Ok(raw)
  }

  /// Full replace of a catalog row's mutable fields. The name uniqueness
  /// predicate is only re-checked when the name actually changed, so
  /// updating a row to its own name never self-collides.
  async fn update_catalog(
    &self,
    table: &'static str,
    entity: &'static str,
    id: i64,
    name: String,
    description: Option<String>,
  ) -> Result<RawCatalogRow> {
    let now = encode_dt(Utc::now());

    let m = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let Some(current) = catalog_row(&tx, table, id)? else {
          return Ok(Mutation::Fail(CoreError::not_found(entity, id)));
        };

        if current.name != name && name_exists(&tx, table, &name)? {
          return Ok(Mutation::Fail(CoreError::Conflict(format!(
            "{entity} with name {name} already exists"
          ))));
        }

        tx.execute(
          &format!(
            "UPDATE {table} SET name = ?1, description = ?2, updated_at = ?3
             WHERE id = ?4"
          ),
          rusqlite::params![name, description, now, id],
        )?;

        let Some(raw) = catalog_row(&tx, table, id)? else {
          return Ok(Mutation::Fail(CoreError::not_found(entity, id)));
        };
        tx.commit()?;
        Ok(Mutation::Done(raw))
      })
      .await?;

    resolve(m)
  }

  /// Existence check, dependent check, delete — one transaction.
  async fn delete_entity(
    &self,
    table: &'static str,
    entity: &'static str,
    deps: &'static [(&'static str, &'static str)],
    id: i64,
  ) -> Result<()> {
    let m = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if !entity_exists(&tx, table, id)? {
          return Ok(Mutation::Fail(CoreError::not_found(entity, id)));
        }
        if has_dependents(&tx, deps, id)? {
          return Ok(Mutation::Fail(CoreError::Conflict(format!(
            "{entity} with id {id} cannot be deleted: dependent records exist"
          ))));
        }
        tx.execute(&format!("DELETE FROM {table} WHERE id = ?1"), rusqlite::params![
          id
        ])?;
        tx.commit()?;
        Ok(Mutation::Done(()))
      })
      .await?;

    resolve(m)
  }

  /// Generic association assign: duplicate-pair check, then both-sides
  /// existence, then the link insert.
  async fn assign_pair(
    &self,
    lt: &'static LinkTable,
    left: i64,
    right: i64,
  ) -> Result<()> {
    let now = encode_dt(Utc::now());

    let m = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if assoc::pair_exists(&tx, lt, left, right)? {
          return Ok(Mutation::Fail(CoreError::Conflict(format!(
            "{} {} is already associated with {} {}",
            lt.left.name, left, lt.right.name, right
          ))));
        }
        if !entity_exists(&tx, lt.left.table, left)? {
          return Ok(Mutation::Fail(CoreError::not_found(lt.left.name, left)));
        }
        if !entity_exists(&tx, lt.right.table, right)? {
          return Ok(Mutation::Fail(CoreError::not_found(lt.right.name, right)));
        }
        assoc::insert_pair(&tx, lt, left, right, &now)?;
        tx.commit()?;
        Ok(Mutation::Done(()))
      })
      .await?;

    resolve(m)
  }

  async fn remove_pair(
    &self,
    lt: &'static LinkTable,
    left: i64,
    right: i64,
  ) -> Result<()> {
    let deleted = self
      .conn
      .call(move |conn| Ok(assoc::delete_pair(conn, lt, left, right)?))
      .await?;

    if deleted {
      Ok(())
    } else {
      Err(Error::Domain(CoreError::NotFound(format!(
        "{} {} is not associated with {} {}",
        lt.left.name, left, lt.right.name, right
      ))))
    }
  }

  /// Catalog entities linked to `owner` through `lt`, in link insertion
  /// order. NotFound if the owner itself is absent.
  async fn linked_catalog<T>(
    &self,
    lt: &'static LinkTable,
    owner_side: Side,
    owner: i64,
    decode: fn(RawCatalogRow) -> Result<T>,
  ) -> Result<Vec<T>>
  where
    T: Send + 'static,
  {
    let m = self
      .conn
      .call(move |conn| {
        let owner_ref = match owner_side {
          Side::Left => &lt.left,
          Side::Right => &lt.right,
        };
        if !entity_exists(conn, owner_ref.table, owner)? {
          return Ok(Mutation::Fail(CoreError::not_found(owner_ref.name, owner)));
        }
        let raws = assoc::linked_rows(
          conn,
          lt,
          owner_side,
          owner,
          CATALOG_COLS,
          RawCatalogRow::from_row,
        )?;
        Ok(Mutation::Done(raws))
      })
      .await?;

    resolve(m)?.into_iter().map(decode).collect()
  }
}

// ─── SkillStore impl ─────────────────────────────────────────────────────────

impl SkillStore for SqliteStore {
  type Error = Error;

  // ── Employees ──────────────────────────────────────────────────────────

  async fn create_employee(&self, input: NewEmployee) -> Result<Employee> {
    let now = encode_dt(Utc::now());

    let m = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if email_exists(&tx, &input.email)? {
          return Ok(Mutation::Fail(CoreError::Conflict(format!(
            "Employee with email {} already exists",
            input.email
          ))));
        }

        tx.execute(
          "INSERT INTO employee
             (first_name, last_name, email, department, position, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            input.first_name,
            input.last_name,
            input.email,
            input.department,
            input.position,
            now,
            now,
          ],
        )?;
        let id = tx.last_insert_rowid();

        let Some(raw) = employee_row(&tx, id)? else {
          return Ok(Mutation::Fail(CoreError::not_found(EMPLOYEE, id)));
        };
        tx.commit()?;
        Ok(Mutation::Done(raw))
      })
      .await?;

    resolve(m)?.into_employee()
  }

  async fn get_employee(&self, id: i64) -> Result<Option<Employee>> {
    let raw = self.conn.call(move |conn| Ok(employee_row(conn, id)?)).await?;
    raw.map(RawEmployee::into_employee).transpose()
  }

  async fn find_employee_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> Result<Option<Employee>> {
    let email = email.to_owned();
    let raw: Option<RawEmployee> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {EMPLOYEE_COLS} FROM employee WHERE email = ?1"),
              rusqlite::params![email],
              RawEmployee::from_row,
            )
            .optional()?,
        )
      })
      .await?;
    raw.map(RawEmployee::into_employee).transpose()
  }

  async fn list_employees(&self, page: PageRequest) -> Result<Page<Employee>> {
    self.employees_where("", None, page).await
  }

  async fn search_employees<'a>(
    &'a self,
    term: &'a str,
    page: PageRequest,
  ) -> Result<Page<Employee>> {
    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
    self
      .employees_where(
        "WHERE LOWER(first_name) LIKE ?1 ESCAPE '\\'
           OR LOWER(last_name) LIKE ?1 ESCAPE '\\'
           OR LOWER(email) LIKE ?1 ESCAPE '\\'",
        Some(pattern),
        page,
      )
      .await
  }

  async fn employees_by_department<'a>(
    &'a self,
    department: &'a str,
    page: PageRequest,
  ) -> Result<Page<Employee>> {
    self
      .employees_where("WHERE department = ?1", Some(department.to_owned()), page)
      .await
  }

  async fn employees_by_position<'a>(
    &'a self,
    position: &'a str,
    page: PageRequest,
  ) -> Result<Page<Employee>> {
    self
      .employees_where("WHERE position = ?1", Some(position.to_owned()), page)
      .await
  }

  async fn update_employee(&self, id: i64, input: NewEmployee) -> Result<Employee> {
    let now = encode_dt(Utc::now());

    let m = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let Some(current) = employee_row(&tx, id)? else {
          return Ok(Mutation::Fail(CoreError::not_found(EMPLOYEE, id)));
        };

        if current.email != input.email && email_exists(&tx, &input.email)? {
          return Ok(Mutation::Fail(CoreError::Conflict(format!(
            "Employee with email {} already exists",
            input.email
          ))));
        }

        tx.execute(
          "UPDATE employee
             SET first_name = ?1, last_name = ?2, email = ?3,
                 department = ?4, position = ?5, updated_at = ?6
           WHERE id = ?7",
          rusqlite::params![
            input.first_name,
            input.last_name,
            input.email,
            input.department,
            input.position,
            now,
            id,
          ],
        )?;

        let Some(raw) = employee_row(&tx, id)? else {
          return Ok(Mutation::Fail(CoreError::not_found(EMPLOYEE, id)));
        };
        tx.commit()?;
        Ok(Mutation::Done(raw))
      })
      .await?;

    resolve(m)?.into_employee()
  }

  async fn delete_employee(&self, id: i64) -> Result<()> {
    self.delete_entity("employee", EMPLOYEE, EMPLOYEE_DEPS, id).await
  }

  // ── Skill profiles ─────────────────────────────────────────────────────

  async fn create_skill_profile(&self, input: NewSkillProfile) -> Result<SkillProfile> {
    self
      .create_catalog("skill_profile", SKILL_PROFILE, input.name, input.description)
      .await?
      .into_skill_profile()
  }

  async fn get_skill_profile(&self, id: i64) -> Result<Option<SkillProfile>> {
    self
      .get_catalog("skill_profile", id)
      .await?
      .map(RawCatalogRow::into_skill_profile)
      .transpose()
  }

  async fn list_skill_profiles(
    &self,
    page: Option<PageRequest>,
  ) -> Result<Page<SkillProfile>> {
    self
      .list_rows(
        "skill_profile",
        CATALOG_COLS,
        page,
        RawCatalogRow::from_row,
        RawCatalogRow::into_skill_profile,
      )
      .await
  }

  async fn update_skill_profile(
    &self,
    id: i64,
    input: NewSkillProfile,
  ) -> Result<SkillProfile> {
    self
      .update_catalog("skill_profile", SKILL_PROFILE, id, input.name, input.description)
      .await?
      .into_skill_profile()
  }

  async fn delete_skill_profile(&self, id: i64) -> Result<()> {
    self
      .delete_entity("skill_profile", SKILL_PROFILE, SKILL_PROFILE_DEPS, id)
      .await
  }

  // ── Skills ─────────────────────────────────────────────────────────────

  async fn create_skill(&self, input: NewSkill) -> Result<Skill> {
    self
      .create_catalog("skill", SKILL, input.name, input.description)
      .await?
      .into_skill()
  }

  async fn get_skill(&self, id: i64) -> Result<Option<Skill>> {
    self
      .get_catalog("skill", id)
      .await?
      .map(RawCatalogRow::into_skill)
      .transpose()
  }

  async fn list_skills(&self, page: Option<PageRequest>) -> Result<Page<Skill>> {
    self
      .list_rows(
        "skill",
        CATALOG_COLS,
        page,
        RawCatalogRow::from_row,
        RawCatalogRow::into_skill,
      )
      .await
  }

  async fn update_skill(&self, id: i64, input: NewSkill) -> Result<Skill> {
    self
      .update_catalog("skill", SKILL, id, input.name, input.description)
      .await?
      .into_skill()
  }

  async fn delete_skill(&self, id: i64) -> Result<()> {
    self.delete_entity("skill", SKILL, SKILL_DEPS, id).await
  }

  // ── Skill grades ───────────────────────────────────────────────────────

  async fn create_skill_grade(&self, input: NewSkillGrade) -> Result<SkillGrade> {
    let now = encode_dt(Utc::now());

    let m = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if grade_code_exists(&tx, input.skill_id, &input.code)? {
          return Ok(Mutation::Fail(CoreError::Conflict(format!(
            "Skill grade with code {} already exists for skill id: {}",
            input.code, input.skill_id
          ))));
        }
        if !entity_exists(&tx, "skill", input.skill_id)? {
          return Ok(Mutation::Fail(CoreError::not_found(SKILL, input.skill_id)));
        }

        tx.execute(
          "INSERT INTO skill_grade (skill_id, code, description, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![input.skill_id, input.code, input.description, now, now],
        )?;
        let id = tx.last_insert_rowid();

        let Some(raw) = skill_grade_row(&tx, id)? else {
          return Ok(Mutation::Fail(CoreError::not_found(SKILL_GRADE, id)));
        };
        tx.commit()?;
        Ok(Mutation::Done(raw))
      })
      .await?;

    resolve(m)?.into_skill_grade()
  }

  async fn get_skill_grade(&self, id: i64) -> Result<Option<SkillGrade>> {
    let raw = self.conn.call(move |conn| Ok(skill_grade_row(conn, id)?)).await?;
    raw.map(RawSkillGrade::into_skill_grade).transpose()
  }

  async fn list_skill_grades(
    &self,
    page: Option<PageRequest>,
  ) -> Result<Page<SkillGrade>> {
    self
      .list_rows(
        "skill_grade",
        SKILL_GRADE_COLS,
        page,
        RawSkillGrade::from_row,
        RawSkillGrade::into_skill_grade,
      )
      .await
  }

  async fn skill_grades_for_skill(&self, skill_id: i64) -> Result<Vec<SkillGrade>> {
    let m = self
      .conn
      .call(move |conn| {
        if !entity_exists(conn, "skill", skill_id)? {
          return Ok(Mutation::Fail(CoreError::not_found(SKILL, skill_id)));
        }
        let mut stmt = conn.prepare(&format!(
          "SELECT {SKILL_GRADE_COLS} FROM skill_grade WHERE skill_id = ?1 ORDER BY id"
        ))?;
        let raws = stmt
          .query_map(rusqlite::params![skill_id], RawSkillGrade::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(Mutation::Done(raws))
      })
      .await?;

    resolve(m)?
      .into_iter()
      .map(RawSkillGrade::into_skill_grade)
      .collect()
  }

  async fn update_skill_grade(&self, id: i64, input: NewSkillGrade) -> Result<SkillGrade> {
    let now = encode_dt(Utc::now());

    let m = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let Some(current) = skill_grade_row(&tx, id)? else {
          return Ok(Mutation::Fail(CoreError::not_found(SKILL_GRADE, id)));
        };
        if !entity_exists(&tx, "skill", input.skill_id)? {
          return Ok(Mutation::Fail(CoreError::not_found(SKILL, input.skill_id)));
        }

        let key_changed =
          current.skill_id != input.skill_id || current.code != input.code;
        if key_changed && grade_code_exists(&tx, input.skill_id, &input.code)? {
          return Ok(Mutation::Fail(CoreError::Conflict(format!(
            "Skill grade with code {} already exists for skill id: {}",
            input.code, input.skill_id
          ))));
        }

        tx.execute(
          "UPDATE skill_grade
             SET skill_id = ?1, code = ?2, description = ?3, updated_at = ?4
           WHERE id = ?5",
          rusqlite::params![input.skill_id, input.code, input.description, now, id],
        )?;

        let Some(raw) = skill_grade_row(&tx, id)? else {
          return Ok(Mutation::Fail(CoreError::not_found(SKILL_GRADE, id)));
        };
        tx.commit()?;
        Ok(Mutation::Done(raw))
      })
      .await?;

    resolve(m)?.into_skill_grade()
  }

  async fn delete_skill_grade(&self, id: i64) -> Result<()> {
    self
      .delete_entity("skill_grade", SKILL_GRADE, SKILL_GRADE_DEPS, id)
      .await
  }

  // ── Job profiles ───────────────────────────────────────────────────────

  async fn create_job_profile(&self, input: NewJobProfile) -> Result<JobProfile> {
    self
      .create_catalog("job_profile", JOB_PROFILE, input.name, input.description)
      .await?
      .into_job_profile()
  }

  async fn get_job_profile(&self, id: i64) -> Result<Option<JobProfile>> {
    self
      .get_catalog("job_profile", id)
      .await?
      .map(RawCatalogRow::into_job_profile)
      .transpose()
  }

  async fn list_job_profiles(
    &self,
    page: Option<PageRequest>,
  ) -> Result<Page<JobProfile>> {
    self
      .list_rows(
        "job_profile",
        CATALOG_COLS,
        page,
        RawCatalogRow::from_row,
        RawCatalogRow::into_job_profile,
      )
      .await
  }

  async fn update_job_profile(&self, id: i64, input: NewJobProfile) -> Result<JobProfile> {
    self
      .update_catalog("job_profile", JOB_PROFILE, id, input.name, input.description)
      .await?
      .into_job_profile()
  }

  async fn delete_job_profile(&self, id: i64) -> Result<()> {
    self.delete_entity("job_profile", JOB_PROFILE, JOB_PROFILE_DEPS, id).await
  }

  // ── Employee skill grades ──────────────────────────────────────────────

  async fn create_employee_skill_grade(
    &self,
    input: NewEmployeeSkillGrade,
  ) -> Result<EmployeeSkillGrade> {
    let now = encode_dt(Utc::now());

    let m = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        if esg_pair_exists(&tx, input.employee_id, input.skill_grade_id)? {
          return Ok(Mutation::Fail(CoreError::Conflict(format!(
            "Employee skill grade already exists for employee id: {} and skill grade id: {}",
            input.employee_id, input.skill_grade_id
          ))));
        }
        if !entity_exists(&tx, "employee", input.employee_id)? {
          return Ok(Mutation::Fail(CoreError::not_found(EMPLOYEE, input.employee_id)));
        }
        if !entity_exists(&tx, "skill_grade", input.skill_grade_id)? {
          return Ok(Mutation::Fail(CoreError::not_found(
            SKILL_GRADE,
            input.skill_grade_id,
          )));
        }
        if let Some(reviewer) = input.reviewed_by_employee_id
          && !entity_exists(&tx, "employee", reviewer)?
        {
          return Ok(Mutation::Fail(CoreError::not_found(REVIEWER, reviewer)));
        }

        tx.execute(
          "INSERT INTO employee_skill_grade
             (employee_id, skill_grade_id, years_of_experience, last_used_date,
              certified, employee_comment, reviewed_by_employee_id,
              reviewer_comment, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
          rusqlite::params![
            input.employee_id,
            input.skill_grade_id,
            input.years_of_experience,
            input.last_used_date.map(encode_date),
            input.certified,
            input.employee_comment,
            input.reviewed_by_employee_id,
            input.reviewer_comment,
            now,
            now,
          ],
        )?;
        let id = tx.last_insert_rowid();

        let Some(raw) = esg_row(&tx, id)? else {
          return Ok(Mutation::Fail(CoreError::not_found(EMPLOYEE_SKILL_GRADE, id)));
        };
        tx.commit()?;
        Ok(Mutation::Done(raw))
      })
      .await?;

    resolve(m)?.into_employee_skill_grade()
  }

  async fn get_employee_skill_grade(&self, id: i64) -> Result<Option<EmployeeSkillGrade>> {
    let raw = self.conn.call(move |conn| Ok(esg_row(conn, id)?)).await?;
    raw.map(RawEmployeeSkillGrade::into_employee_skill_grade).transpose()
  }

  async fn list_employee_skill_grades(
    &self,
    page: Option<PageRequest>,
  ) -> Result<Page<EmployeeSkillGrade>> {
    self
      .list_rows(
        "employee_skill_grade",
        ESG_COLS,
        page,
        RawEmployeeSkillGrade::from_row,
        RawEmployeeSkillGrade::into_employee_skill_grade,
      )
      .await
  }

  async fn employee_skill_grades_for_employee(
    &self,
    employee_id: i64,
  ) -> Result<Vec<EmployeeSkillGrade>> {
    self.esgs_where("employee", EMPLOYEE, "employee_id", employee_id).await
  }

  async fn employee_skill_grades_for_skill_grade(
    &self,
    skill_grade_id: i64,
  ) -> Result<Vec<EmployeeSkillGrade>> {
    self
      .esgs_where("skill_grade", SKILL_GRADE, "skill_grade_id", skill_grade_id)
      .await
  }

  async fn update_employee_skill_grade(
    &self,
    id: i64,
    input: NewEmployeeSkillGrade,
  ) -> Result<EmployeeSkillGrade> {
    let now = encode_dt(Utc::now());

    let m = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let Some(current) = esg_row(&tx, id)? else {
          return Ok(Mutation::Fail(CoreError::not_found(EMPLOYEE_SKILL_GRADE, id)));
        };

        let pair_changed = current.employee_id != input.employee_id
          || current.skill_grade_id != input.skill_grade_id;
        if pair_changed && esg_pair_exists(&tx, input.employee_id, input.skill_grade_id)? {
          return Ok(Mutation::Fail(CoreError::Conflict(format!(
            "Employee skill grade already exists for employee id: {} and skill grade id: {}",
            input.employee_id, input.skill_grade_id
          ))));
        }

        if !entity_exists(&tx, "employee", input.employee_id)? {
          return Ok(Mutation::Fail(CoreError::not_found(EMPLOYEE, input.employee_id)));
        }
        if !entity_exists(&tx, "skill_grade", input.skill_grade_id)? {
          return Ok(Mutation::Fail(CoreError::not_found(
            SKILL_GRADE,
            input.skill_grade_id,
          )));
        }
        if let Some(reviewer) = input.reviewed_by_employee_id
          && !entity_exists(&tx, "employee", reviewer)?
        {
          return Ok(Mutation::Fail(CoreError::not_found(REVIEWER, reviewer)));
        }

        tx.execute(
          "UPDATE employee_skill_grade
             SET employee_id = ?1, skill_grade_id = ?2, years_of_experience = ?3,
                 last_used_date = ?4, certified = ?5, employee_comment = ?6,
                 reviewed_by_employee_id = ?7, reviewer_comment = ?8, updated_at = ?9
           WHERE id = ?10",
          rusqlite::params![
            input.employee_id,
            input.skill_grade_id,
            input.years_of_experience,
            input.last_used_date.map(encode_date),
            input.certified,
            input.employee_comment,
            input.reviewed_by_employee_id,
            input.reviewer_comment,
            now,
            id,
          ],
        )?;

        let Some(raw) = esg_row(&tx, id)? else {
          return Ok(Mutation::Fail(CoreError::not_found(EMPLOYEE_SKILL_GRADE, id)));
        };
        tx.commit()?;
        Ok(Mutation::Done(raw))
      })
      .await?;

    resolve(m)?.into_employee_skill_grade()
  }

  async fn delete_employee_skill_grade(&self, id: i64) -> Result<()> {
    self
      .delete_entity("employee_skill_grade", EMPLOYEE_SKILL_GRADE, ESG_DEPS, id)
      .await
  }

  // ── Associations ───────────────────────────────────────────────────────

  async fn job_profiles_for_employee(&self, employee_id: i64) -> Result<Vec<JobProfile>> {
    self
      .linked_catalog(
        &EMPLOYEE_JOB_PROFILES,
        Side::Left,
        employee_id,
        RawCatalogRow::into_job_profile,
      )
      .await
  }

  async fn assign_job_profile(&self, employee_id: i64, job_profile_id: i64) -> Result<()> {
    self.assign_pair(&EMPLOYEE_JOB_PROFILES, employee_id, job_profile_id).await
  }

  async fn unassign_job_profile(
    &self,
    employee_id: i64,
    job_profile_id: i64,
  ) -> Result<()> {
    self.remove_pair(&EMPLOYEE_JOB_PROFILES, employee_id, job_profile_id).await
  }

  async fn skill_profiles_for_employee(
    &self,
    employee_id: i64,
  ) -> Result<Vec<SkillProfile>> {
    self
      .linked_catalog(
        &EMPLOYEE_SKILL_PROFILES,
        Side::Left,
        employee_id,
        RawCatalogRow::into_skill_profile,
      )
      .await
  }

  async fn assign_skill_profile(
    &self,
    employee_id: i64,
    skill_profile_id: i64,
  ) -> Result<()> {
    self.assign_pair(&EMPLOYEE_SKILL_PROFILES, employee_id, skill_profile_id).await
  }

  async fn unassign_skill_profile(
    &self,
    employee_id: i64,
    skill_profile_id: i64,
  ) -> Result<()> {
    self.remove_pair(&EMPLOYEE_SKILL_PROFILES, employee_id, skill_profile_id).await
  }

  async fn skills_for_job_profile(&self, job_profile_id: i64) -> Result<Vec<Skill>> {
    self
      .linked_catalog(
        &JOB_PROFILE_SKILLS,
        Side::Left,
        job_profile_id,
        RawCatalogRow::into_skill,
      )
      .await
  }

  async fn job_profiles_for_skill(&self, skill_id: i64) -> Result<Vec<JobProfile>> {
    self
      .linked_catalog(
        &JOB_PROFILE_SKILLS,
        Side::Right,
        skill_id,
        RawCatalogRow::into_job_profile,
      )
      .await
  }

  async fn link_job_profile_skill(&self, job_profile_id: i64, skill_id: i64) -> Result<()> {
    self.assign_pair(&JOB_PROFILE_SKILLS, job_profile_id, skill_id).await
  }

  async fn unlink_job_profile_skill(
    &self,
    job_profile_id: i64,
    skill_id: i64,
  ) -> Result<()> {
    self.remove_pair(&JOB_PROFILE_SKILLS, job_profile_id, skill_id).await
  }
}

// ─── Filtered employee-skill-grade listing ───────────────────────────────────

impl SqliteStore {
  /// Assessments filtered by one owning side, with an owner existence
  /// check first.
  async fn esgs_where(
    &self,
    owner_table: &'static str,
    owner_entity: &'static str,
    col: &'static str,
    owner_id: i64,
  ) -> Result<Vec<EmployeeSkillGrade>> {
    let m = self
      .conn
      .call(move |conn| {
        if !entity_exists(conn, owner_table, owner_id)? {
          return Ok(Mutation::Fail(CoreError::not_found(owner_entity, owner_id)));
        }
        let mut stmt = conn.prepare(&format!(
          "SELECT {ESG_COLS} FROM employee_skill_grade WHERE {col} = ?1 ORDER BY id"
        ))?;
        let raws = stmt
          .query_map(rusqlite::params![owner_id], RawEmployeeSkillGrade::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(Mutation::Done(raws))
      })
      .await?;

    resolve(m)?
      .into_iter()
      .map(RawEmployeeSkillGrade::into_employee_skill_grade)
      .collect()
  }
}
