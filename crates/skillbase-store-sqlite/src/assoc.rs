//! Generic many-to-many link-table operations.
//!
//! One mechanism covers every association pair: a [`LinkTable`] descriptor
//! names the join table, its two columns, and the entity table on each
//! side. The helpers run synchronously against the caller's connection (or
//! transaction), so the check-then-write sequences in `store.rs` stay
//! atomic.

use rusqlite::OptionalExtension as _;

/// One side of a link: the entity table and the display name used in
/// error messages.
pub struct EntityRef {
  pub table: &'static str,
  pub name:  &'static str,
}

/// Static description of a many-to-many join table.
pub struct LinkTable {
  pub table:     &'static str,
  pub left_col:  &'static str,
  pub right_col: &'static str,
  pub left:      EntityRef,
  pub right:     EntityRef,
}

pub const EMPLOYEE_JOB_PROFILES: LinkTable = LinkTable {
  table:     "employee_job_profile",
  left_col:  "employee_id",
  right_col: "job_profile_id",
  left:      EntityRef { table: "employee", name: "Employee" },
  right:     EntityRef { table: "job_profile", name: "Job profile" },
};

pub const EMPLOYEE_SKILL_PROFILES: LinkTable = LinkTable {
  table:     "employee_skill_profile",
  left_col:  "employee_id",
  right_col: "skill_profile_id",
  left:      EntityRef { table: "employee", name: "Employee" },
  right:     EntityRef { table: "skill_profile", name: "Skill profile" },
};

pub const JOB_PROFILE_SKILLS: LinkTable = LinkTable {
  table:     "job_profile_skill",
  left_col:  "job_profile_id",
  right_col: "skill_id",
  left:      EntityRef { table: "job_profile", name: "Job profile" },
  right:     EntityRef { table: "skill", name: "Skill" },
};

/// Which side of the pair the owner id belongs to.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Side {
  Left,
  Right,
}

// ─── Operations ──────────────────────────────────────────────────────────────

/// Does a row with this id exist in `table`?
pub fn entity_exists(
  conn: &rusqlite::Connection,
  table: &str,
  id: i64,
) -> rusqlite::Result<bool> {
  let sql = format!("SELECT 1 FROM {table} WHERE id = ?1");
  Ok(
    conn
      .query_row(&sql, rusqlite::params![id], |_| Ok(true))
      .optional()?
      .unwrap_or(false),
  )
}

pub fn pair_exists(
  conn: &rusqlite::Connection,
  lt: &LinkTable,
  left: i64,
  right: i64,
) -> rusqlite::Result<bool> {
  let sql = format!(
    "SELECT 1 FROM {} WHERE {} = ?1 AND {} = ?2",
    lt.table, lt.left_col, lt.right_col
  );
  Ok(
    conn
      .query_row(&sql, rusqlite::params![left, right], |_| Ok(true))
      .optional()?
      .unwrap_or(false),
  )
}

pub fn insert_pair(
  conn: &rusqlite::Connection,
  lt: &LinkTable,
  left: i64,
  right: i64,
  created_at: &str,
) -> rusqlite::Result<()> {
  let sql = format!(
    "INSERT INTO {} ({}, {}, created_at) VALUES (?1, ?2, ?3)",
    lt.table, lt.left_col, lt.right_col
  );
  conn.execute(&sql, rusqlite::params![left, right, created_at])?;
  Ok(())
}

/// Returns `true` if a link row was deleted.
pub fn delete_pair(
  conn: &rusqlite::Connection,
  lt: &LinkTable,
  left: i64,
  right: i64,
) -> rusqlite::Result<bool> {
  let sql = format!(
    "DELETE FROM {} WHERE {} = ?1 AND {} = ?2",
    lt.table, lt.left_col, lt.right_col
  );
  Ok(conn.execute(&sql, rusqlite::params![left, right])? > 0)
}

/// Every entity on the opposite side of `owner_side` linked to `owner`,
/// in link insertion order.
pub fn linked_rows<T>(
  conn: &rusqlite::Connection,
  lt: &LinkTable,
  owner_side: Side,
  owner: i64,
  columns: &str,
  map: impl Fn(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
) -> rusqlite::Result<Vec<T>> {
  let (target, target_col, owner_col) = match owner_side {
    Side::Left => (&lt.right, lt.right_col, lt.left_col),
    Side::Right => (&lt.left, lt.left_col, lt.right_col),
  };

  let cols = columns
    .split(',')
    .map(|c| format!("t.{}", c.trim()))
    .collect::<Vec<_>>()
    .join(", ");

  let sql = format!(
    "SELECT {cols} FROM {} t
     JOIN {} l ON l.{target_col} = t.id
     WHERE l.{owner_col} = ?1
     ORDER BY l.id",
    target.table, lt.table
  );

  let mut stmt = conn.prepare(&sql)?;
  let rows = stmt
    .query_map(rusqlite::params![owner], |row| map(row))?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(rows)
}
