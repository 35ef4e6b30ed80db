//! Decoding helpers between SQLite rows and domain types.
//!
//! Timestamps are stored as RFC 3339 strings, dates as ISO `YYYY-MM-DD`.
//! The `Raw*` structs hold column values exactly as read; their `into_*`
//! methods perform the fallible string-to-chrono conversions.

use chrono::{DateTime, NaiveDate, Utc};
use skillbase_core::{
  assessment::EmployeeSkillGrade,
  employee::Employee,
  grade::SkillGrade,
  profile::{JobProfile, SkillProfile},
  skill::Skill,
};

use crate::{Error, Result};

// ─── Scalar codecs ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339()
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

pub fn encode_date(d: NaiveDate) -> String {
  d.format("%Y-%m-%d").to_string()
}

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Column lists ────────────────────────────────────────────────────────────

pub const EMPLOYEE_COLS: &str =
  "id, first_name, last_name, email, department, position, created_at, updated_at";

/// Shared by `skill`, `skill_profile`, and `job_profile`.
pub const CATALOG_COLS: &str = "id, name, description, created_at, updated_at";

pub const SKILL_GRADE_COLS: &str =
  "id, skill_id, code, description, created_at, updated_at";

pub const ESG_COLS: &str = "id, employee_id, skill_grade_id, years_of_experience, \
   last_used_date, certified, employee_comment, reviewed_by_employee_id, \
   reviewer_comment, created_at, updated_at";

// ─── Row types ───────────────────────────────────────────────────────────────

pub struct RawEmployee {
  pub id:         i64,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub department: Option<String>,
  pub position:   Option<String>,
  pub created_at: String,
  pub updated_at: String,
}

impl RawEmployee {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      first_name: row.get(1)?,
      last_name:  row.get(2)?,
      email:      row.get(3)?,
      department: row.get(4)?,
      position:   row.get(5)?,
      created_at: row.get(6)?,
      updated_at: row.get(7)?,
    })
  }

  pub fn into_employee(self) -> Result<Employee> {
    Ok(Employee {
      id:         self.id,
      first_name: self.first_name,
      last_name:  self.last_name,
      email:      self.email,
      department: self.department,
      position:   self.position,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}

/// A row from any of the three name-keyed catalog tables.
pub struct RawCatalogRow {
  pub id:          i64,
  pub name:        String,
  pub description: Option<String>,
  pub created_at:  String,
  pub updated_at:  String,
}

impl RawCatalogRow {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      name:        row.get(1)?,
      description: row.get(2)?,
      created_at:  row.get(3)?,
      updated_at:  row.get(4)?,
    })
  }

  pub fn into_skill(self) -> Result<Skill> {
    Ok(Skill {
      id:          self.id,
      name:        self.name,
      description: self.description,
      created_at:  decode_dt(&self.created_at)?,
      updated_at:  decode_dt(&self.updated_at)?,
    })
  }

  pub fn into_skill_profile(self) -> Result<SkillProfile> {
    Ok(SkillProfile {
      id:          self.id,
      name:        self.name,
      description: self.description,
      created_at:  decode_dt(&self.created_at)?,
      updated_at:  decode_dt(&self.updated_at)?,
    })
  }

  pub fn into_job_profile(self) -> Result<JobProfile> {
    Ok(JobProfile {
      id:          self.id,
      name:        self.name,
      description: self.description,
      created_at:  decode_dt(&self.created_at)?,
      updated_at:  decode_dt(&self.updated_at)?,
    })
  }
}

pub struct RawSkillGrade {
  pub id:          i64,
  pub skill_id:    i64,
  pub code:        String,
  pub description: Option<String>,
  pub created_at:  String,
  pub updated_at:  String,
}

impl RawSkillGrade {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      skill_id:    row.get(1)?,
      code:        row.get(2)?,
      description: row.get(3)?,
      created_at:  row.get(4)?,
      updated_at:  row.get(5)?,
    })
  }

  pub fn into_skill_grade(self) -> Result<SkillGrade> {
    Ok(SkillGrade {
      id:          self.id,
      skill_id:    self.skill_id,
      code:        self.code,
      description: self.description,
      created_at:  decode_dt(&self.created_at)?,
      updated_at:  decode_dt(&self.updated_at)?,
    })
  }
}

pub struct RawEmployeeSkillGrade {
  pub id:                      i64,
  pub employee_id:             i64,
  pub skill_grade_id:          i64,
  pub years_of_experience:     Option<i32>,
  pub last_used_date:          Option<String>,
  pub certified:               bool,
  pub employee_comment:        Option<String>,
  pub reviewed_by_employee_id: Option<i64>,
  pub reviewer_comment:        Option<String>,
  pub created_at:              String,
  pub updated_at:              String,
}

impl RawEmployeeSkillGrade {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:                      row.get(0)?,
      employee_id:             row.get(1)?,
      skill_grade_id:          row.get(2)?,
      years_of_experience:     row.get(3)?,
      last_used_date:          row.get(4)?,
      certified:               row.get(5)?,
      employee_comment:        row.get(6)?,
      reviewed_by_employee_id: row.get(7)?,
      reviewer_comment:        row.get(8)?,
      created_at:              row.get(9)?,
      updated_at:              row.get(10)?,
    })
  }

  pub fn into_employee_skill_grade(self) -> Result<EmployeeSkillGrade> {
    Ok(EmployeeSkillGrade {
      id:                      self.id,
      employee_id:             self.employee_id,
      skill_grade_id:          self.skill_grade_id,
      years_of_experience:     self.years_of_experience,
      last_used_date:          self.last_used_date.as_deref().map(decode_date).transpose()?,
      certified:               self.certified,
      employee_comment:        self.employee_comment,
      reviewed_by_employee_id: self.reviewed_by_employee_id,
      reviewer_comment:        self.reviewer_comment,
      created_at:              decode_dt(&self.created_at)?,
      updated_at:              decode_dt(&self.updated_at)?,
    })
  }
}
