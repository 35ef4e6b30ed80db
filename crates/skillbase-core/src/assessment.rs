//! Employee skill grade — an employee's assessed proficiency in a skill.
//!
//! Unlike the pure link rows, this association carries assessment state:
//! experience, last-used date, certification, and an optional review by
//! another employee. At most one row exists per (employee, skill grade).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSkillGrade {
  pub id:                      i64,
  pub employee_id:             i64,
  pub skill_grade_id:          i64,
  pub years_of_experience:     Option<i32>,
  pub last_used_date:          Option<NaiveDate>,
  /// Defaults to `false` when absent from input; never null once stored.
  pub certified:               bool,
  pub employee_comment:        Option<String>,
  pub reviewed_by_employee_id: Option<i64>,
  pub reviewer_comment:        Option<String>,
  pub created_at:              DateTime<Utc>,
  pub updated_at:              DateTime<Utc>,
}

/// Validated input for creating or fully replacing an employee skill grade.
#[derive(Debug, Clone)]
pub struct NewEmployeeSkillGrade {
  pub employee_id:             i64,
  pub skill_grade_id:          i64,
  pub years_of_experience:     Option<i32>,
  pub last_used_date:          Option<NaiveDate>,
  pub certified:               bool,
  pub employee_comment:        Option<String>,
  pub reviewed_by_employee_id: Option<i64>,
  pub reviewer_comment:        Option<String>,
}
