//! Skill grade — a proficiency level defined per skill.
//!
//! The grade code (e.g. "L3") is unique within its owning skill; two
//! different skills may reuse the same code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGrade {
  pub id:          i64,
  pub skill_id:    i64,
  pub code:        String,
  pub description: Option<String>,
  pub created_at:  DateTime<Utc>,
  pub updated_at:  DateTime<Utc>,
}

/// Validated input for creating or fully replacing a skill grade.
#[derive(Debug, Clone)]
pub struct NewSkillGrade {
  pub skill_id:    i64,
  pub code:        String,
  pub description: Option<String>,
}
