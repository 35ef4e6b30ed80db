//! Skill — a named capability, unique system-wide.
//!
//! Skills are standalone: they relate to skill profiles and job profiles
//! only through association rows, never through an owning reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
  pub id:          i64,
  pub name:        String,
  pub description: Option<String>,
  pub created_at:  DateTime<Utc>,
  pub updated_at:  DateTime<Utc>,
}

/// Validated input for creating or fully replacing a skill.
#[derive(Debug, Clone)]
pub struct NewSkill {
  pub name:        String,
  pub description: Option<String>,
}
