//! Skill profiles and job profiles — name-keyed catalogs that group skills.
//!
//! Both are pure catalogs: a name (unique), an optional description, and
//! timestamps. Their relationships to employees and skills live entirely in
//! association rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named bundle of skills an employee can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillProfile {
  pub id:          i64,
  pub name:        String,
  pub description: Option<String>,
  pub created_at:  DateTime<Utc>,
  pub updated_at:  DateTime<Utc>,
}

/// A role definition that skills are attached to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobProfile {
  pub id:          i64,
  pub name:        String,
  pub description: Option<String>,
  pub created_at:  DateTime<Utc>,
  pub updated_at:  DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSkillProfile {
  pub name:        String,
  pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewJobProfile {
  pub name:        String,
  pub description: Option<String>,
}
