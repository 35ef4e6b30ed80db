//! Employee — the person whose skills and profiles are tracked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted employee record. `id` and both timestamps are
/// server-assigned; `updated_at` is refreshed on every mutating write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
  pub id:         i64,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub department: Option<String>,
  pub position:   Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Employee {
  /// "First Last", used by read-time projections.
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }
}

/// Validated input for creating or fully replacing an employee.
#[derive(Debug, Clone)]
pub struct NewEmployee {
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub department: Option<String>,
  pub position:   Option<String>,
}
