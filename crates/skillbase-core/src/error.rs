//! Error types for `skillbase-core`.

use thiserror::Error;

use crate::validate::Violation;

/// A deterministic rejection of bad input or bad state. Every variant is
/// scoped to the single request that caused it.
#[derive(Debug, Clone, Error)]
pub enum Error {
  /// The requested entity, referenced entity, or association row does not
  /// exist.
  #[error("{0}")]
  NotFound(String),

  /// A uniqueness invariant would be violated by the requested write, or a
  /// delete is blocked by dependent rows.
  #[error("{0}")]
  Conflict(String),

  /// One or more input fields failed shape/range/required checks.
  /// Carries every violated field, not just the first.
  #[error("validation failed: {}", format_violations(.0))]
  Validation(Vec<Violation>),
}

impl Error {
  /// NotFound for an entity looked up by id.
  pub fn not_found(entity: &str, id: i64) -> Self {
    Error::NotFound(format!("{entity} not found with id: {id}"))
  }
}

fn format_violations(violations: &[Violation]) -> String {
  violations
    .iter()
    .map(|v| format!("{}: {}", v.field, v.message))
    .collect::<Vec<_>>()
    .join(", ")
}

/// Capability trait for storage-backend errors.
///
/// Transport layers use [`StoreError::as_domain`] to map a backend failure
/// onto the protocol's error representation (404/409/400) without knowing
/// the backend's concrete error type. Backend-internal failures return
/// `None` and are treated as internal errors.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn as_domain(&self) -> Option<&Error>;
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
