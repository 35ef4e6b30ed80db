//! Error type for `skillbase-store-sqlite`.

use skillbase_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A domain-level rejection: NotFound, Conflict, or Validation.
  #[error(transparent)]
  Domain(skillbase_core::Error),

  #[error("database error: {0}")]
  Database(tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

impl From<skillbase_core::Error> for Error {
  fn from(e: skillbase_core::Error) -> Self {
    Error::Domain(e)
  }
}

/// Classify backend failures. A UNIQUE-constraint violation means a
/// concurrent identical write won the race past our pre-check; it surfaces
/// as the same Conflict the pre-check would have produced.
impl From<tokio_rusqlite::Error> for Error {
  fn from(e: tokio_rusqlite::Error) -> Self {
    if let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(f, _)) = &e
      && f.code == rusqlite::ErrorCode::ConstraintViolation
    {
      return Error::Domain(skillbase_core::Error::Conflict(
        "write conflicts with an existing record".to_string(),
      ));
    }
    Error::Database(e)
  }
}

impl StoreError for Error {
  fn as_domain(&self) -> Option<&skillbase_core::Error> {
    match self {
      Error::Domain(e) => Some(e),
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
