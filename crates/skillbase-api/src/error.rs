//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use skillbase_core::{Error as DomainError, StoreError, validate::Violation};
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("validation failed")]
  Validation(Vec<Violation>),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Map a storage-backend failure onto the HTTP error taxonomy. Domain
  /// rejections keep their message; anything else is an internal error.
  pub fn from_store<E: StoreError>(e: E) -> Self {
    match e.as_domain() {
      Some(DomainError::NotFound(m)) => ApiError::NotFound(m.clone()),
      Some(DomainError::Conflict(m)) => ApiError::Conflict(m.clone()),
      Some(DomainError::Validation(v)) => ApiError::Validation(v.clone()),
      None => ApiError::Store(Box::new(e)),
    }
  }
}

impl From<DomainError> for ApiError {
  fn from(e: DomainError) -> Self {
    match e {
      DomainError::NotFound(m) => ApiError::NotFound(m),
      DomainError::Conflict(m) => ApiError::Conflict(m),
      DomainError::Validation(v) => ApiError::Validation(v),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound(m) => {
        (StatusCode::NOT_FOUND, Json(json!({ "error": m }))).into_response()
      }
      ApiError::Conflict(m) => {
        (StatusCode::CONFLICT, Json(json!({ "error": m }))).into_response()
      }
      ApiError::Validation(violations) => (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "validation failed", "violations": violations })),
      )
        .into_response(),
      ApiError::Store(e) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.to_string() })),
      )
        .into_response(),
    }
  }
}
