//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! The mapping keeps a lost acceptance race (409) distinguishable from a
//! missing record (404): the listing UI refreshes on the former and drops
//! the item on the latter.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("not found: {0}")]
  NotFound(String),

  /// The caller is not the accepting courier.
  #[error("forbidden: {0}")]
  Forbidden(String),

  /// The transition lost against the current lifecycle state.
  #[error("conflict: {0}")]
  Conflict(String),

  #[error("store error: {0}")]
  Store(String),
}

impl ApiError {
  /// Fold a backend error onto the HTTP taxonomy via the core one.
  pub fn from_store<E: Into<ferry_core::Error>>(err: E) -> Self {
    err.into().into()
  }
}

impl From<ferry_core::Error> for ApiError {
  fn from(err: ferry_core::Error) -> Self {
    use ferry_core::Error::*;
    match err {
      Validation(_) => Self::BadRequest(err.to_string()),
      NotFound(_) => Self::NotFound(err.to_string()),
      NotCourier { .. } => Self::Forbidden(err.to_string()),
      InvalidTransition { .. } => Self::Conflict(err.to_string()),
      Storage(_) => Self::Store(err.to_string()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Forbidden(m) => (StatusCode::FORBIDDEN, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Store(m) => (StatusCode::INTERNAL_SERVER_ERROR, m.clone()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
