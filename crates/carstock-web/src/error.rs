//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by a JSON API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The request could not be read: malformed body or path.
  #[error("bad request: {0}")]
  BadRequest(String),

  /// The permission policy refused the mutation.
  #[error("forbidden: {0}")]
  Forbidden(String),

  #[error("invalid car: {0}")]
  InvalidCar(#[from] carstock_core::Error),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::BadRequest(_) | ApiError::InvalidCar(_) => StatusCode::BAD_REQUEST,
      ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
    };
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
