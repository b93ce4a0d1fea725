//! Handlers for the JSON `/api/cars` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/api/cars` | Current stock, in insertion order |
//! | `POST`   | `/api/cars` | Body: `{"make":..,"model":..,"year":..}`; 201, 400 or 403 |
//! | `DELETE` | `/api/cars/{id}` | 204 even when absent; 403 when denied |
//! | `GET`    | `/api/cars/description` | Aggregate description |

use axum::{
  Json,
  extract::{
    Path, State,
    rejection::{JsonRejection, PathRejection},
  },
  http::StatusCode,
  response::IntoResponse,
};
use carstock_core::{Describable, DescribableExt, Entry, ItemId, NewCar};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

/// Wire form of one stock entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct CarView {
  pub id:          ItemId,
  pub description: String,
  pub year:        Option<i32>,
  pub added_at:    DateTime<Utc>,
}

impl From<&Entry> for CarView {
  fn from(e: &Entry) -> Self {
    Self {
      id:          e.id,
      description: e.describe(),
      year:        e.item.year(),
      added_at:    e.added_at,
    }
  }
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /api/cars`
pub async fn list(State(state): State<AppState>) -> Json<Vec<CarView>> {
  Json(state.stock.list().iter().map(CarView::from).collect())
}

/// `GET /api/cars/description`
pub async fn description(State(state): State<AppState>) -> impl IntoResponse {
  Json(json!({ "description": state.stock.describe() }))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /api/cars`
pub async fn create(
  State(state): State<AppState>,
  body: Result<Json<NewCar>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
  let Json(body) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  let car = body.into_car()?;
  let outcome = state.gate().add(car.with_year());
  if outcome.is_denied() {
    return Err(ApiError::Forbidden(outcome.to_string()));
  }
  Ok((StatusCode::CREATED, Json(outcome)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /api/cars/{id}`
pub async fn delete(
  State(state): State<AppState>,
  id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
  let Path(id) = id.map_err(|e| ApiError::BadRequest(e.body_text()))?;
  let outcome = state.gate().remove(id.into());
  if outcome.is_denied() {
    return Err(ApiError::Forbidden(outcome.to_string()));
  }
  Ok(StatusCode::NO_CONTENT)
}
