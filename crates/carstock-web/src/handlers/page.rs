//! Handlers for the HTML stock page.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/` | Form plus the current stock |
//! | `POST` | `/cars` | Form body: `make`, `model`, `year` |
//! | `POST` | `/cars/{id}/delete` | Remove one entry |
//!
//! Every mutation re-renders the page with the outcome as a notice.

use axum::{
  Form,
  extract::{Path, State, rejection::PathRejection},
  http::StatusCode,
  response::Html,
};
use carstock_core::{DescribableExt, NewCar, Outcome};
use uuid::Uuid;

use crate::{
  AppState,
  render::{self, Notice},
};

fn render_page(state: &AppState, notice: Option<&Notice>) -> Html<String> {
  Html(render::page(&state.config.title, &state.stock.list(), notice))
}

fn outcome_response(state: &AppState, outcome: &Outcome) -> (StatusCode, Html<String>) {
  let (status, notice) = if outcome.is_denied() {
    (StatusCode::FORBIDDEN, Notice::Error(outcome.to_string()))
  } else {
    (StatusCode::OK, Notice::Info(outcome.to_string()))
  };
  (status, render_page(state, Some(&notice)))
}

// ─── Show ─────────────────────────────────────────────────────────────────────

/// `GET /`
pub async fn show(State(state): State<AppState>) -> Html<String> {
  render_page(&state, None)
}

// ─── Add ──────────────────────────────────────────────────────────────────────

/// `POST /cars`, the add-car form.
///
/// Input that fails the presence checks re-renders the page with a 400 and
/// leaves the stock untouched.
pub async fn add(
  State(state): State<AppState>,
  Form(input): Form<NewCar>,
) -> (StatusCode, Html<String>) {
  let car = match input.into_car() {
    Ok(car) => car,
    Err(e) => {
      tracing::debug!(error = %e, "rejected add-car form");
      let notice = Notice::Error(e.to_string());
      return (StatusCode::BAD_REQUEST, render_page(&state, Some(&notice)));
    }
  };
  let outcome = state.gate().add(car.with_year());
  outcome_response(&state, &outcome)
}

// ─── Remove ───────────────────────────────────────────────────────────────────

/// `POST /cars/{id}/delete`
///
/// A malformed id re-renders the page with a 400 notice.
pub async fn remove(
  State(state): State<AppState>,
  id: Result<Path<Uuid>, PathRejection>,
) -> (StatusCode, Html<String>) {
  let id = match id {
    Ok(Path(id)) => id,
    Err(e) => {
      tracing::debug!(error = %e, "rejected remove-car path");
      let notice = Notice::Error(e.body_text());
      return (StatusCode::BAD_REQUEST, render_page(&state, Some(&notice)));
    }
  };
  let outcome = state.gate().remove(id.into());
  outcome_response(&state, &outcome)
}
