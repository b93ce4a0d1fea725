//! Web shell for carstock.
//!
//! Serves the add-car form and the rendered stock list as HTML, plus a small
//! JSON API over the same stock. Every mutation goes through an
//! [`AccessControlled`] facade in front of the shared [`StockRegistry`].

pub mod error;
pub mod handlers;
pub mod render;

pub use error::ApiError;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, post},
};
use carstock_core::{AccessControlled, PermissionPolicy, PolicyKind, StockRegistry};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use handlers::{api, page};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `CARSTOCK_*` environment variables. Every field has a default.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:   String,
  #[serde(default = "default_port")]
  pub port:   u16,
  /// Which mutations the facade permits.
  #[serde(default)]
  pub policy: PolicyKind,
  /// Heading and `<title>` of the stock page.
  #[serde(default = "default_title")]
  pub title:  String,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8080 }

fn default_title() -> String { "Car stock".to_string() }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:   default_host(),
      port:   default_port(),
      policy: PolicyKind::default(),
      title:  default_title(),
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// The facade type every handler mutates through.
pub type Gate = AccessControlled<StockRegistry, Arc<dyn PermissionPolicy>>;

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
  pub stock:  StockRegistry,
  pub policy: Arc<dyn PermissionPolicy>,
  pub config: Arc<ServerConfig>,
}

impl AppState {
  /// Build state with a fresh, empty registry and the configured policy.
  pub fn new(config: ServerConfig) -> Self {
    Self::with_policy(config.clone(), Arc::new(config.policy))
  }

  /// Build state with an explicit policy, overriding `config.policy`.
  pub fn with_policy(config: ServerConfig, policy: Arc<dyn PermissionPolicy>) -> Self {
    Self {
      stock: StockRegistry::new(),
      policy,
      config: Arc::new(config),
    }
  }

  /// A facade over the shared registry. Cheap: both halves are handles.
  pub fn gate(&self) -> Gate {
    AccessControlled::with_policy(self.stock.clone(), Arc::clone(&self.policy))
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the page and the JSON API.
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/",                      get(page::show))
    .route("/cars",                  post(page::add))
    .route("/cars/{id}/delete",      post(page::remove))
    .route("/api/cars",              get(api::list).post(api::create))
    .route("/api/cars/description",  get(api::description))
    .route("/api/cars/{id}",         delete(api::delete))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
