//! The access-controlled facade and its permission policies.
//!
//! [`AccessControlled`] wraps any [`CarStore`] and runs every mutation through
//! a [`PermissionPolicy`] first. A refused mutation is not an error: it comes
//! back as [`Outcome::Denied`] and the wrapped store is left untouched.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{
  describe::Describable,
  list::CarList,
  store::{CarStore, ItemId},
};

// ─── Actions & policies ──────────────────────────────────────────────────────

/// A mutation that must pass the permission check.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Action {
  Add,
  Remove,
}

/// Decides whether an [`Action`] may proceed.
pub trait PermissionPolicy: fmt::Debug + Send + Sync {
  fn permits(&self, action: Action) -> bool;
}

impl<P: PermissionPolicy + ?Sized> PermissionPolicy for Arc<P> {
  fn permits(&self, action: Action) -> bool { (**self).permits(action) }
}

impl<P: PermissionPolicy + ?Sized> PermissionPolicy for Box<P> {
  fn permits(&self, action: Action) -> bool { (**self).permits(action) }
}

/// Permits everything. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl PermissionPolicy for AllowAll {
  fn permits(&self, _: Action) -> bool { true }
}

/// Permits nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

impl PermissionPolicy for DenyAll {
  fn permits(&self, _: Action) -> bool { false }
}

/// Adapts a closure into a policy.
#[derive(Clone, Copy)]
pub struct FnPolicy<F>(pub F);

impl<F> fmt::Debug for FnPolicy<F> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("FnPolicy(..)")
  }
}

impl<F> PermissionPolicy for FnPolicy<F>
where
  F: Fn(Action) -> bool + Send + Sync,
{
  fn permits(&self, action: Action) -> bool { (self.0)(action) }
}

/// A policy chosen by name, e.g. from a configuration file.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Display,
  EnumString,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PolicyKind {
  #[default]
  Allow,
  Deny,
  /// Cars may be added but never removed.
  AddOnly,
}

impl PermissionPolicy for PolicyKind {
  fn permits(&self, action: Action) -> bool {
    match self {
      Self::Allow => true,
      Self::Deny => false,
      Self::AddOnly => action == Action::Add,
    }
  }
}

// ─── Outcome ─────────────────────────────────────────────────────────────────

/// What happened to a gated mutation. `Display` renders the human-readable
/// notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
  Added {
    id:          ItemId,
    description: String,
  },
  Removed {
    id:          ItemId,
    /// Description of the removed item; `None` when nothing had that id.
    description: Option<String>,
  },
  Denied {
    action: Action,
  },
}

impl Outcome {
  pub fn is_denied(&self) -> bool { matches!(self, Self::Denied { .. }) }
}

impl fmt::Display for Outcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Added { description, .. } => {
        write!(f, "car added to stock: {description}")
      }
      Self::Removed { description: Some(d), .. } => {
        write!(f, "car removed from stock: {d}")
      }
      Self::Removed { id, description: None } => {
        write!(f, "no car {id} in stock; nothing removed")
      }
      Self::Denied { action } => {
        write!(f, "you do not have permission to {action} cars")
      }
    }
  }
}

// ─── Facade ──────────────────────────────────────────────────────────────────

/// A permission-gated wrapper around a [`CarStore`].
///
/// `AccessControlled::new()` owns a fresh [`CarList`] and allows everything;
/// [`AccessControlled::with_policy`] puts any store behind any policy.
#[derive(Debug, Clone)]
pub struct AccessControlled<S = CarList, P = AllowAll> {
  store:  S,
  policy: P,
}

impl AccessControlled {
  pub fn new() -> Self { Self::with_policy(CarList::new(), AllowAll) }
}

impl Default for AccessControlled {
  fn default() -> Self { Self::new() }
}

impl<S: CarStore, P: PermissionPolicy> AccessControlled<S, P> {
  pub fn with_policy(store: S, policy: P) -> Self { Self { store, policy } }

  pub fn check_permission(&self, action: Action) -> bool {
    self.policy.permits(action)
  }

  /// Add `item` to the wrapped store if the policy permits it.
  pub fn add<D: Describable + 'static>(&mut self, item: D) -> Outcome {
    if !self.check_permission(Action::Add) {
      tracing::warn!(action = %Action::Add, "permission denied");
      return Outcome::Denied { action: Action::Add };
    }
    let description = item.describe();
    let id = self.store.add(item);
    tracing::info!(%id, %description, "car added to stock");
    Outcome::Added { id, description }
  }

  /// Remove the item with identity `id` if the policy permits it.
  pub fn remove(&mut self, id: ItemId) -> Outcome {
    if !self.check_permission(Action::Remove) {
      tracing::warn!(action = %Action::Remove, %id, "permission denied");
      return Outcome::Denied { action: Action::Remove };
    }
    let description = self.store.remove(id).map(|e| e.describe());
    match &description {
      Some(d) => tracing::info!(%id, description = %d, "car removed from stock"),
      None => tracing::debug!(%id, "remove of absent car ignored"),
    }
    Outcome::Removed { id, description }
  }

  pub fn store(&self) -> &S { &self.store }
}

impl<S, P> Describable for AccessControlled<S, P>
where
  S: CarStore,
  P: PermissionPolicy,
{
  fn describe(&self) -> String { self.store.describe() }
}
