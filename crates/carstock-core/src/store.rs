//! The `CarStore` trait and the entry types it hands out.
//!
//! The trait is implemented by [`CarList`](crate::CarList) and
//! [`StockRegistry`](crate::StockRegistry). The access-controlled facade is
//! generic over it, so the same permission gate can sit in front of either.

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::describe::Describable;

// ─── Identity ────────────────────────────────────────────────────────────────

/// Identity of one stored item, assigned on insertion.
///
/// Two equal-valued cars added separately get distinct ids, so removal never
/// falls back to value equality.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
  pub fn new() -> Self { Self(Uuid::new_v4()) }
}

impl Default for ItemId {
  fn default() -> Self { Self::new() }
}

impl From<Uuid> for ItemId {
  fn from(id: Uuid) -> Self { Self(id) }
}

impl fmt::Display for ItemId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}

// ─── Entry ───────────────────────────────────────────────────────────────────

/// One describable item as held by a store.
///
/// Cloning is cheap; the item itself is shared, never copied.
#[derive(Debug, Clone)]
pub struct Entry {
  pub id:       ItemId,
  pub item:     Arc<dyn Describable>,
  /// Set by the store on insertion.
  pub added_at: DateTime<Utc>,
}

impl Entry {
  pub(crate) fn new(item: Arc<dyn Describable>) -> Self {
    Self {
      id: ItemId::new(),
      item,
      added_at: Utc::now(),
    }
  }

  pub fn describe(&self) -> String { self.item.describe() }
}

/// Join the descriptions of `entries` with `", "`, in order.
pub(crate) fn describe_all<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> String {
  entries
    .into_iter()
    .map(Entry::describe)
    .collect::<Vec<_>>()
    .join(", ")
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// An ordered, mutable sequence of describable items.
///
/// The aggregate description comes from the [`Describable`] supertrait: the
/// descriptions of all current items joined by `", "` in insertion order, or
/// the empty string when the store is empty.
pub trait CarStore: Describable {
  /// Append `item` to the end and return its identity. Always succeeds.
  fn add<D: Describable + 'static>(&mut self, item: D) -> ItemId;

  /// Remove the item with identity `id`. Removing an absent id is a silent
  /// no-op and returns `None`.
  fn remove(&mut self, id: ItemId) -> Option<Entry>;

  /// A snapshot of the current items, in order.
  fn entries(&self) -> Vec<Entry>;

  fn len(&self) -> usize { self.entries().len() }

  fn is_empty(&self) -> bool { self.len() == 0 }
}
