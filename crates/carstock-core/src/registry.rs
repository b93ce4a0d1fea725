//! [`StockRegistry`], the shared stock list.
//!
//! The registry is constructed explicitly and handed around by handle rather
//! than living in a global. Every clone of a handle sees the same sequence;
//! tests simply build their own.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
  describe::Describable,
  store::{CarStore, Entry, ItemId, describe_all},
};

/// A shared, ordered stock of describable items.
///
/// Cloning is cheap; the inner sequence is reference-counted. Mutations take
/// a write lock, so the registry can be shared across runtime worker threads.
#[derive(Debug, Clone, Default)]
pub struct StockRegistry {
  stock: Arc<RwLock<Vec<Entry>>>,
}

impl StockRegistry {
  pub fn new() -> Self { Self::default() }

  /// An immutable snapshot of the current stock, in insertion order.
  ///
  /// Later mutations of the registry do not affect a snapshot already taken,
  /// and the snapshot cannot be used to mutate the registry.
  pub fn list(&self) -> Vec<Entry> { self.read().clone() }

  /// Whether `other` is a handle to the same underlying stock.
  pub fn same_stock(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.stock, &other.stock)
  }

  // A panic while holding the lock cannot leave a `Vec` half-pushed, so the
  // poisoned state is safe to recover.
  fn read(&self) -> RwLockReadGuard<'_, Vec<Entry>> {
    self.stock.read().unwrap_or_else(PoisonError::into_inner)
  }

  fn write(&self) -> RwLockWriteGuard<'_, Vec<Entry>> {
    self.stock.write().unwrap_or_else(PoisonError::into_inner)
  }
}

impl Describable for StockRegistry {
  fn describe(&self) -> String { describe_all(self.read().iter()) }
}

impl CarStore for StockRegistry {
  fn add<D: Describable + 'static>(&mut self, item: D) -> ItemId {
    let entry = Entry::new(Arc::new(item));
    let id = entry.id;
    tracing::debug!(%id, "stock entry added");
    self.write().push(entry);
    id
  }

  fn remove(&mut self, id: ItemId) -> Option<Entry> {
    let mut stock = self.write();
    let pos = stock.iter().position(|e| e.id == id)?;
    tracing::debug!(%id, "stock entry removed");
    Some(stock.remove(pos))
  }

  fn entries(&self) -> Vec<Entry> { self.list() }

  fn len(&self) -> usize { self.read().len() }
}
