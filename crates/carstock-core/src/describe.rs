//! The [`Describable`] capability and the decorators built on it.
//!
//! A decorator wraps any describable value and augments the string returned by
//! the inner [`Describable::describe`]; it never touches the wrapped value.
//! Extra data a decorator needs is reached through the capability itself
//! (e.g. [`Describable::year`]), so decorators stack in any order.

use std::{fmt, sync::Arc};

// ─── Capability ──────────────────────────────────────────────────────────────

/// Anything that can render itself as a one-line description.
pub trait Describable: fmt::Debug + Send + Sync {
  fn describe(&self) -> String;

  /// The model year of the innermost record, if this value wraps one.
  fn year(&self) -> Option<i32> { None }
}

impl<D: Describable + ?Sized> Describable for &D {
  fn describe(&self) -> String { (**self).describe() }

  fn year(&self) -> Option<i32> { (**self).year() }
}

impl<D: Describable + ?Sized> Describable for Box<D> {
  fn describe(&self) -> String { (**self).describe() }

  fn year(&self) -> Option<i32> { (**self).year() }
}

impl<D: Describable + ?Sized> Describable for Arc<D> {
  fn describe(&self) -> String { (**self).describe() }

  fn year(&self) -> Option<i32> { (**self).year() }
}

// ─── Decorators ──────────────────────────────────────────────────────────────

/// Pass-through base decorator: describes exactly as the value it wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarDecorator<D> {
  inner: D,
}

impl<D: Describable> CarDecorator<D> {
  pub fn new(inner: D) -> Self { Self { inner } }

  pub fn into_inner(self) -> D { self.inner }
}

impl<D: Describable> Describable for CarDecorator<D> {
  fn describe(&self) -> String { self.inner.describe() }

  fn year(&self) -> Option<i32> { self.inner.year() }
}

/// Appends the model year in parentheses: `"Dacia Logan (2020)"`.
///
/// When the wrapped value carries no year (for instance a whole
/// [`CarList`](crate::CarList)) the inner description is returned unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearDecorator<D> {
  inner: D,
}

impl<D: Describable> YearDecorator<D> {
  pub fn new(inner: D) -> Self { Self { inner } }
}

impl<D: Describable> Describable for YearDecorator<D> {
  fn describe(&self) -> String {
    let base = self.inner.describe();
    match self.inner.year() {
      Some(year) => format!("{base} ({year})"),
      None => base,
    }
  }

  fn year(&self) -> Option<i32> { self.inner.year() }
}

// ─── Extension ───────────────────────────────────────────────────────────────

/// Method-style wrapping: `car.with_year()` instead of
/// `YearDecorator::new(car)`.
pub trait DescribableExt: Describable + Sized {
  fn with_year(self) -> YearDecorator<Self> { YearDecorator::new(self) }

  fn decorated(self) -> CarDecorator<Self> { CarDecorator::new(self) }
}

impl<D: Describable + Sized> DescribableExt for D {}
