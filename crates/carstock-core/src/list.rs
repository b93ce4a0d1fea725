//! [`CarList`], the composite collection.
//!
//! A car list is itself [`Describable`], so lists can be nested inside other
//! lists and decorated like any single car.

use std::sync::Arc;

use crate::{
  describe::Describable,
  store::{CarStore, Entry, ItemId, describe_all},
};

/// An ordered list of describable items owned by a single caller.
#[derive(Debug, Clone, Default)]
pub struct CarList {
  entries: Vec<Entry>,
}

impl CarList {
  pub fn new() -> Self { Self::default() }
}

impl Describable for CarList {
  fn describe(&self) -> String { describe_all(&self.entries) }
}

impl CarStore for CarList {
  fn add<D: Describable + 'static>(&mut self, item: D) -> ItemId {
    let entry = Entry::new(Arc::new(item));
    let id = entry.id;
    self.entries.push(entry);
    id
  }

  fn remove(&mut self, id: ItemId) -> Option<Entry> {
    let pos = self.entries.iter().position(|e| e.id == id)?;
    Some(self.entries.remove(pos))
  }

  fn entries(&self) -> Vec<Entry> { self.entries.clone() }

  fn len(&self) -> usize { self.entries.len() }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Car, DescribableExt};

  fn logan() -> Car { Car::new("Dacia", "Logan", 2020) }

  fn clio() -> Car { Car::new("Renault", "Clio", 2021) }

  #[test]
  fn empty_list_describes_as_empty_string() {
    let list = CarList::new();
    assert_eq!(list.describe(), "");
    assert!(list.is_empty());
  }

  #[test]
  fn add_then_describe_plain_and_decorated() {
    let mut list = CarList::new();
    list.add(logan());
    assert_eq!(list.describe(), "Dacia Logan");

    let mut list = CarList::new();
    list.add(logan().with_year());
    assert_eq!(list.describe(), "Dacia Logan (2020)");
  }

  #[test]
  fn describe_joins_in_insertion_order() {
    let mut list = CarList::new();
    list.add(logan().with_year());
    list.add(clio().with_year());
    assert_eq!(list.describe(), "Dacia Logan (2020), Renault Clio (2021)");
  }

  #[test]
  fn add_then_remove_leaves_empty() {
    let mut list = CarList::new();
    let id = list.add(logan());
    let removed = list.remove(id).expect("entry present");
    assert_eq!(removed.describe(), "Dacia Logan");
    assert_eq!(list.describe(), "");
  }

  #[test]
  fn remove_closes_the_gap() {
    let mut list = CarList::new();
    list.add(logan());
    let middle = list.add(clio());
    list.add(Car::new("Ford", "Focus", 2015));
    list.remove(middle);
    assert_eq!(list.describe(), "Dacia Logan, Ford Focus");
    assert_eq!(list.len(), 2);
  }

  #[test]
  fn removing_absent_id_is_a_no_op() {
    let mut list = CarList::new();
    list.add(logan());
    let before = list.describe();
    assert!(list.remove(ItemId::new()).is_none());
    assert_eq!(list.describe(), before);
    assert_eq!(list.len(), 1);
  }

  #[test]
  fn removal_is_by_identity_not_value() {
    let mut list = CarList::new();
    let first = list.add(logan());
    let second = list.add(logan());
    assert_ne!(first, second);

    list.remove(second);
    let remaining = list.entries();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, first);

    // A second removal of the same id finds nothing.
    assert!(list.remove(second).is_none());
    assert_eq!(list.len(), 1);
  }

  #[test]
  fn describe_is_idempotent() {
    let mut list = CarList::new();
    list.add(logan().with_year());
    list.add(clio());
    assert_eq!(list.describe(), list.describe());
  }

  #[test]
  fn describe_matches_surviving_items_after_mixed_operations() {
    let cars = [
      Car::new("Dacia", "Logan", 2020),
      Car::new("Renault", "Clio", 2021),
      Car::new("Ford", "Focus", 2015),
      Car::new("Dacia", "Logan", 2020),
      Car::new("Skoda", "Octavia", 2019),
    ];
    let mut list = CarList::new();
    let ids: Vec<_> = cars.iter().cloned().map(|c| list.add(c)).collect();
    list.remove(ids[0]);
    list.remove(ids[2]);
    list.remove(ids[2]);

    let expected = [&cars[1], &cars[3], &cars[4]]
      .iter()
      .map(|c| c.describe())
      .collect::<Vec<_>>()
      .join(", ");
    assert_eq!(list.describe(), expected);
  }

  #[test]
  fn lists_nest_as_composites() {
    let mut inner = CarList::new();
    inner.add(logan());
    inner.add(clio());

    let mut outer = CarList::new();
    outer.add(Car::new("Ford", "Focus", 2015).with_year());
    outer.add(inner);
    assert_eq!(
      outer.describe(),
      "Ford Focus (2015), Dacia Logan, Renault Clio"
    );
  }
}
