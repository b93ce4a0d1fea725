//! Core types for the carstock application.
//!
//! This crate is deliberately free of HTTP dependencies. It holds the car
//! record, the describable decorators, the composite car list, the shared
//! stock registry, and the access-controlled facade that gates mutations.

pub mod access;
pub mod car;
pub mod describe;
pub mod error;
pub mod list;
pub mod registry;
pub mod store;

pub use access::{
  AccessControlled, Action, AllowAll, DenyAll, FnPolicy, Outcome, PermissionPolicy,
  PolicyKind,
};
pub use car::{Car, NewCar};
pub use describe::{CarDecorator, Describable, DescribableExt, YearDecorator};
pub use error::{Error, Result};
pub use list::CarList;
pub use registry::StockRegistry;
pub use store::{CarStore, Entry, ItemId};
