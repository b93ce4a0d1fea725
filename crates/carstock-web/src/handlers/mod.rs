//! Request handlers, split by surface.

pub mod api;
pub mod page;
