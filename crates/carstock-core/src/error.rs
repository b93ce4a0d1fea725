//! Error types for `carstock-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("missing required field: {0}")]
  MissingField(&'static str),

  #[error("invalid year: {0:?}")]
  InvalidYear(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
