//! Error type for `ferry-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A domain failure (validation, not-found, illegal transition, wrong
  /// courier) detected while executing against the database.
  #[error(transparent)]
  Core(#[from] ferry_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  /// A stored column value did not decode into its domain type.
  #[error("column decode error: {0}")]
  Decode(String),
}

/// Collapse onto the core taxonomy for callers above the store trait.
/// Domain failures pass through; everything else is a storage fault.
impl From<Error> for ferry_core::Error {
  fn from(err: Error) -> Self {
    match err {
      Error::Core(core) => core,
      other => ferry_core::Error::Storage(other.to_string()),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
