//! SQLite backend for the Ferry delivery store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Lifecycle transitions are conditional
//! updates on `status`, so the acceptance race is decided by a single atomic
//! check-and-set in the database.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
