//! Core types and trait definitions for the Ferry delivery-matching service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod delivery;
pub mod error;
pub mod filter;
pub mod lifecycle;
pub mod reminder;
pub mod store;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
