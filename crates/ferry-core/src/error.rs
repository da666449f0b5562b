//! Error taxonomy for `ferry-core`.
//!
//! [`Error::InvalidTransition`] is an expected outcome under concurrent use
//! (a caller lost the acceptance race) and must stay distinguishable from
//! [`Error::NotFound`]. Nothing in the core retries: a lost race is a
//! legitimate terminal result, not a transient fault.

use thiserror::Error;
use uuid::Uuid;

use crate::lifecycle::{DeliveryStatus, Transition};

#[derive(Debug, Error)]
pub enum Error {
  /// Malformed or missing input to `create`.
  #[error("validation failed: {0}")]
  Validation(String),

  #[error("delivery not found: {0}")]
  NotFound(Uuid),

  /// The forward-only state machine forbids the requested transition.
  #[error("delivery {id} is {status}, cannot {action}")]
  InvalidTransition {
    id:     Uuid,
    status: DeliveryStatus,
    action: Transition,
  },

  /// `complete` attempted by a user other than the accepting courier.
  #[error("user {user:?} is not the courier for delivery {id}")]
  NotCourier { id: Uuid, user: String },

  /// A backend failure surfaced through the store trait boundary.
  #[error("storage error: {0}")]
  Storage(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
