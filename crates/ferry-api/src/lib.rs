//! JSON REST API for Ferry.
//!
//! Exposes an axum [`Router`] backed by any
//! [`ferry_core::store::DeliveryStore`]. Auth, TLS, and transport concerns
//! are the caller's responsibility; `user_id` values are opaque strings
//! supplied by the caller's identity provider.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", ferry_api::api_router(store.clone()))
//! ```

pub mod deliveries;
pub mod error;
pub mod users;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use ferry_core::store::DeliveryStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: DeliveryStore + 'static,
{
  Router::new()
    // Deliveries
    .route(
      "/deliveries",
      get(deliveries::list::<S>).post(deliveries::create::<S>),
    )
    .route("/deliveries/areas", get(deliveries::areas::<S>))
    .route("/deliveries/{id}", get(deliveries::get_one::<S>))
    .route("/deliveries/{id}/accept", post(deliveries::accept_one::<S>))
    .route(
      "/deliveries/{id}/complete",
      post(deliveries::complete_one::<S>),
    )
    // Per-user partition
    .route("/users/{user_id}/deliveries", get(users::deliveries::<S>))
    .with_state(store)
}
