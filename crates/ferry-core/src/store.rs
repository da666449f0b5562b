//! The `DeliveryStore` trait and supporting types.
//!
//! The trait is implemented by storage backends (e.g. `ferry-store-sqlite`).
//! Higher layers (`ferry-api`, `ferry-server`) depend on this abstraction,
//! not on any concrete backend. The collection is never mutated from outside;
//! every write goes through one of the operations below.

use std::future::Future;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::delivery::{Delivery, NewDelivery};

// ─── Per-user partition ──────────────────────────────────────────────────────

/// Result of [`DeliveryStore::list_by_user`].
///
/// The partitions are not disjoint: a user who accepts their own delivery
/// sees it in both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDeliveries {
  /// Records with `created_by == user_id`, in insertion order.
  pub created: Vec<Delivery>,
  /// Records with `taken_by == user_id`, in insertion order.
  pub taken:   Vec<Delivery>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Ferry delivery store backend.
///
/// Transition operations (`accept`, `complete`) must be atomic per record: a
/// backend races concurrent callers on a single check-and-set of `status`,
/// never a read-modify-write with a gap. Of two concurrent `accept` calls on
/// the same open delivery exactly one succeeds; the other observes
/// `InvalidTransition`.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait DeliveryStore: Send + Sync {
  type Error: std::error::Error
    + Into<crate::Error>
    + Send
    + Sync
    + 'static;

  /// Validate `input` and persist a new record with `status = open`,
  /// `taken_by` absent, and a freshly generated unique id.
  ///
  /// Fails with a validation error if any required descriptive field is
  /// blank. On success the record is visible to subsequent `list`/`get`.
  fn create(
    &self,
    input: NewDelivery,
  ) -> impl Future<Output = Result<Delivery, Self::Error>> + Send + '_;

  /// Retrieve a delivery by id. Returns `None` if not found.
  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Delivery>, Self::Error>> + Send + '_;

  /// List all deliveries in insertion order — stable, never re-sorted by
  /// status or date.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<Delivery>, Self::Error>> + Send + '_;

  /// Partition deliveries into those created by and those taken by
  /// `user_id`.
  fn list_by_user<'a>(
    &'a self,
    user_id: &'a str,
  ) -> impl Future<Output = Result<UserDeliveries, Self::Error>> + Send + 'a;

  /// Claim an open delivery for `user_id`.
  ///
  /// Fails with `NotFound` if `id` is unknown and `InvalidTransition` if the
  /// delivery is no longer open (including when a concurrent caller just won
  /// the race). Retrying after a failure is safe; retrying after success is
  /// itself an `InvalidTransition`.
  fn accept<'a>(
    &'a self,
    id: Uuid,
    user_id: &'a str,
  ) -> impl Future<Output = Result<Delivery, Self::Error>> + Send + 'a;

  /// Finish an in-progress delivery.
  ///
  /// Fails with `NotFound` if `id` is unknown, `InvalidTransition` if the
  /// delivery is not in progress, and `NotCourier` if `user_id` is not the
  /// accepting courier.
  fn complete<'a>(
    &'a self,
    id: Uuid,
    user_id: &'a str,
  ) -> impl Future<Output = Result<Delivery, Self::Error>> + Send + 'a;
}
