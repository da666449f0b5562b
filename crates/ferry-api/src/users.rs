//! Handler for `GET /users/:user_id/deliveries`.
//!
//! Returns the per-user partition `{"created": [...], "taken": [...]}`.
//! The two lists overlap when a user accepted their own delivery.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use ferry_core::store::{DeliveryStore, UserDeliveries};

use crate::error::ApiError;

/// `GET /users/:user_id/deliveries`
pub async fn deliveries<S>(
  State(store): State<Arc<S>>,
  Path(user_id): Path<String>,
) -> Result<Json<UserDeliveries>, ApiError>
where
  S: DeliveryStore,
{
  let partition = store
    .list_by_user(&user_id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(partition))
}
