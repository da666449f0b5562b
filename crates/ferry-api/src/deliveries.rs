//! Handlers for `/deliveries` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/deliveries` | Optional `?text=` and `?area=` filters |
//! | `POST` | `/deliveries` | Body: [`NewDeliveryBody`]; returns 201 + record |
//! | `GET`  | `/deliveries/areas` | Sorted distinct `from`/`to` values |
//! | `GET`  | `/deliveries/:id` | 404 if not found |
//! | `POST` | `/deliveries/:id/accept` | Body: `{"user_id":"..."}`; 409 on lost race |
//! | `POST` | `/deliveries/:id/complete` | Body: `{"user_id":"..."}`; 403 for non-courier |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::NaiveDate;
use ferry_core::{
  delivery::{Delivery, NewDelivery},
  filter::{distinct_areas, filter_by_area, filter_by_text},
  reminder::{DEFAULT_LEAD_MINUTES, reminder_time},
  store::DeliveryStore,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  /// Case-insensitive substring over title, endpoints and category.
  pub text: Option<String>,
  /// Area filter; `all` (or absent) disables it.
  pub area: Option<String>,
}

/// `GET /deliveries[?text=...][&area=...]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Delivery>>, ApiError>
where
  S: DeliveryStore,
{
  let mut deliveries = store.list().await.map_err(ApiError::from_store)?;

  if let Some(text) = &params.text {
    deliveries = filter_by_text(deliveries, text);
  }
  if let Some(area) = &params.area {
    deliveries = filter_by_area(deliveries, area);
  }

  Ok(Json(deliveries))
}

// ─── Areas ────────────────────────────────────────────────────────────────────

/// `GET /deliveries/areas` — the values a listing UI offers in its area
/// dropdown, sorted for a stable response.
pub async fn areas<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<String>>, ApiError>
where
  S: DeliveryStore,
{
  let deliveries = store.list().await.map_err(ApiError::from_store)?;
  let mut areas: Vec<String> = distinct_areas(&deliveries).into_iter().collect();
  areas.sort();
  Ok(Json(areas))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /deliveries`.
///
/// Carries no `status` or `taken_by`: those are forced by the store.
#[derive(Debug, Deserialize)]
pub struct NewDeliveryBody {
  pub title:      String,
  pub from:       String,
  pub to:         String,
  pub date:       NaiveDate,
  pub time:       String,
  pub category:   String,
  #[serde(default)]
  pub details:    String,
  pub created_by: String,
}

impl From<NewDeliveryBody> for NewDelivery {
  fn from(b: NewDeliveryBody) -> Self {
    NewDelivery {
      title:      b.title,
      from:       b.from,
      to:         b.to,
      date:       b.date,
      time:       b.time,
      category:   b.category,
      details:    b.details,
      created_by: b.created_by,
    }
  }
}

/// `POST /deliveries` — returns 201 + the stored record.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewDeliveryBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: DeliveryStore,
{
  let delivery = store
    .create(NewDelivery::from(body))
    .await
    .map_err(ApiError::from_store)?;

  // Downstream notification scheduler consumes this event.
  if let Ok(at) = reminder_time(&delivery, DEFAULT_LEAD_MINUTES) {
    tracing::info!(
      delivery_id = %delivery.id,
      title = %delivery.title,
      reminder_at = %at,
      "delivery created"
    );
  }

  Ok((StatusCode::CREATED, Json(delivery)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /deliveries/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Delivery>, ApiError>
where
  S: DeliveryStore,
{
  let delivery = store
    .get(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("delivery {id} not found")))?;
  Ok(Json(delivery))
}

// ─── Transitions ──────────────────────────────────────────────────────────────

/// JSON body for `POST /deliveries/:id/accept` and `.../complete`.
#[derive(Debug, Deserialize)]
pub struct ActorBody {
  /// Opaque identity of the acting user.
  pub user_id: String,
}

/// `POST /deliveries/:id/accept` — body: `{"user_id":"..."}`
pub async fn accept_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<ActorBody>,
) -> Result<Json<Delivery>, ApiError>
where
  S: DeliveryStore,
{
  let delivery = store
    .accept(id, &body.user_id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(delivery))
}

/// `POST /deliveries/:id/complete` — body: `{"user_id":"..."}`
pub async fn complete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<ActorBody>,
) -> Result<Json<Delivery>, ApiError>
where
  S: DeliveryStore,
{
  let delivery = store
    .complete(id, &body.user_id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(delivery))
}
