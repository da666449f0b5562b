//! Delivery — the sole entity of the system.
//!
//! Descriptive fields are set at creation and never edited. The only mutable
//! field is `status` (and `taken_by`, written exactly once on acceptance),
//! and both change only through the lifecycle transitions on
//! [`DeliveryStore`](crate::store::DeliveryStore).

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, lifecycle::DeliveryStatus};

/// Longest accepted `title`, in characters.
pub const MAX_TITLE_LEN: usize = 100;
/// Longest accepted `details`, in characters.
pub const MAX_DETAILS_LEN: usize = 500;

// ─── Delivery ────────────────────────────────────────────────────────────────

/// A single transportable task request with a lifecycle from open to done.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
  pub id:         Uuid,
  pub title:      String,
  /// Pickup location, free text (e.g. a city district or a shop).
  pub from:       String,
  /// Drop-off location, free text.
  pub to:         String,
  pub date:       NaiveDate,
  /// Wall-clock time of day, `HH:MM`.
  pub time:       String,
  pub category:   String,
  pub details:    String,
  pub status:     DeliveryStatus,
  /// Opaque identifier of the creating user; never validated here.
  pub created_by: String,
  /// The accepting courier. `Some` exactly while status is past `open`.
  pub taken_by:   Option<String>,
  /// Server-assigned; never changes after creation.
  pub created_at: DateTime<Utc>,
}

// ─── NewDelivery ─────────────────────────────────────────────────────────────

/// Input to [`crate::store::DeliveryStore::create`].
///
/// Carries no `status` or `taken_by` on purpose: a freshly created delivery
/// is always `open` and unclaimed, regardless of what any caller wants.
/// `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewDelivery {
  pub title:      String,
  pub from:       String,
  pub to:         String,
  pub date:       NaiveDate,
  pub time:       String,
  pub category:   String,
  pub details:    String,
  pub created_by: String,
}

impl NewDelivery {
  /// Reject blank required fields and a malformed `time`.
  ///
  /// Length caps and richer format rules belong to the creation UI; the
  /// store only refuses input no record should ever be built from.
  pub fn validate(&self) -> Result<()> {
    for (name, value) in [
      ("title", &self.title),
      ("from", &self.from),
      ("to", &self.to),
      ("category", &self.category),
      ("created_by", &self.created_by),
    ] {
      if value.trim().is_empty() {
        return Err(Error::Validation(format!("{name} must not be empty")));
      }
    }

    if self.title.chars().count() > MAX_TITLE_LEN {
      return Err(Error::Validation(format!(
        "title exceeds {MAX_TITLE_LEN} characters"
      )));
    }
    if self.details.chars().count() > MAX_DETAILS_LEN {
      return Err(Error::Validation(format!(
        "details exceeds {MAX_DETAILS_LEN} characters"
      )));
    }

    if NaiveTime::parse_from_str(&self.time, "%H:%M").is_err() {
      return Err(Error::Validation(format!(
        "time {:?} is not in HH:MM format",
        self.time
      )));
    }

    Ok(())
  }

  /// Build the stored record: fresh id, server timestamp, forced
  /// `open`/unclaimed state.
  pub fn into_delivery(self) -> Delivery {
    Delivery {
      id:         Uuid::new_v4(),
      title:      self.title,
      from:       self.from,
      to:         self.to,
      date:       self.date,
      time:       self.time,
      category:   self.category,
      details:    self.details,
      status:     DeliveryStatus::Open,
      created_by: self.created_by,
      taken_by:   None,
      created_at: Utc::now(),
    }
  }
}
