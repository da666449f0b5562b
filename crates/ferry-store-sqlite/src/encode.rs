//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, dates as `YYYY-MM-DD`, UUIDs as
//! hyphenated lowercase strings, and the status as its kebab-case string form.

use chrono::{DateTime, NaiveDate, Utc};
use ferry_core::{delivery::Delivery, lifecycle::DeliveryStatus};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::Decode(format!("timestamp {s:?}: {e}")))
}

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String {
  d.format("%Y-%m-%d").to_string()
}

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::Decode(format!("date {s:?}: {e}")))
}

// ─── DeliveryStatus ──────────────────────────────────────────────────────────

pub fn encode_status(status: DeliveryStatus) -> String { status.to_string() }

pub fn decode_status(s: &str) -> Result<DeliveryStatus> {
  s.parse()
    .map_err(|_| Error::Decode(format!("unknown delivery status: {s:?}")))
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw strings read directly from a `deliveries` row.
pub struct RawDelivery {
  pub delivery_id: String,
  pub title:       String,
  pub from_place:  String,
  pub to_place:    String,
  pub date:        String,
  pub time:        String,
  pub category:    String,
  pub details:     String,
  pub status:      String,
  pub created_by:  String,
  pub taken_by:    Option<String>,
  pub created_at:  String,
}

impl RawDelivery {
  pub fn into_delivery(self) -> Result<Delivery> {
    Ok(Delivery {
      id:         decode_uuid(&self.delivery_id)?,
      title:      self.title,
      from:       self.from_place,
      to:         self.to_place,
      date:       decode_date(&self.date)?,
      time:       self.time,
      category:   self.category,
      details:    self.details,
      status:     decode_status(&self.status)?,
      created_by: self.created_by,
      taken_by:   self.taken_by,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
