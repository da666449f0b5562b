//! Reminder-time arithmetic for the downstream notification scheduler.
//!
//! The scheduler itself is not part of the core; it only needs the instant a
//! reminder should fire, derived from the delivery's `date` and `time`.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::{Error, Result, delivery::Delivery};

/// How far ahead of the delivery time a reminder fires, in minutes.
pub const DEFAULT_LEAD_MINUTES: i64 = 30;

/// The local instant a reminder for `delivery` should fire:
/// `date` + `time` − `lead_minutes`.
///
/// Fails with a validation error if the stored `time` does not parse as
/// `HH:MM` (possible only for records that bypassed `create` validation,
/// e.g. rows written by an older schema).
pub fn reminder_time(
  delivery: &Delivery,
  lead_minutes: i64,
) -> Result<NaiveDateTime> {
  let time = NaiveTime::parse_from_str(&delivery.time, "%H:%M")
    .map_err(|_| {
      Error::Validation(format!(
        "time {:?} is not in HH:MM format",
        delivery.time
      ))
    })?;

  Ok(delivery.date.and_time(time) - Duration::minutes(lead_minutes))
}
