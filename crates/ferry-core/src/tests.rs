//! Unit tests for the pure core: lifecycle table, validation, filters,
//! reminder arithmetic.

use chrono::NaiveDate;

use crate::{
  Error,
  delivery::{Delivery, NewDelivery},
  filter::{distinct_areas, filter_by_area, filter_by_text},
  lifecycle::{DeliveryStatus, Transition, advance},
  reminder::{DEFAULT_LEAD_MINUTES, reminder_time},
};

fn new_delivery(title: &str, from: &str, to: &str) -> NewDelivery {
  NewDelivery {
    title:      title.into(),
    from:       from.into(),
    to:         to.into(),
    date:       NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
    time:       "16:30".into(),
    category:   "documents".into(),
    details:    String::new(),
    created_by: "user123".into(),
  }
}

fn delivery(title: &str, from: &str, to: &str) -> Delivery {
  new_delivery(title, from, to).into_delivery()
}

// ─── Lifecycle ───────────────────────────────────────────────────────────────

#[test]
fn status_only_advances_forward() {
  use DeliveryStatus::*;
  use Transition::*;

  assert_eq!(advance(Open, Accept), Some(InProgress));
  assert_eq!(advance(InProgress, Complete), Some(Done));

  // Everything else is forbidden: no regression, no skipping, no leaving
  // the terminal state.
  assert_eq!(advance(Open, Complete), None);
  assert_eq!(advance(InProgress, Accept), None);
  assert_eq!(advance(Done, Accept), None);
  assert_eq!(advance(Done, Complete), None);
}

#[test]
fn status_string_forms_roundtrip() {
  assert_eq!(DeliveryStatus::InProgress.to_string(), "in-progress");
  assert_eq!(
    "in-progress".parse::<DeliveryStatus>().unwrap(),
    DeliveryStatus::InProgress
  );
  assert_eq!("open".parse::<DeliveryStatus>().unwrap(), DeliveryStatus::Open);
  assert_eq!("done".parse::<DeliveryStatus>().unwrap(), DeliveryStatus::Done);
}

// ─── Creation ────────────────────────────────────────────────────────────────

#[test]
fn into_delivery_forces_open_and_unclaimed() {
  let d = delivery("Доставити документи", "Шевченківський район", "Сихів");
  assert_eq!(d.status, DeliveryStatus::Open);
  assert!(d.taken_by.is_none());
}

#[test]
fn fresh_deliveries_get_distinct_ids() {
  let a = delivery("a", "x", "y");
  let b = delivery("b", "x", "y");
  assert_ne!(a.id, b.id);
}

#[test]
fn validate_rejects_blank_required_fields() {
  for field in ["title", "from", "to", "category", "created_by"] {
    let mut input = new_delivery("Забрати посилку", "Нова Пошта #23", "Сихів");
    match field {
      "title" => input.title = "  ".into(),
      "from" => input.from = String::new(),
      "to" => input.to = String::new(),
      "category" => input.category = String::new(),
      "created_by" => input.created_by = String::new(),
      _ => unreachable!(),
    }
    let err = input.validate().unwrap_err();
    assert!(matches!(err, Error::Validation(ref m) if m.contains(field)));
  }
}

#[test]
fn validate_rejects_malformed_time() {
  for bad in ["25:00", "12:60", "noon", "12-30", ""] {
    let mut input = new_delivery("t", "a", "b");
    input.time = bad.into();
    assert!(matches!(input.validate(), Err(Error::Validation(_))), "{bad:?}");
  }

  // Single-digit hours are fine, matching the source form's pattern.
  let mut input = new_delivery("t", "a", "b");
  input.time = "9:05".into();
  input.validate().unwrap();
}

#[test]
fn validate_rejects_overlong_details() {
  let mut input = new_delivery("t", "a", "b");
  input.details = "x".repeat(501);
  assert!(matches!(input.validate(), Err(Error::Validation(_))));
}

// ─── Filters ─────────────────────────────────────────────────────────────────

fn sample_listing() -> Vec<Delivery> {
  vec![
    delivery("Доставити документи", "Шевченківський район", "Сихів"),
    delivery("Забрати продукти", "Сільпо Супермаркет", "Франківський район"),
    delivery("Забрати посилку", "Нова Пошта #23", "Личаківський район"),
  ]
}

#[test]
fn empty_text_filter_is_identity() {
  let ds = sample_listing();
  let ids: Vec<_> = ds.iter().map(|d| d.id).collect();
  let filtered = filter_by_text(ds, "");
  assert_eq!(filtered.iter().map(|d| d.id).collect::<Vec<_>>(), ids);
}

#[test]
fn all_area_filter_is_identity() {
  let ds = sample_listing();
  let ids: Vec<_> = ds.iter().map(|d| d.id).collect();
  let filtered = filter_by_area(ds, "all");
  assert_eq!(filtered.iter().map(|d| d.id).collect::<Vec<_>>(), ids);
}

#[test]
fn text_filter_is_case_insensitive_over_all_fields() {
  let filtered = filter_by_text(sample_listing(), "ДОКУМЕНТИ");
  assert_eq!(filtered.len(), 1);
  assert_eq!(filtered[0].title, "Доставити документи");

  // Matches category too.
  let mut ds = sample_listing();
  ds[2].category = "package".into();
  let filtered = filter_by_text(ds, "Package");
  assert_eq!(filtered.len(), 1);
}

#[test]
fn area_filter_matches_either_endpoint() {
  let filtered = filter_by_area(sample_listing(), "Сихів");
  assert_eq!(filtered.len(), 1);
  assert_eq!(filtered[0].to, "Сихів");

  let filtered = filter_by_area(sample_listing(), "Нова Пошта");
  assert_eq!(filtered.len(), 1);
  assert_eq!(filtered[0].from, "Нова Пошта #23");
}

#[test]
fn filters_compose_as_intersection() {
  let filtered =
    filter_by_area(filter_by_text(sample_listing(), "забрати"), "Сихів");
  assert!(filtered.is_empty());

  let filtered = filter_by_area(
    filter_by_text(sample_listing(), "забрати"),
    "Франківський район",
  );
  assert_eq!(filtered.len(), 1);
}

#[test]
fn distinct_areas_deduplicates_endpoints() {
  let mut ds = sample_listing();
  // Duplicate an endpoint across two records.
  ds.push(delivery("Ще одна", "Сихів", "Шевченківський район"));

  let areas = distinct_areas(&ds);
  assert_eq!(areas.len(), 6);
  assert!(areas.contains("Сихів"));
  assert!(areas.contains("Шевченківський район"));
}

// ─── Reminder ────────────────────────────────────────────────────────────────

#[test]
fn reminder_fires_before_the_delivery_time() {
  let d = delivery("t", "a", "b");
  let at = reminder_time(&d, DEFAULT_LEAD_MINUTES).unwrap();
  assert_eq!(
    at,
    NaiveDate::from_ymd_opt(2025, 4, 7)
      .unwrap()
      .and_hms_opt(16, 0, 0)
      .unwrap()
  );
}

#[test]
fn reminder_crossing_midnight_lands_on_previous_day() {
  let mut d = delivery("t", "a", "b");
  d.time = "00:10".into();
  let at = reminder_time(&d, DEFAULT_LEAD_MINUTES).unwrap();
  assert_eq!(
    at,
    NaiveDate::from_ymd_opt(2025, 4, 6)
      .unwrap()
      .and_hms_opt(23, 40, 0)
      .unwrap()
  );
}

#[test]
fn reminder_rejects_unparseable_time() {
  let mut d = delivery("t", "a", "b");
  d.time = "soon".into();
  assert!(matches!(
    reminder_time(&d, DEFAULT_LEAD_MINUTES),
    Err(Error::Validation(_))
  ));
}
