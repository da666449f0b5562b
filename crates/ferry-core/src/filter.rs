//! Pure, read-only filters over a snapshot of the delivery listing.
//!
//! Nothing here touches the store. The text and area filters apply
//! independently; combined filtering is the intersection of both predicates.

use std::collections::HashSet;

use crate::delivery::Delivery;

/// The area value that disables area filtering.
pub const ALL_AREAS: &str = "all";

/// Case-insensitive substring match against `title`, `from`, `to` and
/// `category`.
pub fn matches_text(delivery: &Delivery, term: &str) -> bool {
  if term.is_empty() {
    return true;
  }
  let term = term.to_lowercase();
  [
    &delivery.title,
    &delivery.from,
    &delivery.to,
    &delivery.category,
  ]
  .iter()
  .any(|field| field.to_lowercase().contains(&term))
}

/// True when `area` occurs in either endpoint of the route.
pub fn matches_area(delivery: &Delivery, area: &str) -> bool {
  area == ALL_AREAS
    || delivery.from.contains(area)
    || delivery.to.contains(area)
}

/// Retain deliveries matching `term`. The empty term is the identity.
pub fn filter_by_text(
  mut deliveries: Vec<Delivery>,
  term: &str,
) -> Vec<Delivery> {
  if !term.is_empty() {
    deliveries.retain(|d| matches_text(d, term));
  }
  deliveries
}

/// Retain deliveries routed through `area`. [`ALL_AREAS`] is the identity.
pub fn filter_by_area(
  mut deliveries: Vec<Delivery>,
  area: &str,
) -> Vec<Delivery> {
  if area != ALL_AREAS {
    deliveries.retain(|d| matches_area(d, area));
  }
  deliveries
}

/// Every distinct `from`/`to` value across the input — the choices a
/// listing UI offers in its area dropdown.
pub fn distinct_areas(deliveries: &[Delivery]) -> HashSet<String> {
  deliveries
    .iter()
    .flat_map(|d| [d.from.clone(), d.to.clone()])
    .collect()
}
