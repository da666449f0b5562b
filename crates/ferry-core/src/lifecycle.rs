//! The delivery lifecycle state machine.
//!
//! A delivery only ever advances: `open → in-progress → done`. There is no
//! regression and no skipping `in-progress`. Backends consult [`advance`] for
//! legality and additionally enforce the same check atomically against stored
//! state, so that two racing callers cannot both win a transition.

use serde::{Deserialize, Serialize};

// ─── Status ──────────────────────────────────────────────────────────────────

/// Where a delivery sits in its lifecycle.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DeliveryStatus {
  /// Posted and unclaimed. `taken_by` is absent exactly while here.
  Open,
  /// Claimed by a courier; `taken_by` is set exactly once on entry.
  InProgress,
  /// Terminal. No transition leaves this state.
  Done,
}

impl DeliveryStatus {
  pub fn is_open(self) -> bool { matches!(self, Self::Open) }

  pub fn is_terminal(self) -> bool { matches!(self, Self::Done) }
}

// ─── Transitions ─────────────────────────────────────────────────────────────

/// The two lifecycle mutations a caller may request.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Transition {
  /// A courier claims an open delivery.
  Accept,
  /// The accepting courier finishes an in-progress delivery.
  Complete,
}

/// The status a delivery moves to when `action` is applied in `current`,
/// or `None` if the state machine forbids it.
pub fn advance(
  current: DeliveryStatus,
  action: Transition,
) -> Option<DeliveryStatus> {
  match (current, action) {
    (DeliveryStatus::Open, Transition::Accept) => {
      Some(DeliveryStatus::InProgress)
    }
    (DeliveryStatus::InProgress, Transition::Complete) => {
      Some(DeliveryStatus::Done)
    }
    _ => None,
  }
}
