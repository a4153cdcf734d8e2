//! Time remaining until the next race start.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
  pub days: i64,
  pub hours: i64,
  pub minutes: i64,
  pub seconds: i64,
}

impl Countdown {
  /// `None` once the race has started.
  pub fn until(start: DateTime<Utc>, now: DateTime<Utc>) -> Option<Self> {
    let total = (start - now).num_seconds();
    if total < 0 {
      return None;
    }
    Some(Self {
      days: total / 86_400,
      hours: (total % 86_400) / 3_600,
      minutes: (total % 3_600) / 60,
      seconds: total % 60,
    })
  }
}
