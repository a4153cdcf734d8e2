//! Core types for the scenario engine (JSON contracts + internal models).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types (Ergast-shaped; what the data source hands us)
// ---------------------------------------------------------------------------

/// One row of the driver standings table. Unknown fields are ignored.
///
/// Points and position stay as text here; they are parsed in `select`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingEntry {
  #[serde(default)]
  pub position: Option<String>,
  #[serde(default)]
  pub points: Option<String>,
  #[serde(default)]
  pub wins: Option<String>,
  #[serde(rename = "Driver")]
  pub driver: DriverInfo,
  #[serde(rename = "Constructors", default)]
  pub constructors: Vec<ConstructorInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverInfo {
  pub driver_id: String,
  pub given_name: String,
  pub family_name: String,
  #[serde(default)]
  pub nationality: Option<String>,
}

impl DriverInfo {
  pub fn full_name(&self) -> String {
    full_name(&self.given_name, &self.family_name)
  }
}

/// "<Given> <Family>", as shown in tables and scenario messages.
fn full_name(given: &str, family: &str) -> String {
  format!("{} {}", given, family)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorInfo {
  #[serde(default)]
  pub constructor_id: Option<String>,
  pub name: String,
}

/// One scheduled round of the season.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledRace {
  #[serde(default)]
  pub round: Option<String>,
  pub race_name: String,
  #[serde(rename = "Circuit")]
  pub circuit: CircuitInfo,
  /// ISO date, e.g. "2024-11-03".
  pub date: String,
  /// UTC start time, e.g. "17:00:00Z". Absent for some historical rounds.
  #[serde(default)]
  pub time: Option<String>,
  /// Present only on sprint weekends.
  #[serde(rename = "Sprint", default)]
  pub sprint: Option<SessionTime>,
}

impl ScheduledRace {
  pub fn has_sprint(&self) -> bool {
    self.sprint.is_some()
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitInfo {
  #[serde(default)]
  pub circuit_id: Option<String>,
  pub circuit_name: String,
  #[serde(rename = "Location", default)]
  pub location: Option<LocationInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationInfo {
  #[serde(default)]
  pub locality: Option<String>,
  #[serde(default)]
  pub country: Option<String>,
}

/// Only the presence of a session matters; its timing is informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTime {
  #[serde(default)]
  pub date: String,
  #[serde(default)]
  pub time: Option<String>,
}

// ---------------------------------------------------------------------------
// Internal validated types
// ---------------------------------------------------------------------------

/// A driver with numeric points, as of the moment of calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Driver {
  pub driver_id: String,
  pub given_name: String,
  pub family_name: String,
  pub points: f64,
}

impl Driver {
  pub fn full_name(&self) -> String {
    full_name(&self.given_name, &self.family_name)
  }
}

/// A future round. Sprint weekends carry an extra sprint session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemainingEvent {
  pub date: NaiveDate,
  pub is_sprint: bool,
}

/// Validated calculator inputs.
#[derive(Debug, Clone)]
pub struct ScenarioRequest {
  pub selected: Driver,
  pub leader: Driver,
  pub remaining_events: Vec<RemainingEvent>,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// Four independent single-lever requirements. Not additive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
  pub required_race_wins: u32,
  pub required_sprint_wins: u32,
  pub required_fastest_laps: u32,
  pub required_placements: u32,
}

/// Elimination is an expected outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScenarioOutcome {
  Ineligible,
  Reachable(ScenarioResult),
}

impl ScenarioOutcome {
  pub fn result(&self) -> Option<&ScenarioResult> {
    match self {
      Self::Ineligible => None,
      Self::Reachable(r) => Some(r),
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
  pub selected: Driver,
  pub leader: Driver,
  pub remaining_events: usize,
  pub max_points_remaining: u32,
  pub outcome: ScenarioOutcome,
  pub message: String,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Input object for the binary: standings + schedule as fetched, plus the
/// driver to simulate. `now` defaults to the current time.
#[derive(Debug, Clone, Deserialize)]
pub struct Input {
  pub driver_id: String,
  pub standings: Vec<StandingEntry>,
  pub schedule: Vec<ScheduledRace>,
  #[serde(default)]
  pub now: Option<String>,
}

/// Structured error output for invalid input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sprint_without_date_still_marks_sprint_weekend() {
    let race: ScheduledRace = serde_json::from_str(
      r#"{"raceName": "Miami Grand Prix", "date": "2099-05-04",
          "Circuit": {"circuitName": "Miami International Autodrome"},
          "Sprint": {}}"#,
    )
    .unwrap();
    assert!(race.has_sprint());
    assert!(race.sprint.unwrap().date.is_empty());
  }

  #[test]
  fn inbound_and_validated_drivers_share_display_name() {
    let info = DriverInfo {
      driver_id: "leclerc".into(),
      given_name: "Charles".into(),
      family_name: "Leclerc".into(),
      nationality: None,
    };
    let driver = Driver {
      driver_id: info.driver_id.clone(),
      given_name: info.given_name.clone(),
      family_name: info.family_name.clone(),
      points: 391.0,
    };
    assert_eq!(info.full_name(), "Charles Leclerc");
    assert_eq!(driver.full_name(), info.full_name());
  }
}
