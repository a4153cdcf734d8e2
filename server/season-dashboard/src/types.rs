//! Ergast response envelopes and the result/standings rows the dashboard shows.
//!
//! Standings rows and schedule entries are shared with scenario-engine.

use scenario_engine::types::{CircuitInfo, ConstructorInfo, DriverInfo};
use scenario_engine::{ScheduledRace, StandingEntry};
use serde::Deserialize;

/// Every Ergast response is wrapped in `{"MRData": {...}}`.
#[derive(Debug, Deserialize)]
pub struct MrData<T> {
  #[serde(rename = "MRData")]
  pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct RaceTableData<R> {
  #[serde(rename = "RaceTable")]
  pub race_table: RaceTable<R>,
}

#[derive(Debug, Deserialize)]
pub struct RaceTable<R> {
  #[serde(rename = "Races", default = "Vec::new")]
  pub races: Vec<R>,
}

#[derive(Debug, Deserialize)]
pub struct StandingsTableData {
  #[serde(rename = "StandingsTable")]
  pub standings_table: StandingsTable,
}

#[derive(Debug, Deserialize)]
pub struct StandingsTable {
  #[serde(rename = "StandingsLists", default)]
  pub lists: Vec<StandingsList>,
}

#[derive(Debug, Deserialize)]
pub struct StandingsList {
  #[serde(rename = "DriverStandings", default)]
  pub drivers: Vec<StandingEntry>,
  #[serde(rename = "ConstructorStandings", default)]
  pub constructors: Vec<ConstructorStanding>,
}

pub type ScheduleResponse = MrData<RaceTableData<ScheduledRace>>;
pub type ResultsResponse = MrData<RaceTableData<RaceResults>>;
pub type StandingsResponse = MrData<StandingsTableData>;

#[derive(Debug, Clone, Deserialize)]
pub struct ConstructorStanding {
  #[serde(default)]
  pub position: Option<String>,
  pub points: String,
  #[serde(default)]
  pub wins: Option<String>,
  #[serde(rename = "Constructor")]
  pub constructor: ConstructorInfo,
}

/// One finished race with its classification.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResults {
  pub race_name: String,
  pub date: String,
  #[serde(rename = "Circuit")]
  pub circuit: CircuitInfo,
  #[serde(rename = "Results", default)]
  pub results: Vec<RaceResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RaceResult {
  #[serde(default)]
  pub position: Option<String>,
  pub points: String,
  #[serde(default)]
  pub laps: Option<String>,
  #[serde(default)]
  pub status: Option<String>,
  #[serde(rename = "Driver")]
  pub driver: DriverInfo,
  #[serde(rename = "Constructor")]
  pub constructor: ConstructorInfo,
  #[serde(rename = "Time", default)]
  pub time: Option<ResultTime>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultTime {
  pub time: String,
}
