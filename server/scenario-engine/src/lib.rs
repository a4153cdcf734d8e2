//! Paddock Scenario Engine — can a driver still win the championship?
//!
//! Picks the leader and the chosen driver out of the standings, keeps the
//! rounds still to come, runs the eligibility gate and, if the driver is still
//! alive, estimates four independent requirements (race wins, sprint wins,
//! fastest laps, placements).
//!
//! No DB, no network; pure computation. Used by the binary for stdin/stdout
//! and by season-dashboard as a library.

pub mod error;
pub mod points;
pub mod report;
pub mod scenario;
pub mod select;
pub mod types;

use chrono::{DateTime, Utc};

pub use error::EngineError;
pub use scenario::compute_scenario;
pub use types::{
  Driver, Input, RemainingEvent, ScenarioOutcome, ScenarioResult, ScheduledRace, Simulation,
  StandingEntry,
};

/// Select drivers, compute the outcome and render its message (no I/O).
pub fn simulate(
  standings: &[StandingEntry],
  schedule: &[ScheduledRace],
  driver_id: &str,
  now: DateTime<Utc>,
) -> Result<Simulation, EngineError> {
  let request = select::build_request(standings, schedule, driver_id, now)?;
  let outcome = compute_scenario(&request.selected, &request.leader, &request.remaining_events);
  let message = report::render_message(&request.selected, &request.leader, &outcome);

  Ok(Simulation {
    max_points_remaining: points::max_points_remaining(&request.remaining_events),
    remaining_events: request.remaining_events.len(),
    selected: request.selected,
    leader: request.leader,
    outcome,
    message,
  })
}

/// Run the engine on a parsed binary input. `now` falls back to the clock.
pub fn run(input: &Input) -> Result<Simulation, EngineError> {
  let now = match input.now.as_deref() {
    Some(s) => DateTime::parse_from_rfc3339(s)
      .map_err(|_| EngineError::validation("now", "must be RFC 3339"))?
      .with_timezone(&Utc),
    None => Utc::now(),
  };
  simulate(&input.standings, &input.schedule, &input.driver_id, now)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn run_rejects_bad_now() {
    let input = Input {
      driver_id: "norris".into(),
      standings: Vec::new(),
      schedule: Vec::new(),
      now: Some("yesterday".into()),
    };
    let err = run(&input).unwrap_err();
    assert!(err.to_string().contains("now"));
  }
}
