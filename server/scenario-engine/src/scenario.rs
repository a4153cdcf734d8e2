//! Single-lever requirement estimates.
//!
//! Each estimate starts from the same gap and pulls one lever in isolation:
//! - race wins: 25 per standard race
//! - sprint wins: 8 per sprint weekend
//! - fastest laps: 1 per standard race
//! - placements: race win + fastest lap per standard race, then sprint wins
//!
//! None of them consumes another's points, so they must not be summed.

use crate::points::{self, FASTEST_LAP, RACE_WIN, SPRINT_WIN};
use crate::types::{Driver, RemainingEvent, ScenarioOutcome, ScenarioResult};

/// Compute the scenario for `selected` chasing `leader` over `remaining_events`.
///
/// Returns `Ineligible` when a perfect run still cannot beat the leader's
/// current total. Event order does not affect the result.
pub fn compute_scenario(
  selected: &Driver,
  leader: &Driver,
  remaining_events: &[RemainingEvent],
) -> ScenarioOutcome {
  if points::is_eliminated(selected.points, leader.points, remaining_events) {
    return ScenarioOutcome::Ineligible;
  }

  let needed = points::points_needed(selected.points, leader.points);
  let (sprints, full_races): (Vec<RemainingEvent>, Vec<RemainingEvent>) =
    remaining_events.iter().partition(|e| e.is_sprint);

  ScenarioOutcome::Reachable(ScenarioResult {
    required_race_wins: required_race_wins(needed, full_races.len()),
    required_sprint_wins: required_sprint_wins(needed, sprints.len()),
    required_fastest_laps: required_fastest_laps(needed, full_races.len()),
    required_placements: required_placements(needed, full_races.len(), sprints.len()),
  })
}

/// Count events consumed at `per_event` points each until the gap closes or
/// the events run out.
fn count_until_covered(mut needed: f64, available: usize, per_event: u32) -> u32 {
  let mut count = 0u32;
  while needed > 0.0 && (count as usize) < available {
    needed -= f64::from(per_event);
    count += 1;
  }
  count
}

pub fn required_race_wins(needed: f64, full_races: usize) -> u32 {
  count_until_covered(needed, full_races, RACE_WIN)
}

pub fn required_sprint_wins(needed: f64, sprints: usize) -> u32 {
  count_until_covered(needed, sprints, SPRINT_WIN)
}

/// At most one fastest-lap point per standard race.
pub fn required_fastest_laps(needed: f64, full_races: usize) -> u32 {
  if needed <= 0.0 {
    return 0;
  }
  let laps = (needed / f64::from(FASTEST_LAP)).ceil();
  laps.min(full_races as f64) as u32
}

/// Events in which the driver must out-score the leader, each worth a full
/// race win plus fastest lap (standard races first), then sprint wins.
pub fn required_placements(needed: f64, full_races: usize, sprints: usize) -> u32 {
  let mut needed = needed;
  let mut placements = 0u32;

  for _ in 0..full_races {
    if needed <= 0.0 {
      break;
    }
    needed -= f64::from(RACE_WIN + FASTEST_LAP);
    placements += 1;
  }

  for _ in 0..sprints {
    if needed <= 0.0 {
      break;
    }
    needed -= f64::from(SPRINT_WIN);
    placements += 1;
  }

  placements
}
