//! Championship point values and the eligibility gate.

use crate::types::RemainingEvent;

pub const RACE_WIN: u32 = 25;
pub const SECOND_PLACE: u32 = 18;
pub const THIRD_PLACE: u32 = 15;
pub const FASTEST_LAP: u32 = 1;
pub const SPRINT_WIN: u32 = 8;

/// Most points one driver could still score: every race, fastest lap and sprint.
pub fn max_points_remaining(events: &[RemainingEvent]) -> u32 {
  events
    .iter()
    .map(|e| RACE_WIN + FASTEST_LAP + if e.is_sprint { SPRINT_WIN } else { 0 })
    .sum()
}

/// Points needed to strictly exceed the leader, assuming the leader scores no more.
pub fn points_needed(selected_points: f64, leader_points: f64) -> f64 {
  leader_points - selected_points + 1.0
}

/// True when even a perfect run cannot take the selected driver past the leader.
pub fn is_eliminated(selected_points: f64, leader_points: f64, events: &[RemainingEvent]) -> bool {
  selected_points + f64::from(max_points_remaining(events)) <= leader_points
}
