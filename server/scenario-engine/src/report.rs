//! Human-readable scenario messages.

use crate::types::{Driver, ScenarioOutcome};

pub fn render_message(selected: &Driver, leader: &Driver, outcome: &ScenarioOutcome) -> String {
  match outcome {
    ScenarioOutcome::Ineligible => format!(
      "{} cannot mathematically win the championship.",
      selected.full_name()
    ),
    ScenarioOutcome::Reachable(r) => {
      let lines = [
        format!("In order for {} to win:", selected.full_name()),
        format!("- {} race wins.", r.required_race_wins),
        format!("- {} sprint wins.", r.required_sprint_wins),
        format!("- {} fastest laps.", r.required_fastest_laps),
        format!(
          "- Outperform {} in {} placements.",
          leader.full_name(),
          r.required_placements
        ),
      ];
      lines.join("\n")
    }
  }
}
