//! Page assembly: fetch what a page needs, concurrently, then render.
//!
//! A failed fetch only blanks its own section with a fixed message.

use chrono::{DateTime, Utc};
use scenario_engine::select::{is_upcoming, race_day};
use scenario_engine::{ScheduledRace, Simulation};

use crate::ergast::ErgastClient;
use crate::error::DashboardError;
use crate::render;

pub const NEXT_RACE_ERROR: &str = "Error loading next race.";
pub const LAST_RACE_ERROR: &str = "Error loading last race results.";
pub const DRIVER_STANDINGS_ERROR: &str = "Error loading driver standings.";
pub const CONSTRUCTOR_STANDINGS_ERROR: &str = "Error loading constructor standings.";
pub const CALENDAR_ERROR: &str = "Error loading race calendar. Please try again later.";
pub const SIMULATION_DATA_ERROR: &str = "Error loading simulation data.";
pub const INVALID_DRIVER: &str = "Invalid driver data.";
pub const SIMULATION_ERROR: &str = "Error simulating the overall scenario.";

/// First round whose day has not yet begun.
pub fn next_race(races: &[ScheduledRace], now: DateTime<Utc>) -> Option<&ScheduledRace> {
  races
    .iter()
    .find(|r| race_day(r).map(|d| is_upcoming(d, now)).unwrap_or(false))
}

pub async fn dashboard_page(ergast: &ErgastClient, now: DateTime<Utc>) -> String {
  let (schedule, last, drivers, constructors) = tokio::join!(
    ergast.schedule(),
    ergast.last_results(),
    ergast.driver_standings(),
    ergast.constructor_standings(),
  );

  let mut body = String::new();

  body.push_str(&match &schedule {
    Ok(races) => render::next_race(next_race(races, now), now),
    Err(e) => {
      tracing::warn!(section = "next-race", error = %e, "fetch failed");
      render::next_race_message(NEXT_RACE_ERROR)
    }
  });

  body.push_str(&match &last {
    Ok(race) => render::last_race(race),
    Err(e) => {
      tracing::warn!(section = "last-race", error = %e, "fetch failed");
      render::last_race_error(LAST_RACE_ERROR)
    }
  });

  match &drivers {
    Ok(entries) => {
      body.push_str(&render::driver_standings(entries));
      body.push_str(&render::simulation_form(entries));
    }
    Err(e) => {
      tracing::warn!(section = "driver-standings", error = %e, "fetch failed");
      body.push_str(&render::driver_standings_error(DRIVER_STANDINGS_ERROR));
      body.push_str(&render::simulation_form(&[]));
    }
  }

  body.push_str(&match &constructors {
    Ok(entries) => render::constructor_standings(entries),
    Err(e) => {
      tracing::warn!(section = "standings", error = %e, "fetch failed");
      render::constructor_standings_error(CONSTRUCTOR_STANDINGS_ERROR)
    }
  });

  render::page("F1 Dashboard", &body)
}

pub async fn calendar_page(ergast: &ErgastClient) -> String {
  let body = match ergast.schedule().await {
    Ok(races) => render::calendar(ergast.season(), &races),
    Err(e) => {
      tracing::warn!(section = "calendar", error = %e, "fetch failed");
      render::calendar_error(ergast.season(), CALENDAR_ERROR)
    }
  };
  render::page("F1 Race Calendar", &body)
}

/// Fetch schedule and standings together, then run the scenario engine.
pub async fn run_simulation(
  ergast: &ErgastClient,
  driver_id: &str,
  now: DateTime<Utc>,
) -> Result<Simulation, DashboardError> {
  let (schedule, standings) = tokio::join!(ergast.schedule(), ergast.driver_standings());
  let schedule = schedule?;
  let standings = standings?;
  let sim = scenario_engine::simulate(&standings, &schedule, driver_id, now)?;
  tracing::info!(
    driver_id,
    remaining_events = sim.remaining_events,
    eliminated = sim.outcome.result().is_none(),
    "simulated"
  );
  Ok(sim)
}

/// The text shown in place of a simulation that could not be run.
pub fn simulation_error_text(err: &DashboardError) -> &'static str {
  match err {
    e if e.is_fetch() => SIMULATION_DATA_ERROR,
    DashboardError::Scenario(e) if e.is_lookup() => INVALID_DRIVER,
    _ => SIMULATION_ERROR,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use scenario_engine::types::CircuitInfo;
  use scenario_engine::EngineError;

  fn race(name: &str, date: &str) -> ScheduledRace {
    ScheduledRace {
      round: None,
      race_name: name.into(),
      circuit: CircuitInfo {
        circuit_id: None,
        circuit_name: format!("{} Circuit", name),
        location: None,
      },
      date: date.into(),
      time: None,
      sprint: None,
    }
  }

  #[test]
  fn next_race_skips_past_and_bad_dates() {
    let races = vec![race("Old", "2024-03-02"), race("Odd", "TBC"), race("New", "2024-11-03")];
    let now = "2024-10-01T00:00:00Z".parse().unwrap();
    assert_eq!(next_race(&races, now).unwrap().race_name, "New");
  }

  #[test]
  fn season_finished_has_no_next_race() {
    let races = vec![race("Old", "2024-03-02")];
    let now = "2024-12-31T00:00:00Z".parse().unwrap();
    assert!(next_race(&races, now).is_none());
  }

  #[test]
  fn error_texts_by_kind() {
    let fetch = DashboardError::Status {
      endpoint: "current.json".into(),
      status: 503,
    };
    assert_eq!(simulation_error_text(&fetch), SIMULATION_DATA_ERROR);

    let lookup = DashboardError::from(EngineError::lookup("driver x not in standings"));
    assert_eq!(simulation_error_text(&lookup), INVALID_DRIVER);

    let invalid = DashboardError::from(EngineError::validation("leader.points", "missing"));
    assert_eq!(simulation_error_text(&invalid), SIMULATION_ERROR);
  }

  #[test]
  fn chosen_next_race_always_counts_down() {
    let races = vec![race("Today", "2024-10-01"), race("Tomorrow", "2024-10-02")];
    let now = "2024-10-01T23:59:59Z".parse().unwrap();
    let next = next_race(&races, now);
    assert_eq!(next.unwrap().race_name, "Tomorrow");
    let html = render::next_race(next, now);
    assert!(html.contains("<span id=\"seconds\">1</span>"));
    assert!(!html.contains("Race has started!"));
  }
}
