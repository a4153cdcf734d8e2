//! Caller-side selection: pick the leader and the chosen driver out of the
//! standings, parse their points, and keep only the rounds still to come.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::EngineError;
use crate::types::*;

/// Build validated calculator inputs from raw standings and schedule.
pub fn build_request(
  standings: &[StandingEntry],
  schedule: &[ScheduledRace],
  driver_id: &str,
  now: DateTime<Utc>,
) -> Result<ScenarioRequest, EngineError> {
  let driver_id = driver_id.trim();
  if driver_id.is_empty() {
    return Err(EngineError::validation("driver_id", "must be non-empty"));
  }

  let leader = find_leader(standings)?;
  let selected = standings
    .iter()
    .find(|s| s.driver.driver_id == driver_id)
    .ok_or_else(|| EngineError::lookup(format!("driver {} not in standings", driver_id)))?;

  Ok(ScenarioRequest {
    selected: to_driver(selected, "selected.points")?,
    leader: to_driver(leader, "leader.points")?,
    remaining_events: remaining_events(schedule, now)?,
  })
}

/// The standings entry in position "1".
pub fn find_leader(standings: &[StandingEntry]) -> Result<&StandingEntry, EngineError> {
  standings
    .iter()
    .find(|s| s.position.as_deref().map(str::trim) == Some("1"))
    .ok_or_else(|| EngineError::lookup("no championship leader in standings"))
}

fn to_driver(entry: &StandingEntry, field: &str) -> Result<Driver, EngineError> {
  Ok(Driver {
    driver_id: entry.driver.driver_id.clone(),
    given_name: entry.driver.given_name.clone(),
    family_name: entry.driver.family_name.clone(),
    points: parse_points(entry.points.as_deref(), field)?,
  })
}

/// Parse a points string. Missing, non-numeric or negative values are errors.
pub fn parse_points(raw: Option<&str>, field: &str) -> Result<f64, EngineError> {
  let raw = raw
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .ok_or_else(|| EngineError::validation(field, "missing"))?;
  let points: f64 = raw
    .parse()
    .map_err(|_| EngineError::validation(field, &format!("not a number: {:?}", raw)))?;
  if !points.is_finite() || points < 0.0 {
    return Err(EngineError::validation(field, &format!("out of range: {}", raw)));
  }
  Ok(points)
}

/// The calendar day of a round.
pub fn race_day(race: &ScheduledRace) -> Result<NaiveDate, EngineError> {
  NaiveDate::parse_from_str(race.date.trim(), "%Y-%m-%d").map_err(|_| {
    EngineError::validation(
      "schedule.date",
      &format!("{}: invalid date {:?}", race.race_name, race.date),
    )
  })
}

/// A bare date counts as midnight UTC, so a round is "upcoming" only until
/// its day begins.
pub fn is_upcoming(day: NaiveDate, now: DateTime<Utc>) -> bool {
  day.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc() > now).unwrap_or(false)
}

/// Rounds strictly after `now`, in schedule order.
pub fn remaining_events(
  schedule: &[ScheduledRace],
  now: DateTime<Utc>,
) -> Result<Vec<RemainingEvent>, EngineError> {
  let mut events = Vec::new();
  for race in schedule {
    let date = race_day(race)?;
    if is_upcoming(date, now) {
      events.push(RemainingEvent {
        date,
        is_sprint: race.has_sprint(),
      });
    }
  }
  Ok(events)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn entry(id: &str, position: &str, points: Option<&str>) -> StandingEntry {
    StandingEntry {
      position: Some(position.into()),
      points: points.map(Into::into),
      wins: None,
      driver: DriverInfo {
        driver_id: id.into(),
        given_name: "Given".into(),
        family_name: id.into(),
        nationality: None,
      },
      constructors: Vec::new(),
    }
  }

  fn race(date: &str, sprint: bool) -> ScheduledRace {
    ScheduledRace {
      round: None,
      race_name: "Test Grand Prix".into(),
      circuit: CircuitInfo {
        circuit_id: None,
        circuit_name: "Test Circuit".into(),
        location: None,
      },
      date: date.into(),
      time: Some("14:00:00Z".into()),
      sprint: sprint.then(|| SessionTime {
        date: date.into(),
        time: None,
      }),
    }
  }

  fn now() -> DateTime<Utc> {
    "2024-10-01T12:00:00Z".parse().unwrap()
  }

  #[test]
  fn parse_points_accepts_decimals() {
    assert_eq!(parse_points(Some("393"), "p").unwrap(), 393.0);
    assert_eq!(parse_points(Some(" 12.5 "), "p").unwrap(), 12.5);
  }

  #[test]
  fn parse_points_rejects_garbage() {
    let err = parse_points(Some("lots"), "selected.points").unwrap_err();
    assert!(err.to_string().contains("selected.points"));
    assert!(parse_points(None, "p").is_err());
    assert!(parse_points(Some(""), "p").is_err());
    assert!(parse_points(Some("-4"), "p").is_err());
    assert!(parse_points(Some("NaN"), "p").is_err());
  }

  #[test]
  fn remaining_events_keeps_future_rounds_only() {
    let schedule = vec![
      race("2024-09-22", false),
      race("2024-10-01", false),
      race("2024-10-20", true),
      race("2024-11-03", false),
    ];
    let events = remaining_events(&schedule, now()).unwrap();
    assert_eq!(events.len(), 2);
    assert!(events[0].is_sprint);
    assert!(!events[1].is_sprint);
  }

  #[test]
  fn bad_schedule_date_is_validation_error() {
    let err = remaining_events(&[race("soon", false)], now()).unwrap_err();
    assert!(err.to_string().contains("schedule.date"));
  }

  #[test]
  fn build_request_picks_leader_by_position() {
    let standings = vec![
      entry("norris", "2", Some("279")),
      entry("max_verstappen", "1", Some("393")),
    ];
    let req = build_request(&standings, &[race("2024-11-03", false)], "norris", now()).unwrap();
    assert_eq!(req.leader.driver_id, "max_verstappen");
    assert_eq!(req.leader.points, 393.0);
    assert_eq!(req.selected.points, 279.0);
    assert_eq!(req.remaining_events.len(), 1);
  }

  #[test]
  fn unknown_driver_is_lookup_error() {
    let standings = vec![entry("max_verstappen", "1", Some("393"))];
    let err = build_request(&standings, &[], "nobody", now()).unwrap_err();
    assert!(err.is_lookup());
  }

  #[test]
  fn missing_leader_is_lookup_error() {
    let standings = vec![entry("norris", "2", Some("279"))];
    let err = build_request(&standings, &[], "norris", now()).unwrap_err();
    assert!(err.is_lookup());
  }

  #[test]
  fn missing_points_names_the_field() {
    let standings = vec![
      entry("max_verstappen", "1", Some("393")),
      entry("norris", "2", None),
    ];
    let err = build_request(&standings, &[], "norris", now()).unwrap_err();
    assert!(matches!(err, EngineError::Validation { ref field, .. } if field == "selected.points"));
  }
}
