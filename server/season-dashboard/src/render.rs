//! HTML rendering for the dashboard, calendar and simulation pages.
//!
//! Every piece of upstream text goes through `escape`.

use chrono::{DateTime, Utc};
use scenario_engine::{ScheduledRace, StandingEntry};

use crate::assets;
use crate::countdown::Countdown;
use crate::date;
use crate::types::{ConstructorStanding, RaceResults};

pub const TOP_N: usize = 10;

pub fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(ch),
    }
  }
  out
}

pub fn page(title: &str, body: &str) -> String {
  format!(
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav><a href="/">Dashboard</a> | <a href="/calendar">Calendar</a></nav>
{body}
</body>
</html>
"#,
    title = escape(title),
    body = body
  )
}

fn table(class: &str, header: &str, columns: &[&str], rows: &str) -> String {
  let ths: String = columns.iter().map(|c| format!("<th>{}</th>", c)).collect();
  format!(
    "<section class=\"{class}\">\n{header}<table>\n<thead><tr>{ths}</tr></thead>\n<tbody>\n{rows}</tbody>\n</table>\n</section>\n"
  )
}

fn error_row(message: &str, colspan: &str) -> String {
  format!("<tr><td colspan=\"{}\">{}</td></tr>\n", colspan, escape(message))
}

// ---------------------------------------------------------------------------
// Next race
// ---------------------------------------------------------------------------

/// Next-race section with a countdown to `<date>T<time>`.
///
/// `dashboard::next_race` only picks rounds whose day has not begun, so from
/// the dashboard the countdown is always running. "Race has started!" shows
/// when a caller passes a round that is already under way.
pub fn next_race(race: Option<&ScheduledRace>, now: DateTime<Utc>) -> String {
  let race = match race {
    Some(r) => r,
    None => return next_race_message("No upcoming races."),
  };
  let circuit = &race.circuit.circuit_name;
  let countdown = match date::race_start(&race.date, race.time.as_deref()) {
    Some(start) => countdown(Countdown::until(start, now)),
    None => String::new(),
  };
  format!(
    "<section class=\"next-race\">\n<h2>Next Race: {name}</h2>\n<p>{circuit} | {date}</p>\n<img id=\"track-image\" src=\"{src}\" alt=\"{circuit} Track\">\n{countdown}</section>\n",
    name = escape(&race.race_name),
    circuit = escape(circuit),
    date = escape(&race.date),
    src = escape(&assets::track_url(circuit)),
    countdown = countdown,
  )
}

pub fn next_race_message(message: &str) -> String {
  format!(
    "<section class=\"next-race\">\n<h2>{}</h2>\n</section>\n",
    escape(message)
  )
}

fn countdown(remaining: Option<Countdown>) -> String {
  match remaining {
    None => "<div class=\"countdown\">Race has started!</div>\n".to_string(),
    Some(c) => format!(
      "<div class=\"countdown\"><span id=\"days\">{}</span>d <span id=\"hours\">{}</span>h <span id=\"minutes\">{}</span>m <span id=\"seconds\">{}</span>s</div>\n",
      c.days, c.hours, c.minutes, c.seconds
    ),
  }
}

// ---------------------------------------------------------------------------
// Last race
// ---------------------------------------------------------------------------

const LAST_RACE_COLUMNS: &[&str] = &["Pos", "Driver", "Constructor", "Laps", "Time", "Points"];

pub fn last_race(race: &RaceResults) -> String {
  let header = format!(
    "<h2>Last Race: {}</h2>\n<p>{} | {}</p>\n",
    escape(&race.race_name),
    escape(&race.circuit.circuit_name),
    escape(&race.date)
  );
  let rows: String = race
    .results
    .iter()
    .take(TOP_N)
    .enumerate()
    .map(|(i, r)| {
      format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        i + 1,
        escape(&r.driver.full_name()),
        escape(&r.constructor.name),
        escape(r.laps.as_deref().unwrap_or("")),
        escape(r.time.as_ref().map(|t| t.time.as_str()).unwrap_or("N/A")),
        escape(&r.points)
      )
    })
    .collect();
  table("last-race", &header, LAST_RACE_COLUMNS, &rows)
}

pub fn last_race_error(message: &str) -> String {
  table(
    "last-race",
    "<h2>Last Race</h2>\n",
    LAST_RACE_COLUMNS,
    &error_row(message, "100%"),
  )
}

// ---------------------------------------------------------------------------
// Standings
// ---------------------------------------------------------------------------

const DRIVER_COLUMNS: &[&str] = &["Pos", "Driver", "Constructor", "Points"];
const CONSTRUCTOR_COLUMNS: &[&str] = &["Pos", "Constructor", "Points", "Wins"];

pub fn driver_standings(entries: &[StandingEntry]) -> String {
  let rows: String = entries
    .iter()
    .take(TOP_N)
    .enumerate()
    .map(|(i, e)| {
      let team = e.constructors.first().map(|c| c.name.as_str()).unwrap_or("");
      format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        i + 1,
        escape(&e.driver.full_name()),
        escape(team),
        escape(e.points.as_deref().unwrap_or(""))
      )
    })
    .collect();
  table("driver-standings", "<h2>Driver Standings</h2>\n", DRIVER_COLUMNS, &rows)
}

pub fn driver_standings_error(message: &str) -> String {
  table(
    "driver-standings",
    "<h2>Driver Standings</h2>\n",
    DRIVER_COLUMNS,
    &error_row(message, "100%"),
  )
}

pub fn constructor_standings(entries: &[ConstructorStanding]) -> String {
  let rows: String = entries
    .iter()
    .enumerate()
    .map(|(i, e)| {
      format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        i + 1,
        escape(&e.constructor.name),
        escape(&e.points),
        escape(e.wins.as_deref().unwrap_or("0"))
      )
    })
    .collect();
  table("standings", "<h2>Constructor Standings</h2>\n", CONSTRUCTOR_COLUMNS, &rows)
}

pub fn constructor_standings_error(message: &str) -> String {
  table(
    "standings",
    "<h2>Constructor Standings</h2>\n",
    CONSTRUCTOR_COLUMNS,
    &error_row(message, "100%"),
  )
}

// ---------------------------------------------------------------------------
// Simulation
// ---------------------------------------------------------------------------

/// Driver picker; empty when standings could not be loaded.
pub fn simulation_form(entries: &[StandingEntry]) -> String {
  let options: String = entries
    .iter()
    .map(|e| {
      format!(
        "<option value=\"{}\">{}</option>\n",
        escape(&e.driver.driver_id),
        escape(&e.driver.full_name())
      )
    })
    .collect();
  format!(
    "<section class=\"simulation\">\n<h2>Championship Simulation</h2>\n<form action=\"/simulate\" method=\"get\">\n<select id=\"driver-select\" name=\"driver\">\n{}</select>\n<button id=\"simulate-btn\" type=\"submit\">Simulate</button>\n</form>\n</section>\n",
    options
  )
}

pub fn simulation_result(message: &str) -> String {
  format!(
    "<section class=\"simulation\">\n<h2>Championship Simulation</h2>\n<pre id=\"simulation-results\">{}</pre>\n<p><a href=\"/\">Back</a></p>\n</section>\n",
    escape(message)
  )
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

const CALENDAR_COLUMNS: &[&str] = &["Round", "Flag", "Race", "Circuit", "Date"];

pub fn calendar(season: &str, races: &[ScheduledRace]) -> String {
  let rows: String = races
    .iter()
    .enumerate()
    .map(|(i, race)| {
      let country = race
        .circuit
        .location
        .as_ref()
        .and_then(|l| l.country.as_deref())
        .unwrap_or("");
      format!(
        "<tr><td>{}</td><td><img src=\"{}\" alt=\"{} flag\" width=\"30\"></td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        i + 1,
        escape(&assets::flag_url(country)),
        escape(country),
        escape(&race.race_name),
        escape(&race.circuit.circuit_name),
        escape(&date::display_date(&race.date))
      )
    })
    .collect();
  calendar_table(season, &rows)
}

pub fn calendar_error(season: &str, message: &str) -> String {
  calendar_table(season, &error_row(message, "5"))
}

fn calendar_table(season: &str, rows: &str) -> String {
  let header = format!("<h2>Race Calendar {}</h2>\n", escape(season));
  table("calendar", &header, CALENDAR_COLUMNS, rows).replace("<tbody>", "<tbody id=\"calendar-body\">")
}
