//! Race date parsing and display.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Race start in UTC from Ergast's separate date ("2024-11-03") and time
/// ("17:00:00Z") fields. A missing time means midnight.
pub fn race_start(date: &str, time: Option<&str>) -> Option<DateTime<Utc>> {
  let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
  let clock = match time.map(str::trim).filter(|t| !t.is_empty()) {
    Some(t) => NaiveTime::parse_from_str(t.trim_end_matches('Z'), "%H:%M:%S").ok()?,
    None => NaiveTime::MIN,
  };
  Some(day.and_time(clock).and_utc())
}

/// "2024-11-03" -> "3 Nov 2024"; unparseable dates pass through.
pub fn display_date(date: &str) -> String {
  match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
    Ok(d) => d.format("%-d %b %Y").to_string(),
    Err(_) => date.to_string(),
  }
}
