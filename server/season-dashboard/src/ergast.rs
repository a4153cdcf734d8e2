//! Ergast-compatible season data client.

use std::time::Duration;

use scenario_engine::{ScheduledRace, StandingEntry};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::DashboardError;
use crate::types::*;

#[derive(Debug, Clone)]
pub struct ErgastClient {
  client: reqwest::Client,
  base_url: String,
  season: String,
}

impl ErgastClient {
  pub fn new(config: &Config) -> Result<Self, DashboardError> {
    let client = reqwest::Client::builder()
      .user_agent("paddock-dashboard/0.1")
      .timeout(Duration::from_secs(config.request_timeout_secs))
      .build()?;
    Ok(Self {
      client,
      base_url: config.api_base_url.clone(),
      season: config.season.clone(),
    })
  }

  pub fn season(&self) -> &str {
    &self.season
  }

  /// GET `{base_url}{endpoint}` and decode JSON. Non-2xx is an error.
  pub async fn fetch_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, DashboardError> {
    let url = format!("{}{}", self.base_url, endpoint);
    tracing::debug!(%url, "fetching");

    let resp = self.client.get(&url).send().await?;
    if !resp.status().is_success() {
      return Err(DashboardError::Status {
        endpoint: endpoint.to_string(),
        status: resp.status().as_u16(),
      });
    }
    Ok(resp.json::<T>().await?)
  }

  /// Every round of the configured season, in order.
  pub async fn schedule(&self) -> Result<Vec<ScheduledRace>, DashboardError> {
    let endpoint = format!("{}.json", self.season);
    let resp: ScheduleResponse = self.fetch_json(&endpoint).await?;
    Ok(resp.data.race_table.races)
  }

  pub async fn last_results(&self) -> Result<RaceResults, DashboardError> {
    let endpoint = format!("{}/last/results.json", self.season);
    let resp: ResultsResponse = self.fetch_json(&endpoint).await?;
    resp
      .data
      .race_table
      .races
      .into_iter()
      .next()
      .ok_or_else(|| DashboardError::missing(format!("{}: no race", endpoint)))
  }

  pub async fn driver_standings(&self) -> Result<Vec<StandingEntry>, DashboardError> {
    let endpoint = format!("{}/driverStandings.json", self.season);
    let list = self.first_standings_list(&endpoint).await?;
    Ok(list.drivers)
  }

  pub async fn constructor_standings(&self) -> Result<Vec<ConstructorStanding>, DashboardError> {
    let endpoint = format!("{}/constructorStandings.json", self.season);
    let list = self.first_standings_list(&endpoint).await?;
    Ok(list.constructors)
  }

  async fn first_standings_list(&self, endpoint: &str) -> Result<StandingsList, DashboardError> {
    let resp: StandingsResponse = self.fetch_json(endpoint).await?;
    resp
      .data
      .standings_table
      .lists
      .into_iter()
      .next()
      .ok_or_else(|| DashboardError::missing(format!("{}: no standings list", endpoint)))
  }
}
