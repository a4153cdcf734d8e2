//! Shared application state.

use crate::config::Config;
use crate::ergast::ErgastClient;
use crate::error::DashboardError;

pub struct AppState {
  pub config: Config,
  pub ergast: ErgastClient,
}

impl AppState {
  pub fn new(config: Config) -> Result<Self, DashboardError> {
    let ergast = ErgastClient::new(&config)?;
    Ok(Self { config, ergast })
  }
}
