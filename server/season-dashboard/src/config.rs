//! Service configuration with sane defaults, overridable from the environment.

use std::net::{IpAddr, SocketAddr};

use crate::error::DashboardError;

#[derive(Debug, Clone)]
pub struct Config {
  /// Address the HTTP server binds to.
  pub bind_addr: String,
  pub port: u16,
  /// Ergast-compatible API root; always ends with '/'.
  pub api_base_url: String,
  /// "current" or a year such as "2024".
  pub season: String,
  pub request_timeout_secs: u64,
  /// Directory served under /assets (flags/, tracks/).
  pub asset_dir: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: "127.0.0.1".to_string(),
      port: 5005,
      api_base_url: "https://api.jolpi.ca/ergast/f1/".to_string(),
      season: "current".to_string(),
      request_timeout_secs: 10,
      asset_dir: "assets".to_string(),
    }
  }
}

impl Config {
  pub fn from_env() -> Result<Self, DashboardError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build from any key lookup; unset keys keep their defaults.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DashboardError> {
    let mut config = Self::default();

    if let Some(v) = lookup("BIND_ADDR") {
      config.bind_addr = v;
    }
    if let Some(v) = lookup("PORT") {
      config.port = v
        .trim()
        .parse()
        .map_err(|_| DashboardError::config(format!("PORT must be a valid u16, got {:?}", v)))?;
    }
    if let Some(v) = lookup("ERGAST_BASE_URL") {
      config.api_base_url = v;
    }
    if let Some(v) = lookup("SEASON") {
      config.season = v;
    }
    if let Some(v) = lookup("REQUEST_TIMEOUT_SECS") {
      config.request_timeout_secs = v.trim().parse().map_err(|_| {
        DashboardError::config(format!("REQUEST_TIMEOUT_SECS must be an integer, got {:?}", v))
      })?;
    }
    if let Some(v) = lookup("ASSET_DIR") {
      config.asset_dir = v;
    }

    config.normalize()?;
    Ok(config)
  }

  fn normalize(&mut self) -> Result<(), DashboardError> {
    self.api_base_url = self.api_base_url.trim().to_string();
    if self.api_base_url.is_empty() {
      return Err(DashboardError::config("ERGAST_BASE_URL must be non-empty"));
    }
    if !self.api_base_url.ends_with('/') {
      self.api_base_url.push('/');
    }
    self.season = self.season.trim().to_string();
    if self.season.is_empty() {
      return Err(DashboardError::config("SEASON must be non-empty"));
    }
    Ok(())
  }

  /// Accepts IPv4 and bare IPv6 addresses ("::1").
  pub fn socket_addr(&self) -> Result<SocketAddr, DashboardError> {
    let ip: IpAddr = self
      .bind_addr
      .trim()
      .parse()
      .map_err(|_| DashboardError::config(format!("invalid bind address {}", self.bind_addr)))?;
    Ok(SocketAddr::new(ip, self.port))
  }
}
