//! Binary entrypoint for the season dashboard.

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use season_dashboard::{build_app, AppState, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = Config::from_env()?;
  let addr = config.socket_addr()?;
  tracing::info!(
    api = %config.api_base_url,
    season = %config.season,
    "season-dashboard starting"
  );

  let state = Arc::new(AppState::new(config)?);
  let app = build_app(state);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  tracing::info!(%addr, "listening");
  axum::serve(listener, app).await?;

  Ok(())
}
