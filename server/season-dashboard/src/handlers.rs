//! HTTP handlers for the dashboard service.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use chrono::Utc;
use scenario_engine::{EngineError, Simulation};
use serde::Deserialize;
use std::sync::Arc;

use crate::dashboard;
use crate::error::DashboardError;
use crate::render;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SimulateParams {
  #[serde(default)]
  pub driver: Option<String>,
}

impl SimulateParams {
  fn driver_id(&self) -> Option<&str> {
    self.driver.as_deref().map(str::trim).filter(|s| !s.is_empty())
  }
}

pub async fn health() -> &'static str {
  "ok"
}

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
  Html(dashboard::dashboard_page(&state.ergast, Utc::now()).await)
}

pub async fn calendar(State(state): State<Arc<AppState>>) -> Html<String> {
  Html(dashboard::calendar_page(&state.ergast).await)
}

pub async fn simulate(
  State(state): State<Arc<AppState>>,
  Query(params): Query<SimulateParams>,
) -> (StatusCode, Html<String>) {
  let driver_id = match params.driver_id() {
    Some(id) => id,
    None => {
      let body = render::simulation_result(dashboard::INVALID_DRIVER);
      return (StatusCode::BAD_REQUEST, Html(render::page("Simulation", &body)));
    }
  };

  let (status, message) = match dashboard::run_simulation(&state.ergast, driver_id, Utc::now()).await {
    Ok(sim) => (StatusCode::OK, sim.message),
    Err(e) => {
      tracing::warn!(driver_id, error = %e, "simulation failed");
      (e.status_code(), dashboard::simulation_error_text(&e).to_string())
    }
  };
  let body = render::simulation_result(&message);
  (status, Html(render::page("Simulation", &body)))
}

pub async fn api_simulate(
  State(state): State<Arc<AppState>>,
  Query(params): Query<SimulateParams>,
) -> Result<Json<Simulation>, DashboardError> {
  let driver_id = params
    .driver_id()
    .ok_or_else(|| EngineError::validation("driver", "query parameter required"))?;
  let sim = dashboard::run_simulation(&state.ergast, driver_id, Utc::now()).await?;
  Ok(Json(sim))
}
