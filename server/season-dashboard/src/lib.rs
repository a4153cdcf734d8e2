//! Paddock Season Dashboard
//!
//! HTTP service that renders the current F1 season (next race with countdown,
//! last race results, driver and constructor standings, race calendar) and
//! runs the championship simulation through scenario-engine.

pub mod assets;
pub mod config;
pub mod countdown;
pub mod dashboard;
pub mod date;
pub mod ergast;
pub mod error;
pub mod handlers;
pub mod render;
pub mod state;
pub mod types;

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::DashboardError;
pub use state::AppState;

pub fn build_app(state: Arc<AppState>) -> Router {
  let assets = ServeDir::new(&state.config.asset_dir);
  Router::new()
    .route("/", get(handlers::index))
    .route("/calendar", get(handlers::calendar))
    .route("/simulate", get(handlers::simulate))
    .route("/api/simulate", get(handlers::api_simulate))
    .route("/health", get(handlers::health))
    .nest_service("/assets", assets)
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}
