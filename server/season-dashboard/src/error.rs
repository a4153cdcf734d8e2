//! Structured error types for the dashboard service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use scenario_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
  #[error("config: {0}")]
  Config(String),

  #[error("http: {0}")]
  Http(#[from] reqwest::Error),

  #[error("{endpoint}: upstream returned {status}")]
  Status { endpoint: String, status: u16 },

  #[error("missing data: {0}")]
  MissingData(String),

  #[error(transparent)]
  Scenario(#[from] EngineError),
}

impl DashboardError {
  pub fn config(msg: impl Into<String>) -> Self {
    Self::Config(msg.into())
  }

  pub fn missing(what: impl Into<String>) -> Self {
    Self::MissingData(what.into())
  }

  /// True for failures of the upstream data source.
  pub fn is_fetch(&self) -> bool {
    matches!(self, Self::Http(_) | Self::Status { .. } | Self::MissingData(_))
  }

  pub fn status_code(&self) -> StatusCode {
    match self {
      Self::Http(_) | Self::Status { .. } | Self::MissingData(_) => StatusCode::BAD_GATEWAY,
      Self::Scenario(e) if e.is_lookup() => StatusCode::NOT_FOUND,
      Self::Scenario(_) => StatusCode::UNPROCESSABLE_ENTITY,
      Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for DashboardError {
  fn into_response(self) -> Response {
    let body = Json(serde_json::json!({ "error": self.to_string() }));
    (self.status_code(), body).into_response()
  }
}
