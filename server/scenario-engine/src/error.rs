//! Structured error types for the scenario engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  #[error("lookup: {0}")]
  Lookup(String),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl EngineError {
  pub fn validation(field: &str, reason: &str) -> Self {
    Self::Validation {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn lookup(msg: impl Into<String>) -> Self {
    Self::Lookup(msg.into())
  }

  /// Lookup failures are shown to the user as "invalid driver data".
  pub fn is_lookup(&self) -> bool {
    matches!(self, Self::Lookup(_))
  }
}
