use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
  #[error("Upstream fetch error: {0}")]
  FetchError(String),

  #[error("Upstream decode error: {0}")]
  DecodeError(String),

  #[error("Config error: {0}")]
  ConfigError(String),
}

impl From<reqwest::Error> for AppError {
  fn from(err: reqwest::Error) -> Self {
      Self::FetchError(err.to_string())
  }
}

impl From<serde_json::Error> for AppError {
  fn from(err: serde_json::Error) -> Self {
      Self::DecodeError(err.to_string())
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
      // The cause stays in the logs; clients only see the error kind.
      let (status, error_message) = match self {
          AppError::FetchError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "failed to fetch"),
          AppError::DecodeError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "invalid response"),
          AppError::ConfigError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "configuration error"),
      };

      let body = Json(json!({
          "error": error_message,
      }));

      (status, body).into_response()
  }
}
