//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Key of the single entry in a not-found response body.
pub const NOT_FOUND_KEY: &str = "Error occurred";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Student with id {0} wasn't found")]
    NotFound(i64),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Renders an error as the response the client sees.
///
/// A missing student becomes a 404 whose body maps [`NOT_FOUND_KEY`] to the
/// error message. Everything else is a 500 with the generic error envelope.
pub fn translate(err: AppError) -> Response {
    let code = match &err {
        AppError::NotFound(id) => {
            tracing::debug!(id = *id, "student not found");
            let body: HashMap<&str, String> = HashMap::from([(NOT_FOUND_KEY, err.to_string())]);
            return (StatusCode::NOT_FOUND, Json(body)).into_response();
        }
        AppError::Config(_) => "config_error",
        AppError::Db(_) => "database_error",
    };
    tracing::error!(error = %err, "request failed");
    let body = ErrorBody {
        error: ErrorDetail {
            code: code.to_string(),
            message: err.to_string(),
        },
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        translate(self)
    }
}
