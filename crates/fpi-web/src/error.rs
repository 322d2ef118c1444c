//! Error handling for the web layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::render::RenderError;
use crate::urls::NoReverseMatch;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// The requested record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request could not be understood.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The record store failed.
    #[error("storage error: {0}")]
    Storage(String),

    /// A page could not be rendered.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// A redirect or form action could not be built.
    #[error("routing error: {0}")]
    Routing(#[from] NoReverseMatch),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error flag.
    pub error: bool,
    /// Error code.
    pub code: String,
    /// Error message.
    pub message: String,
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
            AppError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, "RENDER_ERROR"),
            AppError::Routing(_) => (StatusCode::INTERNAL_SERVER_ERROR, "ROUTING_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: true,
            code: code.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<fpi_core::Error> for AppError {
    fn from(err: fpi_core::Error) -> Self {
        if err.is_not_found() {
            AppError::NotFound(err.to_string())
        } else {
            AppError::Storage(err.to_string())
        }
    }
}

/// Result alias for handlers and views.
pub type Result<T> = std::result::Result<T, AppError>;
