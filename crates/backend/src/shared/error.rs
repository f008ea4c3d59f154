use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api::ErrorResponse;
use thiserror::Error;

/// Errors of the dashboard core and its HTTP surface
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Sales history is empty")]
    EmptySeries,

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Upload rejected: {0}")]
    Upload(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Upload(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::EmptySeries | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn summary(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Invalid product data",
            AppError::NotFound(_) => "Product not found",
            AppError::EmptySeries => "Sales history is empty",
            AppError::NotImplemented(_) => "Not implemented",
            AppError::Upload(_) => "Upload rejected",
            AppError::Io(_) => "Internal server error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        let details = match &self {
            AppError::Validation(msg)
            | AppError::NotFound(msg)
            | AppError::NotImplemented(msg)
            | AppError::Upload(msg) => Some(msg.clone()),
            // internal details stay in the log
            AppError::EmptySeries | AppError::Io(_) => None,
        };

        let body = ErrorResponse {
            error: self.summary().to_string(),
            details,
        };
        (status, Json(body)).into_response()
    }
}
