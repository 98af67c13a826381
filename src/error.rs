use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid JSON payload")]
    InvalidJson,

    #[error("Payload must include job + worker")]
    MissingJobOrWorker,

    #[error("Invalid function key")]
    InvalidFunctionKey,

    #[error("internal error: {0}")]
    Internal(String),
}

// Callers get the error text verbatim as a plain-text body, so the display
// strings above double as the wire contract.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidJson | AppError::MissingJobOrWorker => StatusCode::BAD_REQUEST,
            AppError::InvalidFunctionKey => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
