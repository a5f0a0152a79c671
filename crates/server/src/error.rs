use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lookup::LookupError;
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Lookup error: {0}")]
    Lookup(#[from] lookup::LookupError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] lookup::DatasetError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Not found")]
    NotFound,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            // A lookup miss is a normal outcome, distinct from any fault.
            ServerError::Lookup(LookupError::NotFound) => StatusCode::NOT_FOUND,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Lookup(_) | ServerError::Dataset(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Internal(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::Lookup(LookupError::NotFound) => "NOT_FOUND",
            ServerError::NotFound => "NOT_FOUND",
            ServerError::Lookup(_) => "LOOKUP_ERROR",
            ServerError::Dataset(_) => "DATASET_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code().to_string();
        let message = self.to_string();

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Config(format!("Invalid address: {err}"))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}
