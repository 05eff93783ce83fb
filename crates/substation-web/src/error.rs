use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use substation_core::QueryError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WebError>;

#[derive(Debug, Error)]
pub enum WebError {
    /// The collection a request needs is not loaded
    #[error("{0}")]
    Unavailable(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Error serializing response: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WebError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Serialization(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryError> for WebError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::InvalidQuery => Self::BadRequest(err.to_string()),
        }
    }
}

impl From<QueryRejection> for WebError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(%status, "{self}");
        } else {
            tracing::debug!(%status, "{self}");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
