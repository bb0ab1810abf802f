//! API error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use views::{LoginError, ParseError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A query-string value outside its vocabulary.
    #[error(transparent)]
    BadRequest(#[from] ParseError),
    #[error(transparent)]
    Login(#[from] LoginError),
    #[error("authentication required")]
    Unauthenticated,
    #[error("not permitted for this account")]
    Forbidden,
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

pub(crate) fn api_error_to_status(err: &ApiError) -> StatusCode {
    match err {
        ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        ApiError::Login(_) | ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
        ApiError::Forbidden => StatusCode::FORBIDDEN,
        ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = api_error_to_status(&self);
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
