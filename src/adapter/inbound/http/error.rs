use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::domain::error::CalculationError;

/// Error responses for the compensation endpoint.
///
/// The body carries only the user-facing message; the status tells input
/// problems (422) apart from lookup failures (502).
#[derive(Debug)]
pub struct ApiError(pub CalculationError);

impl From<CalculationError> for ApiError {
    fn from(e: CalculationError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            CalculationError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CalculationError::Fetch(_) => StatusCode::BAD_GATEWAY,
        };

        let body = json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
