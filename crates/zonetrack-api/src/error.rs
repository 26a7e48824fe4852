//! Error types for the HTTP layer.
//!
//! [`ApiError`] unifies every failure mode the boundary can surface and
//! converts into an Axum response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Response
//! bodies carry exactly one `"error"` key; the specific messages are part
//! of the wire contract and must not change.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors surfaced by the HTTP boundary.
///
/// Validation errors are detected before the core engine is invoked; the
/// core itself never fails on validated input.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required request field is absent (or empty, for `vehicle_id`).
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Latitude or longitude is outside its valid range.
    #[error("coordinates out of range")]
    InvalidCoordinates,

    /// The request body is not valid JSON or a field has the wrong type.
    #[error("invalid data format")]
    InvalidFormat,

    /// The requested vehicle has never reported a location.
    #[error("vehicle not found")]
    VehicleNotFound,

    /// Any unexpected internal fault. The detail is logged, never leaked.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingField(field) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required field: {field}"),
            ),
            Self::InvalidCoordinates => {
                (StatusCode::BAD_REQUEST, String::from("Invalid coordinates"))
            }
            Self::InvalidFormat => {
                (StatusCode::BAD_REQUEST, String::from("Invalid data format"))
            }
            Self::VehicleNotFound => (StatusCode::NOT_FOUND, String::from("Vehicle not found")),
            Self::Internal(detail) => {
                tracing::error!(detail = %detail, "unexpected internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("Internal server error"),
                )
            }
        };

        let body = serde_json::json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
