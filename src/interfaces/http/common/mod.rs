//! Shared HTTP plumbing: the response envelope and error mapping.

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::errors::DomainError;

pub mod validated_json;

pub use validated_json::ValidatedJson;

/// Standard API response envelope.
///
/// Every REST endpoint wraps its payload in this envelope.
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload. `null` on failure
    pub data: Option<T>,
    /// Error description. Omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Maps a [`DomainError`] onto the status/envelope tuple handlers return.
///
/// Storage failures keep their detail in the log and hand the client a
/// generic message; every other variant is safe to show as-is.
pub fn error_response(err: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let (status, message) = match err {
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        DomainError::Validation(_) | DomainError::Conflict(_) | DomainError::InvalidState(_) => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        DomainError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, err.to_string()),
        DomainError::Store(detail) => {
            tracing::error!(%detail, "Storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };
    (status, Json(ApiResponse::error(message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::success(42)).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], 42);
        assert!(body.get("error").is_none());
    }

    #[test]
    fn test_error_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::<()>::error("boom")).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "boom");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let (status, Json(body)) =
            error_response(DomainError::not_found("Slot", "slot_number", "A1"));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body.error.as_deref(),
            Some("Not found: Slot with slot_number=A1")
        );
    }

    #[test]
    fn test_conflict_and_invalid_state_map_to_400() {
        let (status, _) = error_response(DomainError::Conflict("Slot A1 already exists".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, Json(body)) =
            error_response(DomainError::InvalidState("Slot is not available".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.as_deref(), Some("Slot is not available"));
    }

    #[test]
    fn test_store_error_is_masked() {
        let (status, Json(body)) =
            error_response(DomainError::Store("connection reset by peer".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.as_deref(), Some("Internal server error"));
    }
}
