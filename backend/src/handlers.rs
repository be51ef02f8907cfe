//! HTTP request handlers for the CRC backend API.
//!
//! All handlers follow the contract:
//! - Stateless: every request is computed from its own query string
//! - Minimal logging (payload length only, never the payload)

use crate::models::*;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use ccitt_core::CrcParams;
use tracing::debug;

/// Application state shared across handlers
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Register parameters used for every request
    pub params: CrcParams,
}

impl AppState {
    /// Create state with the default register parameters
    pub fn new() -> Self {
        Self {
            params: CrcParams::default(),
        }
    }
}

// === Health Check ===

/// GET /health - Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

// === Checksum ===

/// GET /crc - Compute the CRC-CCITT checksum of `payload`
///
/// Responds with the bare 4-digit uppercase hex checksum as `text/plain`.
/// A missing or empty `payload` is a 400. When the key is repeated, the
/// last value is used.
pub async fn checksum(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, ApiError> {
    let payload = match CrcQuery::from_pairs(pairs).payload {
        Some(payload) if !payload.is_empty() => payload,
        _ => {
            debug!("Request without payload");
            return Err(ApiError::MissingPayload);
        }
    };

    let crc = ccitt_core::calculate_crc_with(&payload, state.params);
    debug!(payload_len = payload.len(), crc = %crc, "Checksum computed");

    Ok(crc)
}

// === Error Handling ===

/// API error types
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no payload included in query string parameters")]
    MissingPayload,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::MissingPayload => (StatusCode::BAD_REQUEST, MISSING_PAYLOAD_MESSAGE),
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn missing_payload_is_bad_request_with_fixed_message() {
        let response = ApiError::MissingPayload.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["message"], MISSING_PAYLOAD_MESSAGE);
    }

    #[tokio::test]
    async fn checksum_uses_state_params() {
        let state = AppState::new();
        let query = Query(vec![("payload".to_string(), "123456789".to_string())]);
        let crc = checksum(State(state), query).await.unwrap();
        assert_eq!(crc, "29B1");
    }

    #[tokio::test]
    async fn checksum_rejects_empty_payload() {
        let query = Query(vec![("payload".to_string(), String::new())]);
        let result = checksum(State(AppState::new()), query).await;
        assert!(matches!(result, Err(ApiError::MissingPayload)));
    }

    #[tokio::test]
    async fn checksum_repeated_payload_uses_last_value() {
        let query = Query(vec![
            ("payload".to_string(), "ignored".to_string()),
            ("payload".to_string(), "ABC".to_string()),
        ]);
        let crc = checksum(State(AppState::new()), query).await.unwrap();
        assert_eq!(crc, "F508");
    }
}
