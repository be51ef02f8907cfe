//! Request and response models for the CRC backend.

use serde::Serialize;

/// Fixed message returned when the request carries no usable payload.
pub const MISSING_PAYLOAD_MESSAGE: &str = "No payload included in query string parameters!";

/// Query key carrying the text to checksum.
pub const PAYLOAD_PARAM: &str = "payload";

/// Checksum query parameters
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CrcQuery {
    /// Text to checksum
    pub payload: Option<String>,
}

impl CrcQuery {
    /// Pick `payload` out of decoded query pairs; a repeated key keeps its last value
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let payload = pairs
            .into_iter()
            .rev()
            .find_map(|(key, value)| (key == PAYLOAD_PARAM).then_some(value));
        Self { payload }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn payload_absent() {
        assert_eq!(CrcQuery::from_pairs(Vec::new()).payload, None);
        assert_eq!(CrcQuery::from_pairs(pairs(&[("data", "x")])).payload, None);
    }

    #[test]
    fn payload_last_value_wins() {
        let query = CrcQuery::from_pairs(pairs(&[("payload", "a"), ("x", "1"), ("payload", "b")]));
        assert_eq!(query.payload.as_deref(), Some("b"));
    }

    #[test]
    fn payload_empty_is_kept_as_empty() {
        let query = CrcQuery::from_pairs(pairs(&[("payload", "")]));
        assert_eq!(query.payload.as_deref(), Some(""));
    }
}
