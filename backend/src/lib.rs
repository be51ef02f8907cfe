//! # CCITT Backend
//!
//! HTTP front for the CRC-CCITT checksum engine.
//!
//! ## Design Principles
//!
//! - **Stateless**: each request is answered from its query string alone
//! - **Fixed parameters**: polynomial `0x1021`, initial value `0xFFFF`
//! - **Raw output**: success bodies are the bare hex checksum, not JSON
//!
//! ## API Overview
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/health` | GET | Health check |
//! | `/crc?payload=...` | GET | Checksum of `payload` |
//! | `/.netlify/functions/crc?payload=...` | GET | Same, legacy path |

pub mod config;
pub mod handlers;
pub mod models;

pub use config::Config;
pub use handlers::AppState;

use axum::{http::Method, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

/// Maximum request body size (16 KiB).
pub const MAX_BODY_SIZE: usize = 16 * 1024;

/// Path the checksum function was served under before this server existed.
pub const LEGACY_CRC_PATH: &str = "/.netlify/functions/crc";

/// Build the Axum router with all endpoints and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/crc", get(handlers::checksum))
        .route(LEGACY_CRC_PATH, get(handlers::checksum))
        // Middleware stack (order matters: first added = outermost)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
