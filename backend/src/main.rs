//! CCITT Backend - CRC-CCITT checksum over HTTP
//!
//! Serves `GET /crc?payload=...`, answering with the 4-digit uppercase hex
//! CRC-CCITT (poly 0x1021, init 0xFFFF) of the payload.

use ccitt_backend::{build_router, AppState, Config};
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize structured logging
    init_tracing();

    let config = Config::from_env();
    log_startup_info(&config);

    let app = build_router(AppState::new());
    serve(app, &config).await
}

/// Initialize tracing with environment-based log levels.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ccitt_backend=debug,tower_http=info")),
        )
        .init();
}

/// Log startup configuration.
fn log_startup_info(config: &Config) {
    info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        polynomial = %ccitt_core::to_hex(ccitt_core::DEFAULT_POLYNOMIAL),
        initial_value = %ccitt_core::to_hex(ccitt_core::DEFAULT_INITIAL_VALUE),
        "Starting CRC backend"
    );
}

/// Bind to address and serve the application.
async fn serve(app: axum::Router, config: &Config) -> std::io::Result<()> {
    let bind_addr = config.socket_addr();

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!(addr = %bind_addr, "Server listening");

    axum::serve(listener, app).await
}
