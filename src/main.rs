//! Diagnostic HTTP Capture Server
//!
//! A test double that records what an HTTP client actually sent. Every
//! request on every path produces one JSON record on standard output,
//! `{"method": ..., "url": ..., "data": ...}`, and an empty 200 response.
//! Diagnostics go to stderr; stdout carries only the records.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use request_sink::{HttpServer, ServerError, PORT};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber on stderr, keeping stdout for records
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let listener = TcpListener::bind(("0.0.0.0", PORT))
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!("Starting the server on port {}", PORT);

    let server = HttpServer::new();
    server.run(listener).await?;

    Ok(())
}
