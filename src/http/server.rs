//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the Axum Router with the catch-all handler
//! - Bind serving to a caller-provided listener
//! - Read each request body, best-effort, and emit one capture record
//! - Answer every request with an empty 200

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::IntoResponse,
    routing::any,
    Router,
};
use futures_util::StreamExt;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::capture::record::{BodyData, CaptureRecord};
use crate::capture::sink::RecordSink;

/// TCP port the server listens on. There is no configuration surface.
pub const PORT: u16 = 8888;

/// Error type for server operations.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Failed to bind to the listen address.
    #[error("Failed to bind: {0}")]
    Bind(#[source] std::io::Error),

    /// The serve loop failed.
    #[error("Failed to serve: {0}")]
    Serve(#[source] std::io::Error),
}

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub sink: RecordSink,
}

/// HTTP server for the capture tool.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server that emits records on standard output.
    pub fn new() -> Self {
        Self::with_sink(RecordSink::stdout())
    }

    /// Create a server that emits records into the given sink.
    pub fn with_sink(sink: RecordSink) -> Self {
        let state = AppState { sink };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router. Every method on every path reaches the same
    /// handler.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(capture_handler))
            .route("/", any(capture_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns only on a serve failure; there is no shutdown path.
    pub async fn run(self, listener: TcpListener) -> Result<(), ServerError> {
        axum::serve(listener, self.router)
            .await
            .map_err(ServerError::Serve)
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Catch-all handler.
/// Captures method, URL, and body into one record, then answers 200.
async fn capture_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> impl IntoResponse {
    let method = request.method().to_string();
    let url = request.uri().to_string();

    let body = read_body(request.into_body()).await;

    let record = CaptureRecord {
        method,
        url,
        data: BodyData::decode(&body),
    };
    state.sink.emit(&record);

    // The response is fixed; nothing on the capture path can alter it.
    StatusCode::OK
}

/// Accumulate the request body.
///
/// A mid-body transport error is reported on the diagnostic stream and the
/// bytes read so far are kept; the request still gets its 200.
async fn read_body(body: Body) -> Vec<u8> {
    let mut bytes = Vec::new();
    let mut stream = body.into_data_stream();

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(data) => bytes.extend_from_slice(&data),
            Err(e) => {
                tracing::error!(error = %e, "Error while reading request body");
                break;
            }
        }
    }

    bytes
}
