//! Diagnostic HTTP Capture Server Library

pub mod capture;
pub mod http;

pub use capture::record::{BodyData, CaptureRecord};
pub use capture::sink::RecordSink;
pub use http::server::{ServerError, PORT};
pub use http::HttpServer;
