//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all handler)
//!     → capture subsystem (build record, emit one line)
//!     → Empty 200 to client
//! ```

pub mod server;

pub use server::HttpServer;
