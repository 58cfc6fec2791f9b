//! Request capture subsystem.
//!
//! # Data Flow
//! ```text
//! Handled request
//!     → record.rs (method, URL, best-effort decoded body)
//!     → sink.rs (one JSON line per record on stdout)
//! ```
//!
//! # Design Decisions
//! - The body is decoded as JSON when it parses, kept as text otherwise
//! - One write call per record, so concurrent handlers never interleave
//! - Emission is best-effort and never surfaces a failure to the client

pub mod record;
pub mod sink;
