//! Record emission.
//!
//! # Responsibilities
//! - Serialize each record to one newline-terminated JSON line
//! - Write the full line in a single call under a lock
//! - Swallow serialization and write failures (emission is best-effort)

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::capture::record::CaptureRecord;

/// Shared handle to the record output stream.
///
/// Cloned into every handler invocation; the internal mutex plus the single
/// write call per record keeps concurrent log lines from interleaving.
#[derive(Clone)]
pub struct RecordSink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl RecordSink {
    /// Create a sink over an arbitrary writer.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Create a sink over the process's standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    /// Serialize and write one record.
    ///
    /// Failures are swallowed: no line is produced for the record, and the
    /// caller's response path is never affected.
    pub fn emit(&self, record: &CaptureRecord) {
        let mut line = match serde_json::to_string(record) {
            Ok(line) => line,
            Err(_) => return,
        };
        line.push('\n');

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(line.as_bytes());
            let _ = writer.flush();
        }
    }
}

impl Default for RecordSink {
    fn default() -> Self {
        Self::stdout()
    }
}
