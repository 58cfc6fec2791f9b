//! Shared utilities for integration testing.

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use request_sink::{HttpServer, RecordSink};

/// Cloneable in-memory writer capturing everything a sink emits.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, as one string.
    #[allow(dead_code)]
    pub fn contents(&self) -> String {
        String::from_utf8(self.inner.lock().unwrap().clone()).unwrap()
    }

    /// Everything emitted so far, split into lines.
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8(self.inner.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(|line| line.to_string())
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Start a capture server on an ephemeral local port.
///
/// Returns the base URL and the buffer receiving its records. The fixed
/// production port never matters here since `run` takes the listener.
pub async fn spawn_server() -> (String, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let server = HttpServer::with_sink(RecordSink::new(buffer.clone()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    (format!("http://{}", addr), buffer)
}
