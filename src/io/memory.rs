//! In-memory sink implementation for testing.

use std::io::{self, ErrorKind, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::NativeSink;
use super::sink::closed_error;

#[derive(Debug, Default)]
struct MemoryState {
    buf: Vec<u8>,
    closed: bool,
    close_calls: usize,
    fail_writes: Option<ErrorKind>,
}

/// In-memory sink for testing.
///
/// Clones share the same state, so a test can hand one handle to an adapter
/// and keep another as a side channel to observe (or write to) the resource.
#[derive(Debug, Clone)]
pub struct InMemorySink {
    id: String,
    state: Arc<Mutex<MemoryState>>,
}

impl InMemorySink {
    /// Create a new empty in-memory sink.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: Arc::new(Mutex::new(MemoryState::default())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the contents of the sink as bytes.
    pub fn contents(&self) -> Vec<u8> {
        self.lock().buf.clone()
    }

    /// Get the contents of the sink as a string.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Clear the sink contents.
    pub fn clear(&self) {
        self.lock().buf.clear();
    }

    /// Whether `close` has been called successfully.
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Number of times `close` was called, including failed calls.
    pub fn close_count(&self) -> usize {
        self.lock().close_calls
    }

    /// Make every following write fail with `kind`.
    pub fn fail_writes(&self, kind: ErrorKind) {
        self.lock().fail_writes = Some(kind);
    }

    /// Let writes succeed again.
    pub fn heal(&self) {
        self.lock().fail_writes = None;
    }
}

impl Write for InMemorySink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut state = self.lock();
        if state.closed {
            return Err(closed_error(&self.id));
        }
        if let Some(kind) = state.fail_writes {
            return Err(io::Error::new(kind, "injected write failure"));
        }
        state.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl NativeSink for InMemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn close(&mut self) -> io::Result<()> {
        let mut state = self.lock();
        state.close_calls += 1;
        if state.closed {
            return Err(closed_error(&self.id));
        }
        state.closed = true;
        Ok(())
    }
}
