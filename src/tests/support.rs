//! Shared helpers for adapter tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::{StreamError, WriteCallback};

/// Records every invocation of the callbacks it hands out.
#[derive(Clone, Default)]
pub struct CallbackLog {
    calls: Arc<Mutex<Vec<Result<(), StreamError>>>>,
}

impl CallbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callback(&self) -> WriteCallback {
        let calls = Arc::clone(&self.calls);
        Box::new(move |res| calls.lock().unwrap().push(res))
    }

    pub fn calls(&self) -> Vec<Result<(), StreamError>> {
        self.calls.lock().unwrap().clone()
    }
}

/// Collects formatted tracing output so tests can assert on log lines.
#[derive(Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

pub struct LogCaptureWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for LogCaptureWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogCaptureWriter {
            buf: Arc::clone(&self.buf),
        }
    }
}

impl LogCapture {
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
    }
}

/// Run `f` with a subscriber that records everything at TRACE and above.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(capture.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, capture.output())
}
