//! The native sink adapter.
//!
//! `SinkAdapter` turns one `write` call into one blocking write on the
//! native sink and one `close` call into at most one blocking close.
//!
//! ## Error policy
//!
//! - A payload that is not a buffer is a programming error and comes back as
//!   `Err(AdapterError)` from `write`. The sink and the callback are untouched.
//! - An I/O failure is never returned. It is handed to the write callback as
//!   a `StreamError` with code `EIO`. If no callback was supplied the failure
//!   is logged at `warn` level and otherwise dropped: callers that care about
//!   write failures must pass a callback.
//! - Errors while closing are logged and swallowed.
//!
//! ## Blocking
//!
//! Writes and closes block until the native call returns. There is no
//! cancellation and no timeout; a native call that hangs hangs the caller.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::builder::SinkAdapterBuilder;
use crate::chunk::{Buffer, Chunk};
use crate::config::{EnvSource, ProcessEnv, WindowSize};
use crate::error::{AdapterError, StreamError};
use crate::io::{NativeSink, StderrSink, StdoutSink};
use crate::tty::{ConsoleProbe, HostConsole, resolve_tty};

/// Completion callback for a single write.
///
/// Receives `Ok(())` when every byte reached the sink, or the EIO error.
pub type WriteCallback = Box<dyn FnOnce(Result<(), StreamError>) + Send>;

/// Lifecycle state of an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterState {
    Open,
    Closed,
}

/// Exposes a native byte sink through the writable-stream vtable.
///
/// The adapter owns its sink outright. `write` and `close` take `&mut self`,
/// so there is at most one writer at a time; sharing an adapter between
/// threads requires an outer lock.
pub struct SinkAdapter {
    sink: Box<dyn NativeSink>,
    suppress_close: bool,
    tty: bool,
    state: AdapterState,
    env: Arc<dyn EnvSource>,
}

impl SinkAdapter {
    /// Bind `sink`, resolving `may_be_tty` against the host console.
    pub fn new(sink: impl NativeSink + 'static, suppress_close: bool, may_be_tty: bool) -> Self {
        Self::from_parts(
            Box::new(sink),
            suppress_close,
            may_be_tty,
            &HostConsole,
            Arc::new(ProcessEnv),
        )
    }

    /// Start building an adapter over `sink`.
    pub fn builder(sink: impl NativeSink + 'static) -> SinkAdapterBuilder {
        SinkAdapterBuilder::new(Box::new(sink))
    }

    /// Adapter for process standard output. Closing it leaves stdout open.
    pub fn stdout() -> Self {
        Self::new(StdoutSink::new(), true, true)
    }

    /// Adapter for process standard error. Closing it leaves stderr open.
    pub fn stderr() -> Self {
        Self::new(StderrSink::new(), true, true)
    }

    pub(crate) fn from_parts(
        sink: Box<dyn NativeSink>,
        suppress_close: bool,
        may_be_tty: bool,
        probe: &dyn ConsoleProbe,
        env: Arc<dyn EnvSource>,
    ) -> Self {
        let tty = resolve_tty(may_be_tty, probe);
        debug!(
            sink = sink.id(),
            suppress_close, tty, "bound native sink adapter"
        );
        Self {
            sink,
            suppress_close,
            tty,
            state: AdapterState::Open,
            env,
        }
    }

    /// Write the bytes of `chunk` to the sink.
    ///
    /// Returns `Err` only when `chunk` is not a buffer. Every other outcome is
    /// reported through `callback`, which runs exactly once before this
    /// method returns.
    pub fn write(
        &mut self,
        chunk: &Chunk,
        callback: Option<WriteCallback>,
    ) -> Result<(), AdapterError> {
        let buf = chunk.as_buffer()?;
        let outcome = self.write_buffer(buf);

        match (outcome, callback) {
            (Ok(()), Some(cb)) => cb(Ok(())),
            (Ok(()), None) => {}
            (Err(e), Some(cb)) => {
                debug!(sink = self.sink.id(), error = %e, "I/O error on write");
                cb(Err(e));
            }
            (Err(e), None) => {
                warn!(
                    sink = self.sink.id(),
                    error = %e,
                    "I/O error on write with no callback; error dropped"
                );
            }
        }
        Ok(())
    }

    fn write_buffer(&mut self, buf: &Buffer) -> Result<(), StreamError> {
        if self.state == AdapterState::Closed {
            return Err(StreamError::closed());
        }
        trace!(
            bytes = buf.len(),
            offset = buf.offset(),
            sink = self.sink.id(),
            "writing"
        );
        write_once(&mut *self.sink, buf.as_slice())?;
        self.sink.flush()?;
        Ok(())
    }

    /// Close the sink, unless closing was suppressed at construction.
    ///
    /// Never fails and is safe to call repeatedly; only the first call
    /// reaches the sink.
    pub fn close(&mut self) {
        if self.suppress_close {
            debug!(sink = self.sink.id(), "close suppressed, leaving sink open");
            return;
        }
        if self.state == AdapterState::Closed {
            trace!(sink = self.sink.id(), "already closed");
            return;
        }

        self.state = AdapterState::Closed;
        debug!(sink = self.sink.id(), "closing native sink");
        if let Err(e) = self.sink.close() {
            debug!(sink = self.sink.id(), error = %e, "error closing native sink");
        }
    }

    /// Whether the sink was a terminal when the adapter was created.
    pub fn is_tty(&self) -> bool {
        self.tty
    }

    /// Terminal size from `COLUMNS` / `LINES`, re-read on every call.
    pub fn window_size(&self) -> WindowSize {
        WindowSize::from_env(self.env.as_ref())
    }

    pub fn state(&self) -> AdapterState {
        self.state
    }

    /// Whether `close` leaves the sink open.
    pub fn suppresses_close(&self) -> bool {
        self.suppress_close
    }

    /// Identifier of the bound sink.
    pub fn sink_id(&self) -> &str {
        self.sink.id()
    }
}

/// Write all of `bytes`, giving up on the first error.
///
/// Unlike `Write::write_all`, `Interrupted` is not retried.
fn write_once(sink: &mut dyn NativeSink, mut bytes: &[u8]) -> io::Result<()> {
    while !bytes.is_empty() {
        match sink.write(bytes)? {
            0 => {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "native sink accepted no bytes",
                ));
            }
            n => bytes = &bytes[n..],
        }
    }
    Ok(())
}

impl fmt::Debug for SinkAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkAdapter")
            .field("sink", &self.sink)
            .field("suppress_close", &self.suppress_close)
            .field("tty", &self.tty)
            .field("state", &self.state)
            .finish()
    }
}
