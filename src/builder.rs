//! Builder for configuring a `SinkAdapter`.

use std::sync::Arc;

use crate::adapter::SinkAdapter;
use crate::config::{EnvSource, ProcessEnv};
use crate::io::NativeSink;
use crate::tty::{ConsoleProbe, HostConsole};

/// Builder for constructing a `SinkAdapter`.
///
/// Defaults: close is not suppressed, the sink is not a terminal candidate,
/// the host console is probed and the process environment supplies the
/// window size.
pub struct SinkAdapterBuilder {
    sink: Box<dyn NativeSink>,
    suppress_close: bool,
    may_be_tty: bool,
    console: Box<dyn ConsoleProbe>,
    env: Arc<dyn EnvSource>,
}

impl SinkAdapterBuilder {
    /// Create a new builder over `sink`.
    pub fn new(sink: Box<dyn NativeSink>) -> Self {
        Self {
            sink,
            suppress_close: false,
            may_be_tty: false,
            console: Box::new(HostConsole),
            env: Arc::new(ProcessEnv),
        }
    }

    /// Leave the underlying resource open when the adapter is closed.
    pub fn suppress_close(mut self, suppress: bool) -> Self {
        self.suppress_close = suppress;
        self
    }

    /// Declare that the sink could be a terminal.
    pub fn may_be_tty(mut self, may_be_tty: bool) -> Self {
        self.may_be_tty = may_be_tty;
        self
    }

    /// Use `probe` instead of the host console for terminal detection.
    pub fn console(mut self, probe: impl ConsoleProbe + 'static) -> Self {
        self.console = Box::new(probe);
        self
    }

    /// Read `COLUMNS` / `LINES` from `env` instead of the process environment.
    pub fn env(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Build the adapter. The console probe runs here, once.
    pub fn build(self) -> SinkAdapter {
        SinkAdapter::from_parts(
            self.sink,
            self.suppress_close,
            self.may_be_tty,
            self.console.as_ref(),
            self.env,
        )
    }
}
