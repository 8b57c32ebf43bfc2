//! Console presence detection.

use std::fmt::Debug;
use std::io::{self, IsTerminal};

/// Answers whether the host process has an interactive console attached.
pub trait ConsoleProbe: Debug {
    fn console_attached(&self) -> bool;
}

/// Probe backed by the real process streams.
///
/// A console counts as attached when both stdin and stdout are terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostConsole;

impl ConsoleProbe for HostConsole {
    fn console_attached(&self) -> bool {
        io::stdin().is_terminal() && io::stdout().is_terminal()
    }
}

/// Probe with a fixed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedConsole(pub bool);

impl FixedConsole {
    pub fn attached() -> Self {
        Self(true)
    }

    pub fn detached() -> Self {
        Self(false)
    }
}

impl ConsoleProbe for FixedConsole {
    fn console_attached(&self) -> bool {
        self.0
    }
}

/// Resolve a caller's "may be a terminal" hint against `probe`.
///
/// The probe is only consulted when the hint is set.
pub fn resolve_tty(may_be_tty: bool, probe: &dyn ConsoleProbe) -> bool {
    may_be_tty && probe.console_attached()
}
