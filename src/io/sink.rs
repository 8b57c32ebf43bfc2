//! Native sink trait definition.

use std::fmt::Debug;
use std::io::{self, Write};

/// A byte-output resource owned by exactly one adapter.
///
/// Bytes go through the `Write` supertrait. Implementors must return an error
/// rather than panic when written to after `close`.
pub trait NativeSink: Write + Send + Debug {
    /// Returns an identifier for this sink.
    ///
    /// This is used for logging.
    /// Convention: "-" for stdout, "stderr" for stderr, file path for files.
    fn id(&self) -> &str;

    /// Release the underlying resource.
    ///
    /// A second call may fail; callers that need idempotence must guard it.
    fn close(&mut self) -> io::Result<()>;
}

impl<S: NativeSink + ?Sized> NativeSink for Box<S> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

pub(crate) fn closed_error(id: &str) -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, format!("sink '{id}' is closed"))
}
