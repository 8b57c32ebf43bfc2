//! The fixed interface the writable-stream wrapper calls into.

use std::fmt::Debug;

use crate::adapter::{SinkAdapter, WriteCallback};
use crate::chunk::Chunk;
use crate::config::WindowSize;
use crate::error::AdapterError;
use crate::io::NativeSink;

/// Name the adapter module registers under in the host runtime.
pub const MODULE_NAME: &str = "native_output_stream";

/// Name of the writable-stream module that wraps the adapter.
pub const WRITABLE_MODULE_NAME: &str = "native_stream_writable";

/// Operations a writable-stream wrapper may invoke on its native backend.
pub trait NativeStream: Send + Debug {
    /// Write a chunk; see [`SinkAdapter::write`] for the error policy.
    fn write(&mut self, chunk: &Chunk, callback: Option<WriteCallback>)
    -> Result<(), AdapterError>;

    /// Close the backend. Never fails.
    fn close(&mut self);

    /// The `isTTY` property.
    fn is_tty(&self) -> bool;

    fn window_size(&self) -> WindowSize;
}

impl NativeStream for SinkAdapter {
    fn write(
        &mut self,
        chunk: &Chunk,
        callback: Option<WriteCallback>,
    ) -> Result<(), AdapterError> {
        SinkAdapter::write(self, chunk, callback)
    }

    fn close(&mut self) {
        SinkAdapter::close(self)
    }

    fn is_tty(&self) -> bool {
        SinkAdapter::is_tty(self)
    }

    fn window_size(&self) -> WindowSize {
        SinkAdapter::window_size(self)
    }
}

/// Bind `sink` to a new adapter and hand it out as a stream backend.
///
/// This is the entry point for startup code wiring process streams (or any
/// other native resource) into the scripting runtime.
pub fn create_native_stream(
    sink: impl NativeSink + 'static,
    suppress_close: bool,
    may_be_tty: bool,
) -> Box<dyn NativeStream> {
    Box::new(SinkAdapter::new(sink, suppress_close, may_be_tty))
}
