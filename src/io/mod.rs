//! Native sink abstractions.
//!
//! This module provides:
//! - `NativeSink`: Trait for byte-output resources an adapter can own
//! - Standard implementations for stdout/stderr, files and any `Write`
//! - An in-memory implementation for testing

mod memory;
mod sink;
mod std_io;

pub use memory::InMemorySink;
pub use sink::NativeSink;
pub use std_io::{FileSink, StderrSink, StdoutSink, WriterSink};
