//! # native-sink
//!
//! Expose a native byte sink (stdout, stderr, a file, any `Write`) as the
//! backend of a writable stream in an embedded scripting runtime.
//!
//! ## Overview
//!
//! native-sink provides:
//! - **`SinkAdapter`**: one synchronous write per `write` call, at most one
//!   close, a frozen `isTTY` flag and an environment-based window size
//! - **`NativeStream`**: the fixed vtable a writable-stream wrapper calls
//! - **Sinks**: stdout/stderr, files, generic writers and an in-memory sink
//!   for tests
//! - **Soft I/O errors**: write failures go to the callback as an `EIO`
//!   `StreamError`, or to the log when no callback was given
//!
//! ## Quick Start
//!
//! ```rust
//! use native_sink::{Chunk, InMemorySink, SinkAdapter, WriteCallback};
//!
//! let sink = InMemorySink::new("out");
//! let mut adapter = SinkAdapter::new(sink.clone(), false, false);
//!
//! let done: WriteCallback = Box::new(|res| assert!(res.is_ok()));
//! adapter
//!     .write(&Chunk::from(b"hi".to_vec()), Some(done))
//!     .expect("chunk is a buffer");
//! adapter.close();
//!
//! assert_eq!(sink.contents(), b"hi");
//! assert_eq!(sink.close_count(), 1);
//! ```
//!
//! ## Features
//!
//! - `miette` - Pretty error reporting with miette
//! - `cli` - Builds the `native_sink_cat` demo binary
//!
//! ## Semantics
//!
//! - The adapter never buffers, batches or reorders: bytes reach the sink in
//!   call order, and each callback has run by the time `write` returns.
//! - A write issued without a callback that fails is only logged. This is
//!   intentional; pass a callback to observe failures.
//! - `close` on an adapter created with `suppress_close` leaves the resource
//!   open and the adapter usable, which is what process-wide streams need.
//! - Window size comes from `COLUMNS` and `LINES` (defaults 80 x 24); no
//!   terminal ioctl is attempted.

// Core modules
pub mod adapter;
pub mod builder;
pub mod chunk;
pub mod config;
pub mod error;
pub mod io;
pub mod stream;
pub mod tty;

// Re-exports for convenience
pub use adapter::{AdapterState, SinkAdapter, WriteCallback};
pub use builder::SinkAdapterBuilder;
pub use chunk::{Buffer, Chunk};
pub use config::{EnvSource, MapEnv, ProcessEnv, WindowSize};
pub use error::{AdapterError, ErrorCode, StreamError};
pub use io::{FileSink, InMemorySink, NativeSink, StderrSink, StdoutSink, WriterSink};
pub use stream::{MODULE_NAME, NativeStream, WRITABLE_MODULE_NAME, create_native_stream};
pub use tty::{ConsoleProbe, FixedConsole, HostConsole};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::SinkDiagnostic;
