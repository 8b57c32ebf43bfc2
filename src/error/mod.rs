//! Error types for the native sink adapter.
//!
//! This module provides:
//! - `AdapterError`: Contract violations reported synchronously to the caller
//! - `StreamError`: The structured I/O error handed to write callbacks
//! - `ErrorCode`: Stable error codes carried by `StreamError`

use std::fmt;
use std::io;

use serde::Serialize;
use thiserror::Error;

/// Faults raised directly to the caller of the adapter.
///
/// These indicate a programming error in the writable-stream wrapper, never
/// an operational I/O failure. I/O failures are reported as [`StreamError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// The payload handed to `write` was not a byte buffer.
    #[error("Not a buffer: got {found}")]
    NotABuffer {
        /// Type name of the value that was passed instead
        found: &'static str,
    },

    /// A buffer window does not fit inside its backing storage.
    #[error("buffer range {offset}+{length} is out of bounds for {capacity} bytes")]
    InvalidRange {
        offset: usize,
        length: usize,
        capacity: usize,
    },
}

/// Stable error codes delivered to scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    /// Generic I/O failure on the native sink
    #[serde(rename = "EIO")]
    Eio,
}

impl ErrorCode {
    /// The code as scripts see it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Eio => "EIO",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured, recoverable I/O error passed to a write callback.
///
/// Serializes as `{"code": "EIO", "message": "..."}`, which is the shape the
/// scripting side expects for stream errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{code}: {message}")]
pub struct StreamError {
    /// Error code (always `EIO` for sink failures)
    pub code: ErrorCode,
    /// Human-readable description derived from the native error
    pub message: String,
}

impl StreamError {
    /// Create an EIO error with the given message.
    pub fn eio(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Eio,
            message: message.into(),
        }
    }

    /// Convert a native I/O error.
    pub fn from_io(err: &io::Error) -> Self {
        Self::eio(err.to_string())
    }

    /// The error reported for writes issued after the adapter was closed.
    pub fn closed() -> Self {
        Self::eio("stream is closed")
    }
}

impl From<io::Error> for StreamError {
    fn from(err: io::Error) -> Self {
        Self::from_io(&err)
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
