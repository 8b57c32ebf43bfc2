//! Script values handed to the adapter by the writable-stream wrapper.

use std::sync::Arc;

use crate::error::AdapterError;

/// A view over shared bytes, the scripting runtime's byte buffer.
///
/// Several buffers may share one backing allocation; each one exposes only
/// the `length` bytes starting at `offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    bytes: Arc<[u8]>,
    offset: usize,
    length: usize,
}

impl Buffer {
    /// Create a buffer that spans all of `bytes`.
    pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
        let bytes = bytes.into();
        let length = bytes.len();
        Self {
            bytes,
            offset: 0,
            length,
        }
    }

    /// Create a buffer exposing `length` bytes of `bytes` starting at `offset`.
    pub fn with_range(
        bytes: impl Into<Arc<[u8]>>,
        offset: usize,
        length: usize,
    ) -> Result<Self, AdapterError> {
        let bytes = bytes.into();
        check_range(bytes.len(), offset, length)?;
        Ok(Self {
            bytes,
            offset,
            length,
        })
    }

    /// Create a sub-view sharing the same backing bytes.
    ///
    /// `start` and `end` are relative to this buffer, like `buf.slice(start, end)`
    /// on the script side.
    pub fn slice(&self, start: usize, end: usize) -> Result<Self, AdapterError> {
        let length = end.saturating_sub(start);
        check_range(self.length, start, length)?;
        Ok(Self {
            bytes: Arc::clone(&self.bytes),
            offset: self.offset + start,
            length,
        })
    }

    /// Offset of this view into the backing bytes.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes in this view.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The bytes this view exposes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[self.offset..self.offset + self.length]
    }
}

fn check_range(capacity: usize, offset: usize, length: usize) -> Result<(), AdapterError> {
    match offset.checked_add(length) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(AdapterError::InvalidRange {
            offset,
            length,
            capacity,
        }),
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<&str> for Buffer {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

/// A value passed as the first argument of `write`.
///
/// The wrapper is expected to convert everything to a [`Buffer`] before
/// calling the adapter; the other variants exist so misuse can be reported
/// with the offending type's name.
#[derive(Debug, Clone, PartialEq)]
pub enum Chunk {
    Buffer(Buffer),
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    Undefined,
}

impl Chunk {
    /// Script-side type name of the value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Chunk::Buffer(_) => "Buffer",
            Chunk::String(_) => "string",
            Chunk::Number(_) => "number",
            Chunk::Boolean(_) => "boolean",
            Chunk::Null => "null",
            Chunk::Undefined => "undefined",
        }
    }

    /// Borrow the buffer, or fail with `NotABuffer`.
    pub fn as_buffer(&self) -> Result<&Buffer, AdapterError> {
        match self {
            Chunk::Buffer(buf) => Ok(buf),
            other => Err(AdapterError::NotABuffer {
                found: other.type_name(),
            }),
        }
    }
}

impl From<Buffer> for Chunk {
    fn from(buf: Buffer) -> Self {
        Chunk::Buffer(buf)
    }
}

impl From<Vec<u8>> for Chunk {
    fn from(bytes: Vec<u8>) -> Self {
        Chunk::Buffer(Buffer::from(bytes))
    }
}

impl From<&[u8]> for Chunk {
    fn from(bytes: &[u8]) -> Self {
        Chunk::Buffer(Buffer::from(bytes))
    }
}
