//! Tests for Buffer views and Chunk classification.

use crate::{AdapterError, Buffer, Chunk};

#[test]
fn buffer_spans_all_bytes_by_default() {
    let buf = Buffer::from("hello");

    assert_eq!(buf.offset(), 0);
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.as_slice(), b"hello");
}

#[test]
fn with_range_rejects_windows_past_the_end() {
    let err = Buffer::with_range(b"abc".to_vec(), 2, 5).unwrap_err();

    assert_eq!(
        err,
        AdapterError::InvalidRange {
            offset: 2,
            length: 5,
            capacity: 3
        }
    );
}

#[test]
fn with_range_rejects_overflowing_offsets() {
    assert!(Buffer::with_range(b"abc".to_vec(), usize::MAX, 2).is_err());
}

#[test]
fn slice_shares_backing_bytes_relative_to_view() {
    let outer = Buffer::with_range(b"--hello world--".to_vec(), 2, 11).unwrap();
    let inner = outer.slice(6, 11).unwrap();

    assert_eq!(inner.as_slice(), b"world");
    assert_eq!(inner.offset(), 8);
    assert!(outer.slice(0, 12).is_err());
}

#[test]
fn inverted_slice_is_empty() {
    let buf = Buffer::from("abc");
    let empty = buf.slice(2, 1).unwrap();

    assert!(empty.is_empty());
}

#[test]
fn only_buffers_pass_as_buffer() {
    assert!(Chunk::from(b"x".to_vec()).as_buffer().is_ok());
    assert_eq!(
        Chunk::String("x".into()).as_buffer().unwrap_err(),
        AdapterError::NotABuffer { found: "string" }
    );
    assert_eq!(Chunk::Undefined.type_name(), "undefined");
}
