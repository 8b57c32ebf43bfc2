//! Tests for StreamError and AdapterError.

use std::io;

use crate::{AdapterError, ErrorCode, StreamError};

#[test]
fn stream_error_serializes_with_eio_code() {
    let err = StreamError::eio("disk on fire");
    let json = serde_json::to_value(&err).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "code": "EIO", "message": "disk on fire" })
    );
}

#[test]
fn io_error_message_is_carried_over() {
    let native = io::Error::new(io::ErrorKind::PermissionDenied, "no write access");
    let err = StreamError::from(native);

    assert_eq!(err.code, ErrorCode::Eio);
    assert_eq!(err.message, "no write access");
    assert_eq!(err.to_string(), "EIO: no write access");
}

#[test]
fn closed_error_is_eio() {
    let err = StreamError::closed();

    assert_eq!(err.code.as_str(), "EIO");
    assert_eq!(err.message, "stream is closed");
}

#[test]
fn not_a_buffer_names_the_offending_type() {
    let err = AdapterError::NotABuffer { found: "number" };

    assert_eq!(err.to_string(), "Not a buffer: got number");
}

#[cfg(feature = "miette")]
#[test]
fn adapter_error_converts_to_diagnostic() {
    use crate::SinkDiagnostic;

    let diag = SinkDiagnostic::from(AdapterError::NotABuffer { found: "string" });

    assert_eq!(diag.severity, miette::Severity::Error);
    assert!(diag.help.unwrap().contains("Buffer"));
}
