//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{AdapterError, StreamError};

/// A diagnostic wrapper for adapter errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct SinkDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<AdapterError> for SinkDiagnostic {
    fn from(e: AdapterError) -> Self {
        let help = match &e {
            AdapterError::NotABuffer { .. } => "Convert the chunk to a Buffer before writing",
            AdapterError::InvalidRange { .. } => "Keep offset + length within the backing bytes",
        };
        SinkDiagnostic {
            message: "invalid call into native sink adapter".into(),
            source: Some(Box::new(e)),
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}

impl From<StreamError> for SinkDiagnostic {
    fn from(e: StreamError) -> Self {
        SinkDiagnostic {
            message: format!("[{}] write to native sink failed", e.code),
            source: Some(Box::new(e)),
            help: Some("Check that the underlying sink is still open".into()),
            severity: Severity::Warning,
        }
    }
}

impl From<AdapterError> for miette::Report {
    fn from(e: AdapterError) -> Self {
        miette::Report::new(SinkDiagnostic::from(e))
    }
}
