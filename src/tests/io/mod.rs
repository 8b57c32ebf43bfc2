//! Sink implementation tests.
