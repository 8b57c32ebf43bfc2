//! Configuration consumed by the adapter.
//!
//! This module provides:
//! - `WindowSize`: Terminal dimensions reported to scripts
//! - `EnvSource`: Where environment-style values are read from
//! - `ProcessEnv` / `MapEnv`: Real and fixed environment sources

mod window;

pub use window::{
    COLUMNS_VAR, DEFAULT_COLUMNS, DEFAULT_ROWS, EnvSource, LINES_VAR, MapEnv, ProcessEnv,
    WindowSize,
};
