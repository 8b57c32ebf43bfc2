//! Window size policy derived from environment variables.
//!
//! There is no portable way to ask the host for the real terminal size, so
//! the size is read from `COLUMNS` / `LINES` with fixed fallbacks.

use std::collections::HashMap;
use std::fmt::Debug;

use serde::Serialize;

/// Environment variable holding the terminal width.
pub const COLUMNS_VAR: &str = "COLUMNS";
/// Environment variable holding the terminal height.
pub const LINES_VAR: &str = "LINES";

/// Width reported when `COLUMNS` is absent or malformed.
pub const DEFAULT_COLUMNS: u32 = 80;
/// Height reported when `LINES` is absent or malformed.
pub const DEFAULT_ROWS: u32 = 24;

/// Source of environment-style configuration values.
pub trait EnvSource: Send + Sync + Debug {
    /// Look up `name`, returning `None` if it is unset or not valid unicode.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// A fixed set of variables, for tests and embedders that sandbox the
/// environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Terminal dimensions in character cells. Both values are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowSize {
    pub columns: u32,
    pub rows: u32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl WindowSize {
    /// Resolve the window size from `env`.
    ///
    /// Each dimension falls back independently when its variable is unset,
    /// not a number, zero, negative, or out of range.
    pub fn from_env(env: &dyn EnvSource) -> Self {
        Self {
            columns: parse_dimension(env.var(COLUMNS_VAR).as_deref()).unwrap_or(DEFAULT_COLUMNS),
            rows: parse_dimension(env.var(LINES_VAR).as_deref()).unwrap_or(DEFAULT_ROWS),
        }
    }

    /// `(columns, rows)`, the order scripts receive them in.
    pub fn as_tuple(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }
}

fn parse_dimension(raw: Option<&str>) -> Option<u32> {
    raw?.parse::<u32>().ok().filter(|&n| n > 0)
}
