//! Tests for the COLUMNS/LINES window size policy.

use crate::config::{DEFAULT_COLUMNS, DEFAULT_ROWS, EnvSource, ProcessEnv};
use crate::{MapEnv, WindowSize};

fn size(columns: Option<&str>, lines: Option<&str>) -> (u32, u32) {
    let mut env = MapEnv::new();
    if let Some(c) = columns {
        env = env.with_var("COLUMNS", c);
    }
    if let Some(l) = lines {
        env = env.with_var("LINES", l);
    }
    WindowSize::from_env(&env).as_tuple()
}

#[test]
fn both_set() {
    assert_eq!(size(Some("132"), Some("40")), (132, 40));
}

#[test]
fn both_unset() {
    assert_eq!(size(None, None), (DEFAULT_COLUMNS, DEFAULT_ROWS));
    assert_eq!((DEFAULT_COLUMNS, DEFAULT_ROWS), (80, 24));
}

#[test]
fn columns_unset_or_malformed() {
    assert_eq!(size(None, Some("30")), (80, 30));
    assert_eq!(size(Some("abc"), Some("30")), (80, 30));
    assert_eq!(size(Some("abc"), None), (80, 24));
}

#[test]
fn non_positive_values_fall_back() {
    assert_eq!(size(Some("0"), Some("-5")), (80, 24));
}

#[test]
fn out_of_range_and_padded_values_fall_back() {
    assert_eq!(size(Some("99999999999"), Some(" 40")), (80, 24));
    assert_eq!(size(Some("12.5"), Some("")), (80, 24));
}

#[test]
fn map_env_collects_from_pairs() {
    let env: MapEnv = [("COLUMNS", "200"), ("LINES", "60")].into_iter().collect();

    assert_eq!(env.var("COLUMNS").as_deref(), Some("200"));
    assert_eq!(WindowSize::from_env(&env).as_tuple(), (200, 60));
}

#[test]
fn process_env_always_yields_positive_size() {
    let size = WindowSize::from_env(&ProcessEnv);

    assert!(size.columns > 0);
    assert!(size.rows > 0);
}

#[test]
fn window_size_serializes_as_object() {
    let json = serde_json::to_value(WindowSize { columns: 90, rows: 30 }).unwrap();

    assert_eq!(json, serde_json::json!({ "columns": 90, "rows": 30 }));
}
