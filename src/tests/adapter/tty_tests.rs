//! Tests for terminal capability resolution.

use crate::{ConsoleProbe, FixedConsole, HostConsole, InMemorySink, SinkAdapter};

#[test]
fn not_a_tty_when_hint_is_false_even_with_console() {
    let adapter = SinkAdapter::builder(InMemorySink::new("out"))
        .may_be_tty(false)
        .console(FixedConsole::attached())
        .build();

    assert!(!adapter.is_tty());
}

#[test]
fn tty_when_hint_is_true_and_console_attached() {
    let adapter = SinkAdapter::builder(InMemorySink::new("out"))
        .may_be_tty(true)
        .console(FixedConsole::attached())
        .build();

    assert!(adapter.is_tty());
}

#[test]
fn not_a_tty_when_console_detached() {
    let adapter = SinkAdapter::builder(InMemorySink::new("out"))
        .may_be_tty(true)
        .console(FixedConsole::detached())
        .build();

    assert!(!adapter.is_tty());
}

#[test]
fn tty_flag_survives_close() {
    let mut adapter = SinkAdapter::builder(InMemorySink::new("out"))
        .may_be_tty(true)
        .console(FixedConsole::attached())
        .build();

    adapter.close();

    assert!(adapter.is_tty());
}

#[test]
fn plain_constructor_without_hint_is_never_a_tty() {
    let adapter = SinkAdapter::new(InMemorySink::new("out"), false, false);
    assert!(!adapter.is_tty());
}

#[test]
fn plain_constructor_with_hint_follows_host_console() {
    let adapter = SinkAdapter::new(InMemorySink::new("x"), false, true);

    assert_eq!(adapter.is_tty(), HostConsole.console_attached());
}

#[test]
fn stdout_adapter_follows_host_console() {
    let adapter = SinkAdapter::stdout();

    assert_eq!(adapter.is_tty(), HostConsole.console_attached());
    assert!(adapter.suppresses_close());
}
