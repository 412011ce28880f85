//! Integration tests for the comms channel workflow:
//! settings from configuration, channel construction, and the
//! open/write/read/close lifecycle against the mock channel.

use device_comms::comms::Op;
use device_comms::{Comms, CommsError, ConfigError, MockComms, SerialComms, SerialSettings};
use pretty_assertions::assert_eq;
use std::io::Write as _;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn settings_load_from_config_file() {
    init_tracing();

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "port = \"COM3\"\nbaud_rate = 115200").expect("write config");

    let settings = SerialSettings::from_config_file(file.path()).unwrap();
    assert_eq!(settings, SerialSettings::new("COM3", 115_200));
}

#[test]
fn settings_file_missing_key_reports_it() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "baud_rate = 9600").expect("write config");

    let result = SerialSettings::from_config_file(file.path());
    assert!(matches!(result, Err(ConfigError::MissingKey(ref k)) if k == "port"));
}

#[test]
fn settings_file_absent_is_read_error() {
    let result = SerialSettings::from_config_file("/nonexistent/settings.toml");
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn serial_channel_is_configured_before_open() {
    let settings = SerialSettings::new("COM3", 115_200);
    let channel = SerialComms::new(settings);

    assert_eq!(channel.port(), Some("COM3"));
    assert_eq!(channel.baud_rate(), 115_200);
    assert!(!channel.is_open());
}

#[test]
fn full_workflow_over_trait_object() {
    init_tracing();

    let mut channel: Box<dyn Comms> = Box::new(MockComms::new());

    channel.open().unwrap();
    channel.write(b"*IDN?\n").unwrap();
    let reply = channel.read(6).unwrap();
    assert_eq!(reply, b"*IDN?\n");
    channel.close().unwrap();
}

#[test]
fn close_open_close_sequence_is_observed_in_order() {
    let mut channel = MockComms::new();

    channel.open().unwrap();
    channel.close().unwrap();
    channel.open().unwrap();
    channel.close().unwrap();

    assert_eq!(channel.ops(), &[Op::Open, Op::Close, Op::Open, Op::Close]);
}

#[test]
fn write_read_round_trip_is_byte_exact() {
    let mut channel = MockComms::new();
    channel.open().unwrap();

    let payload: Vec<u8> = (0u8..=255).collect();
    channel.write(&payload).unwrap();
    assert_eq!(channel.read(payload.len()).unwrap(), payload);
}

#[test]
fn driver_errors_propagate_unchanged() {
    let mut channel = MockComms::new();
    channel.open().unwrap();

    channel.fail_next_with(CommsError::Read(std::io::Error::new(
        std::io::ErrorKind::TimedOut,
        "read timed out",
    )));

    let err = channel.read(1).unwrap_err();
    assert!(err.is_timeout());
    match err {
        CommsError::Read(source) => assert_eq!(source.kind(), std::io::ErrorKind::TimedOut),
        other => panic!("expected Read, got {:?}", other),
    }
}
