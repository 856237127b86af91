//! Unit tests for the logging subsystem.

use std::path::PathBuf;

use super::types::*;
use super::Rotation;

#[test]
fn test_stdout_config_default() {
    let config = StdoutConfig::default();
    assert!(!config.json_format);
}

#[test]
fn test_file_logging_config_builder() {
    let config = FileLoggingConfig::new(PathBuf::from("/var/log/keel"), "keel".to_owned())
        .with_rotation(Rotation::HOURLY)
        .with_json_format(true);

    assert_eq!(config.directory, PathBuf::from("/var/log/keel"));
    assert_eq!(config.file_name_prefix, "keel");
    assert_eq!(config.rotation, Rotation::HOURLY);
    assert!(config.json_format);
}

#[test]
fn test_logger_config_builder_pattern() {
    let config = LoggerConfig::new("test-service".to_owned())
        .with_json_logging(true)
        .with_file_logging(FileLoggingConfig::new(
            PathBuf::from("logs"),
            "test".to_owned(),
        ));

    assert_eq!(config.service_name, "test-service");
    assert!(config.stdout_config.json_format);
    assert!(config.file_logging_config.is_some());
}

#[test]
fn test_logger_config_default_service_name() {
    let config = LoggerConfig::default();
    assert_eq!(config.service_name, "(keel-service)");
    assert!(config.file_logging_config.is_none());
}
