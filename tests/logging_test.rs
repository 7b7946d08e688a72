// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates environment handling and the CLI logging profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Healthy Growth Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use healthy_growth::logging::{LogFormat, LogTarget, LoggingConfig};
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-service");
    assert!(config.include_location); // Should be true for production

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("SERVICE_NAME");
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.target, LogTarget::Stdout);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "healthy-growth-server");
    assert!(!config.include_location);
}

#[test]
fn test_cli_logging_writes_compact_to_stderr() {
    let quiet = LoggingConfig::for_cli(false);
    assert_eq!(quiet.level, "warn");
    assert_eq!(quiet.format, LogFormat::Compact);
    assert_eq!(quiet.target, LogTarget::Stderr);
    assert_eq!(quiet.service_name, "healthy-growth-cli");

    assert_eq!(LoggingConfig::for_cli(true).level, "debug");
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("other"), LogFormat::Pretty);
}

#[test]
#[serial]
fn test_init_installs_subscriber_once() {
    let config = LoggingConfig::for_cli(false);
    // A second global subscriber is refused rather than panicking
    config.init().unwrap();
    assert!(config.init().is_err());
}
