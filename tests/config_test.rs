// ABOUTME: Tests for processing and driver configuration defaults, validation, and environment overrides
// ABOUTME: Environment tests run serially because they mutate process-wide variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use cyride::config::{env_vars as driver_env, DriverConfig, DEFAULT_FILE_PATTERN};
use cyride_pipeline::config::env_vars;
use cyride_pipeline::{ConfigError, ExtrapolationPolicy, ProcessingConfig};
use serial_test::serial;

const ALL_VARS: &[&str] = &[
    env_vars::TIMESTEP_SECONDS,
    env_vars::EXTRAPOLATION,
    env_vars::VAM_HALF_LIFE_SECONDS,
    env_vars::VAM_WINDOW_HALF_LIVES,
    env_vars::SPEED_CORRECTION,
    env_vars::SPEED_GLITCH_THRESHOLD_MPS,
    env_vars::SPEED_GLITCH_DIVISOR,
    env_vars::ALTITUDE_CORRECTION,
    env_vars::ALTITUDE_OFFSET,
    env_vars::ALTITUDE_SCALE,
    env_vars::MAX_POWER_WATTS,
    driver_env::INPUT_DIR,
    driver_env::OUTPUT_DIR,
    driver_env::FILE_PATTERN,
    driver_env::THREADS,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_default_config_validation() {
    let config = ProcessingConfig::default();
    assert!(config.validate().is_ok());

    assert!((config.resample.timestep_seconds - 1.0).abs() < f64::EPSILON);
    assert_eq!(config.resample.extrapolation, ExtrapolationPolicy::Error);
    assert!((config.vam.half_life_seconds - 7.0).abs() < f64::EPSILON);
    assert_eq!(config.vam.window_len(), 21);
    assert!((config.corrections.speed_glitch_threshold_mps - 30.0).abs() < f64::EPSILON);
    assert!((config.corrections.speed_glitch_divisor - 1000.0).abs() < f64::EPSILON);
    assert!((config.corrections.altitude_offset - 2500.0).abs() < f64::EPSILON);
    assert!((config.corrections.altitude_scale - 5.0).abs() < f64::EPSILON);
    assert!((config.summary.max_power_watts - 700.0).abs() < f64::EPSILON);
}

#[test]
fn test_invalid_values_are_rejected() {
    let mut config = ProcessingConfig::default();
    config.resample.timestep_seconds = -1.0;
    assert!(config.validate().is_err());

    let mut config = ProcessingConfig::default();
    config.vam.window_half_lives = 0.1;
    assert!(config.validate().is_err());

    let mut config = ProcessingConfig::default();
    config.corrections.altitude_scale = 0.0;
    assert!(config.validate().is_err());

    let mut config = ProcessingConfig::default();
    config.corrections.speed_glitch_divisor = f64::NAN;
    assert!(config.validate().is_err());

    let mut config = ProcessingConfig::default();
    config.summary.max_power_watts = 0.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_extrapolation_policy_parsing() {
    assert_eq!("error".parse::<ExtrapolationPolicy>().unwrap(), ExtrapolationPolicy::Error);
    assert_eq!(" Missing ".parse::<ExtrapolationPolicy>().unwrap(), ExtrapolationPolicy::Missing);
    assert_eq!(
        "clamp".parse::<ExtrapolationPolicy>().unwrap_err(),
        ConfigError::UnknownExtrapolationPolicy("clamp".to_owned())
    );
    assert_eq!(ExtrapolationPolicy::Missing.to_string(), "missing");
}

#[test]
fn test_partial_json_config_fills_defaults() {
    let config: ProcessingConfig =
        serde_json::from_str(r#"{"resample": {"timestep_seconds": 2.0, "extrapolation": "missing"}}"#)
            .unwrap();

    assert!((config.resample.timestep_seconds - 2.0).abs() < f64::EPSILON);
    assert_eq!(config.resample.extrapolation, ExtrapolationPolicy::Missing);
    assert_eq!(config.vam, ProcessingConfig::default().vam);
}

#[test]
#[serial]
fn test_environment_defaults() {
    clear_env();

    let config = ProcessingConfig::from_environment().unwrap();

    assert_eq!(config, ProcessingConfig::default());
}

#[test]
#[serial]
fn test_environment_overrides_apply() {
    clear_env();
    env::set_var(env_vars::TIMESTEP_SECONDS, "2.5");
    env::set_var(env_vars::EXTRAPOLATION, "missing");
    env::set_var(env_vars::SPEED_CORRECTION, "false");
    env::set_var(env_vars::MAX_POWER_WATTS, "1200");

    let config = ProcessingConfig::from_environment().unwrap();
    clear_env();

    assert!((config.resample.timestep_seconds - 2.5).abs() < f64::EPSILON);
    assert_eq!(config.resample.extrapolation, ExtrapolationPolicy::Missing);
    assert!(!config.corrections.speed_correction);
    assert!(config.corrections.altitude_correction);
    assert!((config.summary.max_power_watts - 1200.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_environment_value_is_rejected() {
    clear_env();
    env::set_var(env_vars::VAM_HALF_LIFE_SECONDS, "seven");

    let err = ProcessingConfig::from_environment().unwrap_err();
    clear_env();

    assert_eq!(
        err,
        ConfigError::InvalidEnvValue {
            variable: env_vars::VAM_HALF_LIFE_SECONDS,
            value: "seven".to_owned(),
        }
    );
}

#[test]
#[serial]
fn test_out_of_range_environment_value_is_rejected() {
    clear_env();
    env::set_var(env_vars::TIMESTEP_SECONDS, "0");

    let result = ProcessingConfig::from_environment();
    clear_env();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_driver_environment_overrides() {
    clear_env();
    env::set_var(driver_env::INPUT_DIR, "/data/activities");
    env::set_var(driver_env::OUTPUT_DIR, "/data/processed");
    env::set_var(driver_env::FILE_PATTERN, "*.activity.json");
    env::set_var(driver_env::THREADS, "3");

    let config = DriverConfig::from_environment().unwrap();
    clear_env();

    assert_eq!(config.input_dir, PathBuf::from("/data/activities"));
    assert_eq!(config.output_dir, PathBuf::from("/data/processed"));
    assert_eq!(config.threads, Some(3));
    assert_eq!(
        config.discovery_pattern(),
        PathBuf::from("/data/activities")
            .join("*.activity.json")
            .to_string_lossy()
    );
}

#[test]
#[serial]
fn test_driver_rejects_zero_threads() {
    clear_env();
    env::set_var(driver_env::THREADS, "0");

    let result = DriverConfig::from_environment();
    clear_env();

    assert!(result.is_err());
}

#[test]
fn test_driver_defaults() {
    let config = DriverConfig::default();

    assert_eq!(config.file_pattern, DEFAULT_FILE_PATTERN);
    assert_eq!(config.threads, None);
    assert!(config.validate().is_ok());
}
