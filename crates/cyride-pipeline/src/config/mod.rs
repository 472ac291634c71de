// ABOUTME: Processing configuration: resampling, VAM smoothing, glitch corrections, summary limits
// ABOUTME: Serde structs with documented defaults, validation, and CYRIDE_* environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Cyride Contributors

//! Processing Configuration
//!
//! Every empirical or device-specific constant the pipeline relies on is
//! exposed here with its default taken from
//! [`cyride_core::constants::processing`].

mod error;

pub use error::ConfigError;

use std::env;
use std::fmt;
use std::str::FromStr;

use cyride_core::constants::processing::{
    DEFAULT_ALTITUDE_OFFSET, DEFAULT_ALTITUDE_SCALE, DEFAULT_MAX_POWER_WATTS,
    DEFAULT_SPEED_GLITCH_DIVISOR, DEFAULT_SPEED_GLITCH_THRESHOLD_MPS, DEFAULT_TIMESTEP_SECONDS,
    DEFAULT_VAM_HALF_LIFE_SECONDS, DEFAULT_VAM_WINDOW_HALF_LIVES,
};
use serde::{Deserialize, Serialize};

/// Environment variable names read by [`ProcessingConfig::from_environment`]
pub mod env_vars {
    /// Resampling timestep (seconds)
    pub const TIMESTEP_SECONDS: &str = "CYRIDE_TIMESTEP_SECONDS";
    /// Extrapolation policy (`error` or `missing`)
    pub const EXTRAPOLATION: &str = "CYRIDE_EXTRAPOLATION";
    /// VAM half-life (seconds)
    pub const VAM_HALF_LIFE_SECONDS: &str = "CYRIDE_VAM_HALF_LIFE_SECONDS";
    /// VAM window length in half-lives
    pub const VAM_WINDOW_HALF_LIVES: &str = "CYRIDE_VAM_WINDOW_HALF_LIVES";
    /// Enable the speed glitch correction
    pub const SPEED_CORRECTION: &str = "CYRIDE_SPEED_CORRECTION";
    /// Speed glitch threshold (m/s)
    pub const SPEED_GLITCH_THRESHOLD_MPS: &str = "CYRIDE_SPEED_GLITCH_THRESHOLD_MPS";
    /// Speed glitch divisor
    pub const SPEED_GLITCH_DIVISOR: &str = "CYRIDE_SPEED_GLITCH_DIVISOR";
    /// Enable the altitude encoding correction
    pub const ALTITUDE_CORRECTION: &str = "CYRIDE_ALTITUDE_CORRECTION";
    /// Altitude encoding offset
    pub const ALTITUDE_OFFSET: &str = "CYRIDE_ALTITUDE_OFFSET";
    /// Altitude encoding scale
    pub const ALTITUDE_SCALE: &str = "CYRIDE_ALTITUDE_SCALE";
    /// Max non-spurious power (watts)
    pub const MAX_POWER_WATTS: &str = "CYRIDE_MAX_POWER_WATTS";
}

/// What to do with grid points outside a column's sampled range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtrapolationPolicy {
    /// Fail the activity with an extrapolation error
    #[default]
    Error,
    /// Emit missing values at those grid points
    Missing,
}

impl FromStr for ExtrapolationPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "missing" => Ok(Self::Missing),
            other => Err(ConfigError::UnknownExtrapolationPolicy(other.to_owned())),
        }
    }
}

impl fmt::Display for ExtrapolationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Missing => f.write_str("missing"),
        }
    }
}

/// Full pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Resampling settings
    #[serde(default)]
    pub resample: ResampleConfig,
    /// Vertical ascent rate settings
    #[serde(default)]
    pub vam: VamConfig,
    /// Device glitch corrections
    #[serde(default)]
    pub corrections: CorrectionConfig,
    /// Summary statistic settings
    #[serde(default)]
    pub summary: SummaryConfig,
}

/// Resampling settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResampleConfig {
    /// Grid spacing (seconds)
    pub timestep_seconds: f64,
    /// Behavior outside a column's sampled range
    pub extrapolation: ExtrapolationPolicy,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            timestep_seconds: DEFAULT_TIMESTEP_SECONDS,
            extrapolation: ExtrapolationPolicy::default(),
        }
    }
}

/// Vertical ascent rate settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VamConfig {
    /// Half-life of the exponential regression weights (seconds)
    pub half_life_seconds: f64,
    /// Window length as a multiple of the half-life
    pub window_half_lives: f64,
}

impl Default for VamConfig {
    fn default() -> Self {
        Self {
            half_life_seconds: DEFAULT_VAM_HALF_LIFE_SECONDS,
            window_half_lives: DEFAULT_VAM_WINDOW_HALF_LIVES,
        }
    }
}

impl VamConfig {
    /// Regression window length in samples on a one-second grid
    #[must_use]
    pub fn window_len(&self) -> usize {
        (self.half_life_seconds * self.window_half_lives).round().max(0.0) as usize
    }
}

/// Device glitch corrections applied before resampling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionConfig {
    /// Repair speeds corrupted by a unit error
    pub speed_correction: bool,
    /// Speeds strictly above this value (m/s) are treated as corrupted
    pub speed_glitch_threshold_mps: f64,
    /// Corrupted speeds are divided by this value
    pub speed_glitch_divisor: f64,
    /// Decode the offset/scale altitude encoding
    pub altitude_correction: bool,
    /// Offset subtracted from raw altitude
    pub altitude_offset: f64,
    /// Scale dividing the offset altitude
    pub altitude_scale: f64,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            speed_correction: true,
            speed_glitch_threshold_mps: DEFAULT_SPEED_GLITCH_THRESHOLD_MPS,
            speed_glitch_divisor: DEFAULT_SPEED_GLITCH_DIVISOR,
            altitude_correction: true,
            altitude_offset: DEFAULT_ALTITUDE_OFFSET,
            altitude_scale: DEFAULT_ALTITUDE_SCALE,
        }
    }
}

impl CorrectionConfig {
    /// Corrections switched off
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            speed_correction: false,
            altitude_correction: false,
            ..Self::default()
        }
    }
}

/// Summary statistic settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Power readings above this value (watts) are spurious
    pub max_power_watts: f64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_power_watts: DEFAULT_MAX_POWER_WATTS,
        }
    }
}

fn parse_env<T: FromStr>(variable: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(variable) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnvValue { variable, value }),
        Err(_) => Ok(None),
    }
}

impl ProcessingConfig {
    /// Load configuration from `CYRIDE_*` environment variables over the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the resulting
    /// configuration fails validation
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = parse_env(env_vars::TIMESTEP_SECONDS)? {
            config.resample.timestep_seconds = value;
        }
        if let Ok(value) = env::var(env_vars::EXTRAPOLATION) {
            config.resample.extrapolation = value.parse()?;
        }
        if let Some(value) = parse_env(env_vars::VAM_HALF_LIFE_SECONDS)? {
            config.vam.half_life_seconds = value;
        }
        if let Some(value) = parse_env(env_vars::VAM_WINDOW_HALF_LIVES)? {
            config.vam.window_half_lives = value;
        }
        if let Some(value) = parse_env(env_vars::SPEED_CORRECTION)? {
            config.corrections.speed_correction = value;
        }
        if let Some(value) = parse_env(env_vars::SPEED_GLITCH_THRESHOLD_MPS)? {
            config.corrections.speed_glitch_threshold_mps = value;
        }
        if let Some(value) = parse_env(env_vars::SPEED_GLITCH_DIVISOR)? {
            config.corrections.speed_glitch_divisor = value;
        }
        if let Some(value) = parse_env(env_vars::ALTITUDE_CORRECTION)? {
            config.corrections.altitude_correction = value;
        }
        if let Some(value) = parse_env(env_vars::ALTITUDE_OFFSET)? {
            config.corrections.altitude_offset = value;
        }
        if let Some(value) = parse_env(env_vars::ALTITUDE_SCALE)? {
            config.corrections.altitude_scale = value;
        }
        if let Some(value) = parse_env(env_vars::MAX_POWER_WATTS)? {
            config.summary.max_power_watts = value;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        let timestep = self.resample.timestep_seconds;
        if !timestep.is_finite() || timestep <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "timestep_seconds must be a positive number",
            ));
        }

        if !self.vam.half_life_seconds.is_finite() || self.vam.half_life_seconds <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "vam.half_life_seconds must be a positive number",
            ));
        }
        if !self.vam.window_half_lives.is_finite() || self.vam.window_len() < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "vam window must span at least two samples",
            ));
        }

        let corrections = &self.corrections;
        if !corrections.speed_glitch_threshold_mps.is_finite() {
            return Err(ConfigError::ValueOutOfRange(
                "speed_glitch_threshold_mps must be finite",
            ));
        }
        if !corrections.speed_glitch_divisor.is_finite()
            || corrections.speed_glitch_divisor.abs() < f64::EPSILON
        {
            return Err(ConfigError::ValueOutOfRange(
                "speed_glitch_divisor must be finite and non-zero",
            ));
        }
        if !corrections.altitude_offset.is_finite() {
            return Err(ConfigError::ValueOutOfRange("altitude_offset must be finite"));
        }
        if !corrections.altitude_scale.is_finite()
            || corrections.altitude_scale.abs() < f64::EPSILON
        {
            return Err(ConfigError::ValueOutOfRange(
                "altitude_scale must be finite and non-zero",
            ));
        }

        if !self.summary.max_power_watts.is_finite() || self.summary.max_power_watts <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_power_watts must be a positive number",
            ));
        }

        Ok(())
    }
}
