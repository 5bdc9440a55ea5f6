//! Journey configuration
//!
//! Every field has a default matching the shipped experience, so an absent
//! or partial JSON file is fine.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::overlay::AgeContextTable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub track_path: String,
    pub default_volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            track_path: "assets/song.mp3".into(),
            default_volume: 0.3,
        }
    }
}

/// Upper bound accepted for `max_age`
pub const MAX_AGE_LIMIT: u32 = 150;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JourneyConfig {
    /// Terminal age of the clock
    pub max_age: u32,
    /// Real seconds per simulated year at 1x
    pub seconds_per_year: f64,
    /// Speed multipliers, cycled in order
    pub speed_steps: Vec<u32>,
    pub birth_year_min: i32,
    pub birth_year_max: i32,
    /// Running time before an event panel hides itself
    pub panel_auto_dismiss_secs: f64,
    /// Interval of the background frame runner
    pub frame_interval_ms: u64,
    pub sky_seed: u64,
    pub audio: AudioConfig,
    pub age_context: AgeContextTable,
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            max_age: 90,
            seconds_per_year: 3.0,
            speed_steps: vec![1, 2, 5, 10, 50],
            birth_year_min: 1950,
            birth_year_max: 2020,
            panel_auto_dismiss_secs: 8.0,
            frame_interval_ms: 16,
            sky_seed: 12345,
            audio: AudioConfig::default(),
            age_context: AgeContextTable::default(),
        }
    }
}

impl JourneyConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!("Loaded journey config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) if p.exists() => Self::load(p),
            Some(p) => {
                debug!("No config at {}, using defaults", p.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_age == 0 || self.max_age > MAX_AGE_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_age must be within 1..={}",
                MAX_AGE_LIMIT
            )));
        }
        if !(self.seconds_per_year.is_finite() && self.seconds_per_year > 0.0) {
            return Err(ConfigError::Invalid(
                "seconds_per_year must be a positive number".into(),
            ));
        }
        if self.speed_steps.is_empty() || self.speed_steps.contains(&0) {
            return Err(ConfigError::Invalid(
                "speed_steps must be non-empty and non-zero".into(),
            ));
        }
        if self.birth_year_min > self.birth_year_max {
            return Err(ConfigError::Invalid(format!(
                "birth_year_min {} exceeds birth_year_max {}",
                self.birth_year_min, self.birth_year_max
            )));
        }
        if !(0.0..=1.0).contains(&self.audio.default_volume) {
            return Err(ConfigError::Invalid(
                "audio.default_volume must be within 0..=1".into(),
            ));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid("frame_interval_ms must be positive".into()));
        }
        self.age_context.validate()
    }

    /// Simulated years advanced per real second at 1x
    pub fn base_rate(&self) -> f64 {
        1.0 / self.seconds_per_year
    }
}
