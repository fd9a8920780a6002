//! Animation constants for the stats section.
//!
//! Defaults reproduce the shipped section: a 2 second count, 150ms stagger
//! between items and a 50% intersection threshold.

use serde::Deserialize;

use crate::error::ConfigError;

/// Count-up duration used by the stats section.
pub const DEFAULT_DURATION_MS: u32 = 2000;
/// Entrance delay added per item position.
pub const DEFAULT_STAGGER_MS: u32 = 150;
/// Fraction of the section that must be on screen.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Timing and visibility knobs shared by every stat item.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Wall-clock length of one count-up run, in milliseconds.
    pub duration_ms: u32,
    /// Entrance transition delay per item index, in milliseconds.
    pub stagger_ms: u32,
    /// Intersection ratio at which the section counts as visible.
    pub threshold: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            stagger_ms: DEFAULT_STAGGER_MS,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl AnimationConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    ///
    /// Missing fields keep their defaults.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the animator and the visibility hook rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.threshold));
        }
        Ok(())
    }
}
