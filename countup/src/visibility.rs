//! Scroll-visibility contract.
//!
//! The browser hook feeds intersection reports into a [`VisibilityLatch`].
//! The latch starts hidden and flips to visible at most once; the section is
//! never re-hidden.

use crate::error::ConfigError;

/// Intersection ratio in `[0, 1]` at which an element counts as visible.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// Validate a raw ratio.
    pub fn new(ratio: f64) -> Result<Self, ConfigError> {
        if (0.0..=1.0).contains(&ratio) {
            Ok(Self(ratio))
        } else {
            Err(ConfigError::ThresholdOutOfRange(ratio))
        }
    }

    /// Raw ratio.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Whether a report meets this threshold.
    ///
    /// A zero threshold accepts any intersecting report, including one with a
    /// ratio of exactly 0 (an element touching the viewport edge).
    pub fn is_met(self, is_intersecting: bool, ratio: f64) -> bool {
        is_intersecting && ratio >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(crate::config::DEFAULT_THRESHOLD)
    }
}

/// One-way hidden -> visible latch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityLatch {
    threshold: Threshold,
    visible: bool,
}

impl VisibilityLatch {
    /// Hidden latch.
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    /// Feed one intersection report. Returns `true` only on the report that
    /// turns the latch visible.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.visible || !self.threshold.is_met(is_intersecting, ratio) {
            return false;
        }
        self.visible = true;
        true
    }

    /// Current signal value.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Threshold the latch compares against.
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }
}
