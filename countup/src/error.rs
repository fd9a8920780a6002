//! Error types for configuration and frame scheduling.

use thiserror::Error;

/// Rejected animation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Duration must be at least one millisecond.
    #[error("animation duration must be greater than zero")]
    ZeroDuration,
    /// Intersection threshold must lie in `[0, 1]`.
    #[error("visibility threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),
    /// Config document is not valid JSON for [`crate::AnimationConfig`].
    #[error("failed to parse animation config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The host could not schedule a frame callback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// No frame loop available (no window, detached document, JS exception).
    #[error("frame scheduling unavailable: {0}")]
    Unavailable(String),
}
