//! Staggered entrance transitions for the stat grid.
//!
//! Item `i` starts its fade/slide `i * stagger_ms` after the section becomes
//! visible. The delay is independent of the item's own count-up.

use std::time::Duration;

/// Delay before item `index` starts its entrance transition.
pub fn entrance_delay(index: usize, stagger_ms: u32) -> Duration {
    let index = u64::try_from(index).unwrap_or(u64::MAX);
    Duration::from_millis(index.saturating_mul(u64::from(stagger_ms)))
}

/// `transition-delay` value for item `index`, e.g. `"450ms"`.
pub fn transition_delay_css(index: usize, stagger_ms: u32) -> String {
    format!("{}ms", entrance_delay(index, stagger_ms).as_millis())
}
