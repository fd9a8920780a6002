//! # countup
//!
//! Host-independent core of the stats landing section: percentage counters
//! that count up from zero when their section scrolls into view.
//!
//! The browser pieces (requestAnimationFrame, IntersectionObserver, Leptos
//! signals) live in the `stats-landing` crate. Everything here is plain Rust
//! and runs under `cargo test` without a browser.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use countup::testing::ManualScheduler;
//! use countup::{AnimationConfig, CountUpAnimator};
//!
//! let scheduler = Rc::new(ManualScheduler::new());
//! let shown = Rc::new(Cell::new(0));
//! let sink = shown.clone();
//!
//! let animator = CountUpAnimator::new(
//!     scheduler.clone(),
//!     AnimationConfig::default(),
//!     83,
//!     move |value| sink.set(value),
//! );
//!
//! animator.set_active(true);
//! for t in [0.0, 500.0, 1000.0, 1500.0, 2000.0] {
//!     scheduler.advance_to(t);
//! }
//! assert_eq!(shown.get(), 83);
//! ```
//!
//! ## Architecture
//!
//! - [`stat`] - the static table of stats rendered by the section
//! - [`config`] - animation constants and their validation
//! - [`frame`] - the per-frame scheduling seam ([`FrameScheduler`])
//! - [`progress`] - pure frame math and the lazy frame sequence
//! - [`animator`] - the cancellable count-up state machine
//! - [`visibility`] - one-way visibility latch over intersection reports
//! - [`stagger`] - entrance transition delays per item
//! - [`testing`] - a deterministic scheduler for tests and headless hosts
//!
//! ---
//!
//! Developed with 💀 by The Stats Landing Team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod animator;
pub mod config;
pub mod error;
pub mod frame;
pub mod progress;
pub mod stagger;
pub mod stat;
pub mod testing;
pub mod visibility;

pub use animator::{AnimationState, CountUpAnimator};
pub use config::AnimationConfig;
pub use error::{ConfigError, SchedulerError};
pub use frame::{FrameCallback, FrameHandle, FrameScheduler};
pub use progress::{CountUpFrames, FrameValue, count_up, frame_value};
pub use stat::{STATS, Stat, format_percent};
pub use visibility::{Threshold, VisibilityLatch};
