//! Browser side of the stats landing page.
//!
//! Wires the `countup` core to Leptos: `requestAnimationFrame` for frames,
//! `IntersectionObserver` for visibility, the console for logs.
//!
//! Developed with 💀 by The Stats Landing Team (c)2025

pub mod hooks;
pub mod logging;
pub mod raf;
pub mod sections;
