// Reactive hooks for landing sections
// Developed with 💀 by The Stats Landing Team (c)2025

mod animate_on_scroll;

pub use animate_on_scroll::use_animate_on_scroll;
