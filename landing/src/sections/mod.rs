// Landing page sections
// Developed with 💀 by The Stats Landing Team (c)2025

mod stats;

pub use stats::StatsSection;
