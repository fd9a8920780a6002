//! Static stats table rendered by the section.

/// One percentage stat with its caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    /// Percentage, 0 to 100.
    pub value: u32,
    /// Caption shown under the number.
    pub label: &'static str,
}

/// Items of the stats section, in display order.
pub const STATS: [Stat; 4] = [
    Stat {
        value: 83,
        label: "of shoppers want personalized offers",
    },
    Stat {
        value: 41,
        label: "of millennials would try a new retailer if it offered better personalized deals",
    },
    Stat {
        value: 71,
        label: "of shoppers say they’d shop more often if stores used augmented reality",
    },
    Stat {
        value: 55,
        label: "of shoppers are more likely to return after seeing an in-store ad that influenced their decision",
    },
];

/// Render a counter value the way the section shows it: `"83%"`.
pub fn format_percent(value: u32) -> String {
    format!("{value}%")
}
