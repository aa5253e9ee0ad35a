//! Summary counter and progress bar values
//!
//! The scaling is cosmetic: totals at or above one billion are shortened
//! to "<n>.<d>B", and the bar width is derived from the remainder modulo
//! one billion.

use serde::{Deserialize, Serialize};
use txfeed_utils::format_locale;

const BILLION: f64 = 1e9;
const PERCENT_DIVISOR: f64 = 1e7;

/// Counter value shown for each synthetic transaction on the fallback path
pub const FALLBACK_TOTAL_PER_MOCK: f64 = 1_200_000_000.0;

/// Display text for a feed total
pub fn format_counter(total: f64) -> String {
    if total >= BILLION {
        // Ties round away from zero, so 1.25B shows as 1.3B.
        let tenths = (total / (BILLION / 10.0)).round() / 10.0;
        format!("{:.1}B", tenths)
    } else {
        format_locale(total)
    }
}

/// Progress bar width in percent, always within 0..=100
pub fn progress_percent(total: f64) -> u8 {
    if !total.is_finite() {
        return 0;
    }
    let raw = ((total % BILLION) / PERCENT_DIVISOR).round();
    raw.clamp(0.0, 100.0) as u8
}

/// Rendered counter state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterDisplay {
    pub total: f64,
    pub display: String,
    pub percent: u8,
}

impl CounterDisplay {
    pub fn new(total: f64) -> Self {
        Self {
            total,
            display: format_counter(total),
            percent: progress_percent(total),
        }
    }

    /// Counter used when `count` mock transactions stand in for real data
    pub fn fallback(count: usize) -> Self {
        Self::new(count as f64 * FALLBACK_TOTAL_PER_MOCK)
    }
}
