//! # Metrics Module
//!
//! Derives context window usage from a [`SessionSnapshot`].
//!
//! The effective maximum is the context window scaled by the configured limit
//! percentage, so a limit of 80 makes 80% of the real window read as 100%.

use crate::format::truncate_percent;
use crate::models::SessionSnapshot;

/// Limit percentage meaning "the whole window"
pub const DEFAULT_LIMIT_PCT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub total_tokens: u64,
    pub effective_max: f64,
    /// Raw usage percentage, used for the bar
    pub percent: f64,
    /// Percentage truncated to one decimal, used for text and color
    pub percent_display: f64,
}

impl DerivedMetrics {
    pub fn derive(snapshot: &SessionSnapshot, limit_pct: f64) -> Self {
        let total_tokens = snapshot.context_window.current_usage.total();
        let effective_max = snapshot.context_window.context_window_size as f64 * limit_pct / 100.0;
        let percent = usage_percent(total_tokens, effective_max);
        Self {
            total_tokens,
            effective_max,
            percent,
            percent_display: truncate_percent(percent),
        }
    }
}

/// Percentage of `effective_max` used, or 0 when there is no usable maximum.
pub fn usage_percent(total_tokens: u64, effective_max: f64) -> f64 {
    if effective_max.is_nan() || effective_max <= 0.0 {
        return 0.0;
    }
    let pct = total_tokens as f64 / effective_max * 100.0;
    if pct.is_finite() { pct } else { 0.0 }
}
