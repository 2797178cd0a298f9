//! Widget formatters: pure functions from numbers to display text.

use chrono::Timelike;

/// Clock faces on the hour, indexed by `hour % 12` (index 0 is twelve o'clock)
const CLOCK_ON_HOUR: [char; 12] = [
    '\u{1F55B}', '\u{1F550}', '\u{1F551}', '\u{1F552}', '\u{1F553}', '\u{1F554}',
    '\u{1F555}', '\u{1F556}', '\u{1F557}', '\u{1F558}', '\u{1F559}', '\u{1F55A}',
];

/// Clock faces at half past, same indexing
const CLOCK_HALF_PAST: [char; 12] = [
    '\u{1F567}', '\u{1F55C}', '\u{1F55D}', '\u{1F55E}', '\u{1F55F}', '\u{1F560}',
    '\u{1F561}', '\u{1F562}', '\u{1F563}', '\u{1F564}', '\u{1F565}', '\u{1F566}',
];

pub const COST_GLYPH: &str = "💰";
pub const BRANCH_GLYPH: &str = "⎇";

/// Abbreviates a token count: `999`, `46.0k`, `1.2M`.
///
/// Values just below a million stay in thousands (`999999` is `1000.0k`).
pub fn format_tokens(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1e6)
    } else if n >= 1_000 {
        format!("{:.1}k", n as f64 / 1e3)
    } else {
        n.to_string()
    }
}

/// `(Xm)` under an hour, `(XhYm)` otherwise. Partial minutes are dropped.
pub fn format_duration(ms: f64) -> String {
    // saturating cast: negative and NaN become 0
    let total_minutes = (ms / 60_000.0) as u64;
    if total_minutes < 60 {
        format!("({total_minutes}m)")
    } else {
        format!("({}h{}m)", total_minutes / 60, total_minutes % 60)
    }
}

/// Analog clock glyph for a wall time, quantized to the hour or half hour.
pub fn clock_glyph(hour: u32, minute: u32) -> char {
    let idx = (hour % 12) as usize;
    if minute >= 30 {
        CLOCK_HALF_PAST[idx]
    } else {
        CLOCK_ON_HOUR[idx]
    }
}

/// Clock glyph, `HH:MM` and duration, e.g. `🕐 13:05 (1h23m)`.
pub fn format_clock<T: Timelike>(now: &T, duration_ms: f64) -> String {
    format!(
        "{} {:02}:{:02} {}",
        clock_glyph(now.hour(), now.minute()),
        now.hour(),
        now.minute(),
        format_duration(duration_ms)
    )
}

/// Truncates to one decimal place; the result drives both text and color.
pub fn truncate_percent(pct: f64) -> f64 {
    (pct * 10.0).floor() / 10.0
}

pub fn format_percent(pct_display: f64) -> String {
    format!("({pct_display:.1}%)")
}

pub fn format_cost(usd: f64) -> String {
    format!("{COST_GLYPH}${usd:.2}")
}
