//! Line assembly: turns derived metrics into the two statusline lines.

use chrono::Timelike;

use crate::bar::render_bar;
use crate::config::RenderConfig;
use crate::format::{BRANCH_GLYPH, format_clock, format_cost, format_percent, format_tokens};
use crate::metrics::DerivedMetrics;
use crate::models::SessionSnapshot;
use crate::palette::{Palette, Tone, percent_tone};

pub const SEPARATOR: &str = "│";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLines {
    pub first: String,
    pub second: String,
}

impl StatusLines {
    pub fn print(&self) {
        println!("{}", self.first);
        println!("{}", self.second);
    }
}

/// Bar, token count and percentage. Color follows the displayed percentage.
pub fn context_segment(metrics: &DerivedMetrics, bar_width: usize, palette: &Palette) -> String {
    let tone = percent_tone(metrics.percent_display);
    format!(
        "{} {} {}",
        render_bar(metrics.percent, bar_width, tone, palette),
        palette.paint(&format_tokens(metrics.total_tokens), Tone::Text),
        palette.paint(&format_percent(metrics.percent_display), tone)
    )
}

pub fn render_lines<T: Timelike>(
    snapshot: &SessionSnapshot,
    metrics: &DerivedMetrics,
    now: &T,
    branch: Option<&str>,
    home: Option<&str>,
    config: &RenderConfig,
) -> StatusLines {
    let palette = &config.palette;
    let mut parts: Vec<String> = Vec::with_capacity(6);

    parts.push(palette.paint(&snapshot.model.display_name, Tone::Model));
    parts.push(context_segment(metrics, config.bar_width, palette));
    parts.push(palette.paint(&format!("v{}", snapshot.version), Tone::Text));
    parts.push(palette.paint(&format_cost(snapshot.cost.total_cost_usd), Tone::Cost));
    if let Some(br) = branch.filter(|b| !b.is_empty()) {
        parts.push(palette.paint(&format!("{BRANCH_GLYPH} {br}"), Tone::Branch));
    }
    parts.push(palette.paint(
        &format_clock(now, snapshot.cost.total_duration_ms),
        Tone::Text,
    ));

    let divider = format!(" {} ", palette.paint(SEPARATOR, Tone::Text));
    StatusLines {
        first: parts.join(&divider),
        second: palette.paint(&abbreviate_home(&snapshot.cwd, home), Tone::Path),
    }
}

/// Replaces a leading `home` with `~`. Plain string prefix, no path-boundary check.
pub fn abbreviate_home(path: &str, home: Option<&str>) -> String {
    match home.filter(|h| !h.is_empty()) {
        Some(h) => match path.strip_prefix(h) {
            Some(rest) => format!("~{rest}"),
            None => path.to_owned(),
        },
        None => path.to_owned(),
    }
}

pub fn home_dir() -> Option<String> {
    directories::BaseDirs::new().map(|b| b.home_dir().to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContextWindow, CostInfo, CurrentUsage, ModelInfo};
    use crate::utils::strip_ansi;
    use chrono::NaiveTime;

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            model: ModelInfo {
                display_name: "Opus".to_string(),
            },
            context_window: ContextWindow {
                context_window_size: 200_000,
                current_usage: CurrentUsage {
                    input_tokens: 1_000,
                    cache_creation_input_tokens: 5_000,
                    cache_read_input_tokens: 94_000,
                },
            },
            version: "2.0.14".to_string(),
            cost: CostInfo {
                total_cost_usd: 3.456,
                total_duration_ms: 4_980_000.0,
            },
            cwd: "/home/dev/work/app".to_string(),
        }
    }

    fn plain_config() -> RenderConfig {
        RenderConfig {
            palette: Palette::plain(),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_plain_lines() {
        let snap = snapshot();
        let m = DerivedMetrics::derive(&snap, 100.0);
        let now = NaiveTime::from_hms_opt(13, 7, 0).unwrap();
        let lines = render_lines(&snap, &m, &now, Some("main"), Some("/home/dev"), &plain_config());
        assert_eq!(
            lines.first,
            "Opus │ █████      100.0k (50.0%) │ v2.0.14 │ 💰$3.46 │ ⎇ main │ 🕐 13:07 (1h23m)"
        );
        assert_eq!(lines.second, "~/work/app");
    }

    #[test]
    fn test_branch_segment_omitted() {
        let snap = snapshot();
        let m = DerivedMetrics::derive(&snap, 100.0);
        let now = NaiveTime::from_hms_opt(13, 7, 0).unwrap();
        for branch in [None, Some("")] {
            let lines = render_lines(&snap, &m, &now, branch, None, &plain_config());
            assert!(!lines.first.contains(BRANCH_GLYPH));
            assert_eq!(lines.first.matches(SEPARATOR).count(), 4);
            assert_eq!(lines.second, "/home/dev/work/app");
        }
    }

    #[test]
    fn test_colored_segments_reset_themselves() {
        let snap = snapshot();
        let m = DerivedMetrics::derive(&snap, 100.0);
        let now = NaiveTime::from_hms_opt(9, 45, 0).unwrap();
        let cfg = RenderConfig {
            palette: Palette::new(true),
            ..Default::default()
        };
        let lines = render_lines(&snap, &m, &now, Some("dev"), Some("/home/dev"), &cfg);
        let plain = render_lines(&snap, &m, &now, Some("dev"), Some("/home/dev"), &plain_config());
        assert_eq!(strip_ansi(&lines.first), plain.first);
        assert_eq!(strip_ansi(&lines.second), plain.second);
        if cfg.palette.is_enabled() {
            assert!(lines.first.contains("\x1b["));
            assert!(lines.first.ends_with('m'));
        }
    }

    #[test]
    fn test_context_segment_color_uses_displayed_percent() {
        let m = DerivedMetrics {
            total_tokens: 179_999,
            effective_max: 200_000.0,
            percent: 89.9995,
            percent_display: 89.9,
        };
        let seg = context_segment(&m, 10, &Palette::plain());
        assert!(seg.ends_with("180.0k (89.9%)"), "{seg}");
        assert_eq!(percent_tone(m.percent_display), Tone::Warning);
    }

    #[cfg(feature = "colors")]
    #[test]
    fn test_context_segment_paints_displayed_percent() {
        // rounding 89.9995 would give 90.0 (alert); truncation keeps it at warning
        let m = DerivedMetrics {
            total_tokens: 179_999,
            effective_max: 200_000.0,
            percent: 89.9995,
            percent_display: 89.9,
        };
        let seg = context_segment(&m, 10, &Palette::new(true));
        assert!(seg.contains("\x1b[38;5;208m(89.9%)"), "{seg:?}");
        assert!(!seg.contains("\x1b[31m"), "{seg:?}");
        assert!(seg.contains("48;5;236"), "{seg:?}");
    }

    #[test]
    fn test_abbreviate_home() {
        assert_eq!(abbreviate_home("/home/dev/x", Some("/home/dev")), "~/x");
        assert_eq!(abbreviate_home("/home/dev", Some("/home/dev")), "~");
        // prefix match only, not path-aware
        assert_eq!(abbreviate_home("/home/developer", Some("/home/dev")), "~eloper");
        assert_eq!(abbreviate_home("/srv/app", Some("/home/dev")), "/srv/app");
        assert_eq!(abbreviate_home("/srv/app", None), "/srv/app");
        assert_eq!(abbreviate_home("/srv/app", Some("")), "/srv/app");
    }
}
