//! # Bar Module
//!
//! Fixed-width progress bar with eighth-of-a-cell resolution.
//!
//! A bar of width `W` has `W * 8` steps. Whole cells are drawn with `█`, one
//! trailing cell may hold a partial block (`▏` .. `▉`) and the rest is padded
//! with spaces. The visible width is always exactly `W`, whatever the input.

use crate::palette::{Palette, Tone};

pub const DEFAULT_BAR_WIDTH: usize = 10;

const FULL_BLOCK: char = '█';
const EMPTY_CELL: char = ' ';

/// Partial blocks for 1/8 .. 7/8 of a cell
const PARTIAL_BLOCKS: [char; 7] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarFill {
    pub full: usize,
    pub partial: Option<char>,
}

impl BarFill {
    /// Cells holding any ink, counting a partial block as one.
    pub fn filled_cells(&self) -> usize {
        self.full + usize::from(self.partial.is_some())
    }
}

/// Splits a raw percentage into full cells and an optional partial cell.
pub fn bar_fill(pct: f64, width: usize) -> BarFill {
    let steps = (pct / 100.0 * width as f64 * 8.0).floor();
    // saturating cast: negative and NaN become 0
    let steps = steps as usize;
    let full = (steps / 8).min(width);
    let remainder = steps % 8;
    let partial = if remainder > 0 && full < width {
        Some(PARTIAL_BLOCKS[remainder - 1])
    } else {
        None
    };
    BarFill { full, partial }
}

/// The bar's glyphs without any color.
pub fn bar_glyphs(pct: f64, width: usize) -> String {
    let fill = bar_fill(pct, width);
    let mut out = String::with_capacity(width.saturating_mul(FULL_BLOCK.len_utf8()));
    out.extend(std::iter::repeat_n(FULL_BLOCK, fill.full));
    if let Some(c) = fill.partial {
        out.push(c);
    }
    out.extend(std::iter::repeat_n(EMPTY_CELL, width - fill.filled_cells()));
    out
}

/// The bar painted in `tone` over the dark track background.
pub fn render_bar(pct: f64, width: usize, tone: Tone, palette: &Palette) -> String {
    palette.paint_bar(&bar_glyphs(pct, width), tone)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: usize = 10;

    #[test]
    fn test_empty_bar() {
        assert_eq!(bar_glyphs(0.0, WIDTH), "          ");
    }

    #[test]
    fn test_full_bar() {
        assert_eq!(bar_glyphs(100.0, WIDTH), "██████████");
    }

    #[test]
    fn test_half_bar() {
        assert_eq!(bar_glyphs(50.0, WIDTH), "█████     ");
    }

    #[test]
    fn test_partial_blocks() {
        // 1 step = 1.25%
        assert_eq!(bar_glyphs(1.25, WIDTH), "▏         ");
        assert_eq!(bar_glyphs(6.25, WIDTH), "▋         ");
        assert_eq!(bar_glyphs(12.5, WIDTH), "█▎        ");
        assert_eq!(bar_glyphs(96.875, WIDTH), "█████████▋");
    }

    #[test]
    fn test_below_one_step_is_empty() {
        assert_eq!(bar_fill(1.0, WIDTH), BarFill { full: 0, partial: None });
    }

    #[test]
    fn test_overflow_is_clamped() {
        assert_eq!(bar_glyphs(150.0, WIDTH), "██████████");
        assert_eq!(bar_glyphs(100.5, WIDTH), "██████████");
        assert_eq!(bar_fill(1e300, WIDTH).full, WIDTH);
    }

    #[test]
    fn test_negative_and_nan_are_empty() {
        assert_eq!(bar_glyphs(-20.0, WIDTH), "          ");
        assert_eq!(bar_glyphs(f64::NAN, WIDTH), "          ");
    }

    #[test]
    fn test_width_invariant() {
        for width in [0usize, 1, 3, 10, 17, 40] {
            let mut pct = -10.0;
            while pct <= 210.0 {
                let bar = bar_glyphs(pct, width);
                assert_eq!(bar.chars().count(), width, "pct={pct} width={width}");
                pct += 0.37;
            }
        }
    }

    #[test]
    fn test_fill_is_monotonic() {
        let mut prev = 0;
        let mut pct = 0.0;
        while pct <= 120.0 {
            let cells = bar_fill(pct, WIDTH).filled_cells();
            assert!(cells >= prev, "pct={pct} cells={cells} prev={prev}");
            prev = cells;
            pct += 0.1;
        }
    }

    #[test]
    fn test_render_bar_plain_matches_glyphs() {
        let p = Palette::plain();
        assert_eq!(render_bar(50.0, WIDTH, Tone::Caution, &p), bar_glyphs(50.0, WIDTH));
    }
}
