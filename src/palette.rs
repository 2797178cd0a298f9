//! Terminal colors for statusline segments.
//!
//! Every painted string carries its own SGR start and reset, so segments can be
//! concatenated in any order without bleeding color into their neighbours.

#[cfg(feature = "colors")]
use owo_colors::{AnsiColors, DynColors, OwoColorize, XtermColors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Neutral bright white for plain text and separators
    Text,
    Model,
    Cost,
    Branch,
    Path,
    Nominal,
    Caution,
    Warning,
    Alert,
}

/// Percentage thresholds, checked top-down with `>=`
pub const PERCENT_THRESHOLDS: [(f64, Tone); 3] = [
    (90.0, Tone::Alert),
    (70.0, Tone::Warning),
    (50.0, Tone::Caution),
];

/// Tone for a displayed (already truncated) percentage.
pub fn percent_tone(pct: f64) -> Tone {
    PERCENT_THRESHOLDS
        .iter()
        .find(|(threshold, _)| pct >= *threshold)
        .map(|(_, tone)| *tone)
        .unwrap_or(Tone::Nominal)
}

#[cfg(feature = "colors")]
impl Tone {
    fn dyn_color(self) -> DynColors {
        match self {
            Tone::Text => DynColors::Ansi(AnsiColors::BrightWhite),
            Tone::Model => DynColors::Ansi(AnsiColors::Cyan),
            Tone::Cost => DynColors::Rgb(255, 215, 0),
            Tone::Branch => DynColors::Ansi(AnsiColors::Magenta),
            Tone::Path => DynColors::Ansi(AnsiColors::BrightBlack),
            Tone::Nominal => DynColors::Ansi(AnsiColors::Green),
            Tone::Caution => DynColors::Ansi(AnsiColors::Yellow),
            Tone::Warning => DynColors::Xterm(XtermColors::from(208)),
            Tone::Alert => DynColors::Ansi(AnsiColors::Red),
        }
    }
}

/// Dark grey background behind the progress bar
#[cfg(feature = "colors")]
fn bar_track() -> DynColors {
    DynColors::Xterm(XtermColors::from(236))
}

/// Paints text in a [`Tone`], or passes it through when color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: enabled && cfg!(feature = "colors"),
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[cfg_attr(not(feature = "colors"), allow(unused_variables))]
    pub fn paint(&self, text: &str, tone: Tone) -> String {
        #[cfg(feature = "colors")]
        if self.enabled {
            return format!("{}", text.color(tone.dyn_color()));
        }
        text.to_owned()
    }

    /// Like [`Palette::paint`], on the bar's dark track background.
    #[cfg_attr(not(feature = "colors"), allow(unused_variables))]
    pub fn paint_bar(&self, text: &str, tone: Tone) -> String {
        #[cfg(feature = "colors")]
        if self.enabled {
            return format!("{}", text.color(tone.dyn_color()).on_color(bar_track()));
        }
        text.to_owned()
    }
}
