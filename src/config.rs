//! Render configuration, resolved once at startup and passed down explicitly.

use std::env;

use crate::cli::{Args, BranchSourceArg};
use crate::git::{BranchLookup, GitCli, NoBranch};
use crate::metrics::DEFAULT_LIMIT_PCT;
use crate::palette::Palette;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub limit_pct: f64,
    pub bar_width: usize,
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            limit_pct: DEFAULT_LIMIT_PCT,
            bar_width: crate::bar::DEFAULT_BAR_WIDTH,
            palette: Palette::new(true),
        }
    }
}

impl RenderConfig {
    pub fn from_args(args: &Args) -> Self {
        let no_color_env = env::var_os("NO_COLOR").is_some();
        Self {
            limit_pct: parse_limit_pct(args.context_limit_pct.as_deref()),
            bar_width: args.bar_width,
            palette: Palette::new(!args.no_color && !no_color_env),
        }
    }
}

/// Accepts a percentage in (0, 100]; anything else, including padded text, means no limit.
pub fn parse_limit_pct(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.parse::<f64>().ok())
        .filter(|v| *v > 0.0 && *v <= 100.0)
        .unwrap_or(DEFAULT_LIMIT_PCT)
}

pub fn branch_lookup(source: BranchSourceArg) -> Box<dyn BranchLookup> {
    match source {
        BranchSourceArg::Cli => Box::new(GitCli),
        #[cfg(feature = "git")]
        BranchSourceArg::Gix => Box::new(crate::git::GixRepo),
        #[cfg(not(feature = "git"))]
        BranchSourceArg::Gix => Box::new(GitCli),
        BranchSourceArg::Off => Box::new(NoBranch),
    }
}
