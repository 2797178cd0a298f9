use crate::bar::DEFAULT_BAR_WIDTH;

/// Env var that scales the context window down to its practical ceiling
pub const CONTEXT_LIMIT_ENV: &str = "CLAUDE_STATUSLINE_CONTEXT_LIMIT_PCT";

pub const MAX_BAR_WIDTH: u64 = 500;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchSourceArg {
    /// Run `git branch --show-current` in the session cwd
    Cli,
    /// Read HEAD in-process via gix (falls back to `cli` without the `git` feature)
    Gix,
    /// Never show a branch
    Off,
}

#[derive(clap::Parser, Debug)]
#[command(version, about = "Two-line context window statusline for Claude Code")]
pub struct Args {
    /// Percentage of the context window treated as full, in (0, 100].
    /// Invalid values are ignored
    #[arg(long, env = CONTEXT_LIMIT_ENV)]
    pub context_limit_pct: Option<String>,

    /// Progress bar width in cells (1-500)
    #[arg(
        long,
        default_value_t = DEFAULT_BAR_WIDTH,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=MAX_BAR_WIDTH)
    )]
    pub bar_width: usize,

    /// Where the branch segment comes from: cli|gix|off
    #[arg(long, value_enum, default_value_t = BranchSourceArg::Cli)]
    pub branch_source: BranchSourceArg,

    /// Disable colors (also honored: NO_COLOR)
    #[arg(long)]
    pub no_color: bool,

    /// Debug mode: print derived values to stderr
    #[arg(long, env = "CLAUDE_DEBUG")]
    pub debug: bool,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }
}
