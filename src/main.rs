use anyhow::{Context, Result};
use chrono::Local;
#[cfg(feature = "colors")]
use owo_colors::OwoColorize;
use std::path::Path;

use ctx_statusline::cli::Args;
use ctx_statusline::config::{RenderConfig, branch_lookup};
use ctx_statusline::display::{home_dir, render_lines};
use ctx_statusline::metrics::DerivedMetrics;
use ctx_statusline::models::SessionSnapshot;
use ctx_statusline::utils::{read_stdin, visible_width};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = RenderConfig::from_args(&args);

    let stdin = read_stdin().context("read stdin")?;
    let snapshot = SessionSnapshot::from_json_slice(&stdin).context("failed to parse JSON")?;

    let metrics = DerivedMetrics::derive(&snapshot, config.limit_pct);
    let branch = branch_lookup(args.branch_source).current_branch(Path::new(&snapshot.cwd));
    let home = home_dir();
    let now = Local::now();

    let lines = render_lines(
        &snapshot,
        &metrics,
        &now,
        branch.as_deref(),
        home.as_deref(),
        &config,
    );
    lines.print();

    if args.debug {
        let header = "=== Debug Information ===";
        #[cfg(feature = "colors")]
        eprintln!("{}", header.bright_black());
        #[cfg(not(feature = "colors"))]
        eprintln!("{header}");
        eprintln!(
            "Tokens: {} of {:.0} effective (window {}, limit {}%)",
            metrics.total_tokens,
            metrics.effective_max,
            snapshot.context_window.context_window_size,
            config.limit_pct
        );
        eprintln!(
            "Percent: raw={:.4} displayed={:.1}",
            metrics.percent, metrics.percent_display
        );
        eprintln!(
            "Branch: source={:?}, value={}",
            args.branch_source,
            branch.as_deref().unwrap_or("none")
        );
        eprintln!("Home: {}", home.as_deref().unwrap_or("unresolved"));
        eprintln!(
            "Visible width: line1={}, line2={}",
            visible_width(&lines.first),
            visible_width(&lines.second)
        );
    }
    Ok(())
}
