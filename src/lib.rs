//! # Context Statusline
//!
//! Renders a two-line terminal statusline for Claude Code from the JSON
//! snapshot the host pipes in on stdin.
//!
//! ## Overview
//!
//! Line one shows, separated by `│`:
//! - Model display name
//! - Context window usage as an eighth-block progress bar, token count and percentage
//! - Claude Code version
//! - Accumulated session cost
//! - Current Git branch (omitted when there is none)
//! - Clock glyph, local time and session duration
//!
//! Line two shows the working directory, home-relative.
//!
//! ## Features
//!
//! - `git` (default): Enables in-process branch lookup via gix
//! - `colors` (default): Enables terminal color output via owo-colors

/// Progress bar rendering
pub mod bar;

/// Command-line argument parsing
pub mod cli;

/// Render configuration resolved from CLI and environment
pub mod config;

/// Line assembly
pub mod display;

/// Widget formatters for tokens, durations, clock and cost
pub mod format;

/// Branch lookup
pub mod git;

/// Context usage derivation
pub mod metrics;

/// Data models for the statusline input
pub mod models;

/// Terminal colors and percentage thresholds
pub mod palette;

/// Utility functions for stdin and ANSI handling
pub mod utils;
