use once_cell::sync::Lazy;
use regex::Regex;
use std::io::Read;

static SGR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());

pub fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    Ok(buf)
}

/// Removes SGR color sequences, leaving the printable text.
pub fn strip_ansi(s: &str) -> String {
    SGR_RE.replace_all(s, "").into_owned()
}

/// Number of chars left once color sequences are removed.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).chars().count()
}
