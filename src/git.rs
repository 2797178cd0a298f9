//! # Git Module
//!
//! Current-branch lookup for the statusline's branch segment.
//!
//! ## Sources
//!
//! - [`GitCli`]: runs `git branch --show-current` in the working directory
//! - [`GixRepo`]: reads `HEAD` in-process via gix (feature `git`)
//!
//! Every failure (no repository, detached `HEAD`, missing `git` executable,
//! unreadable directory) reads as "no branch".

use std::path::Path;
use std::process::{Command, Stdio};

/// Something that can name the branch checked out in a directory.
pub trait BranchLookup {
    fn current_branch(&self, dir: &Path) -> Option<String>;
}

impl<F> BranchLookup for F
where
    F: Fn(&Path) -> Option<String>,
{
    fn current_branch(&self, dir: &Path) -> Option<String> {
        self(dir)
    }
}

/// Never reports a branch
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBranch;

impl BranchLookup for NoBranch {
    fn current_branch(&self, _dir: &Path) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl BranchLookup for GitCli {
    fn current_branch(&self, dir: &Path) -> Option<String> {
        let mut cmd = Command::new("git");
        cmd.args(["branch", "--show-current"])
            .stdin(Stdio::null())
            .stderr(Stdio::null());
        // An empty cwd means "wherever we were started"
        if !dir.as_os_str().is_empty() {
            cmd.current_dir(dir);
        }
        let output = cmd.output().ok()?;
        if !output.status.success() {
            return None;
        }
        non_empty(String::from_utf8_lossy(&output.stdout).trim())
    }
}

#[cfg(feature = "git")]
#[derive(Debug, Clone, Copy, Default)]
pub struct GixRepo;

#[cfg(feature = "git")]
impl BranchLookup for GixRepo {
    fn current_branch(&self, dir: &Path) -> Option<String> {
        let start = if dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            dir
        };
        let repo = gix::discover(start).ok()?;
        let head = repo.head().ok()?;
        let name = head.referent_name()?;
        non_empty(&name.shorten().to_string())
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_owned())
    }
}
