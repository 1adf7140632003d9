//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use scriptlint_kernel::Approximation;

use crate::config::Format;

/// Directory scanned when no paths are given.
pub const DEFAULT_ROOT: &str = "templates";

/// Check embedded scripts for duplicate top-level declarations and
/// unbalanced delimiters.
#[derive(Debug, Clone, Parser)]
#[command(name = "scriptlint", version)]
pub struct Cli {
    /// Files or directories to scan [default: templates]
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Lint the files staged for commit instead of walking paths
    #[arg(long, conflicts_with = "paths")]
    pub staged: bool,

    /// Configuration file [default: $XDG_CONFIG_HOME/scriptlint/config.toml]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Approximation mode: naive or aware
    #[arg(long, value_name = "MODE")]
    pub mode: Option<Approximation>,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Glob of files to include when walking directories (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub include: Vec<String>,

    /// Glob of files to skip when walking directories (repeatable)
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// The paths to scan, falling back to the default root.
    pub fn roots(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from(DEFAULT_ROOT)]
        } else {
            self.paths.clone()
        }
    }
}
