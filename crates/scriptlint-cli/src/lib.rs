//! scriptlint-cli: the `scriptlint` command.
//!
//! Ties the collaborators around the kernel together:
//!
//! 1. Resolve settings from flags, config file, and defaults
//! 2. Discover documents (directory walk or git index)
//! 3. Read each document and extract its script blocks
//! 4. Lint every block and render the run report
//!
//! A document that can't be read is logged and treated as having no script
//! blocks; it never fails the run on its own.

pub mod args;
pub mod config;
pub mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use scriptlint_glob::{discover, staged_files};
use scriptlint_kernel::Linter;
use scriptlint_types::{DocumentReport, RunReport};

pub use args::Cli;
pub use config::{FileConfig, Format, Settings};

/// Exit status when any block has a defect.
pub const EXIT_DEFECTS: u8 = 1;
/// Exit status for usage, configuration, or discovery errors.
pub const EXIT_ERROR: u8 = 2;

/// Log filter applied when `RUST_LOG` names nothing more specific. A
/// target prefix, so it covers every `scriptlint_*` crate.
pub const DEFAULT_DIRECTIVE: &str = "scriptlint=warn";

/// The result of a run: the structured report and its rendering.
#[derive(Debug)]
pub struct Outcome {
    pub report: RunReport,
    pub output: String,
}

impl Outcome {
    /// 0 when clean, [`EXIT_DEFECTS`] otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.report.has_defects() {
            EXIT_DEFECTS
        } else {
            0
        }
    }
}

/// Run scriptlint with parsed arguments.
pub fn run(cli: &Cli) -> Result<Outcome> {
    let file = FileConfig::load(cli.config.as_deref())?;
    let settings = Settings::resolve(cli, file)?;
    tracing::debug!(
        mode = %settings.lint.approximation,
        include = ?settings.filter.include(),
        exclude = ?settings.filter.exclude(),
        "resolved settings"
    );

    let documents = if cli.staged {
        staged_files(Path::new("."), &settings.filter).context("failed to list staged files")?
    } else {
        discover(&cli.roots(), &settings.filter).context("failed to discover documents")?
    };
    tracing::info!(documents = documents.len(), "linting");

    let report = lint_documents(&Linter::new(settings.lint.clone()), &documents);
    let output = render::render(&report, settings.format, settings.color)
        .context("failed to render report")?;

    Ok(Outcome { report, output })
}

/// Lint each document in order.
pub fn lint_documents(linter: &Linter, paths: &[PathBuf]) -> RunReport {
    let mut report = RunReport::new();
    for path in paths {
        report.push(lint_file(linter, path));
    }
    report
}

/// Read one document and lint its script blocks.
pub fn lint_file(linter: &Linter, path: &Path) -> DocumentReport {
    let name = path.display().to_string();
    match std::fs::read_to_string(path) {
        Ok(markup) => linter.lint_markup(name, &markup),
        Err(err) => {
            tracing::warn!(path = %name, error = %err, "could not read document; skipping");
            DocumentReport::new(name)
        }
    }
}
