//! Configuration file loading and resolution.
//!
//! Settings come from three layers, highest precedence first:
//!
//! | Layer | Source |
//! |-------|--------|
//! | Flags | `--mode`, `--format`, `--include`, `--exclude` |
//! | File  | `--config <path>`, else `$XDG_CONFIG_HOME/scriptlint/config.toml` |
//! | Defaults | naive mode, all keywords, `*.html`/`*.htm`, human output |
//!
//! ```toml
//! approximation = "aware"
//! keywords = ["let", "const"]
//! include = ["*.html", "*.jinja"]
//! exclude = ["vendor/**"]
//! format = "json"
//! ```

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use scriptlint_glob::FileFilter;
use scriptlint_kernel::{Approximation, LintConfig};
use scriptlint_types::DeclarationKeyword;

use crate::args::Cli;

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Human,
    Json,
}

/// Errors loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// The contents of a `config.toml`. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub approximation: Option<Approximation>,
    pub keywords: Option<Vec<DeclarationKeyword>>,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub format: Option<Format>,
}

impl FileConfig {
    /// Load the explicit config file, or the default one if it exists.
    ///
    /// A missing default file is fine; a missing explicit file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::read(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

/// Get the default config file path.
///
/// Uses `$XDG_CONFIG_HOME/scriptlint/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|d| d.config_dir().join("scriptlint").join("config.toml"))
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub lint: LintConfig,
    pub filter: FileFilter,
    pub format: Format,
    pub color: bool,
}

impl Settings {
    /// Merge flags over the file config over defaults.
    pub fn resolve(cli: &Cli, file: FileConfig) -> anyhow::Result<Self> {
        let mut lint = LintConfig::default();
        if let Some(mode) = cli.mode.or(file.approximation) {
            lint = lint.with_approximation(mode);
        }
        if let Some(keywords) = file.keywords {
            lint = lint.with_keywords(keywords);
        }

        let defaults = FileFilter::default();
        let include = match (&cli.include[..], file.include) {
            ([], Some(from_file)) => from_file,
            ([], None) => defaults.include().to_vec(),
            (flags, _) => flags.to_vec(),
        };
        let exclude = match (&cli.exclude[..], file.exclude) {
            ([], Some(from_file)) => from_file,
            ([], None) => Vec::new(),
            (flags, _) => flags.to_vec(),
        };
        let filter = FileFilter::new(include, exclude)?;

        let format = cli.format.or(file.format).unwrap_or_default();
        let color = !cli.no_color && format == Format::Human && io::stdout().is_terminal();

        Ok(Self {
            lint,
            filter,
            format,
            color,
        })
    }
}
