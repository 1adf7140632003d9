//! File discovery for scriptlint.
//!
//! Decides *which* documents get linted; reading and linting them is someone
//! else's job.
//!
//! - [`discover`] walks directories (gitignore aware, hidden entries
//!   skipped) and keeps files accepted by a [`FileFilter`]. Explicit file
//!   arguments are always kept.
//! - [`staged_files`] lists the files added, copied, or modified in the git
//!   index relative to `HEAD`, for pre-commit use.

mod filter;
mod staged;

pub use filter::FileFilter;
pub use staged::staged_files;

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Errors from file discovery.
#[derive(Debug, thiserror::Error)]
pub enum GlobError {
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: ignore::Error,
    },

    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("repository has no working directory: {}", .0.display())]
    BareRepository(PathBuf),

    #[error("git error: {0}")]
    Git(#[from] git2::Error),
}

/// Files to lint under `roots`, sorted and deduplicated.
///
/// A root that is a file is returned as-is. A root that is a directory is
/// walked and only files accepted by `filter` are kept. Unreadable entries
/// inside a walk are logged and skipped.
pub fn discover(roots: &[PathBuf], filter: &FileFilter) -> Result<Vec<PathBuf>, GlobError> {
    let mut files = Vec::new();

    for root in roots {
        if root.is_file() {
            files.push(root.clone());
            continue;
        }
        if !root.is_dir() {
            return Err(GlobError::NotFound(root.clone()));
        }
        walk_dir(root, filter, &mut files)?;
    }

    files.sort();
    files.dedup();
    tracing::debug!(count = files.len(), "discovered documents");
    Ok(files)
}

fn walk_dir(root: &Path, filter: &FileFilter, files: &mut Vec<PathBuf>) -> Result<(), GlobError> {
    let matcher = filter.matcher(root)?;
    let walker = WalkBuilder::new(root).require_git(false).build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(root = %root.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if FileFilter::accepts(&matcher, entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(())
}
