//! Files staged for commit.

use std::path::{Path, PathBuf};

use git2::{Delta, ErrorCode, Repository};

use crate::{FileFilter, GlobError};

/// Files added, copied, or modified in the index relative to `HEAD`.
///
/// `repo_dir` may be anywhere inside the working tree. Paths are returned
/// joined onto the working directory, filtered, sorted. With an unborn
/// `HEAD` (no commits yet) everything in the index counts as added.
pub fn staged_files(repo_dir: &Path, filter: &FileFilter) -> Result<Vec<PathBuf>, GlobError> {
    let repo = Repository::discover(repo_dir)?;
    let workdir = repo
        .workdir()
        .ok_or_else(|| GlobError::BareRepository(repo.path().to_path_buf()))?
        .to_path_buf();

    let head_tree = match repo.head() {
        Ok(head) => Some(head.peel_to_tree()?),
        Err(err) if matches!(err.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => None,
        Err(err) => return Err(err.into()),
    };

    let index = repo.index()?;
    let diff = repo.diff_tree_to_index(head_tree.as_ref(), Some(&index), None)?;
    let matcher = filter.matcher(&workdir)?;

    let mut files: Vec<PathBuf> = diff
        .deltas()
        .filter(|d| matches!(d.status(), Delta::Added | Delta::Copied | Delta::Modified))
        .filter_map(|d| d.new_file().path().map(|p| workdir.join(p)))
        .filter(|p| FileFilter::accepts(&matcher, p))
        .collect();

    files.sort();
    tracing::debug!(count = files.len(), workdir = %workdir.display(), "staged documents");
    Ok(files)
}
