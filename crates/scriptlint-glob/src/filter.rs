//! Include/exclude filtering with `rg -g` glob semantics.
//!
//! A glob without a `/` matches a file name at any depth; a glob with a `/`
//! is anchored at the walk root. Excludes win over includes. With no include
//! globs, every file not excluded is accepted.

use std::path::Path;

use ignore::overrides::{Override, OverrideBuilder};

use crate::GlobError;

/// Default include globs: markup files that embed scripts.
pub const DEFAULT_INCLUDE: &[&str] = &["*.html", "*.htm"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl Default for FileFilter {
    fn default() -> Self {
        Self {
            include: DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect(),
            exclude: Vec::new(),
        }
    }
}

impl FileFilter {
    /// Build a filter, checking every glob up front.
    pub fn new(include: Vec<String>, exclude: Vec<String>) -> Result<Self, GlobError> {
        let filter = Self { include, exclude };
        filter.matcher(Path::new("."))?;
        Ok(filter)
    }

    pub fn include(&self) -> &[String] {
        &self.include
    }

    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    /// Compile the globs relative to `root`.
    pub(crate) fn matcher(&self, root: &Path) -> Result<Override, GlobError> {
        let mut builder = OverrideBuilder::new(root);
        // Later globs take precedence, so excludes go last.
        let globs = self
            .include
            .iter()
            .cloned()
            .chain(self.exclude.iter().map(|g| format!("!{g}")));
        for glob in globs {
            builder.add(&glob).map_err(|source| GlobError::Pattern {
                pattern: glob.clone(),
                source,
            })?;
        }
        builder.build().map_err(|source| GlobError::Pattern {
            pattern: self.include.join(","),
            source,
        })
    }

    pub(crate) fn accepts(matcher: &Override, path: &Path) -> bool {
        !matcher.matched(path, false).is_ignore()
    }

    /// Whether `path` (relative to `root`) passes this filter.
    pub fn matches(&self, root: &Path, path: &Path) -> Result<bool, GlobError> {
        Ok(Self::accepts(&self.matcher(root)?, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn filter(include: &[&str], exclude: &[&str]) -> FileFilter {
        FileFilter::new(
            include.iter().map(|s| s.to_string()).collect(),
            exclude.iter().map(|s| s.to_string()).collect(),
        )
        .expect("valid globs")
    }

    #[rstest]
    #[case::html_at_root("index.html", true)]
    #[case::html_nested("templates/pages/index.html", true)]
    #[case::htm("legacy.htm", true)]
    #[case::script_file("app.js", false)]
    #[case::no_extension("Makefile", false)]
    fn default_filter(#[case] path: &str, #[case] accepted: bool) {
        let root = Path::new("site");
        let path = root.join(path);
        assert_eq!(FileFilter::default().matches(root, &path).ok(), Some(accepted));
    }

    #[test]
    fn exclude_wins_over_include() {
        let f = filter(&["*.html"], &["vendor/**"]);
        let root = Path::new("site");
        assert_eq!(f.matches(root, &root.join("vendor/x.html")).ok(), Some(false));
        assert_eq!(f.matches(root, &root.join("app/x.html")).ok(), Some(true));
    }

    #[test]
    fn no_includes_accepts_everything_not_excluded() {
        let f = filter(&[], &["*.min.js"]);
        let root = Path::new(".");
        assert_eq!(f.matches(root, Path::new("./a.js")).ok(), Some(true));
        assert_eq!(f.matches(root, Path::new("./a.min.js")).ok(), Some(false));
    }

    #[test]
    fn bad_glob_is_reported() {
        let err = FileFilter::new(vec!["[".to_string()], vec![]).unwrap_err();
        assert!(matches!(err, GlobError::Pattern { ref pattern, .. } if pattern == "["));
    }
}
