//! Lint configuration.
//!
//! The default is the reference behavior: a purely lexical scan where every
//! character counts, with all three declaration keywords indexed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use scriptlint_types::DeclarationKeyword;

/// How literally the text is read before depth and balance are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Approximation {
    /// Line-granularity approximation over the raw text (`LineApprox`).
    /// Delimiters and keywords inside strings and comments count.
    #[default]
    #[serde(alias = "naive")]
    LexicalNaive,
    /// Same line approximation, but string, template, regex, and comment
    /// contents are masked out first.
    #[serde(alias = "aware")]
    StringAndCommentAware,
}

impl Approximation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Approximation::LexicalNaive => "lexical-naive",
            Approximation::StringAndCommentAware => "string-and-comment-aware",
        }
    }
}

impl fmt::Display for Approximation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an approximation name fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown approximation mode '{0}' (expected naive or aware)")]
pub struct UnknownApproximation(pub String);

impl FromStr for Approximation {
    type Err = UnknownApproximation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" | "lexical-naive" => Ok(Approximation::LexicalNaive),
            "aware" | "string-and-comment-aware" => Ok(Approximation::StringAndCommentAware),
            other => Err(UnknownApproximation(other.to_string())),
        }
    }
}

/// Configuration for a [`Linter`](crate::Linter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LintConfig {
    pub approximation: Approximation,
    /// Declaration forms that are indexed. Others are ignored entirely.
    pub keywords: Vec<DeclarationKeyword>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            approximation: Approximation::default(),
            keywords: DeclarationKeyword::ALL.to_vec(),
        }
    }
}

impl LintConfig {
    /// Reference behavior: raw lexical scan.
    pub fn naive() -> Self {
        Self::default()
    }

    /// Mask literal and comment contents before scanning.
    pub fn aware() -> Self {
        Self::default().with_approximation(Approximation::StringAndCommentAware)
    }

    pub fn with_approximation(mut self, approximation: Approximation) -> Self {
        self.approximation = approximation;
        self
    }

    pub fn with_keywords(mut self, keywords: impl IntoIterator<Item = DeclarationKeyword>) -> Self {
        self.keywords = keywords.into_iter().collect();
        self
    }

    /// Whether declarations using `keyword` are indexed.
    pub fn tracks(&self, keyword: DeclarationKeyword) -> bool {
        self.keywords.contains(&keyword)
    }
}
