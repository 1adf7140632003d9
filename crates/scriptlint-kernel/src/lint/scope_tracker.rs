//! Top-level declaration tracking.
//!
//! Tracks which identifiers are bound at top level without a parser. The
//! only notion of scope is a running brace depth, advanced one line at a
//! time: a declaration counts as top level when no brace was left open by
//! the lines *before* it. A brace opened on the declaration's own line takes
//! effect from the next line on.
//!
//! It cannot tell two sibling blocks apart, and
//! a keyword that happens to sit inside a string or comment is still a
//! declaration unless the text was masked first.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use scriptlint_types::{DeclarationKeyword, Defect, Occurrence};

/// One capture pattern per keyword: the keyword, whitespace, an identifier.
#[allow(clippy::expect_used)] // patterns are literals
static DECLARATION_PATTERNS: LazyLock<[(DeclarationKeyword, Regex); 3]> = LazyLock::new(|| {
    DeclarationKeyword::ALL.map(|keyword| {
        let pattern = format!(r"\b{}\s+(\w+)", keyword.as_str());
        let re = Regex::new(&pattern).expect("declaration pattern must compile");
        (keyword, re)
    })
});

/// Top-level occurrences grouped by identifier.
///
/// Identifiers keep the order in which they were first seen; each one's
/// occurrences are in line order.
#[derive(Debug, Default, Clone)]
pub struct DeclarationIndex {
    entries: Vec<(String, Vec<Occurrence>)>,
    positions: HashMap<String, usize>,
}

impl DeclarationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, occurrence: Occurrence) {
        match self.positions.get(&occurrence.identifier) {
            Some(&i) => self.entries[i].1.push(occurrence),
            None => {
                self.positions
                    .insert(occurrence.identifier.clone(), self.entries.len());
                self.entries
                    .push((occurrence.identifier.clone(), vec![occurrence]));
            }
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&[Occurrence]> {
        self.positions
            .get(identifier)
            .map(|&i| self.entries[i].1.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Identifiers bound more than once, as duplicate-declaration defects.
    pub fn into_duplicates(self) -> Vec<Defect> {
        self.entries
            .into_iter()
            .filter(|(_, occurrences)| occurrences.len() > 1)
            .map(|(identifier, occurrences)| Defect::DuplicateDeclaration {
                identifier,
                occurrences,
            })
            .collect()
    }
}

/// Line-by-line depth bookkeeping over one script block.
pub struct ScopeTracker<'a> {
    keywords: &'a [DeclarationKeyword],
    /// Open minus close braces over every line fed so far.
    depth: i64,
    line_number: usize,
    index: DeclarationIndex,
}

impl<'a> ScopeTracker<'a> {
    /// Create a tracker that indexes only the given keywords.
    pub fn new(keywords: &'a [DeclarationKeyword]) -> Self {
        Self {
            keywords,
            depth: 0,
            line_number: 0,
            index: DeclarationIndex::new(),
        }
    }

    /// Running depth after the lines fed so far.
    pub fn depth(&self) -> i64 {
        self.depth
    }

    /// Feed the next line.
    ///
    /// `source` is the original line, kept for diagnostics. `code` is the
    /// line that is actually scanned: the same text, or a masked copy of it
    /// with identical character positions.
    pub fn feed_line(&mut self, source: &str, code: &str) {
        self.line_number += 1;

        let opens = code.matches('{').count() as i64;
        let closes = code.matches('}').count() as i64;
        self.depth += opens - closes;
        let depth_before = self.depth - (opens - closes);

        if depth_before > 0 {
            return;
        }

        let mut found: Vec<Occurrence> = Vec::new();
        for (keyword, re) in DECLARATION_PATTERNS.iter() {
            if !self.keywords.contains(keyword) {
                continue;
            }
            for caps in re.captures_iter(code) {
                let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                found.push(Occurrence {
                    identifier: name.as_str().to_string(),
                    line: self.line_number,
                    column: code[..whole.start()].chars().count() + 1,
                    keyword: *keyword,
                    source_line: source.to_string(),
                });
            }
        }
        found.sort_by_key(|o| o.column);

        for occurrence in found {
            tracing::trace!(
                identifier = %occurrence.identifier,
                line = occurrence.line,
                keyword = %occurrence.keyword,
                "top-level declaration"
            );
            self.index.insert(occurrence);
        }
    }

    /// Finish scanning and hand back the index.
    pub fn finish(self) -> DeclarationIndex {
        self.index
    }
}

/// Duplicate top-level declarations in a block.
///
/// `source` and `code` must have the same line structure; `code` is what
/// gets scanned and `source` supplies the diagnostic line text.
pub fn find_duplicates(source: &str, code: &str, keywords: &[DeclarationKeyword]) -> Vec<Defect> {
    let mut tracker = ScopeTracker::new(keywords);
    for (source_line, code_line) in source.split('\n').zip(code.split('\n')) {
        tracker.feed_line(source_line, code_line);
    }
    tracker.finish().into_duplicates()
}
