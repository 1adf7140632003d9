//! The Linter: runs every check over script blocks and merges the results.
//!
//! ```text
//! ScriptBlock ──┬── (mask literals, aware mode only) ──┐
//!               │                                      ├─► ScopeTracker ─► duplicates ─┐
//!               │                                      └─► DelimiterTally ─► balance ──┤
//!               └──────────────────────────────────────────────────────────────────────┴─► BlockReport
//! ```
//!
//! Blocks are independent. A linter holds only its configuration, so the
//! same one can be reused across blocks, documents, and threads.

use std::borrow::Cow;

use scriptlint_types::{BlockReport, Defect, DocumentReport, RunReport, ScriptBlock};

use crate::config::{Approximation, LintConfig};
use crate::extract::extract_script_blocks;
use crate::lint::{check_balance, find_duplicates};
use crate::scanner::mask_literals;

/// Lint text with the default configuration.
pub fn lint(text: &str) -> Vec<Defect> {
    Linter::default().lint_text(text)
}

/// Applies the configured checks to script blocks.
#[derive(Debug, Clone, Default)]
pub struct Linter {
    config: LintConfig,
}

impl Linter {
    pub fn new(config: LintConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// All defects for one block's text: duplicate declarations first (in
    /// first-seen order), then unbalanced delimiters (brace, paren, bracket).
    pub fn lint_text(&self, text: &str) -> Vec<Defect> {
        let code = match self.config.approximation {
            Approximation::LexicalNaive => Cow::Borrowed(text),
            Approximation::StringAndCommentAware => Cow::Owned(mask_literals(text)),
        };

        let mut defects = find_duplicates(text, &code, &self.config.keywords);
        defects.extend(check_balance(&code));
        defects
    }

    pub fn lint_block(&self, block: &ScriptBlock) -> BlockReport {
        let defects = self.lint_text(&block.text);
        tracing::debug!(
            block = block.ordinal,
            defects = defects.len(),
            mode = %self.config.approximation,
            "linted script block"
        );
        BlockReport {
            ordinal: block.ordinal,
            defects,
        }
    }

    /// Lint every block of a document, in the order given.
    pub fn lint_document(&self, document: impl Into<String>, blocks: &[ScriptBlock]) -> DocumentReport {
        let mut report = DocumentReport::new(document);
        report.blocks = blocks.iter().map(|b| self.lint_block(b)).collect();
        report
    }

    /// Extract the `<script>` blocks of a markup document and lint them.
    pub fn lint_markup(&self, document: impl Into<String>, markup: &str) -> DocumentReport {
        let blocks = extract_script_blocks(markup);
        self.lint_document(document, &blocks)
    }

    /// Lint a sequence of documents into one run report.
    pub fn lint_run<I, D>(&self, documents: I) -> RunReport
    where
        I: IntoIterator<Item = (D, Vec<ScriptBlock>)>,
        D: Into<String>,
    {
        let mut run = RunReport::new();
        for (document, blocks) in documents {
            run.push(self.lint_document(document, &blocks));
        }
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptlint_types::{DelimiterKind, Direction};

    #[test]
    fn clean_block() {
        assert!(lint("const x = [1,2,3];").is_empty());
    }

    #[test]
    fn duplicates_come_before_delimiters() {
        let defects = lint("let a;\nlet a;\n(");
        assert_eq!(defects.len(), 2);
        assert!(matches!(defects[0], Defect::DuplicateDeclaration { .. }));
        assert!(matches!(
            defects[1],
            Defect::UnbalancedDelimiter {
                delimiter: DelimiterKind::Paren,
                count: 1,
                direction: Direction::ExcessOpeners,
            }
        ));
    }

    #[test]
    fn aware_mode_ignores_literals() {
        let text = "let a = '{';\n// let a\nlet b = `)`;";
        assert!(!lint(text).is_empty());
        assert!(Linter::new(LintConfig::aware()).lint_text(text).is_empty());
    }

    #[test]
    fn aware_mode_keeps_original_source_lines() {
        let text = "let a = \"{\";\nlet a = 2;";
        let defects = Linter::new(LintConfig::aware()).lint_text(text);
        match &defects[..] {
            [Defect::DuplicateDeclaration { occurrences, .. }] => {
                assert_eq!(occurrences[0].source_line, "let a = \"{\";");
            }
            other => panic!("expected one duplicate, got {other:?}"),
        }
    }

    #[test]
    fn blocks_are_independent() {
        let linter = Linter::default();
        let blocks = ScriptBlock::numbered(["let a;\n{", "let a;\n}"]);
        let report = linter.lint_document("page.html", &blocks);
        assert_eq!(report.blocks.len(), 2);
        // Neither block sees the other's `a`, and each has its own brace.
        for block in &report.blocks {
            assert_eq!(block.defects.len(), 1);
            assert!(matches!(block.defects[0], Defect::UnbalancedDelimiter { .. }));
        }
    }

    #[test]
    fn run_fails_if_any_block_has_a_defect() {
        let linter = Linter::default();
        let run = linter.lint_run([
            ("ok.html", ScriptBlock::numbered(["let a = 1;"])),
            ("empty.html", vec![]),
            ("bad.html", ScriptBlock::numbered(["let a = 1;", "let b = (;"])),
        ]);
        assert!(run.has_defects());
        assert!(!run.documents[0].has_defects());
        assert!(!run.documents[1].has_defects());
        assert_eq!(
            run.documents[2].defective_blocks().map(|b| b.ordinal).collect::<Vec<_>>(),
            vec![2]
        );
    }

    #[test]
    fn lint_markup_extracts_blocks() {
        let html = "<p>{</p><script>let a;\nlet a;</script><script type=\"module\">f();</script>";
        let report = Linter::default().lint_markup("index.html", html);
        assert_eq!(report.document, "index.html");
        assert_eq!(report.blocks.len(), 2);
        assert_eq!(report.blocks[0].defects.len(), 1);
        assert!(report.blocks[1].is_clean());
    }
}
