//! Ordered lint results: per block, per document, per run.

use serde::{Deserialize, Serialize};

use crate::Defect;

/// Defects found in one script block, duplicates first, then delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockReport {
    pub ordinal: usize,
    pub defects: Vec<Defect>,
}

impl BlockReport {
    pub fn is_clean(&self) -> bool {
        self.defects.is_empty()
    }
}

/// Results for every block of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Identifier of the document, usually its path.
    pub document: String,
    pub blocks: Vec<BlockReport>,
}

impl DocumentReport {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            blocks: Vec::new(),
        }
    }

    pub fn has_defects(&self) -> bool {
        self.blocks.iter().any(|b| !b.is_clean())
    }

    pub fn defect_count(&self) -> usize {
        self.blocks.iter().map(|b| b.defects.len()).sum()
    }

    /// Blocks with at least one defect, in ordinal order.
    pub fn defective_blocks(&self) -> impl Iterator<Item = &BlockReport> {
        self.blocks.iter().filter(|b| !b.is_clean())
    }
}

/// Results of a whole run across documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub documents: Vec<DocumentReport>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, document: DocumentReport) {
        self.documents.push(document);
    }

    /// True if any block of any document has a defect.
    pub fn has_defects(&self) -> bool {
        self.documents.iter().any(DocumentReport::has_defects)
    }

    pub fn defect_count(&self) -> usize {
        self.documents.iter().map(DocumentReport::defect_count).sum()
    }

    pub fn block_count(&self) -> usize {
        self.documents.iter().map(|d| d.blocks.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DelimiterKind, Direction};

    fn unbalanced_brace() -> Defect {
        Defect::UnbalancedDelimiter {
            delimiter: DelimiterKind::Brace,
            count: 1,
            direction: Direction::ExcessOpeners,
        }
    }

    #[test]
    fn empty_run_passes() {
        let run = RunReport::new();
        assert!(!run.has_defects());
        assert_eq!(run.defect_count(), 0);
    }

    #[test]
    fn document_without_blocks_is_clean() {
        let mut run = RunReport::new();
        run.push(DocumentReport::new("empty.html"));
        assert!(!run.has_defects());
        assert_eq!(run.block_count(), 0);
    }

    #[test]
    fn one_defective_block_fails_the_run() {
        let mut clean = DocumentReport::new("a.html");
        clean.blocks.push(BlockReport {
            ordinal: 1,
            defects: vec![],
        });

        let mut dirty = DocumentReport::new("b.html");
        dirty.blocks.push(BlockReport {
            ordinal: 1,
            defects: vec![],
        });
        dirty.blocks.push(BlockReport {
            ordinal: 2,
            defects: vec![unbalanced_brace()],
        });

        assert_eq!(dirty.defective_blocks().map(|b| b.ordinal).collect::<Vec<_>>(), vec![2]);

        let mut run = RunReport::new();
        run.push(clean);
        run.push(dirty);
        assert!(run.has_defects());
        assert_eq!(run.defect_count(), 1);
        assert_eq!(run.block_count(), 3);
    }
}
