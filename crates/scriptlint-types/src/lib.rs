//! Pure data types for scriptlint.
//!
//! These are the values that flow between the extraction collaborator, the
//! lint kernel, and whatever renders the results:
//!
//! - [`ScriptBlock`]: one embedded script, as handed to the kernel
//! - [`Defect`]: a structured finding (never a fault)
//! - [`BlockReport`], [`DocumentReport`], [`RunReport`]: ordered results
//!
//! Everything here is plain data with `serde` derives so reports can be
//! emitted as JSON or pattern-matched by tests.

mod defect;
mod report;

pub use defect::{DeclarationKeyword, Defect, DelimiterKind, Direction, Occurrence};
pub use report::{BlockReport, DocumentReport, RunReport};

use serde::{Deserialize, Serialize};

/// One contiguous unit of embedded script text.
///
/// `ordinal` is the block's 1-based position within its document. The text
/// is the inner content only, without the surrounding markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptBlock {
    pub ordinal: usize,
    pub text: String,
}

impl ScriptBlock {
    pub fn new(ordinal: usize, text: impl Into<String>) -> Self {
        Self {
            ordinal,
            text: text.into(),
        }
    }

    /// Number the given texts 1, 2, 3, ... in order.
    pub fn numbered<I, S>(texts: I) -> Vec<ScriptBlock>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| ScriptBlock::new(i + 1, text))
            .collect()
    }
}
