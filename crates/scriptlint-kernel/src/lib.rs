//! scriptlint-kernel: the core of scriptlint.
//!
//! This crate provides:
//!
//! - **Linter**: runs every check over a script block and merges the findings
//! - **Scope tracker**: flags identifiers declared more than once at top level
//! - **Balance checker**: flags brace/paren/bracket kinds that don't cancel out
//! - **Scanner**: masks string, comment, template, and regex literal contents
//!   for the string-and-comment-aware mode
//! - **Extract**: pulls `<script>` bodies out of markup
//!
//! Analysis is a pure function from text to defects. Nothing in here does I/O
//! and nothing in here can fail on any input.
//!
//! # Example
//!
//! ```
//! use scriptlint_kernel::{LintConfig, Linter};
//! use scriptlint_types::Defect;
//!
//! let linter = Linter::new(LintConfig::default());
//! let defects = linter.lint_text("let a = 1;\nfunction f(){ let a = 2; }\nlet a = 3;");
//!
//! assert_eq!(defects.len(), 1);
//! assert!(matches!(&defects[0], Defect::DuplicateDeclaration { identifier, .. } if identifier == "a"));
//! ```

pub mod config;
pub mod extract;
pub mod lint;
pub mod linter;
pub mod scanner;

pub use config::{Approximation, LintConfig, UnknownApproximation};
pub use extract::extract_script_blocks;
pub use linter::{lint, Linter};
