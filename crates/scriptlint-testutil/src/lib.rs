//! Test utilities for scriptlint.
//!
//! Parses and runs the lint case files under `tests/lint/*.test`: script
//! text plus the defects it should produce, in a compact line format.

pub mod lint;

pub use lint::{
    format_defects, parse_lint_tests, run_lint_tests, CaseFailure, CaseOutcome, CaseRun,
    LintTestCase,
};
