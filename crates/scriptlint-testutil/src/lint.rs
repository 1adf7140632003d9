//! Lint case file parser and runner.
//!
//! Parses the `tests/lint/*.test` format and runs each case through the
//! kernel's [`Linter`].
//!
//! ```text
//! # test: nested_shadow_ignored
//! # mode: aware
//! ---
//! let a = 1;
//! function f() {
//!   let a = 2;
//! }
//! ---
//! clean
//! ===
//! ```
//!
//! Expected defects are written one per line: `dup <name> <line>,<line>...`
//! for a duplicate declaration, `unbalanced <brace|paren|bracket> <+N|-N>`
//! for a delimiter kind (`+` for excess openers), or `clean` for none.
//! `# mode:` is `naive` (default) or `aware`; `# skip: <reason>` skips a case.

use std::fmt;

use scriptlint_kernel::{Approximation, LintConfig, Linter, UnknownApproximation};
use scriptlint_types::{Defect, Direction};

/// A single lint test case.
#[derive(Debug, Clone)]
pub struct LintTestCase {
    /// Test name from the `# test: name` line.
    pub name: String,
    /// Line number where the test starts (1-indexed).
    pub line_number: usize,
    /// From `# mode:`; an unrecognized name fails the case when run.
    pub mode: Result<Approximation, UnknownApproximation>,
    pub skip: Option<String>,
    /// The script block text.
    pub input: String,
    /// Expected defects in the compact line format.
    pub expected: String,
}

/// Parse the *.test file format into test cases.
pub fn parse_lint_tests(content: &str) -> Vec<LintTestCase> {
    let mut cases = Vec::new();
    let lines: Vec<&str> = content.lines().collect();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();

        let Some(name) = line.strip_prefix("# test:") else {
            i += 1;
            continue;
        };
        let name = name.trim().to_string();
        let start_line = i + 1;
        i += 1;

        // Header directives until the first ---
        let mut mode: Result<Approximation, UnknownApproximation> = Ok(Approximation::LexicalNaive);
        let mut skip = None;
        while i < lines.len() && lines[i].trim() != "---" {
            let directive = lines[i].trim();
            if let Some(m) = directive.strip_prefix("# mode:") {
                mode = m.trim().parse();
            } else if let Some(reason) = directive.strip_prefix("# skip:") {
                skip = Some(reason.trim().to_string());
            }
            i += 1;
        }
        i += 1; // skip the ---

        // Collect input until next ---
        let mut input_lines = Vec::new();
        while i < lines.len() && lines[i].trim() != "---" {
            input_lines.push(lines[i]);
            i += 1;
        }
        i += 1; // skip the ---

        // Collect expected until ===
        let mut expected_lines = Vec::new();
        while i < lines.len() && lines[i].trim() != "===" {
            expected_lines.push(lines[i]);
            i += 1;
        }
        i += 1; // skip the ===

        cases.push(LintTestCase {
            name,
            line_number: start_line,
            mode,
            skip,
            input: input_lines.join("\n"),
            expected: normalize(&expected_lines.join("\n")),
        });
    }

    cases
}

/// Render defects in the compact expected-line format.
pub fn format_defects(defects: &[Defect]) -> String {
    if defects.is_empty() {
        return "clean".to_string();
    }
    defects
        .iter()
        .map(|defect| match defect {
            Defect::DuplicateDeclaration {
                identifier,
                occurrences,
            } => {
                let lines: Vec<String> = occurrences.iter().map(|o| o.line.to_string()).collect();
                format!("dup {} {}", identifier, lines.join(","))
            }
            Defect::UnbalancedDelimiter {
                delimiter,
                count,
                direction,
            } => {
                let sign = match direction {
                    Direction::ExcessOpeners => '+',
                    Direction::ExcessClosers => '-',
                };
                format!("unbalanced {} {}{}", delimiter, sign, count)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trim every line and drop blank ones.
fn normalize(s: &str) -> String {
    s.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

impl LintTestCase {
    /// Lint the input in the case's mode and compare against the expectation.
    pub fn run(&self) -> CaseOutcome {
        let mode = match &self.mode {
            Ok(mode) => *mode,
            Err(err) => return CaseOutcome::BadMode(err.clone()),
        };
        if let Some(reason) = &self.skip {
            return CaseOutcome::Skipped {
                reason: reason.clone(),
            };
        }

        let linter = Linter::new(LintConfig::default().with_approximation(mode));
        let actual = format_defects(&linter.lint_text(&self.input));

        if actual == self.expected {
            CaseOutcome::Pass
        } else {
            CaseOutcome::Mismatch {
                mode,
                expected: self.expected.clone(),
                actual,
            }
        }
    }
}

/// What running one case produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Pass,
    Skipped { reason: String },
    /// The linter's defects differ from the expected lines.
    Mismatch {
        mode: Approximation,
        expected: String,
        actual: String,
    },
    /// The `# mode:` directive names no known approximation.
    BadMode(UnknownApproximation),
}

impl CaseOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, CaseOutcome::Mismatch { .. } | CaseOutcome::BadMode(_))
    }
}

/// A failed case, with its input kept for the report.
#[derive(Debug, Clone)]
pub struct CaseFailure {
    pub name: String,
    pub line_number: usize,
    pub input: String,
    pub outcome: CaseOutcome,
}

/// Outcomes of a whole case file.
#[derive(Debug, Default)]
pub struct CaseRun {
    pub passed: usize,
    /// Names of skipped cases.
    pub skipped: Vec<String>,
    pub failures: Vec<CaseFailure>,
}

impl CaseRun {
    fn record(&mut self, case: &LintTestCase, outcome: CaseOutcome) {
        match outcome {
            CaseOutcome::Pass => self.passed += 1,
            CaseOutcome::Skipped { .. } => self.skipped.push(case.name.clone()),
            outcome => self.failures.push(CaseFailure {
                name: case.name.clone(),
                line_number: case.line_number,
                input: case.input.clone(),
                outcome,
            }),
        }
    }

    pub fn case_count(&self) -> usize {
        self.passed + self.skipped.len() + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

fn write_indented(f: &mut fmt::Formatter<'_>, label: &str, text: &str) -> fmt::Result {
    writeln!(f, "  {label}:")?;
    for line in text.lines() {
        writeln!(f, "    | {line}")?;
    }
    Ok(())
}

impl fmt::Display for CaseRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "lint cases: {} passed, {} skipped, {} failed",
            self.passed,
            self.skipped.len(),
            self.failures.len()
        )?;
        for failure in &self.failures {
            write!(f, "\n{} (line {})", failure.name, failure.line_number)?;
            match &failure.outcome {
                CaseOutcome::Mismatch {
                    mode,
                    expected,
                    actual,
                } => {
                    writeln!(f, " [{mode}]")?;
                    write_indented(f, "input", &failure.input)?;
                    write_indented(f, "expected", expected)?;
                    write_indented(f, "actual", actual)?;
                }
                CaseOutcome::BadMode(err) => writeln!(f, ": {err}")?,
                CaseOutcome::Pass | CaseOutcome::Skipped { .. } => writeln!(f)?,
            }
        }
        Ok(())
    }
}

/// Run every case in order.
pub fn run_lint_tests(cases: &[LintTestCase]) -> CaseRun {
    let mut run = CaseRun::default();
    for case in cases {
        run.record(case, case.run());
    }
    run
}
