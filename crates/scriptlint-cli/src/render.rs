//! Report rendering: human-readable text or JSON.

use std::fmt::{Display, Write};

use owo_colors::{OwoColorize, Style};

use scriptlint_types::{BlockReport, Defect, DocumentReport, RunReport};

use crate::config::Format;

/// Render a run report in the requested format.
pub fn render(report: &RunReport, format: Format, color: bool) -> Result<String, serde_json::Error> {
    match format {
        Format::Human => Ok(render_human(report, color)),
        Format::Json => render_json(report),
    }
}

pub fn render_json(report: &RunReport) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

/// Applies styles only when color is on.
struct Palette {
    color: bool,
}

impl Palette {
    fn paint(&self, text: impl Display, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn fail(&self, text: impl Display) -> String {
        self.paint(text, Style::new().red().bold())
    }

    fn pass(&self, text: impl Display) -> String {
        self.paint(text, Style::new().green())
    }

    fn path(&self, text: impl Display) -> String {
        self.paint(text, Style::new().bold())
    }

    fn code(&self, text: impl Display) -> String {
        self.paint(text, Style::new().yellow())
    }

    fn dim(&self, text: impl Display) -> String {
        self.paint(text, Style::new().dimmed())
    }
}

/// "1 defect", "2 defects".
fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

pub fn render_human(report: &RunReport, color: bool) -> String {
    let palette = Palette { color };
    let mut out = String::new();

    for document in &report.documents {
        write_document(&mut out, &palette, document);
    }

    out.push('\n');
    if report.has_defects() {
        let failed = report.documents.iter().filter(|d| d.has_defects()).count();
        let line = format!(
            "✗ {} in {} of {}",
            count(report.defect_count(), "defect"),
            failed,
            count(report.documents.len(), "document"),
        );
        let _ = writeln!(out, "{}", palette.fail(line));
    } else {
        let line = format!(
            "✓ {}, {}: no defects",
            count(report.documents.len(), "document"),
            count(report.block_count(), "script block"),
        );
        let _ = writeln!(out, "{}", palette.pass(line));
    }
    out
}

fn write_document(out: &mut String, palette: &Palette, document: &DocumentReport) {
    let name = palette.path(&document.document);

    if document.blocks.is_empty() {
        let _ = writeln!(out, "{name}: {}", palette.dim("no script blocks"));
        return;
    }
    if !document.has_defects() {
        let clean = format!("✓ {} clean", count(document.blocks.len(), "script block"));
        let _ = writeln!(out, "{name}: {}", palette.pass(clean));
        return;
    }

    let summary = format!("✗ {}", count(document.defect_count(), "defect"));
    let _ = writeln!(out, "{name}: {}", palette.fail(summary));
    for block in document.defective_blocks() {
        write_block(out, palette, block);
    }
}

fn write_block(out: &mut String, palette: &Palette, block: &BlockReport) {
    let _ = writeln!(out, "  script block {}:", block.ordinal);
    for defect in &block.defects {
        let _ = writeln!(out, "    {}: {}", palette.code(defect.code()), defect);
        if let Defect::DuplicateDeclaration {
            identifier,
            occurrences,
        } = defect
        {
            for occurrence in occurrences {
                let _ = writeln!(
                    out,
                    "      line {}: {} {}",
                    occurrence.line, occurrence.keyword, identifier
                );
                let _ = writeln!(out, "        {}", palette.dim(occurrence.source_line.trim()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptlint_types::{DeclarationKeyword, DelimiterKind, Direction, Occurrence};

    fn occurrence(line: usize, source_line: &str) -> Occurrence {
        Occurrence {
            identifier: "a".into(),
            line,
            column: source_line.find("let").map_or(1, |c| c + 1),
            keyword: DeclarationKeyword::Let,
            source_line: source_line.into(),
        }
    }

    fn sample() -> RunReport {
        let mut a = DocumentReport::new("templates/a.html");
        a.blocks = vec![
            BlockReport {
                ordinal: 1,
                defects: vec![Defect::DuplicateDeclaration {
                    identifier: "a".into(),
                    occurrences: vec![occurrence(1, "let a = 1;"), occurrence(3, "  let a = 3;")],
                }],
            },
            BlockReport {
                ordinal: 2,
                defects: vec![],
            },
            BlockReport {
                ordinal: 3,
                defects: vec![Defect::UnbalancedDelimiter {
                    delimiter: DelimiterKind::Brace,
                    count: 1,
                    direction: Direction::ExcessOpeners,
                }],
            },
        ];

        let mut b = DocumentReport::new("templates/b.html");
        b.blocks = vec![
            BlockReport {
                ordinal: 1,
                defects: vec![],
            },
            BlockReport {
                ordinal: 2,
                defects: vec![],
            },
        ];

        RunReport {
            documents: vec![a, b, DocumentReport::new("templates/c.html")],
        }
    }

    #[test]
    fn human_report() {
        insta::assert_snapshot!(render_human(&sample(), false), @r"
        templates/a.html: ✗ 2 defects
          script block 1:
            duplicate_declaration: Variable 'a' is declared 2 times in global scope
              line 1: let a
                let a = 1;
              line 3: let a
                let a = 3;
          script block 3:
            unmatched_braces: Unmatched braces: 1 opening braces
        templates/b.html: ✓ 2 script blocks clean
        templates/c.html: no script blocks

        ✗ 2 defects in 1 of 3 documents
        ");
    }

    #[test]
    fn human_report_clean_run() {
        let mut doc = DocumentReport::new("index.html");
        doc.blocks.push(BlockReport {
            ordinal: 1,
            defects: vec![],
        });
        let report = RunReport {
            documents: vec![doc],
        };
        insta::assert_snapshot!(render_human(&report, false), @r"
        index.html: ✓ 1 script block clean

        ✓ 1 document, 1 script block: no defects
        ");
    }

    #[test]
    fn color_adds_escapes_only_when_enabled() {
        let plain = render_human(&sample(), false);
        let colored = render_human(&sample(), true);
        assert!(!plain.contains('\u{1b}'));
        assert!(colored.contains('\u{1b}'));
    }

    #[test]
    fn json_report_is_structured() {
        let json = render(&sample(), Format::Json, false).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        let first = &value["documents"][0];
        assert_eq!(first["document"], "templates/a.html");
        assert_eq!(first["blocks"][0]["defects"][0]["kind"], "duplicate_declaration");
        assert_eq!(first["blocks"][2]["defects"][0]["delimiter"], "brace");
        assert_eq!(first["blocks"][2]["defects"][0]["direction"], "excess_openers");
    }
}
