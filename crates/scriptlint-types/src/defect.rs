//! Declarations, delimiters, and the defects reported about them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three declaration forms of the embedded language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKeyword {
    /// `let`: mutable, block-scoped binding.
    Let,
    /// `const`: immutable, block-scoped binding.
    Const,
    /// `var`: function-scoped binding.
    Var,
}

impl DeclarationKeyword {
    /// All keywords, in the order their patterns are matched.
    pub const ALL: [DeclarationKeyword; 3] = [
        DeclarationKeyword::Let,
        DeclarationKeyword::Const,
        DeclarationKeyword::Var,
    ];

    /// The keyword token as it appears in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKeyword::Let => "let",
            DeclarationKeyword::Const => "const",
            DeclarationKeyword::Var => "var",
        }
    }
}

impl fmt::Display for DeclarationKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single top-level binding of an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub identifier: String,
    /// 1-based line number within the script block.
    pub line: usize,
    /// 1-based column (in characters) of the keyword.
    pub column: usize,
    pub keyword: DeclarationKeyword,
    /// The full source line, unmodified, for diagnostics.
    pub source_line: String,
}

/// A grouping delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterKind {
    /// `{` `}`
    Brace,
    /// `(` `)`
    Paren,
    /// `[` `]`
    Bracket,
}

impl DelimiterKind {
    /// Report order: brace, then paren, then bracket.
    pub const ALL: [DelimiterKind; 3] = [
        DelimiterKind::Brace,
        DelimiterKind::Paren,
        DelimiterKind::Bracket,
    ];

    pub fn open(&self) -> char {
        match self {
            DelimiterKind::Brace => '{',
            DelimiterKind::Paren => '(',
            DelimiterKind::Bracket => '[',
        }
    }

    pub fn close(&self) -> char {
        match self {
            DelimiterKind::Brace => '}',
            DelimiterKind::Paren => ')',
            DelimiterKind::Bracket => ']',
        }
    }

    /// Plural noun used in messages ("braces", "parentheses", "brackets").
    pub fn plural(&self) -> &'static str {
        match self {
            DelimiterKind::Brace => "braces",
            DelimiterKind::Paren => "parentheses",
            DelimiterKind::Bracket => "brackets",
        }
    }
}

impl fmt::Display for DelimiterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DelimiterKind::Brace => "brace",
            DelimiterKind::Paren => "paren",
            DelimiterKind::Bracket => "bracket",
        };
        f.write_str(name)
    }
}

/// Which side of a delimiter pair is in excess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    ExcessOpeners,
    ExcessClosers,
}

impl Direction {
    /// Direction for a net count (opens minus closes); `None` when balanced.
    pub fn from_net(net: i64) -> Option<Direction> {
        match net.signum() {
            1 => Some(Direction::ExcessOpeners),
            -1 => Some(Direction::ExcessClosers),
            _ => None,
        }
    }

    fn adjective(&self) -> &'static str {
        match self {
            Direction::ExcessOpeners => "opening",
            Direction::ExcessClosers => "closing",
        }
    }
}

/// A structured finding about one script block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Defect {
    /// An identifier bound more than once at top level.
    DuplicateDeclaration {
        identifier: String,
        /// Every top-level occurrence, in line order. Always 2 or more.
        occurrences: Vec<Occurrence>,
    },
    /// A delimiter kind whose opens and closes don't cancel out.
    UnbalancedDelimiter {
        delimiter: DelimiterKind,
        /// Magnitude of the net count.
        count: usize,
        direction: Direction,
    },
}

impl Defect {
    /// Short machine-friendly tag for the defect kind.
    pub fn code(&self) -> &'static str {
        match self {
            Defect::DuplicateDeclaration { .. } => "duplicate_declaration",
            Defect::UnbalancedDelimiter {
                delimiter: DelimiterKind::Brace,
                ..
            } => "unmatched_braces",
            Defect::UnbalancedDelimiter {
                delimiter: DelimiterKind::Paren,
                ..
            } => "unmatched_parentheses",
            Defect::UnbalancedDelimiter {
                delimiter: DelimiterKind::Bracket,
                ..
            } => "unmatched_brackets",
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::DuplicateDeclaration {
                identifier,
                occurrences,
            } => write!(
                f,
                "Variable '{}' is declared {} times in global scope",
                identifier,
                occurrences.len()
            ),
            Defect::UnbalancedDelimiter {
                delimiter,
                count,
                direction,
            } => write!(
                f,
                "Unmatched {}: {} {} {}",
                delimiter.plural(),
                count,
                direction.adjective(),
                delimiter.plural()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_follows_sign() {
        assert_eq!(Direction::from_net(3), Some(Direction::ExcessOpeners));
        assert_eq!(Direction::from_net(-1), Some(Direction::ExcessClosers));
        assert_eq!(Direction::from_net(0), None);
    }

    #[test]
    fn delimiter_messages() {
        let defect = Defect::UnbalancedDelimiter {
            delimiter: DelimiterKind::Paren,
            count: 2,
            direction: Direction::ExcessClosers,
        };
        assert_eq!(defect.code(), "unmatched_parentheses");
        assert_eq!(
            defect.to_string(),
            "Unmatched parentheses: 2 closing parentheses"
        );
    }

    #[test]
    fn duplicate_serializes_with_kind_tag() {
        let occurrence = Occurrence {
            identifier: "a".into(),
            line: 1,
            column: 1,
            keyword: DeclarationKeyword::Let,
            source_line: "let a = 1;".into(),
        };
        let defect = Defect::DuplicateDeclaration {
            identifier: "a".into(),
            occurrences: vec![occurrence.clone(), Occurrence { line: 3, ..occurrence }],
        };
        let json = serde_json::to_value(&defect).unwrap();
        assert_eq!(json["kind"], "duplicate_declaration");
        assert_eq!(json["identifier"], "a");
        assert_eq!(json["occurrences"][1]["line"], 3);
        assert_eq!(json["occurrences"][0]["keyword"], "let");
    }
}
