//! Literal and comment masking for the string-and-comment-aware mode.
//!
//! [`mask_literals`] returns a copy of the script where everything that is
//! not code is blanked to spaces: string literal contents, template literal
//! text, regular-expression literals, and comments. Template `${ ... }`
//! substitutions stay code, and may themselves contain templates.
//!
//! The output has exactly one character per input character and keeps every
//! line terminator, so line numbers and columns computed on the masked text
//! are valid for the original. The scanner never fails: an unterminated
//! string or regex ends at the line end, an unterminated comment or template
//! runs to the end of input.

/// What the last significant token was, for `/` disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prev {
    /// Start of input.
    Start,
    /// Identifier, literal, `)` or `]`: a following `/` divides.
    Value,
    /// Operator, punctuator, or expression keyword: a following `/` opens a regex.
    Operator,
}

/// Keywords after which a `/` starts a regular expression.
const EXPRESSION_KEYWORDS: &[&str] = &[
    "return",
    "typeof",
    "instanceof",
    "in",
    "of",
    "new",
    "delete",
    "void",
    "throw",
    "case",
    "do",
    "else",
    "yield",
    "await",
];

/// Blank out literal and comment contents, preserving layout.
pub fn mask_literals(text: &str) -> String {
    let mut masker = Masker::new(text);
    masker.run();
    masker.out
}

struct Masker {
    chars: Vec<char>,
    pos: usize,
    out: String,
    /// One entry per open `${`, counting plain braces opened inside it.
    substitutions: Vec<usize>,
    prev: Prev,
}

impl Masker {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            out: String::with_capacity(text.len()),
            substitutions: Vec::new(),
            prev: Prev::Start,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek2(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    /// Copy the current character through unchanged.
    fn keep(&mut self) {
        if let Some(c) = self.peek() {
            self.out.push(c);
            self.pos += 1;
        }
    }

    /// Blank the current character, keeping line terminators.
    fn blank(&mut self) {
        if let Some(c) = self.peek() {
            self.out.push(if is_line_terminator(c) { c } else { ' ' });
            self.pos += 1;
        }
    }

    fn run(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                '/' if self.peek2() == Some('/') => self.line_comment(),
                '/' if self.peek2() == Some('*') => self.block_comment(),
                '/' if self.prev != Prev::Value => {
                    self.regex();
                    self.prev = Prev::Value;
                }
                '\'' | '"' => {
                    self.string(c);
                    self.prev = Prev::Value;
                }
                '`' => {
                    self.blank();
                    self.template_body();
                }
                '{' => {
                    if let Some(depth) = self.substitutions.last_mut() {
                        *depth += 1;
                    }
                    self.keep();
                    self.prev = Prev::Operator;
                }
                '}' => match self.substitutions.last_mut() {
                    Some(0) => {
                        self.substitutions.pop();
                        self.blank();
                        self.template_body();
                    }
                    Some(depth) => {
                        *depth -= 1;
                        self.keep();
                        self.prev = Prev::Operator;
                    }
                    None => {
                        self.keep();
                        self.prev = Prev::Operator;
                    }
                },
                ')' | ']' => {
                    self.keep();
                    self.prev = Prev::Value;
                }
                '+' | '-' if self.peek2() == Some(c) => {
                    // `++`/`--` don't change what a following `/` means.
                    self.keep();
                    self.keep();
                }
                c if is_word_char(c) => self.word(),
                c if c.is_whitespace() => self.keep(),
                _ => {
                    self.keep();
                    self.prev = Prev::Operator;
                }
            }
        }
    }

    fn word(&mut self) {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if is_word_char(c)) {
            self.keep();
        }
        let word: String = self.chars[start..self.pos].iter().collect();
        self.prev = if EXPRESSION_KEYWORDS.contains(&word.as_str()) {
            Prev::Operator
        } else {
            Prev::Value
        };
    }

    fn line_comment(&mut self) {
        while matches!(self.peek(), Some(c) if !is_line_terminator(c)) {
            self.blank();
        }
    }

    fn block_comment(&mut self) {
        self.blank(); // /
        self.blank(); // *
        while let Some(c) = self.peek() {
            if c == '*' && self.peek2() == Some('/') {
                self.blank();
                self.blank();
                return;
            }
            self.blank();
        }
    }

    fn string(&mut self, quote: char) {
        self.blank(); // opening quote
        while let Some(c) = self.peek() {
            match c {
                '\\' => {
                    self.blank();
                    // An escaped line terminator continues the string.
                    let crlf = self.peek() == Some('\r') && self.peek2() == Some('\n');
                    self.blank();
                    if crlf {
                        self.blank();
                    }
                }
                c if c == quote => {
                    self.blank();
                    return;
                }
                c if is_line_terminator(c) => return,
                _ => self.blank(),
            }
        }
    }

    /// Mask template text up to the closing backtick or the next `${`.
    fn template_body(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                '`' => {
                    self.blank();
                    self.prev = Prev::Value;
                    return;
                }
                '$' if self.peek2() == Some('{') => {
                    self.blank();
                    self.blank();
                    self.substitutions.push(0);
                    self.prev = Prev::Operator;
                    return;
                }
                '\\' => {
                    self.blank();
                    self.blank();
                }
                _ => self.blank(),
            }
        }
    }

    fn regex(&mut self) {
        self.blank(); // opening /
        let mut in_class = false;
        while let Some(c) = self.peek() {
            match c {
                c if is_line_terminator(c) => return,
                '\\' => {
                    self.blank();
                    if matches!(self.peek(), Some(n) if !is_line_terminator(n)) {
                        self.blank();
                    }
                }
                '[' => {
                    in_class = true;
                    self.blank();
                }
                ']' => {
                    in_class = false;
                    self.blank();
                }
                '/' if !in_class => {
                    self.blank();
                    while matches!(self.peek(), Some(f) if f.is_ascii_alphabetic()) {
                        self.blank();
                    }
                    return;
                }
                _ => self.blank(),
            }
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r')
}
