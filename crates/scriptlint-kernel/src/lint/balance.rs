//! Delimiter balance by net count.
//!
//! Counts opens and closes of each delimiter kind over the whole block and
//! reports any kind that doesn't cancel out. This is a tally, not a matcher:
//! `)(` balances, and so does `{ ( } )`.

use scriptlint_types::{Defect, DelimiterKind, Direction};

/// Net opens minus closes for each delimiter kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterTally {
    pub brace: i64,
    pub paren: i64,
    pub bracket: i64,
}

impl DelimiterTally {
    /// Tally every delimiter in `text` in one pass.
    pub fn of(text: &str) -> Self {
        let mut tally = Self::default();
        for c in text.chars() {
            match c {
                '{' => tally.brace += 1,
                '}' => tally.brace -= 1,
                '(' => tally.paren += 1,
                ')' => tally.paren -= 1,
                '[' => tally.bracket += 1,
                ']' => tally.bracket -= 1,
                _ => {}
            }
        }
        tally
    }

    pub fn net(&self, kind: DelimiterKind) -> i64 {
        match kind {
            DelimiterKind::Brace => self.brace,
            DelimiterKind::Paren => self.paren,
            DelimiterKind::Bracket => self.bracket,
        }
    }

    pub fn is_balanced(&self) -> bool {
        DelimiterKind::ALL.iter().all(|k| self.net(*k) == 0)
    }

    /// One defect per unbalanced kind, in brace, paren, bracket order.
    pub fn defects(&self) -> Vec<Defect> {
        DelimiterKind::ALL
            .into_iter()
            .filter_map(|delimiter| {
                let net = self.net(delimiter);
                Direction::from_net(net).map(|direction| Defect::UnbalancedDelimiter {
                    delimiter,
                    count: net.unsigned_abs() as usize,
                    direction,
                })
            })
            .collect()
    }
}

/// Unbalanced-delimiter defects for a block.
pub fn check_balance(text: &str) -> Vec<Defect> {
    DelimiterTally::of(text).defects()
}
