//! The individual checks run over a script block.
//!
//! - **Duplicate declarations**: is an identifier bound more than once at
//!   top level? See [`scope_tracker`].
//! - **Delimiter balance**: do braces, parentheses, and brackets cancel out?
//!   See [`balance`].
//!
//! Each check is a pure function of the block's text. They share no state
//! with each other or with other blocks; [`Linter`](crate::Linter) runs both
//! and merges the results.

pub mod balance;
pub mod scope_tracker;

pub use balance::{check_balance, DelimiterTally};
pub use scope_tracker::{find_duplicates, DeclarationIndex, ScopeTracker};
