//! Progressive tax bracket evaluation
//!
//! One rate-table-agnostic evaluator serves ordinary income, long-term
//! capital gains and flat state taxes; only the [`BracketTable`] differs.

mod brackets;
mod tables;
pub mod loader;

pub use brackets::{effective_rate, evaluate_progressive_tax, summarize, BracketTable, TaxBracket, TaxSummary};
pub use tables::{federal_2024, long_term_capital_gains_2024, FilingStatus};
pub use loader::{load_brackets, load_brackets_from_reader};
