//! Type definitions for transaction screening

pub mod transaction;
pub mod verdict;

pub use transaction::TransactionInput;
pub use verdict::{PredictionOutcome, Verdict};
