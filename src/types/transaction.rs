//! Transaction data collected from the screening form

use serde::{Deserialize, Serialize};

/// The nine attributes of a UPI transaction submitted for screening.
///
/// Categorical attributes carry the human-readable labels the form offers;
/// they are converted to training-time codes inside the pipeline, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    /// Day name, e.g. "Monday"
    pub day: String,

    /// Month name, e.g. "January"
    pub month: String,

    /// Transaction year (the form offers 2020 through 2025)
    pub year: i32,

    /// Merchant category, one of the category encoder's known classes
    pub category: String,

    /// UPI identifier
    pub upi_id: u64,

    /// User age in years
    pub age: u32,

    /// Transaction amount in rupees
    pub amount: f64,

    /// State code, treated as an opaque numeric feature
    pub state: i64,

    /// ZIP code, treated as an opaque numeric feature
    pub zip: i64,
}
