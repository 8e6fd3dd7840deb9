//! Screening verdict data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Binary outcome of fraud screening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Fraud,
    Secure,
}

impl Verdict {
    /// Interpret a classifier label: 1 is fraud, 0 is secure.
    pub fn from_label(label: u8) -> Self {
        if label == 1 {
            Verdict::Fraud
        } else {
            Verdict::Secure
        }
    }

    pub fn is_fraud(&self) -> bool {
        matches!(self, Verdict::Fraud)
    }
}

/// Result of one screening submission.
///
/// Produced fresh per submission and handed to the presenter; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutcome {
    /// The binary verdict
    pub verdict: Verdict,

    /// When the verdict was decided
    pub decided_at: DateTime<Utc>,
}

impl PredictionOutcome {
    /// Stamp a verdict with the current time
    pub fn new(verdict: Verdict) -> Self {
        Self {
            verdict,
            decided_at: Utc::now(),
        }
    }
}
