//! Verdict display mapping.
//!
//! Pure presentation: verdicts and per-request failures become display
//! records a host UI renders. No business logic lives here.

use crate::error::PipelineError;
use crate::types::verdict::Verdict;
use serde::Serialize;

/// Visual register of a display record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// High-risk alert styling
    Alert,
    /// Verified/success styling
    Success,
    /// Recoverable request failure styling
    Failure,
}

/// What the host UI shows after a submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerdictDisplay {
    pub tone: Tone,
    pub headline: String,
    pub detail: String,
}

/// Map a verdict to its display record
pub fn present(verdict: Verdict) -> VerdictDisplay {
    match verdict {
        Verdict::Fraud => VerdictDisplay {
            tone: Tone::Alert,
            headline: "HIGH RISK: Fraud Detected".to_string(),
            detail: "This transaction matches patterns the classifier flags as fraudulent."
                .to_string(),
        },
        Verdict::Secure => VerdictDisplay {
            tone: Tone::Success,
            headline: "SECURE: Verified".to_string(),
            detail: "No fraud indicators found for this transaction.".to_string(),
        },
    }
}

/// Map a per-request failure to its display record.
///
/// The form session keeps its values across a failure, so the hint points
/// the user at the dropdowns rather than asking them to start over.
pub fn present_error(error: &PipelineError) -> VerdictDisplay {
    VerdictDisplay {
        tone: Tone::Failure,
        headline: format!("Error: {error}"),
        detail: "Check that the Day, Month and Merchant Type values match the encoder's known classes."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::FieldId;

    #[test]
    fn test_fraud_presentation() {
        let display = present(Verdict::Fraud);

        assert_eq!(display.tone, Tone::Alert);
        assert_eq!(display.headline, "HIGH RISK: Fraud Detected");
    }

    #[test]
    fn test_secure_presentation() {
        let display = present(Verdict::Secure);

        assert_eq!(display.tone, Tone::Success);
        assert_eq!(display.headline, "SECURE: Verified");
    }

    #[test]
    fn test_error_presentation_carries_hint() {
        let error = PipelineError::UnknownLabel {
            field: FieldId::Month,
            label: "Januray".to_string(),
        };

        let display = present_error(&error);
        assert_eq!(display.tone, Tone::Failure);
        assert!(display.headline.contains("Januray"));
        assert!(display.detail.contains("known classes"));
    }
}
