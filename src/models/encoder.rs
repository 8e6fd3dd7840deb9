//! Categorical label encoders fitted at training time

use serde::{Deserialize, Serialize};

/// A fixed label to integer-code mapping.
///
/// The code of a label is its position in `classes`, exactly as assigned
/// when the encoder was fitted. Lookup is an exact string match: no case
/// folding, no fuzzy matching, no fallback code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    /// Training-time code of a label, or `None` for an unknown label
    pub fn code(&self, label: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == label)
    }

    /// The known labels, in code order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of known labels
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_encoder() -> LabelEncoder {
        // Fitted class order: sorted alphabetically, as the training
        // pipeline stores it
        LabelEncoder::new(
            [
                "Friday",
                "Monday",
                "Saturday",
                "Sunday",
                "Thursday",
                "Tuesday",
                "Wednesday",
            ]
            .iter()
            .map(|d| d.to_string())
            .collect(),
        )
    }

    #[test]
    fn test_code_is_position_in_class_list() {
        let encoder = day_encoder();

        assert_eq!(encoder.code("Friday"), Some(0));
        assert_eq!(encoder.code("Monday"), Some(1));
        assert_eq!(encoder.code("Wednesday"), Some(6));
    }

    #[test]
    fn test_code_is_deterministic() {
        let encoder = day_encoder();

        assert_eq!(encoder.code("Tuesday"), encoder.code("Tuesday"));
    }

    #[test]
    fn test_exact_match_only() {
        let encoder = day_encoder();

        assert_eq!(encoder.code("monday"), None);
        assert_eq!(encoder.code("Monday "), None);
        assert_eq!(encoder.code("Mon"), None);
    }

    #[test]
    fn test_unknown_label() {
        let encoder = day_encoder();

        assert_eq!(encoder.code("Someday"), None);
    }
}
