//! Categorical encoding and feature vector assembly.
//!
//! Mirrors the preprocessing applied when the classifier was fitted: the
//! three categorical attributes are replaced by their training-time codes
//! and the nine features are laid out in the exact order the scaler and
//! classifier expect.

use crate::error::PipelineError;
use crate::models::encoder::LabelEncoder;
use crate::models::loader::{ArtifactBundle, FEATURE_COUNT};
use crate::session::FieldId;
use crate::types::transaction::TransactionInput;

/// Feature names in model order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "trans_day",
    "trans_month",
    "trans_year",
    "category",
    "upi_number",
    "age",
    "trans_amount",
    "state",
    "zip",
];

/// Encodes categorical labels and assembles model input vectors
pub struct FeatureEncoder<'a> {
    day: &'a LabelEncoder,
    month: &'a LabelEncoder,
    category: &'a LabelEncoder,
}

impl<'a> FeatureEncoder<'a> {
    pub fn new(bundle: &'a ArtifactBundle) -> Self {
        Self {
            day: &bundle.day_encoder,
            month: &bundle.month_encoder,
            category: &bundle.category_encoder,
        }
    }

    /// Look up the training-time codes of the three categorical labels.
    ///
    /// An unknown label fails loudly: the UI only offers known labels, so a
    /// miss means the form and the encoders disagree.
    pub fn encode(
        &self,
        day: &str,
        month: &str,
        category: &str,
    ) -> Result<(usize, usize, usize), PipelineError> {
        Ok((
            Self::lookup(self.day, FieldId::Day, day)?,
            Self::lookup(self.month, FieldId::Month, month)?,
            Self::lookup(self.category, FieldId::Category, category)?,
        ))
    }

    fn lookup(
        encoder: &LabelEncoder,
        field: FieldId,
        label: &str,
    ) -> Result<usize, PipelineError> {
        encoder.code(label).ok_or_else(|| PipelineError::UnknownLabel {
            field,
            label: label.to_string(),
        })
    }

    /// Assemble the raw nine-feature vector in model order:
    /// `[day_code, month_code, year, category_code, upi_id, age, amount, state, zip]`
    pub fn assemble(
        &self,
        input: &TransactionInput,
    ) -> Result<[f64; FEATURE_COUNT], PipelineError> {
        let (day_code, month_code, category_code) =
            self.encode(&input.day, &input.month, &input.category)?;

        Ok([
            day_code as f64,
            month_code as f64,
            input.year as f64,
            category_code as f64,
            input.upi_id as f64,
            input.age as f64,
            input.amount,
            input.state as f64,
            input.zip as f64,
        ])
    }
}
