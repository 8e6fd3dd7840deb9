//! Typed failures of the encode-then-predict pipeline.
//!
//! Per-request failures form a small closed set; artifact loading failures
//! are startup errors and travel as `anyhow` chains instead.

use crate::session::FieldId;
use thiserror::Error;

/// A recoverable failure inside one screening request.
///
/// The form session is never touched by these: the user corrects the
/// offending field and resubmits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// A categorical label outside the encoder's training-time classes.
    #[error("unknown {field} label {label:?}: not among the encoder's known classes")]
    UnknownLabel {
        /// Field the label was submitted under
        field: FieldId,
        /// The rejected label
        label: String,
    },

    /// Submit was triggered with a field unset or holding an incompatible value.
    #[error("form field '{0}' is unset or holds an incompatible value")]
    MissingField(FieldId),

    /// Feature vector arity disagrees with a trained artifact.
    #[error("feature dimension mismatch: artifact expects {expected}, got {got}")]
    DimensionMismatch {
        /// Dimension the artifact was trained with
        expected: usize,
        /// Dimension actually supplied
        got: usize,
    },
}
