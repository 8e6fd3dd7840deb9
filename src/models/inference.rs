//! Fraud screening pipeline over the trained artifacts

use crate::error::PipelineError;
use crate::feature_encoder::FeatureEncoder;
use crate::models::loader::ArtifactBundle;
use crate::types::transaction::TransactionInput;
use crate::types::verdict::{PredictionOutcome, Verdict};
use std::sync::Arc;
use tracing::debug;

/// Runs encode -> assemble -> scale -> classify for one transaction.
///
/// A pure function of the input and the loaded artifacts; the only side
/// effect is trace logging. Every failure surfaces as a typed
/// [`PipelineError`], never as a silent default verdict.
pub struct InferencePipeline {
    bundle: Arc<ArtifactBundle>,
}

impl InferencePipeline {
    pub fn new(bundle: Arc<ArtifactBundle>) -> Self {
        Self { bundle }
    }

    pub fn bundle(&self) -> &ArtifactBundle {
        &self.bundle
    }

    /// Screen one transaction
    pub fn predict(
        &self,
        input: &TransactionInput,
    ) -> Result<PredictionOutcome, PipelineError> {
        let encoder = FeatureEncoder::new(&self.bundle);
        let features = encoder.assemble(input)?;
        let scaled = self.bundle.scaler.transform(&features)?;
        let label = self.bundle.classifier.predict(&scaled)?;
        let verdict = Verdict::from_label(label);

        debug!(label, verdict = ?verdict, "screening complete");
        Ok(PredictionOutcome::new(verdict))
    }
}
