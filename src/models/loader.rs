//! Trained artifact loader.
//!
//! Reads the classifier, scaler, and three label encoders from JSON files
//! produced by the training pipeline. All five artifacts must load and pass
//! structural checks, or the process cannot serve predictions.

use crate::config::{AppConfig, ArtifactsConfig};
use crate::models::classifier::ForestClassifier;
use crate::models::encoder::LabelEncoder;
use crate::models::scaler::StandardScaler;
use anyhow::{ensure, Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::info;

/// Number of features the screening model consumes
pub const FEATURE_COUNT: usize = 9;

/// The five trained artifacts, immutable for the life of the process
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    pub classifier: ForestClassifier,
    pub scaler: StandardScaler,
    pub day_encoder: LabelEncoder,
    pub month_encoder: LabelEncoder,
    pub category_encoder: LabelEncoder,
}

static BUNDLE: OnceLock<Arc<ArtifactBundle>> = OnceLock::new();

impl ArtifactBundle {
    /// Load-once process-wide bundle.
    ///
    /// The first call loads from the configured paths; every later call
    /// returns the same instances and ignores the passed configuration.
    /// A load failure leaves the slot empty, so startup can be retried with
    /// corrected paths, but a process that cannot load the bundle cannot
    /// serve predictions at all.
    pub fn load_global(config: &AppConfig) -> Result<Arc<Self>> {
        if let Some(bundle) = BUNDLE.get() {
            return Ok(bundle.clone());
        }

        let bundle = Arc::new(ArtifactLoader::new().load_bundle(&config.artifacts)?);
        Ok(BUNDLE.get_or_init(|| bundle).clone())
    }
}

/// Loader for the trained artifacts
pub struct ArtifactLoader;

impl ArtifactLoader {
    pub fn new() -> Self {
        Self
    }

    fn load_json<T: DeserializeOwned>(&self, path: &Path, artifact: &str) -> Result<T> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {} artifact {}", artifact, path.display()))?;

        let value = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {} artifact {}", artifact, path.display()))?;

        info!(artifact = artifact, path = %path.display(), "artifact loaded");
        Ok(value)
    }

    /// Load and structurally validate the classifier
    pub fn load_classifier<P: AsRef<Path>>(&self, path: P) -> Result<ForestClassifier> {
        let path = path.as_ref();
        let classifier: ForestClassifier = self.load_json(path, "classifier")?;

        ensure!(
            classifier.n_features() == FEATURE_COUNT,
            "classifier artifact {} was trained on {} features, expected {}",
            path.display(),
            classifier.n_features(),
            FEATURE_COUNT
        );
        ensure!(
            classifier.is_coherent(),
            "classifier artifact {} has no trees or references out-of-range features",
            path.display()
        );

        Ok(classifier)
    }

    /// Load and structurally validate the scaler
    pub fn load_scaler<P: AsRef<Path>>(&self, path: P) -> Result<StandardScaler> {
        let path = path.as_ref();
        let scaler: StandardScaler = self.load_json(path, "scaler")?;

        scaler.check_dim(FEATURE_COUNT).with_context(|| {
            format!(
                "scaler artifact {} does not cover {} features",
                path.display(),
                FEATURE_COUNT
            )
        })?;

        Ok(scaler)
    }

    /// Load a label encoder
    pub fn load_encoder<P: AsRef<Path>>(&self, path: P, artifact: &str) -> Result<LabelEncoder> {
        let path = path.as_ref();
        let encoder: LabelEncoder = self.load_json(path, artifact)?;

        ensure!(
            !encoder.is_empty(),
            "{} artifact {} holds no classes",
            artifact,
            path.display()
        );

        Ok(encoder)
    }

    /// Load all five artifacts from their configured locations
    pub fn load_bundle(&self, config: &ArtifactsConfig) -> Result<ArtifactBundle> {
        let bundle = ArtifactBundle {
            classifier: self.load_classifier(config.classifier_path())?,
            scaler: self.load_scaler(config.scaler_path())?,
            day_encoder: self.load_encoder(config.day_encoder_path(), "day encoder")?,
            month_encoder: self.load_encoder(config.month_encoder_path(), "month encoder")?,
            category_encoder: self.load_encoder(config.category_encoder_path(), "category encoder")?,
        };

        info!(
            trees = bundle.classifier.tree_count(),
            days = bundle.day_encoder.len(),
            months = bundle.month_encoder.len(),
            categories = bundle.category_encoder.len(),
            "artifact bundle loaded"
        );

        Ok(bundle)
    }
}

impl Default for ArtifactLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classifier::TreeNode;
    use std::path::PathBuf;

    fn write_artifact<T: serde::Serialize>(dir: &Path, name: &str, value: &T) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_load_classifier() {
        let dir = tempfile::tempdir().unwrap();
        let forest = ForestClassifier::new(
            FEATURE_COUNT,
            vec![TreeNode::Leaf { probability: 0.2 }],
        );
        let path = write_artifact(dir.path(), "classifier.json", &forest);

        let loaded = ArtifactLoader::new().load_classifier(&path).unwrap();
        assert_eq!(loaded, forest);
    }

    #[test]
    fn test_missing_artifact_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("classifier.json");

        let err = ArtifactLoader::new().load_classifier(&missing).unwrap_err();
        assert!(err.to_string().contains("classifier.json"));
    }

    #[test]
    fn test_wrong_arity_classifier_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let forest = ForestClassifier::new(4, vec![TreeNode::Leaf { probability: 0.2 }]);
        let path = write_artifact(dir.path(), "classifier.json", &forest);

        assert!(ArtifactLoader::new().load_classifier(&path).is_err());
    }

    #[test]
    fn test_wrong_arity_scaler_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let scaler = StandardScaler::identity(4);
        let path = write_artifact(dir.path(), "scaler.json", &scaler);

        assert!(ArtifactLoader::new().load_scaler(&path).is_err());
    }

    #[test]
    fn test_empty_encoder_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let encoder = LabelEncoder::new(vec![]);
        let path = write_artifact(dir.path(), "le_day.json", &encoder);

        assert!(ArtifactLoader::new()
            .load_encoder(&path, "day encoder")
            .is_err());
    }
}
