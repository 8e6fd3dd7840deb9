//! Feature scaling with training-time statistics

use crate::error::PipelineError;
use serde::{Deserialize, Serialize};

/// Standard scaler holding the per-feature center and scale learned when the
/// classifier was trained. Immutable after load; transform is
/// `(x - mean) / scale` per feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, PipelineError> {
        if mean.len() != scale.len() {
            return Err(PipelineError::DimensionMismatch {
                expected: mean.len(),
                got: scale.len(),
            });
        }
        Ok(Self { mean, scale })
    }

    /// Scaler that passes features through unchanged
    pub fn identity(dim: usize) -> Self {
        Self {
            mean: vec![0.0; dim],
            scale: vec![1.0; dim],
        }
    }

    /// Number of features the statistics cover
    pub fn dim(&self) -> usize {
        self.mean.len()
    }

    /// Verify the statistics cover exactly `expected` features.
    /// Deserialization bypasses [`StandardScaler::new`], so the loader calls
    /// this after parsing.
    pub fn check_dim(&self, expected: usize) -> Result<(), PipelineError> {
        let got = self.mean.len().min(self.scale.len());
        if self.mean.len() != expected || self.scale.len() != expected {
            return Err(PipelineError::DimensionMismatch { expected, got });
        }
        Ok(())
    }

    /// Normalize a raw feature vector with the stored statistics
    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, PipelineError> {
        if features.len() != self.mean.len() {
            return Err(PipelineError::DimensionMismatch {
                expected: self.mean.len(),
                got: features.len(),
            });
        }

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (m, s))| (x - m) / s)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_centers_and_scales() {
        let scaler = StandardScaler::new(vec![10.0, 0.0], vec![2.0, 4.0]).unwrap();

        let scaled = scaler.transform(&[14.0, -8.0]).unwrap();
        assert_eq!(scaled, vec![2.0, -2.0]);
    }

    #[test]
    fn test_identity_passes_through() {
        let scaler = StandardScaler::identity(3);

        let scaled = scaler.transform(&[1.0, 2.5, -3.0]).unwrap();
        assert_eq!(scaled, vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let scaler = StandardScaler::identity(9);

        assert_eq!(
            scaler.transform(&[1.0, 2.0]),
            Err(PipelineError::DimensionMismatch {
                expected: 9,
                got: 2
            })
        );
    }

    #[test]
    fn test_unequal_statistics_rejected() {
        assert!(StandardScaler::new(vec![0.0; 9], vec![1.0; 8]).is_err());
    }

    #[test]
    fn test_check_dim() {
        let scaler = StandardScaler::identity(9);
        assert!(scaler.check_dim(9).is_ok());
        assert!(scaler.check_dim(8).is_err());
    }
}
