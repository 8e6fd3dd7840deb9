//! Averaged decision-tree ensemble classifier

use crate::error::PipelineError;
use serde::{Deserialize, Serialize};

/// A node of one decision tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    /// Internal split: left branch when `feature <= threshold`
    Split {
        /// Index into the scaled feature vector
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    /// Leaf carrying the fraud-class probability
    Leaf { probability: f64 },
}

impl TreeNode {
    /// Walk the tree for one sample.
    /// Feature indices are validated against the forest arity at load, so
    /// indexing is in bounds here.
    fn probability(&self, features: &[f64]) -> f64 {
        match self {
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if features[*feature] <= *threshold {
                    left.probability(features)
                } else {
                    right.probability(features)
                }
            }
            TreeNode::Leaf { probability } => *probability,
        }
    }

    /// Largest feature index referenced anywhere in the tree
    pub fn max_feature(&self) -> usize {
        match self {
            TreeNode::Split {
                feature,
                left,
                right,
                ..
            } => (*feature).max(left.max_feature()).max(right.max_feature()),
            TreeNode::Leaf { .. } => 0,
        }
    }
}

/// Random-forest style binary classifier over scaled features.
///
/// The fraud probability is the mean leaf probability across all trees; the
/// predicted label is 1 when that mean reaches 0.5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestClassifier {
    n_features: usize,
    trees: Vec<TreeNode>,
}

impl ForestClassifier {
    pub fn new(n_features: usize, trees: Vec<TreeNode>) -> Self {
        Self { n_features, trees }
    }

    /// Number of features the forest was trained on
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Whether every tree only references in-range features.
    /// Deserialization bypasses structural checks, so the loader verifies
    /// this before the forest is used.
    pub fn is_coherent(&self) -> bool {
        !self.trees.is_empty()
            && self
                .trees
                .iter()
                .all(|tree| tree.max_feature() < self.n_features)
    }

    /// Mean fraud probability across all trees
    pub fn predict_probability(&self, features: &[f64]) -> Result<f64, PipelineError> {
        if features.len() != self.n_features {
            return Err(PipelineError::DimensionMismatch {
                expected: self.n_features,
                got: features.len(),
            });
        }

        let total: f64 = self
            .trees
            .iter()
            .map(|tree| tree.probability(features))
            .sum();
        Ok(total / self.trees.len() as f64)
    }

    /// Binary class label: 1 for fraud, 0 for secure
    pub fn predict(&self, features: &[f64]) -> Result<u8, PipelineError> {
        let probability = self.predict_probability(features)?;
        Ok(u8::from(probability >= 0.5))
    }
}
