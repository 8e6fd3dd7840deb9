//! UPI Fraud Detection Library
//!
//! Screens UPI transactions against a pre-trained classifier: the three
//! categorical attributes are replaced by their training-time encoder codes,
//! the nine-feature vector is scaled with the training-time statistics, and
//! the classifier returns a binary FRAUD / SECURE verdict.

pub mod config;
pub mod error;
pub mod feature_encoder;
pub mod models;
pub mod presenter;
pub mod session;
pub mod types;

pub use config::AppConfig;
pub use error::PipelineError;
pub use feature_encoder::FeatureEncoder;
pub use models::inference::InferencePipeline;
pub use models::loader::{ArtifactBundle, ArtifactLoader};
pub use session::{FieldId, FieldValue, FormSession};
pub use types::transaction::TransactionInput;
pub use types::verdict::{PredictionOutcome, Verdict};
