//! Trained artifact handling and inference

pub mod classifier;
pub mod encoder;
pub mod inference;
pub mod loader;
pub mod scaler;

pub use classifier::ForestClassifier;
pub use encoder::LabelEncoder;
pub use inference::InferencePipeline;
pub use loader::{ArtifactBundle, ArtifactLoader};
pub use scaler::StandardScaler;
