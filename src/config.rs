//! Configuration management for the screening service

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub artifacts: ArtifactsConfig,
    pub logging: LoggingConfig,
}

/// Locations of the five trained artifact files
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    /// Directory holding the artifact files
    pub dir: String,
    /// Classifier file name
    #[serde(default = "default_classifier_file")]
    pub classifier: String,
    /// Scaler file name
    #[serde(default = "default_scaler_file")]
    pub scaler: String,
    /// Day encoder file name
    #[serde(default = "default_day_encoder_file")]
    pub day_encoder: String,
    /// Month encoder file name
    #[serde(default = "default_month_encoder_file")]
    pub month_encoder: String,
    /// Merchant category encoder file name
    #[serde(default = "default_category_encoder_file")]
    pub category_encoder: String,
}

fn default_classifier_file() -> String {
    "classifier.json".to_string()
}

fn default_scaler_file() -> String {
    "scaler.json".to_string()
}

fn default_day_encoder_file() -> String {
    "le_day.json".to_string()
}

fn default_month_encoder_file() -> String {
    "le_month.json".to_string()
}

fn default_category_encoder_file() -> String {
    "le_category.json".to_string()
}

impl ArtifactsConfig {
    pub fn classifier_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.classifier)
    }

    pub fn scaler_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.scaler)
    }

    pub fn day_encoder_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.day_encoder)
    }

    pub fn month_encoder_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.month_encoder)
    }

    pub fn category_encoder_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.category_encoder)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty)
    pub format: String,
}

impl AppConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/config.toml")
    }

    /// Load configuration from a specific path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            artifacts: ArtifactsConfig {
                dir: "artifacts".to_string(),
                classifier: default_classifier_file(),
                scaler: default_scaler_file(),
                day_encoder: default_day_encoder_file(),
                month_encoder: default_month_encoder_file(),
                category_encoder: default_category_encoder_file(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}
