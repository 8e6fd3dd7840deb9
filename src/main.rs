//! UPI Fraud Detection - Main Entry Point
//!
//! Loads the trained artifacts, fills a form session from a transaction
//! given as JSON, runs the screening pipeline, and prints the verdict.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::Read;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use upi_fraud_detection::{
    config::{AppConfig, LoggingConfig},
    models::{inference::InferencePipeline, loader::ArtifactBundle},
    presenter,
    session::{FieldId, FieldValue, FormSession},
};

fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    if config.format == "json" {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Read the transaction JSON from the first argument or stdin
fn read_transaction_values() -> Result<HashMap<FieldId, FieldValue>> {
    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read transaction file {path}"))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read transaction from stdin")?;
            buffer
        }
    };

    serde_json::from_str(&raw).context("failed to parse transaction JSON")
}

fn main() -> Result<ExitCode> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    info!("Starting UPI fraud screening");

    // Artifact loading is the only fatal error class: without the bundle no
    // prediction can be served.
    let bundle = ArtifactBundle::load_global(&config)
        .context("failed to load trained artifacts")?;
    info!(
        trees = bundle.classifier.tree_count(),
        categories = bundle.category_encoder.len(),
        "Artifacts ready"
    );

    let pipeline = InferencePipeline::new(bundle);

    // Fill the form the way a host UI would: one field at a time, then submit
    let mut session = FormSession::new();
    for (id, value) in read_transaction_values()? {
        session.set_field(id, value);
    }

    match session.submit().and_then(|input| pipeline.predict(&input)) {
        Ok(outcome) => {
            let display = presenter::present(outcome.verdict);
            info!(
                session = %session.session_id(),
                verdict = ?outcome.verdict,
                decided_at = %outcome.decided_at,
                "screening finished"
            );
            println!("{}", display.headline);
            println!("{}", display.detail);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            // Recoverable per-request failure: surface the display record
            // and leave a non-zero exit code for the caller.
            let display = presenter::present_error(&err);
            error!(session = %session.session_id(), error = %err, "screening failed");
            eprintln!("{}", display.headline);
            eprintln!("{}", display.detail);
            Ok(ExitCode::FAILURE)
        }
    }
}
