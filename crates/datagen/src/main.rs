//! Motor Fault Dataset Generator - Main Entry Point

use anyhow::Context;
use dataset_builder::{BuildConfig, DatasetBuilder};
use motor_sim::StubSimulator;
use serde::Deserialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Binary-level configuration: build settings plus output options
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct AppConfig {
    /// Dataset build settings
    build: BuildConfig,
    /// Sample rate of the stub simulator traces (Hz)
    sample_rate_hz: f64,
    /// Optional JSON export path for the finished dataset
    output: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
            sample_rate_hz: 1000.0,
            output: None,
        }
    }
}

/// Initialize logging
fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Load configuration from an optional file plus MOTORGEN_* env overrides
fn load_config(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut builder = config::Config::builder();

    builder = match path {
        Some(path) => builder.add_source(config::File::with_name(path)),
        None => builder.add_source(config::File::with_name("motorgen").required(false)),
    };
    builder = builder.add_source(
        config::Environment::with_prefix("MOTORGEN")
            .separator("__")
            .try_parsing(true),
    );

    let app = builder
        .build()
        .context("assembling configuration sources")?
        .try_deserialize::<AppConfig>()
        .context("deserializing configuration")?;
    Ok(app)
}

fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== Motor Fault Dataset Generator v{} ===", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args().nth(1);
    let app = load_config(config_path.as_deref())?;

    let mut simulator = StubSimulator::new(app.sample_rate_hz);
    let mut builder = DatasetBuilder::new(app.build)?;
    let dataset = builder.build(&mut simulator)?;

    let summary = dataset.summary();
    info!(
        examples = summary.examples,
        features = summary.feature_dimension,
        skipped_runs = summary.skipped_runs,
        "dataset assembled"
    );
    for (&class_id, &count) in &summary.per_class {
        info!(class = class_id, examples = count, "class contribution");
    }

    if let Some(path) = &app.output {
        let json = serde_json::to_string_pretty(&dataset)?;
        std::fs::write(path, json).with_context(|| format!("writing dataset to {path}"))?;
        info!(path = %path, "dataset exported");
    }

    Ok(())
}
