//! Dataset Assembly
//!
//! Drives the class → run → window loop against a simulator collaborator
//! and owns the accumulated labelled dataset until the full build
//! completes.

mod builder;
mod dataset;

pub use builder::{BuildConfig, DatasetBuilder};
pub use dataset::{BuildSummary, Dataset, DatasetMetadata, LabelledExample};

use thiserror::Error;

/// Errors during a dataset build
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid build configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Synth(#[from] fault_synth::SynthError),
    #[error("Simulator run failed: {0}")]
    Simulator(#[from] motor_sim::SimulatorError),
}
