//! Fault-Class Parameter Synthesis
//!
//! Produces the randomized torque-scaling factor and per-phase voltage
//! offsets that drive each simulator run, using class-specific
//! distributions drawn from one seedable random source.

mod class;
mod synth;

pub use class::FaultClass;
pub use synth::{ParameterSynthesizer, RunParameters};

use thiserror::Error;

/// Errors during parameter synthesis
#[derive(Debug, Error)]
pub enum SynthError {
    #[error("Invalid fault class id: {0}")]
    InvalidClass(u8),
    #[error("Invalid distribution parameters: {0}")]
    Distribution(String),
}
