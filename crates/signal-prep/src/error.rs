//! Signal Preparation Error Types

use thiserror::Error;

/// Errors during signal preparation
#[derive(Debug, Clone, Error)]
pub enum PrepError {
    /// Too few usable samples remain after trimming; the run contributes
    /// no windows and the build moves on
    #[error("Only {kept} samples inside the usable interval, need at least {required}")]
    InsufficientSamples { kept: usize, required: usize },
}
