//! Simulator Error Types

use thiserror::Error;

/// Errors surfaced by a simulator collaborator
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// Run did not complete
    #[error("Simulator run failed: {0}")]
    RunFailed(String),

    /// Requested stop time is not usable
    #[error("Invalid stop time: {0} s")]
    InvalidStopTime(f64),

    /// Returned traces disagree in length
    #[error("Channel {channel} has {actual} samples, expected {expected}")]
    ChannelMismatch {
        channel: &'static str,
        expected: usize,
        actual: usize,
    },
}
