//! Post-Run Signal Trimming

use motor_sim::SignalSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::PrepError;

/// Trimming configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimConfig {
    /// Start of the usable interval (s); earlier samples carry the
    /// startup transient
    pub t_ignore: f64,
    /// End of the usable interval (s)
    pub t_end_use: f64,
    /// Minimum surviving sample count for a run to stay usable
    pub min_run_samples: usize,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            t_ignore: 1.0,
            t_end_use: 9.0,
            min_run_samples: 10,
        }
    }
}

/// Restrict the time base and all six channels to `[t_ignore, t_end_use]`.
///
/// The same boolean mask is applied to every channel, preserving the
/// parallel-array invariant. Runs keeping fewer than `min_run_samples`
/// samples are rejected; the caller skips the run and continues.
pub fn trim(signals: &SignalSet, cfg: &TrimConfig) -> Result<SignalSet, PrepError> {
    let keep: Vec<usize> = signals
        .t
        .iter()
        .enumerate()
        .filter(|&(_, &t)| t >= cfg.t_ignore && t <= cfg.t_end_use)
        .map(|(i, _)| i)
        .collect();

    if keep.len() < cfg.min_run_samples {
        return Err(PrepError::InsufficientSamples {
            kept: keep.len(),
            required: cfg.min_run_samples,
        });
    }

    let select = |xs: &[f64]| -> Vec<f64> { keep.iter().map(|&i| xs[i]).collect() };
    let trimmed = SignalSet {
        t: select(&signals.t),
        ia: select(&signals.ia),
        ib: select(&signals.ib),
        ic: select(&signals.ic),
        speed: select(&signals.speed),
        torque: select(&signals.torque),
        slip: select(&signals.slip),
    };

    debug!(
        kept = trimmed.len(),
        dropped = signals.len() - trimmed.len(),
        "trimmed run signals"
    );
    Ok(trimmed)
}
