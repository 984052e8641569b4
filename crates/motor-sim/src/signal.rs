//! Six-Channel Signal Traces

use serde::{Deserialize, Serialize};

use crate::SimulatorError;

/// Time-stamped traces from one run.
///
/// All six channels are parallel arrays keyed by the shared (possibly
/// non-uniform) time base in `t`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalSet {
    /// Shared time base (s), ascending
    pub t: Vec<f64>,
    /// Phase current A
    pub ia: Vec<f64>,
    /// Phase current B
    pub ib: Vec<f64>,
    /// Phase current C
    pub ic: Vec<f64>,
    /// Rotor speed (pu)
    pub speed: Vec<f64>,
    /// Electromagnetic torque (pu)
    pub torque: Vec<f64>,
    /// Slip (pu)
    pub slip: Vec<f64>,
}

impl SignalSet {
    /// Create an empty trace set with reserved capacity
    pub fn with_capacity(n: usize) -> Self {
        Self {
            t: Vec::with_capacity(n),
            ia: Vec::with_capacity(n),
            ib: Vec::with_capacity(n),
            ic: Vec::with_capacity(n),
            speed: Vec::with_capacity(n),
            torque: Vec::with_capacity(n),
            slip: Vec::with_capacity(n),
        }
    }

    /// Number of samples on the shared time base
    pub fn len(&self) -> usize {
        self.t.len()
    }

    /// Check if the trace set holds no samples
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Append one sample across all channels
    #[allow(clippy::too_many_arguments)]
    pub fn push(&mut self, t: f64, ia: f64, ib: f64, ic: f64, speed: f64, torque: f64, slip: f64) {
        self.t.push(t);
        self.ia.push(ia);
        self.ib.push(ib);
        self.ic.push(ic);
        self.speed.push(speed);
        self.torque.push(torque);
        self.slip.push(slip);
    }

    /// Verify the parallel-array invariant: every channel matches the time base
    pub fn validate(&self) -> Result<(), SimulatorError> {
        let expected = self.t.len();
        let channels: [(&'static str, usize); 6] = [
            ("ia", self.ia.len()),
            ("ib", self.ib.len()),
            ("ic", self.ic.len()),
            ("speed", self.speed.len()),
            ("torque", self.torque.len()),
            ("slip", self.slip.len()),
        ];

        for (channel, actual) in channels {
            if actual != expected {
                return Err(SimulatorError::ChannelMismatch {
                    channel,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_channels_parallel() {
        let mut signals = SignalSet::with_capacity(2);
        signals.push(0.0, 1.0, 2.0, 3.0, 0.98, 1.0, 0.02);
        signals.push(0.1, 1.1, 2.1, 3.1, 0.98, 1.0, 0.02);

        assert_eq!(signals.len(), 2);
        assert!(signals.validate().is_ok());
    }

    #[test]
    fn test_validate_catches_short_channel() {
        let mut signals = SignalSet::default();
        signals.push(0.0, 1.0, 2.0, 3.0, 0.98, 1.0, 0.02);
        signals.slip.pop();

        let err = signals.validate().unwrap_err();
        assert!(matches!(
            err,
            SimulatorError::ChannelMismatch { channel: "slip", .. }
        ));
    }
}
