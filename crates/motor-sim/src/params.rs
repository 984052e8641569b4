//! Run Parameter Record

use serde::{Deserialize, Serialize};

use crate::nominal;

/// Full parameter set for one simulator run.
///
/// The record is passed explicitly into [`Simulator::run`](crate::Simulator::run);
/// nothing is exchanged through shared state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimParameters {
    /// Scaling factor applied to the nominal mechanical load torque
    pub torque_factor: f64,
    /// Per-unit voltage offset on phase A
    pub delta_a: f64,
    /// Per-unit voltage offset on phase B
    pub delta_b: f64,
    /// Per-unit voltage offset on phase C
    pub delta_c: f64,
    /// Nominal line-to-neutral voltage (V)
    pub base_voltage: f64,
    /// Nominal mechanical torque (pu)
    pub base_torque: f64,
}

impl SimParameters {
    /// Per-phase supply voltages after the offsets are applied
    pub fn phase_voltages(&self) -> [f64; 3] {
        [
            self.base_voltage * (1.0 + self.delta_a),
            self.base_voltage * (1.0 + self.delta_b),
            self.base_voltage * (1.0 + self.delta_c),
        ]
    }

    /// Mechanical load torque after scaling
    pub fn load_torque(&self) -> f64 {
        self.base_torque * self.torque_factor
    }
}

impl Default for SimParameters {
    fn default() -> Self {
        Self {
            torque_factor: 1.0,
            delta_a: 0.0,
            delta_b: 0.0,
            delta_c: 0.0,
            base_voltage: nominal::LINE_TO_NEUTRAL_V,
            base_torque: nominal::MECH_TORQUE_PU,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_voltages_apply_offsets() {
        let params = SimParameters {
            delta_b: -0.2,
            ..Default::default()
        };

        let [va, vb, vc] = params.phase_voltages();
        assert_eq!(va, nominal::LINE_TO_NEUTRAL_V);
        assert!((vb - nominal::LINE_TO_NEUTRAL_V * 0.8).abs() < 1e-9);
        assert_eq!(vc, nominal::LINE_TO_NEUTRAL_V);
    }

    #[test]
    fn test_load_torque_scales_base() {
        let params = SimParameters {
            torque_factor: -1.5,
            ..Default::default()
        };
        assert!((params.load_torque() + 1.5).abs() < 1e-9);
    }
}
