//! Feature Vector Assembly

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::statistics::ChannelStats;

/// Number of features in the vector
pub const FEATURE_DIMENSION: usize = 10;

/// Feature extraction configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Mean phase RMS below this is treated as a dead signal and the
    /// unbalance index pinned to zero
    pub unbalance_epsilon: f64,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            unbalance_epsilon: 1e-6,
        }
    }
}

/// Fixed-slot feature vector for one window
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// RMS of phase current A
    pub rms_ia: f64,
    /// RMS of phase current B
    pub rms_ib: f64,
    /// RMS of phase current C
    pub rms_ic: f64,
    /// Current unbalance index across the three phases
    pub unbalance: f64,
    /// Mean rotor speed
    pub speed_mean: f64,
    /// Rotor speed population std dev
    pub speed_std: f64,
    /// Mean electromagnetic torque
    pub torque_mean: f64,
    /// Electromagnetic torque population std dev
    pub torque_std: f64,
    /// Mean slip
    pub slip_mean: f64,
    /// Slip population std dev
    pub slip_std: f64,
}

impl FeatureVector {
    /// Slots in their frozen column order
    pub fn as_array(&self) -> [f64; FEATURE_DIMENSION] {
        [
            self.rms_ia,
            self.rms_ib,
            self.rms_ic,
            self.unbalance,
            self.speed_mean,
            self.speed_std,
            self.torque_mean,
            self.torque_std,
            self.slip_mean,
            self.slip_std,
        ]
    }
}

/// Reduces the six window channel slices to a feature vector
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor {
    config: FeatureConfig,
}

impl FeatureExtractor {
    /// Create an extractor with the given config
    pub fn new(config: FeatureConfig) -> Self {
        Self { config }
    }

    /// Extract the feature vector for one window.
    ///
    /// Pure function of the channel values; timestamps play no part, so
    /// the result is invariant under time-shifting the window.
    pub fn extract(
        &self,
        ia: &[f64],
        ib: &[f64],
        ic: &[f64],
        speed: &[f64],
        torque: &[f64],
        slip: &[f64],
    ) -> FeatureVector {
        let rms_ia = ChannelStats::compute(ia).rms;
        let rms_ib = ChannelStats::compute(ib).rms;
        let rms_ic = ChannelStats::compute(ic).rms;

        let mean_rms = (rms_ia + rms_ib + rms_ic) / 3.0;
        let unbalance = if mean_rms < self.config.unbalance_epsilon {
            0.0
        } else {
            let hi = rms_ia.max(rms_ib).max(rms_ic);
            let lo = rms_ia.min(rms_ib).min(rms_ic);
            (hi - lo) / mean_rms
        };

        let speed_stats = ChannelStats::compute(speed);
        let torque_stats = ChannelStats::compute(torque);
        let slip_stats = ChannelStats::compute(slip);

        trace!(samples = ia.len(), unbalance, "extracted window features");

        FeatureVector {
            rms_ia,
            rms_ib,
            rms_ic,
            unbalance,
            speed_mean: speed_stats.mean,
            speed_std: speed_stats.std_dev,
            torque_mean: torque_stats.mean,
            torque_std: torque_stats.std_dev,
            slip_mean: slip_stats.mean,
            slip_std: slip_stats.std_dev,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sine(n: usize, amp: f64, phase: f64) -> Vec<f64> {
        (0..n)
            .map(|k| amp * (2.0 * std::f64::consts::PI * k as f64 / 20.0 + phase).sin())
            .collect()
    }

    #[test]
    fn test_balanced_phases_have_zero_unbalance() {
        let extractor = FeatureExtractor::default();
        let ia = sine(200, 1.0, 0.0);
        let mech = vec![0.5; 200];

        let features = extractor.extract(&ia, &ia, &ia, &mech, &mech, &mech);
        assert_eq!(features.unbalance, 0.0);
    }

    #[test]
    fn test_dead_signal_pins_unbalance_to_zero() {
        let extractor = FeatureExtractor::default();
        let dead = vec![0.0; 50];
        let tiny = vec![1e-9; 50];

        let features = extractor.extract(&dead, &tiny, &dead, &dead, &dead, &dead);
        assert_eq!(features.unbalance, 0.0);
    }

    #[test]
    fn test_unbalance_of_known_spread() {
        let extractor = FeatureExtractor::default();
        let a = vec![2.0; 40];
        let b = vec![1.0; 40];
        let c = vec![3.0; 40];
        let mech = vec![0.0; 40];

        let features = extractor.extract(&a, &b, &c, &mech, &mech, &mech);
        // (3 - 1) / 2
        assert!((features.unbalance - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_invariant_to_time_shift() {
        let extractor = FeatureExtractor::default();
        let n = 100;
        let ia = sine(n, 1.0, 0.0);
        // The same periodic signal observed one full period later
        let shifted = sine(n, 1.0, 2.0 * std::f64::consts::PI);
        let mech = vec![0.98; n];

        let first = extractor.extract(&ia, &ia, &ia, &mech, &mech, &mech);
        let second = extractor.extract(&shifted, &shifted, &shifted, &mech, &mech, &mech);

        for (a, b) in first.as_array().iter().zip(second.as_array()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_minimum_window_population() {
        let extractor = FeatureExtractor::default();
        let ia = vec![1.0, -1.0, 1.0, -1.0, 1.0];
        let mech = vec![0.02; 5];

        let features = extractor.extract(&ia, &ia, &ia, &mech, &mech, &mech);
        assert!((features.rms_ia - 1.0).abs() < 1e-12);
        assert!((features.slip_mean - 0.02).abs() < 1e-12);
        assert!(features.as_array().iter().all(|x| x.is_finite()));
    }

    #[test]
    fn test_slot_order_is_frozen() {
        let features = FeatureVector {
            rms_ia: 1.0,
            rms_ib: 2.0,
            rms_ic: 3.0,
            unbalance: 4.0,
            speed_mean: 5.0,
            speed_std: 6.0,
            torque_mean: 7.0,
            torque_std: 8.0,
            slip_mean: 9.0,
            slip_std: 10.0,
        };
        let expected: [f64; FEATURE_DIMENSION] =
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        assert_eq!(features.as_array(), expected);
    }

    proptest! {
        #[test]
        fn unbalance_is_non_negative(
            values in proptest::collection::vec(-1e3_f64..1e3, 5..64)
        ) {
            let extractor = FeatureExtractor::default();
            let mech = vec![0.0; values.len()];
            let features = extractor.extract(&values, &values, &values, &mech, &mech, &mech);
            prop_assert!(features.unbalance >= 0.0);
            prop_assert!(features.rms_ia >= 0.0);
        }
    }
}
