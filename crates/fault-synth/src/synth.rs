//! Randomized Run Parameter Synthesis

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{FaultClass, SynthError};

/// Torque-scale factor and per-phase voltage offsets for one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunParameters {
    /// Scaling factor applied to the nominal load torque
    pub torque_factor: f64,
    /// Per-unit voltage offset on phase A
    pub delta_a: f64,
    /// Per-unit voltage offset on phase B
    pub delta_b: f64,
    /// Per-unit voltage offset on phase C
    pub delta_c: f64,
}

impl RunParameters {
    /// The three offsets in phase order
    pub fn deltas(&self) -> [f64; 3] {
        [self.delta_a, self.delta_b, self.delta_c]
    }
}

/// Seedable source of per-class run parameters.
///
/// A fixed seed reproduces the same parameter sequence draw for draw,
/// making an entire dataset build repeatable.
#[derive(Debug)]
pub struct ParameterSynthesizer {
    rng: StdRng,
}

impl ParameterSynthesizer {
    /// Create a synthesizer from a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw run parameters for the given fault class
    pub fn synthesize(&mut self, class: FaultClass) -> Result<RunParameters, SynthError> {
        let params = match class {
            FaultClass::Healthy => RunParameters {
                torque_factor: self.normal(1.0, 0.05)?,
                delta_a: self.normal(0.0, 0.02)?,
                delta_b: self.normal(0.0, 0.02)?,
                delta_c: self.normal(0.0, 0.02)?,
            },
            FaultClass::VoltageUnbalance => {
                let torque_factor = self.normal(1.0, 0.05)?;
                // One phase sags, the other two stay exactly nominal
                let mut deltas = [0.0; 3];
                let phase = self.rng.gen_range(0..3);
                deltas[phase] = -self.rng.gen_range(0.10..0.35);
                RunParameters {
                    torque_factor,
                    delta_a: deltas[0],
                    delta_b: deltas[1],
                    delta_c: deltas[2],
                }
            }
            FaultClass::TorqueOverload => RunParameters {
                torque_factor: self.rng.gen_range(1.3..2.0),
                delta_a: self.normal(0.0, 0.02)?,
                delta_b: self.normal(0.0, 0.02)?,
                delta_c: self.normal(0.0, 0.02)?,
            },
            FaultClass::TorqueBraking => RunParameters {
                torque_factor: -self.rng.gen_range(1.2..2.2),
                delta_a: self.normal(0.0, 0.02)?,
                delta_b: self.normal(0.0, 0.02)?,
                delta_c: self.normal(0.0, 0.02)?,
            },
        };

        debug!(
            class = class.as_str(),
            torque_factor = params.torque_factor,
            "synthesized run parameters"
        );
        Ok(params)
    }

    fn normal(&mut self, mean: f64, sd: f64) -> Result<f64, SynthError> {
        let dist = Normal::new(mean, sd).map_err(|e| SynthError::Distribution(e.to_string()))?;
        Ok(dist.sample(&mut self.rng))
    }
}
