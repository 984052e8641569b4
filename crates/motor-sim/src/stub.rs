//! Stub Simulator
//!
//! Deterministic synthetic traces standing in for the external
//! simulator in tests and demos. This is a steady-state signal
//! generator, not a physics model: phase currents are unit sines whose
//! amplitudes track the applied phase voltages, and the mechanical
//! channels sit at a fixed operating point.

use std::f64::consts::PI;

use tracing::debug;

use crate::{nominal, SignalSet, SimParameters, Simulator, SimulatorError};

/// Phase displacement between the three supply phases (rad)
const PHASE_SHIFT: f64 = 2.0 * PI / 3.0;

/// Deterministic stand-in for the external simulator
#[derive(Debug, Clone, Copy)]
pub struct StubSimulator {
    /// Output sample rate (Hz)
    sample_rate_hz: f64,
    /// Supply frequency for the generated currents (Hz)
    line_freq_hz: f64,
    /// Rotor speed at the operating point (pu)
    speed_pu: f64,
    /// Electromagnetic torque at the operating point (pu)
    torque_pu: f64,
    /// Slip at the operating point (pu)
    slip_pu: f64,
    /// Whether current amplitudes and torque respond to the run parameters
    respond_to_params: bool,
}

impl StubSimulator {
    /// Create a stub whose traces respond to the run parameters
    pub fn new(sample_rate_hz: f64) -> Self {
        Self {
            sample_rate_hz,
            line_freq_hz: nominal::LINE_FREQ_HZ,
            speed_pu: 0.98,
            torque_pu: 1.0,
            slip_pu: 0.02,
            respond_to_params: true,
        }
    }

    /// Create a stub that ignores the run parameters and emits the bare
    /// operating point (unit-amplitude currents, constant mechanical channels)
    pub fn steady(sample_rate_hz: f64) -> Self {
        Self {
            respond_to_params: false,
            ..Self::new(sample_rate_hz)
        }
    }

    /// Override the supply frequency of the generated currents
    pub fn with_line_freq(mut self, line_freq_hz: f64) -> Self {
        self.line_freq_hz = line_freq_hz;
        self
    }
}

impl Simulator for StubSimulator {
    fn run(&mut self, params: &SimParameters, stop_time: f64) -> Result<SignalSet, SimulatorError> {
        if !stop_time.is_finite() || stop_time <= 0.0 {
            return Err(SimulatorError::InvalidStopTime(stop_time));
        }
        if self.sample_rate_hz <= 0.0 {
            return Err(SimulatorError::RunFailed(format!(
                "non-positive sample rate {}",
                self.sample_rate_hz
            )));
        }

        let (amps, torque) = if self.respond_to_params {
            (
                [
                    1.0 + params.delta_a,
                    1.0 + params.delta_b,
                    1.0 + params.delta_c,
                ],
                self.torque_pu * params.torque_factor,
            )
        } else {
            ([1.0; 3], self.torque_pu)
        };

        let n = (stop_time * self.sample_rate_hz).floor() as usize + 1;
        let mut signals = SignalSet::with_capacity(n);
        let omega = 2.0 * PI * self.line_freq_hz;

        for k in 0..n {
            let t = k as f64 / self.sample_rate_hz;
            signals.push(
                t,
                amps[0] * (omega * t).sin(),
                amps[1] * (omega * t - PHASE_SHIFT).sin(),
                amps[2] * (omega * t + PHASE_SHIFT).sin(),
                self.speed_pu,
                torque,
                self.slip_pu,
            );
        }

        debug!(samples = signals.len(), stop_time, "stub simulator run complete");
        Ok(signals)
    }
}
