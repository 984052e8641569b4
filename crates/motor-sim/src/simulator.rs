//! Simulator Collaborator Trait

use crate::{SignalSet, SimParameters, SimulatorError};

/// External dynamical-model collaborator.
///
/// Given an explicit parameter record and a stop time, a simulator
/// produces six time-stamped traces covering `[0, stop_time]`. The call
/// is synchronous and potentially expensive; the pipeline treats it as
/// an opaque black box.
pub trait Simulator {
    /// Execute one run under the given parameters
    fn run(&mut self, params: &SimParameters, stop_time: f64) -> Result<SignalSet, SimulatorError>;
}
