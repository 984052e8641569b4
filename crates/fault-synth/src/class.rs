//! Fault Class Taxonomy

use serde::{Deserialize, Serialize};

use crate::SynthError;

/// Fault condition labelling every window of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FaultClass {
    /// Nominal operating conditions
    Healthy,
    /// One supply phase sagging below nominal
    VoltageUnbalance,
    /// Sustained load torque above rating
    TorqueOverload,
    /// Load torque reversed into braking
    TorqueBraking,
}

impl FaultClass {
    /// All classes in ascending label order
    pub const ALL: [FaultClass; 4] = [
        FaultClass::Healthy,
        FaultClass::VoltageUnbalance,
        FaultClass::TorqueOverload,
        FaultClass::TorqueBraking,
    ];

    /// Stable integer label used in the dataset
    pub fn id(&self) -> u8 {
        match self {
            FaultClass::Healthy => 0,
            FaultClass::VoltageUnbalance => 1,
            FaultClass::TorqueOverload => 2,
            FaultClass::TorqueBraking => 3,
        }
    }

    /// Resolve a configured class id
    pub fn from_id(id: u8) -> Result<Self, SynthError> {
        match id {
            0 => Ok(FaultClass::Healthy),
            1 => Ok(FaultClass::VoltageUnbalance),
            2 => Ok(FaultClass::TorqueOverload),
            3 => Ok(FaultClass::TorqueBraking),
            other => Err(SynthError::InvalidClass(other)),
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            FaultClass::Healthy => "healthy",
            FaultClass::VoltageUnbalance => "voltage_unbalance",
            FaultClass::TorqueOverload => "torque_overload",
            FaultClass::TorqueBraking => "torque_braking",
        }
    }
}
