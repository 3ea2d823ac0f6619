//! Simulator state as decoded from the wire

use serde::{Deserialize, Serialize};

/// One decoded state line from the simulator.
///
/// Wire keys are camelCase (`isCrashed`, `isOutOfFuel`, ...); unknown keys
/// are ignored so the simulator may grow its payload without breaking us.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanderState {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Remaining fuel
    pub fuel: f64,
    /// Current thrust power setting
    pub power: f64,
    /// Current rotation angle in degrees
    pub rotation: f64,
    /// Lander hit the ground outside the rules
    pub is_crashed: bool,
    /// Lander touched down successfully
    pub is_landed: bool,
    /// Lander left the playing field
    pub is_off_limits: bool,
    /// Fuel ran out
    pub is_out_of_fuel: bool,
}

impl LanderState {
    /// Whether any termination condition holds.
    pub fn is_terminal(&self) -> bool {
        self.is_crashed || self.is_landed || self.is_off_limits || self.is_out_of_fuel
    }
}
