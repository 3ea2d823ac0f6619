//! Observation types

use crate::state::LanderState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Auxiliary info mapping returned by reset and step. Currently always empty.
pub type Info = HashMap<String, serde_json::Value>;

/// Fixed-order numeric projection of a [`LanderState`]:
/// `[x, y, fuel, power, rotation]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation(pub [f64; 5]);

impl Observation {
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    pub fn fuel(&self) -> f64 {
        self.0[2]
    }

    pub fn power(&self) -> f64 {
        self.0[3]
    }

    pub fn rotation(&self) -> f64 {
        self.0[4]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<&LanderState> for Observation {
    fn from(state: &LanderState) -> Self {
        Observation([state.x, state.y, state.fuel, state.power, state.rotation])
    }
}

/// Box bounds of the observation space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationSpace {
    pub low: [f64; 5],
    pub high: [f64; 5],
}

impl Default for ObservationSpace {
    fn default() -> Self {
        Self {
            low: [0.0, 0.0, 0.0, 0.0, -90.0],
            high: [7000.0, 3000.0, 1000.0, 4.0, 90.0],
        }
    }
}

impl ObservationSpace {
    /// Whether every component lies inside its bounds.
    pub fn contains(&self, observation: &Observation) -> bool {
        observation
            .as_slice()
            .iter()
            .zip(self.low.iter().zip(self.high.iter()))
            .all(|(v, (lo, hi))| lo <= v && v <= hi)
    }
}

/// Result of a single environment step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    /// Observation after the action
    pub observation: Observation,

    /// Scalar reward signal
    pub reward: f64,

    /// Episode terminated
    pub done: bool,

    /// Episode truncated (never set by this adapter)
    pub truncated: bool,

    /// Auxiliary info
    #[serde(default)]
    pub info: Info,
}
