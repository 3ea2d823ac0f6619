//! Action types and the action space

use crate::error::{LanderError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rotation bound in degrees (inclusive, symmetric)
pub const MAX_ROTATION: i32 = 90;
/// Maximum thrust power setting (inclusive)
pub const MAX_POWER: i32 = 4;

/// A validated (rotation, power) command.
///
/// Construction goes through [`Action::new`] so every value that reaches the
/// wire is inside the action space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    rotation: i32,
    power: i32,
}

impl Action {
    /// Create an action, rejecting values outside rotation [-90, 90] or
    /// power [0, 4].
    pub fn new(rotation: i32, power: i32) -> Result<Self> {
        if !(-MAX_ROTATION..=MAX_ROTATION).contains(&rotation) {
            return Err(LanderError::InvalidAction(format!(
                "rotation {} outside [-{}, {}]",
                rotation, MAX_ROTATION, MAX_ROTATION
            )));
        }
        if !(0..=MAX_POWER).contains(&power) {
            return Err(LanderError::InvalidAction(format!(
                "power {} outside [0, {}]",
                power, MAX_POWER
            )));
        }
        Ok(Self { rotation, power })
    }

    /// Rotation in degrees
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    /// Thrust power setting
    pub fn power(&self) -> i32 {
        self.power
    }

    /// Wire form: two whitespace-separated integers, rotation then power.
    pub fn command(&self) -> String {
        format!("{} {}", self.rotation, self.power)
    }
}

/// Bounds of the (rotation, power) action space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionSpace {
    pub max_rotation: i32,
    pub max_power: i32,
}

impl Default for ActionSpace {
    fn default() -> Self {
        Self {
            max_rotation: MAX_ROTATION,
            max_power: MAX_POWER,
        }
    }
}

impl ActionSpace {
    /// Whether the action lies inside this space.
    pub fn contains(&self, action: &Action) -> bool {
        (-self.max_rotation..=self.max_rotation).contains(&action.rotation)
            && (0..=self.max_power).contains(&action.power)
    }

    /// Draw a uniformly random action.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Action {
        Action {
            rotation: rng.gen_range(-self.max_rotation..=self.max_rotation),
            power: rng.gen_range(0..=self.max_power),
        }
    }
}
