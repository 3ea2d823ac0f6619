//! # lander-rl-core
//!
//! Core types for the Mars Lander RL environment adapter:
//! - Simulator state and termination flags
//! - Observation and action types with their spaces
//! - Reward computation
//! - Error taxonomy

pub mod action;
pub mod error;
pub mod observation;
pub mod reward;
pub mod state;

pub use action::{Action, ActionSpace, MAX_POWER, MAX_ROTATION};
pub use error::{LanderError, Result};
pub use observation::{Info, Observation, ObservationSpace, StepResult};
pub use reward::step_reward;
pub use state::LanderState;
