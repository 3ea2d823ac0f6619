//! # lander-env
//!
//! Environment adapter for the Mars Lander simulator:
//! - `Environment` trait (reset/step/close/render)
//! - `MarsLanderEnv`, generic over the simulator transport

pub mod environment;
pub mod mars_lander;

pub use environment::Environment;
pub use mars_lander::MarsLanderEnv;
