//! Environment trait

use async_trait::async_trait;
use lander_rl_core::{Action, ActionSpace, Info, Observation, ObservationSpace, Result, StepResult};

/// Step/reset contract over an external simulator.
///
/// Lifecycle: construct → reset → {step}* → close; reset may be called again
/// after a terminal step to start a new episode.
#[async_trait]
pub trait Environment: Send {
    /// Begin a new episode, drawing a seed when none is supplied.
    ///
    /// `options` is accepted for interface compatibility; this adapter has
    /// no use for it.
    async fn reset(&mut self, seed: Option<u64>, options: Option<Info>)
    -> Result<(Observation, Info)>;

    /// Execute one action and observe the resulting state.
    async fn step(&mut self, action: Action) -> Result<StepResult>;

    /// Release the simulator. No-op when nothing was ever launched.
    async fn close(&mut self) -> Result<()>;

    /// Visualization is not implemented.
    fn render(&self) {}

    /// Bounds of the action space.
    fn action_space(&self) -> ActionSpace {
        ActionSpace::default()
    }

    /// Bounds of the observation space.
    fn observation_space(&self) -> ObservationSpace {
        ObservationSpace::default()
    }
}
