//! Mars Lander environment adapter

use crate::environment::Environment;
use async_trait::async_trait;
use lander_bridge::process::{ProcessTransport, SimulatorConfig};
use lander_bridge::protocol::{EpisodeHeader, decode_state, handshake};
use lander_bridge::transport::{LineTransport, Spawn};
use lander_rl_core::{
    Action, Info, LanderError, LanderState, Observation, Result, StepResult, step_reward,
};
use rand::Rng;
use tracing::{debug, info};

/// Exclusive upper bound of the default seed draw
const SEED_DRAW_RANGE: u64 = 42;

/// Environment adapter over one simulator process.
///
/// The transport is created lazily on the first reset and reused across
/// episodes until close. Strictly sequential: one exchange in flight at a
/// time, no timeout, no retry after a protocol violation.
pub struct MarsLanderEnv<T: Spawn = ProcessTransport> {
    config: T::Config,
    transport: Option<T>,
    header: Option<EpisodeHeader>,
    state: Option<LanderState>,
    done: bool,
}

impl MarsLanderEnv<ProcessTransport> {
    /// Adapter over the real simulator process.
    pub fn new(config: SimulatorConfig) -> Self {
        Self::with_config(config)
    }
}

impl<T: Spawn> MarsLanderEnv<T> {
    /// Adapter over any transport implementing [`Spawn`].
    pub fn with_config(config: T::Config) -> Self {
        Self {
            config,
            transport: None,
            header: None,
            state: None,
            done: false,
        }
    }

    /// Level identifier of the current episode.
    pub fn level(&self) -> Option<&str> {
        self.header.as_ref().map(|h| h.level.as_str())
    }

    /// Landing-zone lines of the current episode, in wire order.
    pub fn landing_zone(&self) -> &[String] {
        self.header
            .as_ref()
            .map(|h| h.landing_zone.as_slice())
            .unwrap_or(&[])
    }

    /// Most recent decoded simulator state.
    pub fn state(&self) -> Option<&LanderState> {
        self.state.as_ref()
    }

    /// Whether the current episode has terminated.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[async_trait]
impl<T: Spawn> Environment for MarsLanderEnv<T> {
    async fn reset(
        &mut self,
        seed: Option<u64>,
        _options: Option<Info>,
    ) -> Result<(Observation, Info)> {
        if self.transport.is_none() {
            self.transport = Some(T::spawn(&self.config).await?);
        }
        let transport = self.transport.as_mut().ok_or(LanderError::NotReset)?;

        self.done = false;
        let seed = seed.unwrap_or_else(|| rand::thread_rng().gen_range(0..SEED_DRAW_RANGE));

        let (header, state) = handshake(transport, seed).await?;
        info!(
            "Episode started: level '{}', {} landing zone lines, seed {}",
            header.level.trim(),
            header.landing_zone.len(),
            seed
        );

        let observation = Observation::from(&state);
        self.header = Some(header);
        self.state = Some(state);
        Ok((observation, Info::new()))
    }

    async fn step(&mut self, action: Action) -> Result<StepResult> {
        let transport = self.transport.as_mut().ok_or(LanderError::NotReset)?;

        // Reward is judged against the done flag as it was before this step.
        let was_done = self.done;

        transport.write_line(&action.command()).await?;
        let line = transport.read_line().await?;
        let state = decode_state(&line)?;

        let reward = step_reward(&state, was_done);
        if state.is_terminal() {
            debug!("Episode terminal: {:?}", state);
            self.done = true;
        }

        let observation = Observation::from(&state);
        self.state = Some(state);
        Ok(StepResult {
            observation,
            reward,
            done: self.done,
            truncated: false,
            info: Info::new(),
        })
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(mut transport) = self.transport.take() {
            transport.close().await?;
            info!("Simulator closed");
        }
        Ok(())
    }
}
