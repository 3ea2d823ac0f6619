//! Random-policy smoke test
//!
//! Runs a number of episodes against the simulator, sampling uniformly
//! random actions until each episode terminates, and reports per-episode
//! reward, step count and wall-clock timing.
//!
//! Usage: `lander-smoke [episodes] [simulator-program [args...]]`

use anyhow::Result;
use lander_bridge::process::SimulatorConfig;
use lander_env::{Environment, MarsLanderEnv};
use rand::thread_rng;
use std::time::Instant;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; stdout stays free for shells capturing output
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let episodes: usize = match args.get(1) {
        Some(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid episode count '{}'", raw))?,
        None => 50,
    };

    let mut config = SimulatorConfig::default();
    if let Some(program) = args.get(2) {
        config.program = program.clone();
        config.args = args[3..].to_vec();
    }

    info!(
        "Smoke test starting: {} episodes against {}",
        episodes, config.program
    );

    let mut env = MarsLanderEnv::new(config);
    let space = env.action_space();
    let mut rng = thread_rng();

    let run_start = Instant::now();
    let mut episode_ms = Vec::with_capacity(episodes);

    for episode in 0..episodes {
        let start = Instant::now();
        let (_observation, _info) = env.reset(None, None).await?;

        let mut steps = 0u64;
        let mut total_reward = 0.0;
        loop {
            let action = space.sample(&mut rng);
            let result = env.step(action).await?;
            steps += 1;
            total_reward += result.reward;
            if result.done {
                break;
            }
        }

        let ms = start.elapsed().as_secs_f64() * 1000.0;
        episode_ms.push(ms);
        info!(
            "Episode {}: {} steps, total reward {:.1}, {:.1} ms",
            episode, steps, total_reward, ms
        );
    }

    env.close().await?;

    let mean_ms = episode_ms.iter().sum::<f64>() / episode_ms.len().max(1) as f64;
    info!(
        "Smoke test complete: {} episodes in {:.2} s, mean episode {:.1} ms",
        episodes,
        run_start.elapsed().as_secs_f64(),
        mean_ms
    );
    Ok(())
}
