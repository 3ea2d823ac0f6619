//! Wire protocol with the simulator
//!
//! All messages are newline-delimited UTF-8. A reset handshake is:
//!
//! ```text
//! sim → env   line containing "seed"
//! env → sim   <seed_integer>
//! sim → env   level identifier (free text)
//! sim → env   N (decimal count of landing-zone lines)
//! sim → env   N coordinate-pair lines
//! sim → env   JSON state line
//! ```
//!
//! after which each step exchanges `<rotation> <power>` for one JSON state
//! line.

use crate::transport::LineTransport;
use lander_rl_core::{LanderError, LanderState, Result};

/// Substring marking the simulator's seed prompt
pub const SEED_PROMPT: &str = "seed";

/// Per-episode data received during the handshake.
///
/// The landing zone is informational: captured verbatim, never consulted by
/// reward or termination logic.
#[derive(Debug, Clone)]
pub struct EpisodeHeader {
    /// Level identifier line
    pub level: String,
    /// Landing-zone coordinate-pair lines, in wire order
    pub landing_zone: Vec<String>,
}

/// Decode one JSON state line.
pub fn decode_state(line: &str) -> Result<LanderState> {
    serde_json::from_str(line).map_err(Into::into)
}

/// Drive the reset handshake: seed prompt, seed, level, landing zone,
/// initial state.
///
/// A first line without the seed prompt marker is a fatal protocol
/// violation; there is no retry or resynchronization.
pub async fn handshake<T: LineTransport + ?Sized>(
    transport: &mut T,
    seed: u64,
) -> Result<(EpisodeHeader, LanderState)> {
    let prompt = transport.read_line().await?;
    if !prompt.contains(SEED_PROMPT) {
        return Err(LanderError::Protocol(format!(
            "expected seed prompt, got '{}'",
            prompt
        )));
    }
    transport.write_line(&seed.to_string()).await?;

    let level = transport.read_line().await?;
    let count_line = transport.read_line().await?;
    let count: usize = count_line.trim().parse().map_err(|_| {
        LanderError::Protocol(format!("expected landing zone count, got '{}'", count_line))
    })?;

    let mut landing_zone = Vec::with_capacity(count);
    for _ in 0..count {
        landing_zone.push(transport.read_line().await?);
    }

    let state = decode_state(&transport.read_line().await?)?;
    Ok((EpisodeHeader { level, landing_zone }, state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::ScriptedTransport;

    const STATE: &str = r#"{"x":2500,"y":2700,"fuel":550,"power":0,"rotation":0,"isCrashed":false,"isLanded":false,"isOffLimits":false,"isOutOfFuel":false}"#;

    #[tokio::test]
    async fn test_handshake_happy_path() {
        let mut transport = ScriptedTransport::new([
            "Enter seed:",
            "Level: 2-3",
            "3",
            "0 100",
            "1000 500",
            "6999 800",
            STATE,
        ]);

        let (header, state) = handshake(&mut transport, 42).await.unwrap();
        assert_eq!(transport.sent, vec!["42"]);
        assert_eq!(header.level, "Level: 2-3");
        assert_eq!(header.landing_zone, vec!["0 100", "1000 500", "6999 800"]);
        assert_eq!(state.fuel, 550.0);
        assert!(!state.is_terminal());
    }

    #[tokio::test]
    async fn test_missing_seed_prompt_is_protocol_error() {
        let mut transport = ScriptedTransport::new(["hello world"]);
        let err = handshake(&mut transport, 42).await.unwrap_err();
        match err {
            LanderError::Protocol(msg) => assert!(msg.contains("hello world"), "{}", msg),
            other => panic!("expected protocol error, got {:?}", other),
        }
        // Nothing was written back after the violation.
        assert!(transport.sent.is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_count_is_protocol_error() {
        let mut transport = ScriptedTransport::new(["Enter seed:", "2-3", "three", STATE]);
        let err = handshake(&mut transport, 1).await.unwrap_err();
        match err {
            LanderError::Protocol(msg) => assert!(msg.contains("three"), "{}", msg),
            other => panic!("expected protocol error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_state_is_serialization_error() {
        let mut transport = ScriptedTransport::new(["Enter seed:", "2-3", "0", "{not json"]);
        let err = handshake(&mut transport, 1).await.unwrap_err();
        assert!(matches!(err, LanderError::Serialization(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_truncated_handshake_is_process_exited() {
        let mut transport = ScriptedTransport::new(["Enter seed:", "2-3", "2", "0 100"]);
        let err = handshake(&mut transport, 1).await.unwrap_err();
        assert!(matches!(err, LanderError::ProcessExited), "got {:?}", err);
    }
}
