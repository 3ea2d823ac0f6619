//! Scripted in-memory transport
//!
//! Substitutes for the real subprocess in tests: incoming lines come from a
//! canned script, outgoing lines are recorded, and reading past the end of
//! the script looks like a dead process.

use crate::transport::{LineTransport, Spawn};
use async_trait::async_trait;
use lander_rl_core::{LanderError, Result};
use std::collections::VecDeque;

/// In-memory [`LineTransport`] over a queue of canned lines.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    incoming: VecDeque<String>,
    /// Every line written by the adapter, in order
    pub sent: Vec<String>,
    /// Whether close was called
    pub closed: bool,
}

impl ScriptedTransport {
    /// Create a transport that will replay the given lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            incoming: lines.into_iter().map(Into::into).collect(),
            sent: Vec::new(),
            closed: false,
        }
    }

    /// Append a line to the script.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.incoming.push_back(line.into());
    }
}

#[async_trait]
impl LineTransport for ScriptedTransport {
    async fn read_line(&mut self) -> Result<String> {
        self.incoming
            .pop_front()
            .ok_or(LanderError::ProcessExited)
    }

    async fn write_line(&mut self, line: &str) -> Result<()> {
        self.sent.push(line.to_string());
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}

#[async_trait]
impl Spawn for ScriptedTransport {
    type Config = Vec<String>;

    async fn spawn(config: &Vec<String>) -> Result<Self> {
        Ok(Self::new(config.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_script_then_reports_exit() {
        tokio_test::block_on(async {
            let mut transport = ScriptedTransport::new(["one", "two"]);
            assert_eq!(transport.read_line().await.unwrap(), "one");
            assert_eq!(transport.read_line().await.unwrap(), "two");
            let err = transport.read_line().await.unwrap_err();
            assert!(matches!(err, LanderError::ProcessExited));
        });
    }

    #[test]
    fn test_records_written_lines() {
        tokio_test::block_on(async {
            let mut transport = ScriptedTransport::new(Vec::<String>::new());
            transport.write_line("15 2").await.unwrap();
            transport.close().await.unwrap();
            assert_eq!(transport.sent, vec!["15 2"]);
            assert!(transport.closed);
        });
    }
}
