//! Transport abstraction for the simulator
//!
//! The simulator is an opaque capability behind a line-oriented seam, so a
//! test double can stand in for the real subprocess.

use async_trait::async_trait;
use lander_rl_core::Result;

/// Line-oriented exchange with the simulator.
///
/// Reads and writes block the caller until a full line moves; there is no
/// timeout and no cancellation. A transport whose peer is gone reports
/// `LanderError::ProcessExited` instead of hanging on a closed pipe.
#[async_trait]
pub trait LineTransport: Send {
    /// Read one line, trailing newline stripped.
    async fn read_line(&mut self) -> Result<String>;

    /// Write one line; a newline is appended and the write is flushed.
    async fn write_line(&mut self, line: &str) -> Result<()>;

    /// Tear the transport down. No drain of pending output.
    async fn close(&mut self) -> Result<()>;
}

/// Constructor seam so the adapter can create its transport lazily.
#[async_trait]
pub trait Spawn: LineTransport + Sized {
    /// Configuration needed to bring the transport up
    type Config: Send + Sync;

    /// Create a live transport from its configuration.
    async fn spawn(config: &Self::Config) -> Result<Self>;
}
