//! Error types for the lander adapter

use thiserror::Error;

/// Result type for lander operations
pub type Result<T> = std::result::Result<T, LanderError>;

/// Lander adapter error types
#[derive(Debug, Error)]
pub enum LanderError {
    /// Action outside the action space
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// step called before the first reset
    #[error("No episode in progress, call reset")]
    NotReset,

    /// The simulator process is gone
    #[error("Simulator process exited")]
    ProcessExited,

    /// Spawn/read/write failure on the simulator pipes
    #[error("IPC error: {0}")]
    Ipc(String),

    /// Malformed state line
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Handshake violation
    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl From<serde_json::Error> for LanderError {
    fn from(err: serde_json::Error) -> Self {
        LanderError::Serialization(err.to_string())
    }
}
