//! Bridge infrastructure for the Mars Lander simulator
//!
//! This crate provides:
//! - The `LineTransport`/`Spawn` transport seam
//! - A child-process transport over piped stdio
//! - The reset handshake and state-line decoding
//! - A scripted in-memory transport for tests

pub mod mock;
pub mod process;
pub mod protocol;
pub mod transport;

pub use mock::ScriptedTransport;
pub use process::{ProcessTransport, SimulatorConfig};
pub use protocol::{EpisodeHeader, SEED_PROMPT, decode_state, handshake};
pub use transport::{LineTransport, Spawn};
