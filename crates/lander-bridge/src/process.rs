//! Child-process transport over piped stdio

use crate::transport::{LineTransport, Spawn};
use async_trait::async_trait;
use lander_rl_core::{LanderError, Result};
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tracing::{debug, info};

/// How to launch the simulator.
///
/// The default points at the Node.js build of the simulator; both the
/// program and its arguments can be overridden.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Program to execute
    pub program: String,
    /// Arguments passed to the program
    pub args: Vec<String>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            program: "/usr/local/bin/node".into(),
            args: vec!["../cli/target/scala-2.13/cli-opt/main.js".into()],
        }
    }
}

/// Transport speaking newline-delimited UTF-8 over a child's stdin/stdout.
///
/// Exactly one child per transport. Stderr is inherited so simulator
/// diagnostics land on the caller's terminal instead of filling an unread
/// pipe.
#[derive(Debug)]
pub struct ProcessTransport {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

fn map_write_err(err: std::io::Error) -> LanderError {
    if err.kind() == ErrorKind::BrokenPipe {
        LanderError::ProcessExited
    } else {
        LanderError::Ipc(format!("Write failed: {}", err))
    }
}

#[async_trait]
impl Spawn for ProcessTransport {
    type Config = SimulatorConfig;

    async fn spawn(config: &SimulatorConfig) -> Result<Self> {
        info!("Launching simulator: {} {:?}", config.program, config.args);

        let mut child = Command::new(&config.program)
            .args(&config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| LanderError::Ipc(format!("Failed to spawn simulator: {}", e)))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| LanderError::Ipc("Simulator has no stdin".into()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| LanderError::Ipc("Simulator has no stdout".into()))?;

        Ok(Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
        })
    }
}

#[async_trait]
impl LineTransport for ProcessTransport {
    async fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let n = self
            .stdout
            .read_line(&mut line)
            .await
            .map_err(|e| LanderError::Ipc(format!("Read failed: {}", e)))?;
        if n == 0 {
            // EOF: the simulator closed stdout, i.e. it exited.
            return Err(LanderError::ProcessExited);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        debug!("[sim→env] {}", line.chars().take(200).collect::<String>());
        Ok(line)
    }

    async fn write_line(&mut self, line: &str) -> Result<()> {
        if let Some(status) = self
            .child
            .try_wait()
            .map_err(|e| LanderError::Ipc(format!("Wait failed: {}", e)))?
        {
            debug!("Simulator already exited with {}", status);
            return Err(LanderError::ProcessExited);
        }

        debug!("[env→sim] {}", line);
        self.stdin
            .write_all(line.as_bytes())
            .await
            .map_err(map_write_err)?;
        self.stdin.write_all(b"\n").await.map_err(map_write_err)?;
        self.stdin
            .flush()
            .await
            .map_err(|e| LanderError::Ipc(format!("Flush failed: {}", e)))?;
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        if self.child.start_kill().is_ok() {
            let _ = self.child.wait().await;
        }
        Ok(())
    }
}

impl Drop for ProcessTransport {
    fn drop(&mut self) {
        // Kill the child if still running
        let _ = self.child.start_kill();
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_line_echo_through_cat() {
        let config = SimulatorConfig {
            program: "cat".into(),
            args: vec![],
        };
        let mut transport = ProcessTransport::spawn(&config).await.unwrap();
        transport.write_line("0 3").await.unwrap();
        assert_eq!(transport.read_line().await.unwrap(), "0 3");
        transport.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_eof_reports_process_exited() {
        let config = SimulatorConfig {
            program: "sh".into(),
            args: vec!["-c".into(), "exit 0".into()],
        };
        let mut transport = ProcessTransport::spawn(&config).await.unwrap();
        let err = transport.read_line().await.unwrap_err();
        assert!(matches!(err, LanderError::ProcessExited), "got {:?}", err);

        // A write after the exit surfaces the same error kind, whether it
        // is caught by try_wait or by the broken pipe.
        let err = transport.write_line("0 0").await.unwrap_err();
        assert!(matches!(err, LanderError::ProcessExited), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_spawn_failure_is_ipc_error() {
        let config = SimulatorConfig {
            program: "/nonexistent/simulator".into(),
            args: vec![],
        };
        let err = ProcessTransport::spawn(&config).await.unwrap_err();
        assert!(matches!(err, LanderError::Ipc(_)), "got {:?}", err);
    }
}
