//! Shell adapter for the compile and run steps.
//!
//! The [`Shell`] trait separates invocation from orchestration. Tests use a
//! scripted shell that records command lines without spawning processes.

use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::{debug, error, instrument};

/// Result of a command whose stdout was captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Exit code, or `None` if the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs command lines through a shell, blocking until they exit.
pub trait Shell {
    /// Run with stdout captured; stdin and stderr are inherited.
    fn check_output(&self, command_line: &str) -> Result<CapturedOutput>;

    /// Run with all streams inherited. Returns the exit code.
    fn run(&self, command_line: &str) -> Result<Option<i32>>;
}

/// Shell that spawns `sh -c <command_line>`.
pub struct ShShell;

impl ShShell {
    fn command(command_line: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command_line);
        cmd
    }
}

impl Shell for ShShell {
    #[instrument(skip_all)]
    fn check_output(&self, command_line: &str) -> Result<CapturedOutput> {
        debug!(command_line, "spawning shell (captured stdout)");
        let output = match Self::command(command_line)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                error!(err = %e, "failed to spawn shell");
                return Err(e).context("spawn sh");
            }
        };
        debug!(exit_code = ?output.status.code(), "command finished");
        Ok(CapturedOutput {
            code: output.status.code(),
            stdout: output.stdout,
        })
    }

    #[instrument(skip_all)]
    fn run(&self, command_line: &str) -> Result<Option<i32>> {
        debug!(command_line, "spawning shell (inherited output)");
        let status = match Self::command(command_line).status() {
            Ok(status) => status,
            Err(e) => {
                error!(err = %e, "failed to spawn shell");
                return Err(e).context("spawn sh");
            }
        };
        debug!(exit_code = ?status.code(), "command finished");
        Ok(status.code())
    }
}
