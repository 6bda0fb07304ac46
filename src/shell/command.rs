//! Shell command execution.

use crate::error::{PackagerError, Result};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Execute a command through the platform shell, capturing stdout.
///
/// Stderr is discarded. A spawn failure or output that is not valid UTF-8
/// is an error; a non-zero exit is reported through [`CommandResult`].
pub fn execute(command: &str) -> Result<CommandResult> {
    let start = Instant::now();

    let shell = shell_program();
    let mut cmd = Command::new(shell);
    cmd.arg(shell_flag());
    cmd.arg(command);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::null());

    tracing::debug!("Running '{}' via {}", command, shell);

    let output = cmd.output().map_err(|e| PackagerError::CommandSpawn {
        command: command.to_string(),
        message: e.to_string(),
    })?;

    let stdout = String::from_utf8(output.stdout).map_err(|_| PackagerError::OutputDecode {
        command: command.to_string(),
    })?;

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout,
        duration: start.elapsed(),
        success: output.status.success(),
    })
}

/// Run a version query and return its trimmed stdout.
///
/// Every failure mode (spawn, decode, non-zero exit) becomes an `Err`.
pub fn query_version(command: &str) -> Result<String> {
    let result = execute(command)?;
    tracing::debug!(
        "'{}' exited with {:?} after {:?}",
        command,
        result.exit_code,
        result.duration
    );

    if !result.success {
        return Err(PackagerError::CommandFailed {
            command: command.to_string(),
            code: result.exit_code,
        });
    }

    Ok(result.stdout.trim().to_string())
}

/// The shell that runs commands.
///
/// Always the system shell; the user's login shell (`$SHELL`) is ignored
/// so the same command behaves the same for everyone.
fn shell_program() -> &'static str {
    if cfg!(target_os = "windows") {
        "cmd.exe"
    } else {
        "/bin/sh"
    }
}

/// Get the flag to pass commands to the shell.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}
