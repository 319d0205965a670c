use std::process::{Command, Output};
use thiserror::Error;

pub const DEFAULT_SHELL: &str = "sh";
pub const DEFAULT_SHELL_FLAG: &str = "-c";

#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Failed to start shell '{shell}': {source}")]
    SpawnFailed {
        shell: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed with exit code {exit_code}: {stderr}")]
    NonZeroExit { exit_code: i32, stderr: String },
}

/// Result of running a command through the shell
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub success: bool,
}

/// Hands approved command text verbatim to a shell
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    program: String,
    flag: String,
}

impl ShellExecutor {
    pub fn new(program: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            flag: flag.into(),
        }
    }

    /// Execute a command and return the output
    ///
    /// No escaping or sandboxing happens here; callers must have passed the
    /// command through the safety gate.
    pub fn execute(&self, command: &str) -> Result<CommandOutput, ExecutionError> {
        tracing::info!(shell = %self.program, "executing approved command");

        let output = Command::new(&self.program)
            .arg(&self.flag)
            .arg(command)
            .output()
            .map_err(|source| ExecutionError::SpawnFailed {
                shell: self.program.clone(),
                source,
            })?;

        Self::process_output(output)
    }

    fn process_output(output: Output) -> Result<CommandOutput, ExecutionError> {
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);
        let success = output.status.success();

        if !success {
            return Err(ExecutionError::NonZeroExit {
                exit_code,
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(CommandOutput {
            stdout,
            stderr,
            exit_code,
            success,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL, DEFAULT_SHELL_FLAG)
    }
}
