use crate::generator::client::{Generator, GeneratorError, RawResponse};
use async_trait::async_trait;
use std::io;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

pub const DEFAULT_PROGRAM: &str = "copilot";
pub const DEFAULT_PROMPT_FLAG: &str = "-p";
/// Answer fed to the generator's stdin so any permission prompt is declined
pub const DEFAULT_DENY_INPUT: &str = "n\n";

/// Generator backed by an external AI CLI process
#[derive(Debug, Clone)]
pub struct CopilotCli {
    program: String,
    prompt_flag: String,
    deny_input: String,
}

impl CopilotCli {
    pub fn new(
        program: impl Into<String>,
        prompt_flag: impl Into<String>,
        deny_input: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            prompt_flag: prompt_flag.into(),
            deny_input: deny_input.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn classify_failure(&self, exit_code: Option<i32>, combined: &str) -> GeneratorError {
        let detail = match exit_code {
            Some(code) => format!("exited with status {}: {}", code, combined.trim()),
            None => format!("terminated by signal: {}", combined.trim()),
        };

        if combined.to_lowercase().contains("auth") {
            GeneratorError::AuthenticationFailed(detail)
        } else {
            GeneratorError::Unavailable {
                program: self.program.clone(),
                detail,
            }
        }
    }
}

impl Default for CopilotCli {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_PROMPT_FLAG, DEFAULT_DENY_INPUT)
    }
}

#[async_trait]
impl Generator for CopilotCli {
    async fn generate(&self, prompt: &str) -> Result<RawResponse, GeneratorError> {
        tracing::debug!(program = %self.program, "spawning generator");

        let mut child = Command::new(&self.program)
            .arg(&self.prompt_flag)
            .arg(prompt)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| GeneratorError::Unavailable {
                program: self.program.clone(),
                detail: e.to_string(),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // The generator may exit without ever reading its input
            if let Err(e) = stdin.write_all(self.deny_input.as_bytes()).await {
                if e.kind() != io::ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
            // Drop closes the pipe
        }

        let output = child.wait_with_output().await?;
        let response = RawResponse::new(
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );

        if !output.status.success() {
            let error = self.classify_failure(output.status.code(), &response.combined());
            tracing::info!(%error, "generator exited abnormally");
            return Err(error);
        }

        tracing::debug!(
            stdout_bytes = response.stdout.len(),
            stderr_bytes = response.stderr.len(),
            "generator finished"
        );
        Ok(response)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    // `sh -c <prompt>` stands in for the generator: the prompt is a script.
    fn shell_generator() -> CopilotCli {
        CopilotCli::new("sh", "-c", DEFAULT_DENY_INPUT)
    }

    #[tokio::test]
    async fn test_generate_captures_stdout() {
        let result = shell_generator().generate("echo 'docker ps -a'").await;
        assert!(result.is_ok());

        let response = result.unwrap();
        assert_eq!(response.stdout.trim(), "docker ps -a");
    }

    #[tokio::test]
    async fn test_generate_feeds_deny_input() {
        let response = shell_generator().generate("cat").await.unwrap();
        assert_eq!(response.stdout, "n\n");
    }

    #[tokio::test]
    async fn test_generate_combines_stderr() {
        let response = shell_generator()
            .generate("echo out; echo err >&2")
            .await
            .unwrap();
        assert_eq!(response.combined(), "out\nerr\n");
    }

    #[tokio::test]
    async fn test_missing_program_is_unavailable() {
        let generator = CopilotCli::new("ops-whisperer-no-such-binary", "-p", "n\n");
        let result = generator.generate("anything").await;

        assert!(matches!(
            result.unwrap_err(),
            GeneratorError::Unavailable { .. }
        ));
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_unavailable() {
        let result = shell_generator().generate("echo boom >&2; exit 3").await;

        match result.unwrap_err() {
            GeneratorError::Unavailable { program, detail } => {
                assert_eq!(program, "sh");
                assert!(detail.contains("status 3"));
                assert!(detail.contains("boom"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_auth_failure_detected() {
        let result = shell_generator()
            .generate("echo 'Error: not Authenticated, run login' >&2; exit 1")
            .await;

        assert!(matches!(
            result.unwrap_err(),
            GeneratorError::AuthenticationFailed(_)
        ));
    }

    #[test]
    fn test_default_uses_copilot() {
        let generator = CopilotCli::default();
        assert_eq!(generator.program(), "copilot");
    }
}
