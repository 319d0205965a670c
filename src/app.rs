use crate::error::{AppError, AppResult};
use crate::generator::{GeneratorInvoker, InfraType};
use crate::sanitizer::{CandidateCommand, OutputSanitizer};
use crate::security::SafetyGate;
use crate::shell::ShellExecutor;
use crate::ui::Console;
use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const CONFIRM_MESSAGE: &str = "Do you want to run this command and generate the file?";

/// Where a single invocation currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Invoking,
    Sanitizing,
    GateChecking,
    Blocked,
    AwaitingConfirmation,
    Aborted,
    Executing,
    Done,
}

impl Stage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Stage::Blocked | Stage::Aborted | Stage::Done)
    }
}

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// User declined to run the command
    Aborted,
    /// Command ran through the shell and exited zero
    Executed,
    /// Command was approved but the shell run failed; the user got the text
    NotExecuted,
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        0
    }
}

#[derive(Debug, Clone)]
pub struct Request {
    pub instruction: String,
    pub infra_type: InfraType,
    pub save_path: Option<PathBuf>,
}

impl Request {
    pub fn new(instruction: impl Into<String>, infra_type: InfraType) -> Self {
        Self {
            instruction: instruction.into(),
            infra_type,
            save_path: None,
        }
    }

    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = Some(path.into());
        self
    }
}

/// Drives one instruction from prompt to (optional) execution
pub struct App<R, W> {
    invoker: GeneratorInvoker,
    gate: SafetyGate,
    executor: ShellExecutor,
    console: Console<R, W>,
    stage: Stage,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(invoker: GeneratorInvoker, executor: ShellExecutor, console: Console<R, W>) -> Self {
        Self {
            invoker,
            gate: SafetyGate::new(),
            executor,
            console,
            stage: Stage::Idle,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn console_mut(&mut self) -> &mut Console<R, W> {
        &mut self.console
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn enter(&mut self, stage: Stage) {
        tracing::debug!(from = ?self.stage, to = ?stage, "stage transition");
        self.stage = stage;
    }

    /// Run the whole pipeline for one request
    pub async fn run(&mut self, request: &Request) -> AppResult<Outcome> {
        let candidate = self.generate_candidate(request).await?;

        self.enter(Stage::GateChecking);
        if let Err(error) = self.gate.validate(&candidate) {
            self.enter(Stage::Blocked);
            tracing::info!(reason = %error, "candidate blocked by safety gate");
            self.console.failure("Unsafe or invalid command detected.")?;
            return Err(error.into());
        }

        self.console.success("Blueprint generated!")?;
        self.console.show_suggestion(candidate.as_str())?;

        if let Some(path) = &request.save_path {
            fs::write(path, format!("{}\n", candidate))?;
            self.console
                .success(&format!("Saved to {}", path.display()))?;
        }

        self.enter(Stage::AwaitingConfirmation);
        if !self.console.confirm(CONFIRM_MESSAGE, false)? {
            self.enter(Stage::Aborted);
            self.console.muted("Aborted.")?;
            return Ok(Outcome::Aborted);
        }

        self.enter(Stage::Executing);
        let outcome = self.execute(&candidate, &request.infra_type)?;
        self.enter(Stage::Done);
        Ok(outcome)
    }

    async fn generate_candidate(&mut self, request: &Request) -> AppResult<CandidateCommand> {
        self.enter(Stage::Invoking);
        self.console.status(&format!(
            "Consulting the Ops Spirits about \"{}\"...",
            request.instruction.trim()
        ))?;

        let response = match self
            .invoker
            .invoke(&request.instruction, &request.infra_type)
            .await
        {
            Ok(response) => response,
            Err(error) => {
                self.console.failure("Copilot execution failed.")?;
                return Err(error.into());
            }
        };

        self.enter(Stage::Sanitizing);
        match OutputSanitizer::sanitize(&response.combined()) {
            Ok(candidate) => Ok(candidate),
            Err(error) => {
                self.console.failure("Copilot did not return usable code.")?;
                Err(error.into())
            }
        }
    }

    /// Shell failures are reported, never propagated
    fn execute(&mut self, candidate: &CandidateCommand, infra_type: &InfraType) -> AppResult<Outcome> {
        match self.executor.execute(candidate.as_str()) {
            Ok(output) => {
                self.console
                    .success(&format!("Success! Your {} file is ready.", infra_type))?;
                let stdout = output.stdout.trim();
                if !stdout.is_empty() {
                    self.console.muted(stdout)?;
                }
                Ok(Outcome::Executed)
            }
            Err(error) => {
                tracing::info!(%error, "approved command failed to execute");
                self.console
                    .warning("Command generated but not executed automatically.")?;
                self.console.muted(candidate.as_str())?;
                Ok(Outcome::NotExecuted)
            }
        }
    }
}

/// Exit status for a finished run
pub fn exit_code(result: &Result<Outcome, AppError>) -> u8 {
    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(error) => error.exit_code(),
    }
}
