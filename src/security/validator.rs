use crate::sanitizer::CandidateCommand;
use crate::security::{ALLOWED_COMMAND_PREFIXES, MIN_COMMAND_LENGTH};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty command")]
    EmptyCommand,

    #[error("Command does not start with an allowed prefix: {command}")]
    DisallowedPrefix { command: String },

    #[error("Command is too short ({length} characters): {command}")]
    TooShort { command: String, length: usize },
}

impl ValidationError {
    /// The text that was refused
    pub fn rejected_text(&self) -> &str {
        match self {
            ValidationError::EmptyCommand => "",
            ValidationError::DisallowedPrefix { command } => command,
            ValidationError::TooShort { command, .. } => command,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCommand {
    pub command: String,
    pub matched_prefix: &'static str,
}

/// Safe/unsafe decision, with the reason carried by the error side
pub type SafetyVerdict = Result<ValidatedCommand, ValidationError>;

/// Allow-list check applied before a candidate may be executed
#[derive(Debug, Clone)]
pub struct SafetyGate {
    allowed_prefixes: &'static [&'static str],
    min_length: usize,
}

impl SafetyGate {
    pub fn new() -> Self {
        Self {
            allowed_prefixes: ALLOWED_COMMAND_PREFIXES,
            min_length: MIN_COMMAND_LENGTH,
        }
    }

    /// Validate a sanitized candidate
    pub fn validate(&self, candidate: &CandidateCommand) -> SafetyVerdict {
        self.validate_str(candidate.as_str())
    }

    /// Validate raw text with the same rules as [`SafetyGate::validate`]
    pub fn validate_str(&self, command: &str) -> SafetyVerdict {
        if command.is_empty() {
            return Err(ValidationError::EmptyCommand);
        }

        let Some(prefix) = self.matching_prefix(command) else {
            return Err(ValidationError::DisallowedPrefix {
                command: command.to_string(),
            });
        };

        let length = command.chars().count();
        if length < self.min_length {
            return Err(ValidationError::TooShort {
                command: command.to_string(),
                length,
            });
        }

        Ok(ValidatedCommand {
            command: command.to_string(),
            matched_prefix: prefix,
        })
    }

    pub fn is_safe(&self, command: &str) -> bool {
        self.validate_str(command).is_ok()
    }

    fn matching_prefix(&self, command: &str) -> Option<&'static str> {
        self.allowed_prefixes
            .iter()
            .copied()
            .find(|prefix| command.starts_with(prefix))
    }
}

impl Default for SafetyGate {
    fn default() -> Self {
        Self::new()
    }
}
