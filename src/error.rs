use std::io;
use thiserror::Error;

// Import module-level errors for AppError
use crate::config::settings::ConfigError;
use crate::generator::client::GeneratorError;
use crate::sanitizer::extractor::SanitizeError;
use crate::security::validator::ValidationError;

/// Top-level application error that wraps all module-specific errors
///
/// Every variant is terminal for the invocation and maps to exit status 1.
/// Shell execution failures are not represented here; the confirmation flow
/// reports them and the run still succeeds.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Sanitizer error: {0}")]
    Sanitize(#[from] SanitizeError),

    #[error("Security validation error: {0}")]
    Security(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input closed before an instruction was given")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;
