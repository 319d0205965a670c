use crate::error::AppError;
use crate::generator::GeneratorError;

const INSTALL_HINT: &str = "Install it from https://github.com/github/copilot-cli";
const AUTH_HINT: &str = "Run: gh auth login";
const PLAN_HINT: &str = "Check your plan: https://github.com/features/copilot/plans";

#[derive(Debug, Clone)]
pub struct UserFriendlyError {
    pub simple_message: String,
    pub suggestion: Option<String>,
    pub detail: Option<String>,
}

impl UserFriendlyError {
    fn new(simple_message: &str, suggestion: Option<&str>, detail: Option<String>) -> Self {
        Self {
            simple_message: simple_message.to_string(),
            suggestion: suggestion.map(str::to_string),
            detail,
        }
    }

    fn authentication(detail: Option<String>) -> Self {
        Self::new("GitHub authentication failed.", Some(AUTH_HINT), detail)
    }
}

pub struct ErrorTranslator;

impl ErrorTranslator {
    /// Translate an AppError into a user-friendly error message
    pub fn translate_app_error(error: &AppError) -> UserFriendlyError {
        match error {
            AppError::Generator(generator_err) => Self::translate_generator(generator_err),
            AppError::Sanitize(_) => UserFriendlyError::new(
                "Copilot quota exceeded or no code generated.",
                Some(PLAN_HINT),
                None,
            ),
            AppError::Security(validation_err) => {
                let rejected = validation_err.rejected_text();
                UserFriendlyError::new(
                    "Blocked unsafe execution.",
                    None,
                    (!rejected.is_empty()).then(|| rejected.to_string()),
                )
            }
            AppError::Config(config_err) => UserFriendlyError::new(
                "Configuration error occurred.",
                Some("Check your config file at ~/.config/ops-whisperer/config.toml"),
                Some(config_err.to_string()),
            ),
            AppError::InputClosed => UserFriendlyError::new(
                "No instruction given.",
                Some("Pass the instruction as an argument, e.g. ops-whisperer \"run nginx on port 80\""),
                None,
            ),
            AppError::Io(io_err) => {
                let raw = io_err.to_string();
                if Self::mentions_auth(&raw) {
                    return UserFriendlyError::authentication(Some(raw));
                }
                UserFriendlyError::new("I/O error occurred.", None, Some(raw))
            }
        }
    }

    fn translate_generator(error: &GeneratorError) -> UserFriendlyError {
        let raw = error.to_string();

        match error {
            GeneratorError::AuthenticationFailed(detail) => {
                UserFriendlyError::authentication(Some(detail.clone()))
            }
            _ if Self::mentions_auth(&raw) => UserFriendlyError::authentication(Some(raw)),
            GeneratorError::Unavailable { detail, .. } => UserFriendlyError::new(
                "Copilot CLI not found.",
                Some(INSTALL_HINT),
                Some(detail.clone()),
            ),
            GeneratorError::EmptyInstruction => UserFriendlyError::new(
                "Please describe what infrastructure you need.",
                None,
                None,
            ),
            GeneratorError::Io(_) => UserFriendlyError::new(
                "Copilot execution failed.",
                Some(INSTALL_HINT),
                Some(raw),
            ),
        }
    }

    fn mentions_auth(message: &str) -> bool {
        message.to_lowercase().contains("auth")
    }
}
