use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while invoking the generator
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Generator '{program}' is unavailable: {detail}")]
    Unavailable { program: String, detail: String },

    #[error("Generator authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Instruction is empty")]
    EmptyInstruction,

    #[error("IO error while talking to generator: {0}")]
    Io(#[from] std::io::Error),
}

/// Unparsed output captured from one generator run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    pub stdout: String,
    pub stderr: String,
}

impl RawResponse {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Response consisting only of standard output
    pub fn from_stdout(stdout: impl Into<String>) -> Self {
        Self::new(stdout, String::new())
    }

    /// Standard output followed by standard error, as one text blob
    pub fn combined(&self) -> String {
        let mut text = String::with_capacity(self.stdout.len() + self.stderr.len());
        text.push_str(&self.stdout);
        text.push_str(&self.stderr);
        text
    }
}

/// Trait for anything that can turn a prompt into generated text
#[async_trait]
pub trait Generator: Send + Sync {
    /// Run the generator once for the given prompt
    async fn generate(&self, prompt: &str) -> Result<RawResponse, GeneratorError>;
}
