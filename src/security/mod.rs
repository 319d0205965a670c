pub mod validator;

pub use validator::{SafetyGate, SafetyVerdict, ValidatedCommand, ValidationError};

/// Command prefixes a candidate may start with to be considered for execution
///
/// This is a plain string-prefix test on the whole candidate, not a parser.
/// Only the very start of the text is inspected.
///
/// Adding a new prefix requires careful security review.
pub const ALLOWED_COMMAND_PREFIXES: &[&str] = &[
    // Infrastructure tooling
    "docker",
    "kubectl",
    "terraform",
    // File writers
    "cat",
    "echo",
    "printf",
];

/// Shorter candidates are refused outright
pub const MIN_COMMAND_LENGTH: usize = 10;
