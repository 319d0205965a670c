pub mod client;
pub mod copilot;
pub mod invoker;
pub mod prompt;

pub use client::{Generator, GeneratorError, RawResponse};
pub use copilot::CopilotCli;
pub use invoker::GeneratorInvoker;
pub use prompt::{InfraType, build_prompt};
