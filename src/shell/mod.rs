pub mod executor;

pub use executor::{CommandOutput, ExecutionError, ShellExecutor};
