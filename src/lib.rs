pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod error_translation;
pub mod generator;
pub mod sanitizer;
pub mod security;
pub mod shell;
pub mod ui;

// Re-export commonly used types for convenience
pub use app::{App, Outcome, Request, Stage};
pub use error::{AppError, AppResult};
pub use generator::InfraType;
