pub mod console;

pub use console::{Console, stdout_supports_ansi};
