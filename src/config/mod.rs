pub mod settings;

pub use settings::{BehaviorConfig, Config, ConfigError, GeneratorConfig, ShellConfig};
