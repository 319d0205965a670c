use crate::generator::InfraType;
use crate::generator::copilot::{DEFAULT_DENY_INPUT, DEFAULT_PROGRAM, DEFAULT_PROMPT_FLAG};
use crate::shell::executor::{DEFAULT_SHELL, DEFAULT_SHELL_FLAG};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides `generator.program`
pub const GENERATOR_PROGRAM_ENV: &str = "OPS_WHISPERER_GENERATOR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Config directory not found")]
    DirectoryNotFound,

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub shell: ShellConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct GeneratorConfig {
    pub program: String,
    pub prompt_flag: String,
    pub deny_input: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ShellConfig {
    pub program: String,
    pub flag: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct BehaviorConfig {
    pub default_type: InfraType,
    pub show_banner: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            prompt_flag: DEFAULT_PROMPT_FLAG.to_string(),
            deny_input: DEFAULT_DENY_INPUT.to_string(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_SHELL.to_string(),
            flag: DEFAULT_SHELL_FLAG.to_string(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            default_type: InfraType::Docker,
            show_banner: true,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME").map_err(|_| ConfigError::DirectoryNotFound)?;
        Ok(PathBuf::from(home).join(".config").join("ops-whisperer"))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// location is used when present and built-in defaults otherwise.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit_path {
            Some(path) => Self::load_from(path),
            None => match Self::config_path() {
                Ok(path) if path.exists() => Self::load_from(&path),
                _ => {
                    tracing::debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded config file");

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.generator.program.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "generator.program must not be empty".to_string(),
            ));
        }

        if self.generator.prompt_flag.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "generator.prompt_flag must not be empty".to_string(),
            ));
        }

        if self.shell.program.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "shell.program must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the generator program, from the environment variable or config
    pub fn generator_program(&self) -> String {
        // First try environment variable
        if let Ok(program) = std::env::var(GENERATOR_PROGRAM_ENV) {
            if !program.trim().is_empty() {
                return program;
            }
        }

        // Fall back to config file
        self.generator.program.clone()
    }
}
