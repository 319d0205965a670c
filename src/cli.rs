use crate::app::Request;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::generator::InfraType;
use crate::ui::Console;
use clap::Parser;
use clap::error::ErrorKind;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "ops-whisperer",
    version,
    about = "Ops Whisperer: Turn natural language into DevOps code",
    long_about = None
)]
pub struct Cli {
    /// Describe what infrastructure you need (omit for interactive mode)
    pub instruction: Option<String>,

    /// Type of infrastructure (docker, k8s, terraform, bash, or any other tag)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub infra_type: Option<InfraType>,

    /// Also write the approved command to this file
    #[arg(short = 'o', long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Headless when an instruction was passed, interactive otherwise
    pub fn instruction(&self) -> Option<&str> {
        self.instruction
            .as_deref()
            .map(str::trim)
            .filter(|instruction| !instruction.is_empty())
    }

    pub fn infra_type_or(&self, default: InfraType) -> InfraType {
        self.infra_type.clone().unwrap_or(default)
    }
}

/// Exit status for a command line that clap refused to parse
///
/// Help and version requests succeed; every usage error is a terminal error.
pub fn parse_exit_code(error: &clap::Error) -> u8 {
    match error.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => 0,
        _ => 1,
    }
}

/// Turn the command line (or the interactive prompts) into a request
///
/// Without an instruction the banner, instruction prompt and type menu run
/// on `console`; `--type` or the configured type becomes the menu default.
pub fn build_request<R: BufRead, W: Write>(
    cli: &Cli,
    config: &Config,
    console: &mut Console<R, W>,
) -> AppResult<Request> {
    let default_type = cli.infra_type_or(config.behavior.default_type.clone());

    let request = match cli.instruction() {
        Some(instruction) => Request::new(instruction, default_type),
        None => {
            if config.behavior.show_banner {
                console.show_banner()?;
            }
            let instruction = console.ask_instruction()?.ok_or(AppError::InputClosed)?;
            let infra_type = console
                .select_infra_type(&default_type)?
                .ok_or(AppError::InputClosed)?;
            Request::new(instruction, infra_type)
        }
    };

    Ok(match &cli.save {
        Some(path) => request.with_save_path(path.clone()),
        None => request,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headless() {
        let cli = Cli::try_parse_from(["ops-whisperer", "run nginx on port 80"]).unwrap();
        assert_eq!(cli.instruction(), Some("run nginx on port 80"));
        assert_eq!(cli.infra_type, None);
        assert_eq!(cli.infra_type_or(InfraType::Docker), InfraType::Docker);
    }

    #[test]
    fn test_parse_type_flag() {
        let cli = Cli::try_parse_from(["ops-whisperer", "-t", "k8s", "deploy nginx"]).unwrap();
        assert_eq!(cli.infra_type_or(InfraType::Docker), InfraType::K8s);

        let cli = Cli::try_parse_from(["ops-whisperer", "--type", "terraform", "s3 bucket"]).unwrap();
        assert_eq!(cli.infra_type, Some(InfraType::Terraform));
    }

    #[test]
    fn test_parse_kubernetes_alias() {
        let cli = Cli::try_parse_from(["ops-whisperer", "-t", "kubernetes", "x"]).unwrap();
        assert_eq!(cli.infra_type, Some(InfraType::K8s));
    }

    #[test]
    fn test_free_form_type_accepted() {
        let cli = Cli::try_parse_from(["ops-whisperer", "-t", "helm", "install nginx chart"]).unwrap();
        assert_eq!(cli.infra_type, Some(InfraType::Other("helm".to_string())));
    }

    #[test]
    fn test_empty_type_rejected_with_status_one() {
        let error = Cli::try_parse_from(["ops-whisperer", "-t", "", "x"]).unwrap_err();
        assert_eq!(parse_exit_code(&error), 1);
    }

    #[test]
    fn test_unknown_flag_exits_one() {
        let error = Cli::try_parse_from(["ops-whisperer", "--bogus", "x"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnknownArgument);
        assert_eq!(parse_exit_code(&error), 1);
    }

    #[test]
    fn test_missing_flag_value_exits_one() {
        let error = Cli::try_parse_from(["ops-whisperer", "--type"]).unwrap_err();
        assert_eq!(parse_exit_code(&error), 1);
    }

    #[test]
    fn test_help_and_version_exit_zero() {
        let error = Cli::try_parse_from(["ops-whisperer", "--help"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::DisplayHelp);
        assert_eq!(parse_exit_code(&error), 0);

        let error = Cli::try_parse_from(["ops-whisperer", "--version"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::DisplayVersion);
        assert_eq!(parse_exit_code(&error), 0);
    }

    #[test]
    fn test_no_instruction_is_interactive() {
        let cli = Cli::try_parse_from(["ops-whisperer"]).unwrap();
        assert_eq!(cli.instruction(), None);
    }

    #[test]
    fn test_blank_instruction_is_interactive() {
        let cli = Cli::try_parse_from(["ops-whisperer", "   "]).unwrap();
        assert_eq!(cli.instruction(), None);
    }

    #[test]
    fn test_save_and_config_paths() {
        let cli = Cli::try_parse_from([
            "ops-whisperer",
            "--save",
            "Dockerfile",
            "--config",
            "/tmp/ops.toml",
            "-v",
            "build an image",
        ])
        .unwrap();

        assert_eq!(cli.save, Some(PathBuf::from("Dockerfile")));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/ops.toml")));
        assert!(cli.verbose);
    }
}
