use clap::Parser;
use ops_whisperer::app::{App, exit_code};
use ops_whisperer::cli::{Cli, build_request, parse_exit_code};
use ops_whisperer::config::Config;
use ops_whisperer::error::AppError;
use ops_whisperer::error_translation::ErrorTranslator;
use ops_whisperer::generator::{CopilotCli, GeneratorInvoker};
use ops_whisperer::shell::ShellExecutor;
use ops_whisperer::ui::{Console, stdout_supports_ansi};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "ops_whisperer=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, error: &AppError) -> ExitCode {
    tracing::debug!(?error, "invocation failed");
    let friendly = ErrorTranslator::translate_app_error(error);
    if let Err(io_err) = console.show_error(&friendly) {
        tracing::error!(%io_err, "failed to render error");
    }
    ExitCode::from(error.exit_code())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout, usage errors to stderr
            let _ = e.print();
            return ExitCode::from(parse_exit_code(&e));
        }
    };
    init_tracing(cli.verbose);

    let mut console =
        Console::new(io::stdin().lock(), io::stdout()).with_ansi(stdout_supports_ansi());

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report(&mut console, &AppError::from(e)),
    };

    let request = match build_request(&cli, &config, &mut console) {
        Ok(request) => request,
        Err(e) => return report(&mut console, &e),
    };

    let generator = CopilotCli::new(
        config.generator_program(),
        config.generator.prompt_flag.clone(),
        config.generator.deny_input.clone(),
    );
    let executor = ShellExecutor::new(config.shell.program.clone(), config.shell.flag.clone());

    let mut app = App::new(GeneratorInvoker::new(Box::new(generator)), executor, console);
    let result = app.run(&request).await;

    match &result {
        Ok(outcome) => {
            tracing::debug!(?outcome, stage = ?app.stage(), "invocation finished");
            ExitCode::from(exit_code(&result))
        }
        Err(error) => report(app.console_mut(), error),
    }
}
