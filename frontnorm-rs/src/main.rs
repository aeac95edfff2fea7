//! frontnorm CLI entry point.

use clap::Parser;
use frontnorm::cli::args::{Cli, Commands};
use frontnorm::cli::output::Output;
use frontnorm::cli::{normalize, show};
use frontnorm::config::Config;
use frontnorm::error::{ExitCode as NormalizeExitCode, NormalizeError};
use frontnorm::workspace::Workspace;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let output = Output::new(cli.output_format(), cli.quiet);

    match run(&cli, &output) {
        Ok(code) => ExitCode::from(code.code() as u8),
        Err(e) => {
            output.error(&e.to_string());
            ExitCode::from(e.exit_code().code() as u8)
        }
    }
}

fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli, output: &Output) -> Result<NormalizeExitCode, NormalizeError> {
    let config = Config::load(cli.config.as_deref())?
        .with_overrides(cli.root.as_deref(), cli.pattern.as_deref());
    let workspace = Workspace::new(config)?;

    match &cli.command {
        Commands::Normalize(args) => normalize::normalize(&workspace, args, output),
        Commands::Check => normalize::check(&workspace, output),
        Commands::Show(args) => {
            show::show(&workspace, args, output)?;
            Ok(NormalizeExitCode::Success)
        }
    }
}
