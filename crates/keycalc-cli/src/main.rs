//! keycalc: a four-function calculator driven by keys
//!
//! ## Usage
//!
//! ```bash
//! keycalc run 3+4*2=              # prints 14
//! keycalc run --steps 12 Backspace
//! keycalc run --format json 1/0=
//! keycalc run -- -5+2=            # keys starting with '-' go after --
//! keycalc tui                     # interactive calculator
//! keycalc config                  # effective configuration as YAML
//! ```

use clap::Parser;
use keycalc_cli::{Cli, CliConfig, CliResult, Commands, KeyRunner, Printer, RunArgs};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = CliConfig::from_flags(&cli);
    init_tracing(&config);

    match run(&cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over `-v`/`-q`; logs always go to stderr
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.color.enabled_for(&std::io::stderr()))
        .with_target(false)
        .init();
}

fn run(cli: &Cli, config: CliConfig) -> CliResult<()> {
    let config = config.load_calculator(cli)?;
    console::set_colors_enabled(config.color.should_color());
    tracing::debug!(?config, "effective configuration");

    match &cli.command {
        Commands::Run(args) => run_keys(&config, args),
        Commands::Tui => run_tui(&config),
        Commands::Config => Printer::new(false).yaml(&config.calculator.to_yaml()?),
    }
}

fn run_keys(config: &CliConfig, args: &RunArgs) -> CliResult<()> {
    let replay = KeyRunner::new(config.calculator)
        .strict(args.strict)
        .run(args.keys.as_slice())?;
    Printer::new(config.color.should_color()).replay(&replay, args.format.into(), args.steps)
}

#[cfg(feature = "tui")]
fn run_tui(config: &CliConfig) -> CliResult<()> {
    keycalc::tui::run(config.calculator)?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_tui(_config: &CliConfig) -> CliResult<()> {
    Err(keycalc_cli::CliError::Generic(
        "terminal frontend not enabled. Rebuild with --features tui".to_string(),
    ))
}
