//! `nadir`: validate data trees, dump them, and resolve routes.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod logging;

use commands::dump::DumpArgs;
use commands::route::RouteArgs;
use commands::validate::ValidateArgs;
use config::Config;

#[derive(Debug, Parser)]
#[command(name = "nadir", version, about = "Rule-based validation, debug dumps and route resolution")]
struct Cli {
    /// Config file (defaults to ./nadir.toml when present)
    #[arg(long, short, global = true, env = "NADIR_CONFIG")]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a JSON tree against a list of rule items
    Validate(ValidateArgs),
    /// Print a JSON tree as an indented dump
    Dump(DumpArgs),
    /// Show which controller action a request resolves to
    Route(RouteArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config.log, cli.verbose)?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Command::Validate(args) => {
            let errors = commands::validate::run(&args)?;
            if errors.is_empty() {
                println!("valid");
                Ok(ExitCode::SUCCESS)
            } else {
                for error in &errors {
                    eprintln!("{error}");
                }
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Dump(args) => {
            println!("{}", commands::dump::run(&args, config.dump.depth)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Route(args) => {
            let resolved = commands::route::run(&args, config.routes.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&resolved)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
