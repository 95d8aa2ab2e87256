#![doc = include_str!("../README.md")]

mod commands;
mod config;
mod telemetry;

use clap::Parser;
use config::{CliArgs, CliConfig, Command};
use sortid::IdService;
use std::io::Write;
use std::process::ExitCode;
use telemetry::init_telemetry;

fn main() -> anyhow::Result<ExitCode> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = CliConfig::try_from(args)?;

    init_telemetry(config.log_level)?;
    tracing::debug!("Starting with config: {:?}", config);

    let service = IdService::global();
    let mut out = std::io::stdout().lock();

    let status = match &config.command {
        Command::Generate { count } => {
            commands::generate(service, *count, &mut out)?;
            ExitCode::SUCCESS
        }
        Command::Validate { id } => {
            if commands::validate(service, id, &mut out)? {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::Inspect { id } => {
            commands::inspect(service, id, &mut out)?;
            ExitCode::SUCCESS
        }
        Command::Compare { a, b } => {
            commands::compare(service, a, b, &mut out)?;
            ExitCode::SUCCESS
        }
        Command::Demo => {
            commands::demo(service, &mut out)?;
            ExitCode::SUCCESS
        }
    };

    out.flush()?;
    Ok(status)
}
