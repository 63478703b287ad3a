mod cli;
mod commands;
mod edit;
mod logging;
mod preview;

use clap::Parser;
use cli::{Cli, Command};
use filter_generator::{config::DEFAULT_CONFIG_FILE, Config};
use std::{path::Path, process::ExitCode};

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.settings.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    cli.settings.apply(&mut config);
    Ok(config)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    match cli.command.unwrap_or(Command::Generate) {
        Command::Generate => commands::run_generate(&config),
        Command::Preview => commands::run_preview(&config),
        Command::Edit => edit::run_edit(&config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.level_filter());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
