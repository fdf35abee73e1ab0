mod api;
mod cli;
mod commands;
mod config;
mod env;
mod error;
mod logging;
mod navigate;
mod tui;

use clap::Parser;
use owo_colors::OwoColorize;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = logging::init(cli.log_file.as_deref(), cli.command.is_interactive()) {
        eprintln!("{}", format!("Failed to open log file: {err}").red());
        std::process::exit(1);
    }

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{}", err.red());
        std::process::exit(1);
    }
}
