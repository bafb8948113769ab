use anyhow::Result;

use squeeze_sweep_finder::cli::{Cli, Command};
use squeeze_sweep_finder::{handle_scan, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = cli.config();
    match &cli.command {
        Command::Serve { port } => handle_serve(*port, config),
        Command::Scan { pretty } => handle_scan(*pretty, config),
    }
}
