use anyhow::Result;

use fair_roulette::cli::Command;
use fair_roulette::{
    handle_completions, handle_history, handle_odds, handle_seed, handle_serve, handle_spin,
    interpret,
};

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
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Seed => handle_seed(),
        Command::Spin => handle_spin(),
        Command::Odds => handle_odds(),
        Command::History { limit } => handle_history(*limit),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
