pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod roulette;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::console::ConsoleService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_seed() -> Result<()> {
    let config = AppConfig::from_env();
    ConsoleService::new(&config)?.seed()
}

pub fn handle_spin() -> Result<()> {
    console()?.spin()
}

pub fn handle_odds() -> Result<()> {
    console()?.odds()
}

pub fn handle_history(limit: usize) -> Result<()> {
    console()?.history(limit)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn console() -> Result<ConsoleService> {
    let config = AppConfig::from_env();
    let pool = services::bootstrap::prepare_database(&config)?;
    Ok(ConsoleService::with_pool(pool))
}
