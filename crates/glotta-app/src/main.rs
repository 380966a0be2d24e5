use std::io;

use clap::Parser;
use glotta_config::Config;

pub mod cli;
pub mod commands;
pub mod logging;

#[cfg(test)]
mod tests;

use self::cli::Cli;

fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    logging::init(&config.log_level, cli.json);

    let stdout = io::stdout();
    commands::run(cli.command, &config, &mut stdout.lock())
}
