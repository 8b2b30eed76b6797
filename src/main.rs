mod cli;
mod config;
mod export;
mod fetch;
mod forecast;

use std::env;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch(args) => {
            let api_key = env::var("VISUAL_CROSSING_API_KEY").ok();
            let config = Config::new(args, api_key);
            command::fetch(&config).await?;
        }
        Commands::Preview { outdir } => command::preview(&outdir),
    }

    Ok(())
}
