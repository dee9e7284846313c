use anyhow::Result;
use clap::Parser;

mod cli;
mod config;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = cli::Args::parse();
    cli::run(args)
}
