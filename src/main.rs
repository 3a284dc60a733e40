use anyhow::{Context, Result};
use clap::Parser;
use lotto::cli::Cli;
use lotto::LottoConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = LottoConfig::new(cli.amount).context("Invalid --amount")?;
    let rounds = lotto::play(config).context("Game aborted")?;
    log::info!("played {} rounds", rounds);
    Ok(())
}
