mod config;
mod logging;
mod ui;

use anyhow::Context;

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let config = Config::load().context("failed to load configuration")?;
    tracing::info!(items = config.items.len(), "starting checkall");

    ui::run(&config)?;

    tracing::info!("checkall exited cleanly");
    Ok(())
}
