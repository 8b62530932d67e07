use anyhow::Result;

use taskpad::config::Config;
use taskpad::{logger, ui};

fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(config.logging.enabled)?;
    log::info!("starting taskpad");

    ui::run_app(config)?;

    log::info!("taskpad exited cleanly");
    Ok(())
}
