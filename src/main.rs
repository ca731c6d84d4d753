use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use crate::settings::Settings;

mod settings;

fn main() -> Result<()> {
    env_logger::init();
    let settings = Settings::parse();
    let mut world = settings.initial_world()?;
    info!(
        "starting with {} alive cells in a {}x{} world",
        world.population(),
        world.width(),
        world.height()
    );
    for _ in 0..settings.generations {
        world.advance_generation();
        debug!("generation {}: {} alive", world.generation(), world.population());
    }
    info!("stopped at generation {} with {} alive cells", world.generation(), world.population());
    match &settings.output {
        Some(path) => {
            world
                .save(path)
                .with_context(|| format!("saving {}", path.display()))?;
            info!("saved to {}", path.display());
        }
        None => print!("{world}"),
    }
    Ok(())
}
