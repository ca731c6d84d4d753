use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use world::World;

/// Runs a Game of Life world with a dead border for a number of generations.
#[derive(Debug, Parser)]
#[command(name = "bordered-life", version)]
pub struct Settings {
    /// Pattern file to start from instead of a fresh world
    #[arg(long, conflicts_with_all = ["width", "height", "random"])]
    pub pattern: Option<PathBuf>,
    /// Width of a fresh world
    #[arg(long, default_value_t = 32)]
    pub width: usize,
    /// Height of a fresh world
    #[arg(long, default_value_t = 32)]
    pub height: usize,
    /// Fill the fresh world at random
    #[arg(long)]
    pub random: bool,
    /// Seed for --random, for reproducible runs
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,
    /// Number of generations to advance
    #[arg(short = 'n', long, default_value_t = 1)]
    pub generations: u64,
    /// Where to save the final world; printed to stdout otherwise
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Settings {
    pub fn initial_world(&self) -> Result<World> {
        if let Some(path) = &self.pattern {
            let world =
                World::load(path).with_context(|| format!("loading {}", path.display()))?;
            info!("loaded {}x{} world from {}", world.width(), world.height(), path.display());
            return Ok(world);
        }
        let mut world = World::new(self.width, self.height)?;
        match (self.random, self.seed) {
            (true, Some(seed)) => world.randomize_with(&mut StdRng::seed_from_u64(seed)),
            (true, None) => world.randomize(),
            (false, _) => (),
        }
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Settings, clap::Error> {
        Settings::try_parse_from(std::iter::once("bordered-life").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let settings = parse(&[]).unwrap();
        assert_eq!((settings.width, settings.height), (32, 32));
        assert_eq!(settings.generations, 1);
        assert!(!settings.random);
        let world = settings.initial_world().unwrap();
        assert_eq!(world.population(), 0);
    }

    #[test]
    fn test_conflicts() {
        assert!(parse(&["--pattern", "a.txt", "--random"]).is_err());
        assert!(parse(&["--pattern", "a.txt", "--width", "4"]).is_err());
    }

    #[test]
    fn test_seeded_world_is_reproducible() {
        let settings = parse(&[
            "--width", "9", "--height", "4", "--random", "--seed", "5",
        ])
        .unwrap();
        let a = settings.initial_world().unwrap();
        let b = settings.initial_world().unwrap();
        assert_eq!((a.width(), a.height()), (9, 4));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_width() {
        let settings = parse(&["--width", "0"]).unwrap();
        assert!(settings.initial_world().is_err());
    }

    #[test]
    fn test_missing_pattern_names_the_file() {
        let settings = parse(&["--pattern", "/nonexistent/glider.txt"]).unwrap();
        let e = settings.initial_world().unwrap_err();
        assert!(format!("{e:#}").contains("/nonexistent/glider.txt"));
    }
}
