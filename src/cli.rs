//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};
use crate::ui::list::ItemId;

#[derive(Debug, Parser)]
#[command(name = "heartlist", version, about = "A reorderable list with animated hearts")]
pub struct Cli {
    /// Path to the config file (default: ~/.config/heartlist/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of rows to seed the list with
    #[arg(long, value_name = "N")]
    pub seed_count: Option<ItemId>,

    /// Pause between heart animation steps, in milliseconds
    #[arg(long, value_name = "MS")]
    pub step_interval_ms: Option<u64>,

    /// Print the seeded list and exit instead of starting the UI
    #[arg(long)]
    pub print: bool,
}

impl Cli {
    /// Load the config file and apply command line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(seed_count) = self.seed_count {
            config.store.seed_count = seed_count;
        }
        if let Some(step_interval_ms) = self.step_interval_ms {
            config.animation.step_interval_ms = step_interval_ms;
        }
    }
}
