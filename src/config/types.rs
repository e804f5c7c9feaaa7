use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::store::StoreSettings;
use crate::ui::list::{ItemId, DEFAULT_SEED_COUNT};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Initial collection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Number of rows seeded at startup (default: 20).
    #[serde(default = "default_seed_count")]
    pub seed_count: ItemId,
}

/// Heart animation pacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Pause between two progress steps in milliseconds (default: 16).
    #[serde(default = "default_step_interval_ms")]
    pub step_interval_ms: u64,
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick when nothing else happens, in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_seed_count() -> ItemId {
    DEFAULT_SEED_COUNT
}

fn default_step_interval_ms() -> u64 {
    16
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_count: default_seed_count(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: default_step_interval_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    /// Settings for constructing a [`crate::store::ListStore`].
    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            seed_count: self.store.seed_count,
            step_interval: Duration::from_millis(self.animation.step_interval_ms),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }
}
