//! Configuration for the list store and terminal front-end.
//!
//! Loaded from `~/.config/heartlist/config.toml` (or the platform
//! equivalent). A missing file yields the defaults.

mod loader;
mod types;

pub use loader::{ConfigError, MAX_SEED_COUNT};
pub use types::{AnimationConfig, Config, StoreConfig, UiConfig};
