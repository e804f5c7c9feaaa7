//! Hearted list feature module.
//!
//! Holds the ordered collection of rows shown on the list screen.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Item and ListState snapshots plus invariant checks
//! - `intent.rs` - Row commands and animation steps
//! - `reducer.rs` - State transitions (pure, no side effects)
//!
//! The live state is owned by [`crate::store::ListStore`], which is the only
//! caller that feeds intents into the reducer.

mod intent;
mod reducer;
mod state;

pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::{InvariantViolation, Item, ItemId, ListState, DEFAULT_SEED_COUNT, MAX_PROGRESS};
