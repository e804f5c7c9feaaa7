//! A reorderable list whose hearts toggle through a paced animation.
//!
//! [`store::ListStore`] owns the list and is the single place where state
//! changes happen; [`ui`] is a terminal front-end over it.

pub mod cli;
pub mod config;
pub mod logging;
pub mod store;
pub mod ui;
