//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (heart, delete, reorder)
/// - Timer-driven steps of a running animation
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
