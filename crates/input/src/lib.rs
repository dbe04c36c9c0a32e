//! Terminal input module.
//!
//! Maps `crossterm` key events to [`crate::types::Intent`]s and tracks which
//! control keys are held. The simulation polls held state once per frame and
//! throttles repeats itself, so this crate does no timing beyond releasing
//! keys in terminals that never report a key release.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::HeldKeys;
pub use map::{map_key, should_quit};
