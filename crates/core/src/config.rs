//! Round timing configuration
//!
//! Fixed when a round controller is built; the field and preview dimensions
//! are compile-time constants in [`crate::types`].

use std::time::Duration;

use crate::types::{DEFAULT_FALL_INTERVAL_MS, INPUT_REPEAT_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    /// Time between automatic one-row steps
    pub fall_interval: Duration,
    /// Minimum time between two accepted control intents
    pub input_repeat: Duration,
}

impl RoundConfig {
    pub fn with_fall_interval(mut self, fall_interval: Duration) -> Self {
        self.fall_interval = fall_interval;
        self
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            fall_interval: Duration::from_millis(DEFAULT_FALL_INTERVAL_MS),
            input_repeat: Duration::from_millis(INPUT_REPEAT_MS),
        }
    }
}
