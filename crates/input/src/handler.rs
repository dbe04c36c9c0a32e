//! Held-key tracking for terminal environments.
//!
//! The game polls "which control is held" every frame and throttles repeats on
//! its own clock. Terminals usually report presses (and auto-repeat presses)
//! but not releases, so a key counts as held until it is released or until
//! no press for it was seen within the release timeout.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::{Intent, INPUT_REPEAT_MS};

// Shorter than the game's input-repeat interval, so a single tap can never be
// accepted twice.
const DEFAULT_RELEASE_TIMEOUT: Duration = Duration::from_millis(INPUT_REPEAT_MS - 10);

/// Control intents in polling priority order.
const CONTROLS: [Intent; 4] = [
    Intent::MoveLeft,
    Intent::MoveRight,
    Intent::SoftDrop,
    Intent::Rotate,
];

fn slot(intent: Intent) -> Option<usize> {
    CONTROLS.iter().position(|&c| c == intent)
}

#[derive(Debug, Clone)]
pub struct HeldKeys {
    /// Last press seen per control, indexed like `CONTROLS`.
    last_press: [Option<Instant>; 4],
    release_timeout: Duration,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            last_press: [None; 4],
            release_timeout: DEFAULT_RELEASE_TIMEOUT,
        }
    }

    pub fn with_release_timeout(mut self, timeout: Duration) -> Self {
        self.release_timeout = timeout;
        self
    }

    pub fn release_timeout(&self) -> Duration {
        self.release_timeout
    }

    /// Record a key press (or terminal auto-repeat).
    ///
    /// Returns the mapped intent. Control keys become held; `Confirm` is
    /// edge-triggered and only reported here.
    pub fn press(&mut self, code: KeyCode, now: Instant) -> Option<Intent> {
        let intent = map_key(code)?;
        if let Some(i) = slot(intent) {
            self.last_press[i] = Some(now);
        }
        Some(intent)
    }

    /// Feed one terminal key event.
    ///
    /// Presses and auto-repeats keep controls held, releases drop them.
    /// `Confirm` is returned on the press edge only, never for a repeat.
    pub fn on_key(&mut self, key: KeyEvent, now: Instant) -> Option<Intent> {
        match key.kind {
            KeyEventKind::Press => self.press(key.code, now).filter(|i| !i.is_control()),
            KeyEventKind::Repeat => {
                self.press(key.code, now);
                None
            }
            KeyEventKind::Release => {
                self.release(key.code);
                None
            }
        }
    }

    pub fn release(&mut self, code: KeyCode) {
        if let Some(i) = map_key(code).and_then(slot) {
            self.last_press[i] = None;
        }
    }

    /// Forget every held control
    pub fn clear(&mut self) {
        self.last_press = [None; 4];
    }

    /// The held control with the highest priority: left, right, down, rotate.
    ///
    /// Keys whose last press is older than the release timeout are dropped.
    pub fn current(&mut self, now: Instant) -> Option<Intent> {
        let timeout = self.release_timeout;
        for pressed in self.last_press.iter_mut() {
            if let Some(at) = *pressed {
                if now.saturating_duration_since(at) > timeout {
                    *pressed = None;
                }
            }
        }
        CONTROLS
            .iter()
            .zip(self.last_press.iter())
            .find_map(|(&intent, pressed)| pressed.map(|_| intent))
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
