//! Game session - which screen is showing
//!
//! `Uninitialized -> Playing` on the first update, then
//! `Playing -> Result` when the round ends, `Result -> Title` and
//! `Title -> Playing` on [`Intent::Confirm`]. Entering `Playing` restarts the
//! round controller. The session owns no grid logic; it only decides which
//! intents matter.

use std::time::Instant;

use log::debug;

use crate::config::RoundConfig;
use crate::rng::KindSource;
use crate::round::{RoundController, TickEvents};
use crate::snapshot::GameSnapshot;
use crate::types::{Intent, SessionPhase};

#[derive(Debug, Clone)]
pub struct Session<S: KindSource> {
    phase: SessionPhase,
    round: RoundController<S>,
}

impl<S: KindSource> Session<S> {
    pub fn new(config: RoundConfig, source: S) -> Self {
        Self {
            phase: SessionPhase::Uninitialized,
            round: RoundController::new(config, source),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn round(&self) -> &RoundController<S> {
        &self.round
    }

    /// Advance one frame with at most one intent
    ///
    /// Returns the round's events while playing, nothing otherwise.
    pub fn update(&mut self, now: Instant, intent: Option<Intent>) -> TickEvents {
        match self.phase {
            SessionPhase::Uninitialized => {
                self.begin_round(now);
                TickEvents::new()
            }
            SessionPhase::Title => {
                if intent == Some(Intent::Confirm) {
                    self.begin_round(now);
                }
                TickEvents::new()
            }
            SessionPhase::Playing => {
                let events = self.round.tick(now, intent.filter(|i| i.is_control()));
                if self.round.is_game_over() {
                    self.transition(SessionPhase::Result);
                }
                events
            }
            SessionPhase::Result => {
                if intent == Some(Intent::Confirm) {
                    self.transition(SessionPhase::Title);
                }
                TickEvents::new()
            }
        }
    }

    fn begin_round(&mut self, now: Instant) {
        self.round.start(now);
        self.transition(SessionPhase::Playing);
    }

    fn transition(&mut self, to: SessionPhase) {
        debug!("session {:?} -> {:?}", self.phase, to);
        self.phase = to;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.round.snapshot_into(out);
        out.session = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
