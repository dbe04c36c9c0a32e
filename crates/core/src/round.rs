//! Round controller - one game from spawn to game over
//!
//! Owns the field, the active and next pieces, and two independent clocks:
//!
//! - the **gravity clock** (last automatic one-row step), gated by
//!   [`RoundConfig::fall_interval`]
//! - the **input-repeat clock** (last accepted control), gated by
//!   [`RoundConfig::input_repeat`]
//!
//! Keeping them apart means a held key is never throttled by the fall timer
//! and gravity is never delayed by key repeats.
//!
//! Time is supplied by the caller as monotonic [`Instant`]s, once per frame.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use log::{debug, trace};

use crate::config::RoundConfig;
use crate::field::Field;
use crate::piece::Piece;
use crate::rng::KindSource;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{BlockKind, Intent, RoundPhase};

/// Something observable that happened during a tick
///
/// Front ends use these for feedback (sounds, flashes); the simulation itself
/// never reads them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundEvent {
    /// A left/right/down control moved the active piece
    Moved,
    /// A rotate control succeeded
    Rotated,
    /// Gravity moved the active piece down one row
    Fell,
    /// The active piece was written into the field
    Locked,
    /// At least one full row was removed
    LinesCleared,
    /// The promoted piece could not occupy its spawn cells
    GameOver,
}

/// Events of a single tick, in the order they happened
///
/// At most one control event plus lock, clear and game over.
pub type TickEvents = ArrayVec<RoundEvent, 4>;

#[derive(Debug, Clone)]
pub struct RoundController<S: KindSource> {
    config: RoundConfig,
    field: Field,
    active: Piece,
    next: Piece,
    source: S,
    phase: RoundPhase,
    last_fall: Instant,
    last_control: Instant,
}

impl<S: KindSource> RoundController<S> {
    /// Create a controller that has not started yet
    ///
    /// No kinds are drawn from `source` until [`RoundController::start`].
    pub fn new(config: RoundConfig, source: S) -> Self {
        let now = Instant::now();
        Self {
            config,
            field: Field::new(),
            active: Piece::new(BlockKind::PIECES[0]),
            next: Piece::new(BlockKind::PIECES[0]),
            source,
            phase: RoundPhase::Initializing,
            last_fall: now,
            last_control: now,
        }
    }

    /// Clear the field, roll both pieces and start both clocks at `now`
    ///
    /// Can be called again after game over to play another round.
    pub fn start(&mut self, now: Instant) {
        self.field.reset();
        self.active.reset_random(&mut self.source);
        self.next.reset_random(&mut self.source);
        self.last_fall = now;
        self.last_control = now;
        self.phase = RoundPhase::Playing;
        debug!(
            "round started: active={:?} next={:?}",
            self.active.kind(),
            self.next.kind()
        );
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == RoundPhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == RoundPhase::GameOver
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The falling piece, once the round has started
    pub fn active(&self) -> Option<&Piece> {
        self.started().then_some(&self.active)
    }

    /// The preview piece, once the round has started
    pub fn next(&self) -> Option<&Piece> {
        self.started().then_some(&self.next)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn started(&self) -> bool {
        self.phase != RoundPhase::Initializing
    }

    /// Advance the round by one frame
    ///
    /// 1. A control intent is honoured if at least `input_repeat` passed since
    ///    the last accepted one and the move is legal. Refused moves leave the
    ///    input-repeat clock alone.
    /// 2. If `fall_interval` has not passed on the gravity clock, the tick ends.
    /// 3. Otherwise the piece steps down; if it cannot, it locks, full lines
    ///    clear, the next piece is promoted, a new next piece is rolled and a
    ///    blocked spawn ends the round.
    ///
    /// Must only be called while playing.
    pub fn tick(&mut self, now: Instant, intent: Option<Intent>) -> TickEvents {
        let mut events = TickEvents::new();
        debug_assert!(self.is_playing(), "tick in phase {:?}", self.phase);
        if !self.is_playing() {
            return events;
        }

        if let Some(intent) = intent.filter(|i| i.is_control()) {
            if let Some(event) = self.apply_control(now, intent) {
                events.push(event);
            }
        }

        if since(now, self.last_fall) < self.config.fall_interval {
            return events;
        }
        self.last_fall = now;

        if self.field.can_place(&self.active, 0, 1) {
            self.active.translate(0, 1);
            events.push(RoundEvent::Fell);
        } else {
            self.lock_and_promote(&mut events);
        }

        events
    }

    fn apply_control(&mut self, now: Instant, intent: Intent) -> Option<RoundEvent> {
        if since(now, self.last_control) < self.config.input_repeat {
            return None;
        }

        let event = match intent {
            Intent::MoveLeft => self.try_move(-1, 0),
            Intent::MoveRight => self.try_move(1, 0),
            Intent::SoftDrop => self.try_move(0, 1),
            Intent::Rotate => self.try_rotate(),
            Intent::Confirm => None,
        }?;

        self.last_control = now;
        trace!("{} accepted at {:?}", intent.as_str(), self.active.position());
        Some(event)
    }

    fn try_move(&mut self, dx: i8, dy: i8) -> Option<RoundEvent> {
        if !self.field.can_place(&self.active, dx, dy) {
            return None;
        }
        self.active.translate(dx, dy);
        Some(RoundEvent::Moved)
    }

    fn try_rotate(&mut self) -> Option<RoundEvent> {
        if !self.field.can_place_rotated(&self.active) {
            return None;
        }
        self.active.apply_rotation();
        Some(RoundEvent::Rotated)
    }

    fn lock_and_promote(&mut self, events: &mut TickEvents) {
        self.field.lock(&self.active);
        events.push(RoundEvent::Locked);
        debug!(
            "locked {:?} at {:?}",
            self.active.kind(),
            self.active.position()
        );

        if self.field.clear_full_lines() {
            events.push(RoundEvent::LinesCleared);
            debug!("full lines cleared");
        }

        self.active.reset(self.next.kind());
        self.next.reset_random(&mut self.source);

        if !self.field.can_place(&self.active, 0, 0) {
            self.phase = RoundPhase::GameOver;
            events.push(RoundEvent::GameOver);
            debug!("game over: {:?} cannot spawn", self.active.kind());
        }
    }

    /// Write field and pieces into an existing snapshot
    ///
    /// Leaves the session phase untouched.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.field.write_grid(&mut out.field);
        out.active = self.active().map(|p| PieceSnapshot {
            kind: p.kind(),
            cells: p.occupied_cells(),
        });
        out.next = self.next().map(|p| PieceSnapshot {
            kind: p.kind(),
            cells: p.preview_cells(),
        });
        out.round = self.phase;
    }
}

fn since(now: Instant, earlier: Instant) -> Duration {
    now.saturating_duration_since(earlier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::KindSequence;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn started(kinds: &[BlockKind]) -> (RoundController<KindSequence>, Instant) {
        let mut round = RoundController::new(RoundConfig::default(), KindSequence::new(kinds));
        let t0 = Instant::now();
        round.start(t0);
        (round, t0)
    }

    #[test]
    fn test_start_rolls_active_then_next() {
        let (round, _) = started(&[BlockKind::T, BlockKind::I]);
        assert_eq!(round.active().map(|p| p.kind()), Some(BlockKind::T));
        assert_eq!(round.next().map(|p| p.kind()), Some(BlockKind::I));
        assert_eq!(round.phase(), RoundPhase::Playing);
    }

    #[test]
    fn test_pieces_hidden_before_start() {
        let round =
            RoundController::new(RoundConfig::default(), KindSequence::new(&[BlockKind::O]));
        assert!(round.active().is_none());
        assert!(round.next().is_none());
        assert_eq!(round.source().drawn(), 0);
    }

    #[test]
    fn test_refused_move_does_not_stamp_input_clock() {
        let (mut round, t0) = started(&[BlockKind::O]);
        // O spans columns 4-5; push it against the left wall.
        round.active.translate(-4, 0);

        let events = round.tick(t0 + ms(120), Some(Intent::MoveLeft));
        assert!(events.is_empty());
        assert_eq!(round.last_control, t0);

        // Still eligible right away for a legal move.
        let events = round.tick(t0 + ms(130), Some(Intent::MoveRight));
        assert_eq!(events.as_slice(), &[RoundEvent::Moved]);
        assert_eq!(round.last_control, t0 + ms(130));
    }

    #[test]
    fn test_blocked_rotation_is_refused() {
        let (mut round, t0) = started(&[BlockKind::I]);
        // Vertical I (rotation 1) needs column 5, rows 0-3.
        round.field.set(5, 3, BlockKind::Z);

        let events = round.tick(t0 + ms(100), Some(Intent::Rotate));
        assert!(events.is_empty());
        assert_eq!(round.active.rotation(), 0);
    }

    #[test]
    fn test_lock_clears_line_and_promotes_next() {
        let (mut round, t0) = started(&[BlockKind::I, BlockKind::O, BlockKind::T]);
        // Bottom row full except columns 3-6, which a flat I fills.
        for x in [0, 1, 2, 7, 8, 9] {
            round.field.set(x, 19, BlockKind::J);
        }
        round.field.set(0, 18, BlockKind::L);
        round.active.translate(0, 18);

        let events = round.tick(t0 + ms(300), None);

        assert_eq!(
            events.as_slice(),
            &[RoundEvent::Locked, RoundEvent::LinesCleared]
        );
        assert_eq!(round.field.full_row_count(), 0);
        // The lone L dropped into the bottom row.
        assert_eq!(round.field.get(0, 19), Some(BlockKind::L));
        assert_eq!(round.field.get(0, 18), Some(BlockKind::None));
        // Promoted O at spawn, next rolled from the sequence.
        let active = round.active().copied();
        assert_eq!(active, Some(Piece::new(BlockKind::O)));
        assert_eq!(round.next().map(|p| p.kind()), Some(BlockKind::T));
        assert!(round.is_playing());
    }

    #[test]
    fn test_blocked_spawn_is_game_over() {
        let (mut round, t0) = started(&[BlockKind::I, BlockKind::O]);
        // Top two rows filled at columns 3-6, except where the active I sits.
        round.active.translate(0, 5);
        for y in 0..2 {
            for x in 3..=6 {
                round.field.set(x, y, BlockKind::S);
            }
        }
        // Make the I unable to fall.
        for x in 3..=6 {
            round.field.set(x, 7, BlockKind::S);
        }

        let events = round.tick(t0 + ms(300), None);

        assert_eq!(events.as_slice(), &[RoundEvent::Locked, RoundEvent::GameOver]);
        assert!(round.is_game_over());
        assert!(!round.field.can_place(&round.active, 0, 0));
    }

    #[test]
    fn test_snapshot_uses_preview_coordinates_for_next() {
        let (round, _) = started(&[BlockKind::T, BlockKind::I]);
        let mut snap = GameSnapshot::default();
        round.snapshot_into(&mut snap);

        assert_eq!(snap.round, RoundPhase::Playing);
        let next = snap.next.expect("next piece present");
        assert_eq!(next.kind, BlockKind::I);
        assert_eq!(next.cells, [(0, 2), (1, 2), (2, 2), (3, 2)]);
        let active = snap.active.expect("active piece present");
        assert_eq!(active.cells, [(4, 0), (3, 1), (4, 1), (5, 1)]);
    }
}
