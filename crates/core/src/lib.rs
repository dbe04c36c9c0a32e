//! Core simulation - pure, deterministic, and testable
//!
//! This crate holds every rule of the falling-block game and nothing else.
//! It has no dependency on terminals, audio or wall-clock time:
//!
//! - **Deterministic**: piece kinds come from an injected [`KindSource`] and
//!   time from caller-supplied [`std::time::Instant`]s
//! - **Allocation-free ticks**: the field is a flat array, events an `ArrayVec`
//! - **Read-only output**: renderers consume a [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`shapes`]: 4x4 rotation frames per piece kind
//! - [`piece`]: a positioned, rotatable tetromino
//! - [`rng`]: kind sources (seeded LCG, fixed sequences)
//! - [`field`]: 10x20 grid, legality checks, line clearing
//! - [`round`]: one round from spawn to game over, with gravity and input-repeat clocks
//! - [`session`]: title / playing / result screens around the round
//! - [`snapshot`]: per-frame view for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn at (3, 0) in rotation 0; spawn kinds are uniformly random
//! - Rotation steps through fixed frames; a blocked rotation simply fails (no kicks)
//! - Gravity moves the piece down one row every fall interval (300ms by default)
//! - At most one control is accepted per 100ms
//! - A piece that cannot fall locks immediately; full rows clear
//! - A promoted piece that cannot occupy its spawn cells ends the round
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use blockfall_core::{KindSequence, RoundConfig, Session};
//! use blockfall_types::{BlockKind, Intent, SessionPhase};
//!
//! let mut session = Session::new(RoundConfig::default(), KindSequence::new(&[BlockKind::T]));
//! let t0 = Instant::now();
//!
//! session.update(t0, None);
//! assert_eq!(session.phase(), SessionPhase::Playing);
//!
//! session.update(t0 + Duration::from_millis(100), Some(Intent::MoveLeft));
//! let active = session.round().active().unwrap();
//! assert_eq!(active.position(), (2, 0));
//! ```

pub mod config;
pub mod field;
pub mod piece;
pub mod rng;
pub mod round;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

pub use config::RoundConfig;
pub use field::{Field, FieldGrid};
pub use piece::{Piece, PieceCells};
pub use rng::{KindSequence, KindSource, SimpleRng};
pub use round::{RoundController, RoundEvent, TickEvents};
pub use session::Session;
pub use shapes::{occupied_offsets, rotation_count};
pub use snapshot::{GameSnapshot, PieceSnapshot};
