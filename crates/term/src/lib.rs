//! Terminal renderer for the falling-block game.
//!
//! Reads a [`core::GameSnapshot`] once per frame and draws it into a
//! framebuffer of styled character cells, which is then flushed to the
//! terminal. Colours for block kinds live here, not in the simulation.
//!
//! - `fb`: framebuffer and style types
//! - `game_view`: snapshot -> framebuffer (pure, unit-tested)
//! - `renderer`: framebuffer -> terminal via crossterm

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{block_color, GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
