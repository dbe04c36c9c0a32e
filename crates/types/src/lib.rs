//! Shared types and constants
//!
//! Plain data used by the core simulation, the input mapping and the terminal
//! renderer. Nothing here depends on timing, I/O or randomness.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: (3, 0), the top-left corner of a piece's 4x4 frame
//! - **Preview**: a separate 4x4 field showing the next piece
//!
//! # Timing Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FALL_INTERVAL_MS` | 300 | Time between automatic one-row steps |
//! | `INPUT_REPEAT_MS` | 100 | Minimum time between two accepted controls |
//! | `FRAME_MS` | 16 | Frame budget of the terminal runner |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{BlockKind, Intent, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! assert_eq!(BlockKind::from_str("t"), Some(BlockKind::T));
//! assert!(BlockKind::None.is_empty());
//! assert_eq!(Intent::from_str("softDrop"), Some(Intent::SoftDrop));
//! assert_eq!((FIELD_WIDTH, FIELD_HEIGHT), (10, 20));
//! ```

/// Field width in cells
pub const FIELD_WIDTH: u8 = 10;

/// Field height in cells
pub const FIELD_HEIGHT: u8 = 20;

/// Next-piece preview width in cells
pub const PREVIEW_WIDTH: u8 = 4;

/// Next-piece preview height in cells
pub const PREVIEW_HEIGHT: u8 = 4;

/// Spawn anchor (x, y) for every new piece
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Default gravity interval in milliseconds
pub const DEFAULT_FALL_INTERVAL_MS: u64 = 300;

/// Minimum time between two accepted control intents, in milliseconds
pub const INPUT_REPEAT_MS: u64 = 100;

/// Frame budget of the terminal runner (~60 FPS)
pub const FRAME_MS: u64 = 16;


/// Contents of a field cell, and identity of a piece
///
/// `None` is an empty cell. The other seven double as the tetromino kind and
/// the colour key of a locked cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlockKind {
    #[default]
    None,
    I,
    O,
    S,
    Z,
    J,
    L,
    T,
}

impl BlockKind {
    /// The seven piece kinds, in table order
    pub const PIECES: [BlockKind; 7] = [
        BlockKind::I,
        BlockKind::O,
        BlockKind::S,
        BlockKind::Z,
        BlockKind::J,
        BlockKind::L,
        BlockKind::T,
    ];

    pub fn is_empty(self) -> bool {
        self == BlockKind::None
    }

    /// Index of a piece kind in [`BlockKind::PIECES`]
    ///
    /// Returns `None` for the empty kind.
    pub fn piece_index(self) -> Option<usize> {
        match self {
            BlockKind::None => None,
            BlockKind::I => Some(0),
            BlockKind::O => Some(1),
            BlockKind::S => Some(2),
            BlockKind::Z => Some(3),
            BlockKind::J => Some(4),
            BlockKind::L => Some(5),
            BlockKind::T => Some(6),
        }
    }

    /// Parse a kind from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::BlockKind;
    ///
    /// assert_eq!(BlockKind::from_str("i"), Some(BlockKind::I));
    /// assert_eq!(BlockKind::from_str("L"), Some(BlockKind::L));
    /// assert_eq!(BlockKind::from_str("?"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" | "" => Some(BlockKind::None),
            "i" => Some(BlockKind::I),
            "o" => Some(BlockKind::O),
            "s" => Some(BlockKind::S),
            "z" => Some(BlockKind::Z),
            "j" => Some(BlockKind::J),
            "l" => Some(BlockKind::L),
            "t" => Some(BlockKind::T),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::None => "none",
            BlockKind::I => "i",
            BlockKind::O => "o",
            BlockKind::S => "s",
            BlockKind::Z => "z",
            BlockKind::J => "j",
            BlockKind::L => "l",
            BlockKind::T => "t",
        }
    }
}

/// Discrete intents fed into the simulation by input collectors
///
/// The four control intents are consumed by the round while playing.
/// `Confirm` is only meaningful to the session on the title and result screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Advance to the next rotation state (no kicks)
    Rotate,
    /// Leave the title or result screen
    Confirm,
}

impl Intent {
    /// Whether the intent steers the falling piece
    pub fn is_control(self) -> bool {
        !matches!(self, Intent::Confirm)
    }

    /// Parse from camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
    /// assert_eq!(Intent::from_str("ROTATE"), Some(Intent::Rotate));
    /// assert_eq!(Intent::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdrop" => Some(Intent::SoftDrop),
            "rotate" => Some(Intent::Rotate),
            "confirm" => Some(Intent::Confirm),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::Rotate => "rotate",
            Intent::Confirm => "confirm",
        }
    }
}

/// Phase of a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundPhase {
    #[default]
    Initializing,
    Playing,
    GameOver,
}

/// Top-level screen the session is on
///
/// `Uninitialized` only exists before the first update; it moves straight to
/// `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    Title,
    Playing,
    Result,
}
