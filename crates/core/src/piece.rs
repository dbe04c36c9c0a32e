//! Piece module - a tetromino placed in the field or waiting in the preview
//!
//! A piece is a kind, the top-left anchor of its 4x4 frame in field
//! coordinates, and a rotation index. Occupied cells are derived from the
//! rotation table; nothing here checks the field.

use crate::rng::KindSource;
use crate::shapes::{occupied_offsets, rotation_count};
use crate::types::{BlockKind, SPAWN_POSITION};

/// Absolute field coordinates of a piece's four cells
pub type PieceCells = [(i8, i8); 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: BlockKind,
    x: i8,
    y: i8,
    rotation: usize,
}

impl Piece {
    /// Create a piece of `kind` at the spawn position in rotation 0
    pub fn new(kind: BlockKind) -> Self {
        debug_assert!(!kind.is_empty(), "a piece cannot have the empty kind");
        Self {
            kind,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
            rotation: 0,
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    /// Anchor (top-left of the frame) in field coordinates
    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// Absolute cells for the current rotation
    pub fn occupied_cells(&self) -> PieceCells {
        self.cells_for(self.rotation)
    }

    /// Absolute cells the piece would cover in `rotation` at its current anchor
    pub fn cells_for(&self, rotation: usize) -> PieceCells {
        occupied_offsets(self.kind, rotation).map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Cells mapped into the 4x4 preview field
    ///
    /// The spawn column lands on preview column 0 and everything shifts one row
    /// down, so every kind fits in rotation 0.
    pub fn preview_cells(&self) -> PieceCells {
        self.occupied_cells()
            .map(|(x, y)| (x - SPAWN_POSITION.0, y - SPAWN_POSITION.1 + 1))
    }

    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Rotation index after one rotate step; always 0 for `O`
    pub fn next_rotation(&self) -> usize {
        (self.rotation + 1) % rotation_count(self.kind)
    }

    pub fn apply_rotation(&mut self) {
        self.rotation = self.next_rotation();
    }

    /// Back to the spawn position and rotation 0 with the given kind
    pub fn reset(&mut self, kind: BlockKind) {
        *self = Self::new(kind);
    }

    /// Back to the spawn position and rotation 0 with a random kind
    pub fn reset_random(&mut self, source: &mut impl KindSource) {
        self.reset(source.next_kind());
    }
}
