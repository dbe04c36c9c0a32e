//! Field module - the grid of locked cells
//!
//! The field is a 10x20 grid where each cell is empty (`BlockKind::None`) or
//! holds the kind of the piece that locked there.
//! Uses a flat array, row-major, row 0 at the top.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::piece::Piece;
use crate::types::{BlockKind, FIELD_HEIGHT, FIELD_WIDTH};

const WIDTH: usize = FIELD_WIDTH as usize;
const HEIGHT: usize = FIELD_HEIGHT as usize;

/// Total number of cells in the field
const FIELD_SIZE: usize = WIDTH * HEIGHT;

/// Row-major copy of the field, `[y][x]`
pub type FieldGrid = [[BlockKind; WIDTH]; HEIGHT];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    cells: [BlockKind; FIELD_SIZE],
}

impl Field {
    /// Create an empty field
    pub fn new() -> Self {
        Self {
            cells: [BlockKind::None; FIELD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::in_bounds(x, y) {
            Some((y as usize) * WIDTH + (x as usize))
        } else {
            None
        }
    }

    pub fn width(&self) -> u8 {
        FIELD_WIDTH
    }

    pub fn height(&self) -> u8 {
        FIELD_HEIGHT
    }

    /// `0 <= x < W` and `0 <= y < H`
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && (x as usize) < WIDTH && y >= 0 && (y as usize) < HEIGHT
    }

    /// Whether an in-bounds cell is empty
    ///
    /// Calling this outside the grid is a contract violation.
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        debug_assert!(Self::in_bounds(x, y), "is_empty({}, {}) outside the field", x, y);
        matches!(self.get(x, y), Some(BlockKind::None))
    }

    /// Cell at (x, y), or `None` when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<BlockKind> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, kind: BlockKind) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = kind;
                true
            }
            None => false,
        }
    }

    /// Whether every cell is in bounds and empty
    fn fits(&self, cells: impl IntoIterator<Item = (i8, i8)>) -> bool {
        cells
            .into_iter()
            .all(|(x, y)| Self::in_bounds(x, y) && self.is_empty(x, y))
    }

    /// Whether `piece`, moved by (dx, dy) in its current rotation, fits
    pub fn can_place(&self, piece: &Piece, dx: i8, dy: i8) -> bool {
        self.fits(
            piece
                .occupied_cells()
                .into_iter()
                .map(|(x, y)| (x + dx, y + dy)),
        )
    }

    /// Whether `piece` fits in its next rotation at the same anchor
    ///
    /// No kick search: any blocked or out-of-bounds cell refuses the rotation.
    pub fn can_place_rotated(&self, piece: &Piece) -> bool {
        self.fits(piece.cells_for(piece.next_rotation()))
    }

    /// Write the piece's kind into its current cells
    ///
    /// Callers must have checked the cells with [`Field::can_place`].
    pub fn lock(&mut self, piece: &Piece) {
        debug_assert!(
            self.can_place(piece, 0, 0),
            "locking {:?} onto occupied or out-of-bounds cells",
            piece
        );
        for (x, y) in piece.occupied_cells() {
            self.set(x, y, piece.kind());
        }
    }

    /// Whether row `y` has no empty cell
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|cell| !cell.is_empty())
    }

    pub fn full_row_count(&self) -> usize {
        (0..HEIGHT).filter(|&y| self.is_row_full(y)).count()
    }

    /// Remove every full row, letting the rows above fall into place
    ///
    /// Scans bottom-up. A row with a gap moves the cursor up; a full row is
    /// overwritten by shifting everything above it down one row (row 0 becomes
    /// empty) and the same row index is examined again, since it now holds what
    /// used to be one row higher.
    ///
    /// Returns whether at least one row was cleared.
    pub fn clear_full_lines(&mut self) -> bool {
        let mut cleared = false;
        let mut y = HEIGHT;

        while y > 0 {
            let row = y - 1;
            if !self.is_row_full(row) {
                y -= 1;
                continue;
            }
            cleared = true;
            self.collapse_onto(row);
        }

        cleared
    }

    /// Shift rows `0..y` down by one, overwriting row `y`, and empty row 0
    fn collapse_onto(&mut self, y: usize) {
        for row in (1..=y).rev() {
            let src = (row - 1) * WIDTH;
            self.cells.copy_within(src..src + WIDTH, row * WIDTH);
        }
        self.cells[..WIDTH].fill(BlockKind::None);
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        self.cells.fill(BlockKind::None);
    }

    pub fn row(&self, y: usize) -> &[BlockKind] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[BlockKind]> {
        self.cells.chunks_exact(WIDTH)
    }

    pub fn cells(&self) -> &[BlockKind] {
        &self.cells
    }

    /// Copy into a row-major grid without allocating
    pub fn write_grid(&self, out: &mut FieldGrid) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Build a field from rows drawn as text, bottom rows last
    ///
    /// Each row is `W` characters: `.` for empty, a kind letter otherwise.
    /// Fewer than `H` rows fill the bottom of the field. Unknown characters
    /// count as empty.
    pub fn from_rows(rows: &[&str]) -> Self {
        assert!(rows.len() <= HEIGHT, "too many rows");
        let mut field = Self::new();
        let offset = HEIGHT - rows.len();
        for (i, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().take(WIDTH).enumerate() {
                let kind = match ch {
                    '.' => BlockKind::None,
                    c => BlockKind::from_str(c.encode_utf8(&mut [0; 4])).unwrap_or_default(),
                };
                field.set(x as i8, (offset + i) as i8, kind);
            }
        }
        field
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}
