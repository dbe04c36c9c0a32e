//! Rotation table - 4x4 occupancy frames per piece kind
//!
//! Each rotation state is a 4x4 frame (row-major, row 0 at the top) with
//! exactly four occupied cells. `O` has a single state, every other kind four.
//! Rotating steps to the next frame in the list and wraps around; there are no
//! wall kicks.

use crate::types::BlockKind;

/// Side length of a rotation frame
pub const FRAME_SIZE: usize = 4;

/// A single rotation state, 1 = occupied
pub type Frame = [[u8; FRAME_SIZE]; FRAME_SIZE];

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Offsets of the four occupied cells of a frame
pub type PieceShape = [CellOffset; 4];

const I_FRAMES: [Frame; 4] = [
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0]],
    [[0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
];

const O_FRAMES: [Frame; 1] = [[[0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]];

const S_FRAMES: [Frame; 4] = [
    [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [0, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0]],
    [[1, 0, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
];

const Z_FRAMES: [Frame; 4] = [
    [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 1, 0], [0, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [1, 1, 0, 0], [1, 0, 0, 0], [0, 0, 0, 0]],
];

const J_FRAMES: [Frame; 4] = [
    [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 1, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [1, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [0, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0]],
];

const L_FRAMES: [Frame; 4] = [
    [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [1, 1, 1, 0], [1, 0, 0, 0], [0, 0, 0, 0]],
    [[1, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
];

const T_FRAMES: [Frame; 4] = [
    [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [0, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    [[0, 0, 0, 0], [1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    [[0, 1, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
];

/// All rotation frames of a piece kind
///
/// The empty kind has no frames.
pub fn frames(kind: BlockKind) -> &'static [Frame] {
    match kind {
        BlockKind::None => &[],
        BlockKind::I => &I_FRAMES,
        BlockKind::O => &O_FRAMES,
        BlockKind::S => &S_FRAMES,
        BlockKind::Z => &Z_FRAMES,
        BlockKind::J => &J_FRAMES,
        BlockKind::L => &L_FRAMES,
        BlockKind::T => &T_FRAMES,
    }
}

/// Number of rotation states: 1 for `O`, 4 for the rest
pub fn rotation_count(kind: BlockKind) -> usize {
    debug_assert!(!kind.is_empty(), "rotation_count on an empty kind");
    frames(kind).len()
}

/// Raw frame for a kind and rotation index
///
/// # Panics
///
/// Panics if `rotation >= rotation_count(kind)`.
pub fn frame(kind: BlockKind, rotation: usize) -> &'static Frame {
    let frames = frames(kind);
    assert!(
        rotation < frames.len(),
        "rotation {} out of range for {:?}",
        rotation,
        kind
    );
    &frames[rotation]
}

/// The four occupied `(dx, dy)` offsets of a frame, in row-major scan order
///
/// # Panics
///
/// Panics if `rotation >= rotation_count(kind)`.
pub fn occupied_offsets(kind: BlockKind, rotation: usize) -> PieceShape {
    let frame = frame(kind, rotation);
    let mut out = [(0i8, 0i8); 4];
    let mut n = 0usize;
    for (dy, row) in frame.iter().enumerate() {
        for (dx, &cell) in row.iter().enumerate() {
            if cell != 0 {
                debug_assert!(n < 4, "frame for {:?} has more than 4 cells", kind);
                out[n] = (dx as i8, dy as i8);
                n += 1;
            }
        }
    }
    debug_assert_eq!(n, 4, "frame for {:?} must have exactly 4 cells", kind);
    out
}
