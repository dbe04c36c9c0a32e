use crate::field::FieldGrid;
use crate::piece::PieceCells;
use crate::types::{BlockKind, RoundPhase, SessionPhase, FIELD_HEIGHT, FIELD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: BlockKind,
    /// Field coordinates for the active piece, preview coordinates for the next one
    pub cells: PieceCells,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub field: FieldGrid,
    pub active: Option<PieceSnapshot>,
    pub next: Option<PieceSnapshot>,
    pub session: SessionPhase,
    pub round: RoundPhase,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.field = [[BlockKind::None; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize];
        self.active = None;
        self.next = None;
        self.session = SessionPhase::Uninitialized;
        self.round = RoundPhase::Initializing;
    }

    /// Whether control intents currently reach the falling piece
    pub fn playable(&self) -> bool {
        self.session == SessionPhase::Playing && self.round == RoundPhase::Playing
    }

    /// Kind shown at (x, y): the active piece over the locked cells
    pub fn visible_cell(&self, x: i8, y: i8) -> BlockKind {
        if let Some(active) = self.active {
            if active.cells.contains(&(x, y)) {
                return active.kind;
            }
        }
        if x < 0 || y < 0 {
            return BlockKind::None;
        }
        self.field
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or_default()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            field: [[BlockKind::None; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
            active: None,
            next: None,
            session: SessionPhase::Uninitialized,
            round: RoundPhase::Initializing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_piece_covers_locked_cells() {
        let mut snap = GameSnapshot::default();
        snap.field[1][4] = BlockKind::Z;
        snap.field[5][0] = BlockKind::L;
        snap.active = Some(PieceSnapshot {
            kind: BlockKind::O,
            cells: [(4, 0), (5, 0), (4, 1), (5, 1)],
        });

        assert_eq!(snap.visible_cell(4, 1), BlockKind::O);
        assert_eq!(snap.visible_cell(0, 5), BlockKind::L);
        assert_eq!(snap.visible_cell(9, 19), BlockKind::None);
        assert_eq!(snap.visible_cell(-1, 0), BlockKind::None);
        assert_eq!(snap.visible_cell(10, 0), BlockKind::None);
    }

    #[test]
    fn clear_matches_default() {
        let mut snap = GameSnapshot {
            session: SessionPhase::Result,
            round: RoundPhase::GameOver,
            ..GameSnapshot::default()
        };
        snap.field[19][9] = BlockKind::T;
        assert!(!snap.playable());

        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
    }
}
