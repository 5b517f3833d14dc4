//! Target-square classification relative to a mover.

use super::{Board, Cell, Color, Position};

/// What a mover of some color finds on a target square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    OffBoard,
    Empty,
    Friendly,
    Enemy,
}

impl CellState {
    /// A leaper may land here (empty or capture).
    #[inline]
    #[must_use]
    pub const fn is_reachable(self) -> bool {
        matches!(self, CellState::Empty | CellState::Enemy)
    }
}

/// Classify `target` for a piece of color `mover`.
///
/// Every generator goes through here, so off-board and own-piece squares
/// are never emitted.
#[must_use]
pub fn classify(board: &Board, target: Position, mover: Color) -> CellState {
    if !target.is_on_board() {
        return CellState::OffBoard;
    }
    match board.read(target) {
        Cell::Empty => CellState::Empty,
        Cell::Occupied(piece) if piece.color == mover => CellState::Friendly,
        Cell::Occupied(_) => CellState::Enemy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_initial_board() {
        let board = Board::new();
        let white = Color::White;
        assert_eq!(classify(&board, Position::new(4, 7), white), CellState::Friendly);
        assert_eq!(classify(&board, Position::new(4, 0), white), CellState::Enemy);
        assert_eq!(classify(&board, Position::new(4, 4), white), CellState::Empty);
        assert_eq!(classify(&board, Position::new(4, 0), Color::Black), CellState::Friendly);
    }

    #[test]
    fn test_classify_off_board() {
        let board = Board::new();
        for pos in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(8, 0),
            Position::new(0, 8),
        ] {
            assert_eq!(classify(&board, pos, Color::White), CellState::OffBoard);
        }
    }

    #[test]
    fn test_reachable() {
        assert!(CellState::Empty.is_reachable());
        assert!(CellState::Enemy.is_reachable());
        assert!(!CellState::Friendly.is_reachable());
        assert!(!CellState::OffBoard.is_reachable());
    }
}
