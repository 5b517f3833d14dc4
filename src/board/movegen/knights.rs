use super::super::{Board, Color, Direction, Position, PositionList};

impl Board {
    pub(crate) fn knight_destinations(&self, from: Position, mover: Color) -> PositionList {
        let mut moves = PositionList::new();
        self.leaper_destinations(from, mover, &Direction::KNIGHT_JUMPS, &mut moves);
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_knights_have_two_jumps() {
        let board = Board::new();
        let b1 = board.knight_destinations(Position::new(1, 7), Color::White);
        assert_eq!(b1.len(), 2);
        assert!(b1.contains(Position::new(0, 5)));
        assert!(b1.contains(Position::new(2, 5)));

        let g8 = board.knight_destinations(Position::new(6, 0), Color::Black);
        assert_eq!(g8.len(), 2);
        assert!(g8.contains(Position::new(5, 2)));
        assert!(g8.contains(Position::new(7, 2)));
    }

    #[test]
    fn test_knight_captures_but_skips_friends() {
        let board = Board::new();
        // A white knight dropped on d6 forks c8/e8 and the black pawns around it.
        let moves = board.knight_destinations(Position::new(3, 2), Color::White);
        assert_eq!(moves.len(), 8);
        let own = board.knight_destinations(Position::new(3, 2), Color::Black);
        // b5, f5, c4 and e4 remain; the four black-occupied targets are friendly.
        assert_eq!(own.len(), 4);
    }
}
