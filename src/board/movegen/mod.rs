//! Pseudo-legal destination generation.
//!
//! Destinations obey piece movement and occupancy but are not filtered for
//! leaving the mover's own king in check; the game controller does that.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{
    classify, Board, CastlingRights, Color, Direction, LastMove, PieceKind, Position,
    PositionList,
};

/// Game facts beyond piece placement that some generators consult.
///
/// The default context has no previous move and no castling rights, which is
/// what attack detection wants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveContext {
    pub last_move: Option<LastMove>,
    pub castling: CastlingRights,
}

impl Board {
    /// Destinations of the piece on `from`; empty if the square is empty.
    #[must_use]
    pub fn possible_moves(&self, from: Position, ctx: &MoveContext) -> PositionList {
        match self.read(from).piece() {
            Some(piece) => self.destinations(from, piece.color, piece.kind, ctx),
            None => PositionList::new(),
        }
    }

    /// Destinations a `kind` of color `mover` standing on `from` would have.
    ///
    /// The square itself need not hold such a piece, which lets the check
    /// detector probe attack lines from the king's square.
    #[must_use]
    pub fn destinations(
        &self,
        from: Position,
        mover: Color,
        kind: PieceKind,
        ctx: &MoveContext,
    ) -> PositionList {
        match kind {
            PieceKind::Pawn => self.pawn_destinations(from, mover, ctx.last_move.as_ref()),
            PieceKind::Rook => self.slider_destinations(from, mover, &Direction::ORTHOGONAL),
            PieceKind::Knight => self.knight_destinations(from, mover),
            PieceKind::Bishop => self.slider_destinations(from, mover, &Direction::DIAGONAL),
            PieceKind::Queen => self.slider_destinations(from, mover, &Direction::ALL),
            PieceKind::King => self.king_destinations(from, mover, ctx.castling),
        }
    }

    /// Fixed-offset moves: each offset lands if empty or enemy.
    fn leaper_destinations(
        &self,
        from: Position,
        mover: Color,
        offsets: &[Direction],
        moves: &mut PositionList,
    ) {
        for &dir in offsets {
            let target = from.offset(dir);
            if classify(self, target, mover).is_reachable() {
                moves.push(target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    fn lone(kind: PieceKind, at: Position) -> Board {
        let mut board = Board::empty();
        board.write(at, Cell::occupied(Color::White, kind));
        board
    }

    #[test]
    fn test_empty_square_has_no_moves() {
        let board = Board::new();
        assert!(board
            .possible_moves(Position::new(4, 4), &MoveContext::default())
            .is_empty());
    }

    #[test]
    fn test_open_board_counts() {
        let center = Position::new(3, 4);
        let ctx = MoveContext::default();
        let expected = [
            (PieceKind::Rook, 14),
            (PieceKind::Knight, 8),
            (PieceKind::Bishop, 13),
            (PieceKind::Queen, 27),
            (PieceKind::King, 8),
        ];
        for (kind, count) in expected {
            let board = lone(kind, center);
            assert_eq!(board.possible_moves(center, &ctx).len(), count, "{kind}");
        }
    }

    #[test]
    fn test_corner_counts() {
        let corner = Position::new(0, 0);
        let ctx = MoveContext::default();
        assert_eq!(lone(PieceKind::Knight, corner).possible_moves(corner, &ctx).len(), 2);
        assert_eq!(lone(PieceKind::King, corner).possible_moves(corner, &ctx).len(), 3);
        assert_eq!(lone(PieceKind::Queen, corner).possible_moves(corner, &ctx).len(), 21);
    }

    #[test]
    fn test_dispatch_ignores_occupant() {
        // Probing with a kind that differs from the occupant still follows
        // the probed kind's movement.
        let board = Board::new();
        let e1 = Position::new(4, 7);
        let ctx = MoveContext::default();
        // d3 and f3 for a knight on e1; nothing for a bishop.
        assert_eq!(board.destinations(e1, Color::White, PieceKind::Knight, &ctx).len(), 2);
        assert!(board.destinations(e1, Color::White, PieceKind::Bishop, &ctx).is_empty());
        let from_e4 = board.destinations(Position::new(4, 4), Color::White, PieceKind::Rook, &ctx);
        // Up the e-file to e7 (capture), down to e3, and the full fourth rank.
        assert_eq!(from_e4.len(), 3 + 1 + 7);
    }
}
