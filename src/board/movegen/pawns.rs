use super::super::{
    classify, Board, CellState, Color, Direction, LastMove, PieceKind, Position, PositionList,
};

/// Column deltas of the two capture diagonals.
const CAPTURE_SIDES: [i8; 2] = [-1, 1];

impl Board {
    pub(crate) fn pawn_destinations(
        &self,
        from: Position,
        mover: Color,
        last_move: Option<&LastMove>,
    ) -> PositionList {
        let mut moves = PositionList::new();
        let forward = Direction::new(0, mover.pawn_direction());

        // Pawns never capture straight ahead.
        let one_step = from.offset(forward);
        if classify(self, one_step, mover) == CellState::Empty {
            moves.push(one_step);
            let two_step = one_step.offset(forward);
            if from.row == mover.pawn_start_row()
                && classify(self, two_step, mover) == CellState::Empty
            {
                moves.push(two_step);
            }
        }

        for dcol in CAPTURE_SIDES {
            let target = from.offset(Direction::new(dcol, mover.pawn_direction()));
            match classify(self, target, mover) {
                CellState::Enemy => moves.push(target),
                CellState::Empty if self.en_passant_applies(from, dcol, mover, last_move) => {
                    moves.push(target)
                }
                _ => {}
            }
        }

        moves
    }

    /// Diagonal squares a pawn on `from` would capture into right now.
    ///
    /// En passant is left out: a king is never the piece that just
    /// double-stepped, so it plays no part in attack detection.
    pub(crate) fn pawn_captures(&self, from: Position, mover: Color) -> PositionList {
        let mut moves = PositionList::new();
        for dcol in CAPTURE_SIDES {
            let target = from.offset(Direction::new(dcol, mover.pawn_direction()));
            if classify(self, target, mover) == CellState::Enemy {
                moves.push(target);
            }
        }
        moves
    }

    /// The neighbour `dcol` columns away is an enemy pawn that double-stepped
    /// on the move just played.
    fn en_passant_applies(
        &self,
        from: Position,
        dcol: i8,
        mover: Color,
        last_move: Option<&LastMove>,
    ) -> bool {
        let Some(last) = last_move else {
            return false;
        };
        let beside = from.offset(Direction::new(dcol, 0));
        last.is_pawn_double_step()
            && last.piece.color != mover
            && last.end == beside
            && classify(self, beside, mover) == CellState::Enemy
            && self.read(beside).holds(last.piece.color, PieceKind::Pawn)
    }
}
