use super::super::{
    Board, CastleSide, CastlingRights, Color, Direction, PieceKind, Position, PositionList,
    KING_HOME_COL,
};

impl Board {
    pub(crate) fn king_destinations(
        &self,
        from: Position,
        mover: Color,
        castling: CastlingRights,
    ) -> PositionList {
        let mut moves = PositionList::new();
        self.leaper_destinations(from, mover, &Direction::ALL, &mut moves);

        for side in CastleSide::BOTH {
            if self.can_castle(from, mover, castling, side) {
                moves.push(Position::new(side.king_target_col(), from.row));
            }
        }

        moves
    }

    /// Castling needs the right, the king and rook on their home squares and
    /// an empty path between them. Attacks on the path are not examined.
    fn can_castle(
        &self,
        from: Position,
        mover: Color,
        castling: CastlingRights,
        side: CastleSide,
    ) -> bool {
        if !castling.has(mover, side) || from != Position::new(KING_HOME_COL, mover.back_row()) {
            return false;
        }
        let corner = side.rook_corner_col();
        if !self
            .read(Position::new(corner, from.row))
            .holds(mover, PieceKind::Rook)
        {
            return false;
        }
        let (low, high) = if corner < from.col {
            (corner + 1, from.col)
        } else {
            (from.col + 1, corner)
        };
        (low..high).all(|col| self.read(Position::new(col, from.row)).is_empty())
    }
}
