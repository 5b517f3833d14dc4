use super::super::{classify, Board, CellState, Color, Direction, Position, PositionList};

impl Board {
    /// Walk each ray until blocked; a blocking enemy is included as a capture.
    pub(crate) fn slider_destinations(
        &self,
        from: Position,
        mover: Color,
        rays: &[Direction],
    ) -> PositionList {
        let mut moves = PositionList::new();
        for &dir in rays {
            let mut target = from.offset(dir);
            loop {
                match classify(self, target, mover) {
                    CellState::Empty => moves.push(target),
                    CellState::Enemy => {
                        moves.push(target);
                        break;
                    }
                    CellState::Friendly | CellState::OffBoard => break,
                }
                target = target.offset(dir);
            }
        }
        moves
    }
}
