//! Check detection by attacker symmetry.
//!
//! A piece of kind K attacks square S exactly when a K of the defender's
//! color standing on S could capture it, so each generator is run from S and
//! its captures are matched against enemy pieces of the same kind.

use super::{Board, Color, MoveContext, PieceKind, Position, PositionList};

impl Board {
    /// Is `color`'s king attacked?
    ///
    /// # Panics
    ///
    /// If `color` has no king on the board. A reachable game state always
    /// has one, so this is a broken invariant rather than an error.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king) = self.find_king(color) else {
            panic!("no {color} king on the board; game state invariant broken");
        };
        self.is_square_attacked(king, color)
    }

    /// Is `square` attacked by an enemy of `defender`?
    #[must_use]
    pub fn is_square_attacked(&self, square: Position, defender: Color) -> bool {
        PieceKind::ALL
            .iter()
            .any(|&kind| self.attacker_of_kind(square, defender, kind).is_some())
    }

    /// First enemy piece of `kind` that attacks `square`, if any.
    #[must_use]
    pub fn attacker_of_kind(
        &self,
        square: Position,
        defender: Color,
        kind: PieceKind,
    ) -> Option<Position> {
        let attacker = defender.opponent();
        self.probe(square, defender, kind)
            .into_iter()
            .find(|&pos| self.read(pos).holds(attacker, kind))
    }

    /// Every enemy piece attacking `defender`'s king.
    #[must_use]
    pub fn checkers(&self, defender: Color) -> PositionList {
        let mut found = PositionList::new();
        let Some(king) = self.find_king(defender) else {
            return found;
        };
        let attacker = defender.opponent();
        for kind in PieceKind::ALL {
            for pos in self.probe(king, defender, kind) {
                if self.read(pos).holds(attacker, kind) {
                    found.push(pos);
                }
            }
        }
        found
    }

    fn probe(&self, square: Position, defender: Color, kind: PieceKind) -> PositionList {
        match kind {
            PieceKind::Pawn => self.pawn_captures(square, defender),
            _ => self.destinations(square, defender, kind, &MoveContext::default()),
        }
    }
}
