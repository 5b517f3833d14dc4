//! Last-move record and destination list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::position::Position;

/// The most recently committed move.
///
/// `piece` is the mover as it stood on `start`, so a promoting pawn is
/// still recorded as a pawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LastMove {
    pub piece: Piece,
    pub start: Position,
    pub end: Position,
}

impl LastMove {
    #[must_use]
    pub const fn new(piece: Piece, start: Position, end: Position) -> Self {
        LastMove { piece, start, end }
    }

    /// True if this was a pawn advancing two rows.
    #[inline]
    #[must_use]
    pub fn is_pawn_double_step(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && (self.end.row - self.start.row).abs() == 2
    }

    /// Square a double-stepping pawn skipped over, where an en-passant
    /// capture lands.
    #[must_use]
    pub fn passed_square(&self) -> Option<Position> {
        if !self.is_pawn_double_step() {
            return None;
        }
        Some(Position::new(
            self.end.col,
            (self.start.row + self.end.row) / 2,
        ))
    }
}

impl fmt::Display for LastMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.piece, self.start, self.end)
    }
}

/// Upper bound on pseudo-legal destinations of a single piece.
///
/// A queen in the open reaches 27 squares; a king with both castles
/// reaches 10.
pub const MAX_DESTINATIONS: usize = 32;

const NO_POSITION: Position = Position::new(-1, -1);

/// Destinations of one piece with a fixed-size backing array.
#[derive(Clone, Copy)]
pub struct PositionList {
    positions: [Position; MAX_DESTINATIONS],
    len: usize,
}

impl PositionList {
    #[must_use]
    pub const fn new() -> Self {
        PositionList {
            positions: [NO_POSITION; MAX_DESTINATIONS],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, pos: Position) {
        assert!(
            self.len < MAX_DESTINATIONS,
            "more than {MAX_DESTINATIONS} destinations generated for one piece"
        );
        self.positions[self.len] = pos;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Position] {
        &self.positions[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.as_slice().contains(&pos)
    }

    /// Keep only destinations for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(Position) -> bool) {
        let mut kept = 0;
        for i in 0..self.len {
            let pos = self.positions[i];
            if keep(pos) {
                self.positions[kept] = pos;
                kept += 1;
            }
        }
        self.len = kept;
    }
}

impl Default for PositionList {
    fn default() -> Self {
        PositionList::new()
    }
}

impl PartialEq for PositionList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for PositionList {}

impl fmt::Debug for PositionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a PositionList {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Owning iterator over a `PositionList`
pub struct PositionListIntoIter {
    list: PositionList,
    idx: usize,
}

impl Iterator for PositionListIntoIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let pos = self.list.positions[self.idx];
            self.idx += 1;
            Some(pos)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PositionListIntoIter {}

impl IntoIterator for PositionList {
    type Item = Position;
    type IntoIter = PositionListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        PositionListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for PositionList {
    type Output = Position;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "PositionList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.positions[idx]
    }
}
