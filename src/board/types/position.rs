//! Board coordinates and step directions.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

/// Board width and height.
pub const BOARD_SIZE: i8 = 8;

/// A (column, row) coordinate.
///
/// Columns run a..h left to right. Row 0 is Black's back rank (rank 8)
/// and row 7 is White's back rank (rank 1). Coordinates are signed so that
/// stepping off the edge yields an off-board position instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub col: i8,
    pub row: i8,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(col: i8, row: i8) -> Self {
        Position { col, row }
    }

    /// True iff both coordinates lie in `[0, 8)`.
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.col >= 0 && self.col < BOARD_SIZE && self.row >= 0 && self.row < BOARD_SIZE
    }

    /// The position one `dir` step away. May be off board.
    #[inline]
    #[must_use]
    pub const fn offset(self, dir: Direction) -> Self {
        self.step(dir, 1)
    }

    /// The position `n` steps along `dir`. May be off board.
    #[inline]
    #[must_use]
    pub const fn step(self, dir: Direction, n: i8) -> Self {
        Position {
            col: self.col + dir.dcol * n,
            row: self.row + dir.drow * n,
        }
    }

    /// Flat index (row-major, a8 = 0). Panics off board.
    #[inline]
    #[must_use]
    pub(crate) fn index(self) -> usize {
        assert!(self.is_on_board(), "position {self:?} is off the board");
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        Position {
            col: (idx % BOARD_SIZE as usize) as i8,
            row: (idx / BOARD_SIZE as usize) as i8,
        }
    }

    /// Every on-board position, row by row from a8 to h1.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..(BOARD_SIZE as usize * BOARD_SIZE as usize)).map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "(col: {}, row: {})", self.col, self.row);
        }
        write!(
            f,
            "{}{}",
            (b'a' + self.col as u8) as char,
            BOARD_SIZE - self.row
        )
    }
}

impl TryFrom<(i8, i8)> for Position {
    type Error = PositionError;

    fn try_from((col, row): (i8, i8)) -> Result<Self, Self::Error> {
        let pos = Position::new(col, row);
        if pos.is_on_board() {
            Ok(pos)
        } else {
            Err(PositionError::OffBoard { col, row })
        }
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionError::InvalidName {
            name: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let col = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as i8,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b @ b'1'..=b'8' => BOARD_SIZE - (b - b'0') as i8,
            _ => return Err(invalid()),
        };
        Ok(Position { col, row })
    }
}

/// A (Δcol, Δrow) step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dcol: i8,
    pub drow: i8,
}

impl Direction {
    #[inline]
    #[must_use]
    pub const fn new(dcol: i8, drow: i8) -> Self {
        Direction { dcol, drow }
    }

    // Rows grow toward White, so north (toward Black) is -1.
    pub const N: Direction = Direction::new(0, -1);
    pub const S: Direction = Direction::new(0, 1);
    pub const E: Direction = Direction::new(1, 0);
    pub const W: Direction = Direction::new(-1, 0);
    pub const NE: Direction = Direction::new(1, -1);
    pub const NW: Direction = Direction::new(-1, -1);
    pub const SE: Direction = Direction::new(1, 1);
    pub const SW: Direction = Direction::new(-1, 1);

    pub const ORTHOGONAL: [Direction; 4] =
        [Direction::N, Direction::S, Direction::E, Direction::W];

    pub const DIAGONAL: [Direction; 4] =
        [Direction::NE, Direction::NW, Direction::SE, Direction::SW];

    /// All eight unit directions (queen rays, king steps).
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    pub const KNIGHT_JUMPS: [Direction; 8] = [
        Direction::new(2, 1),
        Direction::new(2, -1),
        Direction::new(-2, 1),
        Direction::new(-2, -1),
        Direction::new(1, 2),
        Direction::new(-1, 2),
        Direction::new(1, -2),
        Direction::new(-1, -2),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_board_bounds() {
        assert!(Position::new(0, 0).is_on_board());
        assert!(Position::new(7, 7).is_on_board());
        assert!(!Position::new(-1, 0).is_on_board());
        assert!(!Position::new(0, 8).is_on_board());
        assert!(!Position::new(8, 3).is_on_board());
    }

    #[test]
    fn test_names_follow_reference_layout() {
        assert_eq!(Position::new(0, 0).to_string(), "a8");
        assert_eq!(Position::new(4, 7).to_string(), "e1");
        assert_eq!("e1".parse::<Position>(), Ok(Position::new(4, 7)));
        assert_eq!("h8".parse::<Position>(), Ok(Position::new(7, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("i1".parse::<Position>().is_err());
        assert!("a9".parse::<Position>().is_err());
        assert!("a".parse::<Position>().is_err());
        assert!("a10".parse::<Position>().is_err());
    }

    #[test]
    fn test_try_from_tuple() {
        assert_eq!(Position::try_from((3, 4)), Ok(Position::new(3, 4)));
        assert_eq!(
            Position::try_from((3, 8)),
            Err(PositionError::OffBoard { col: 3, row: 8 })
        );
    }

    #[test]
    fn test_step_and_index() {
        let e2 = Position::new(4, 6);
        assert_eq!(e2.step(Direction::N, 2), Position::new(4, 4));
        assert_eq!(e2.offset(Direction::SW), Position::new(3, 7));
        assert_eq!(Position::from_index(e2.index()), e2);
        assert_eq!(Position::all().count(), 64);
    }

    #[test]
    fn test_off_board_display() {
        assert_eq!(Position::new(-1, 3).to_string(), "(col: -1, row: 3)");
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_index_panics_off_board() {
        let _ = Position::new(8, 0).index();
    }
}
