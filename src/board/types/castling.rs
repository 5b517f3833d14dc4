//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Column the king starts on and castles from.
pub(crate) const KING_HOME_COL: i8 = 4;

/// The two wings a king can castle toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// Corner column of the rook on this wing.
    #[inline]
    #[must_use]
    pub const fn rook_corner_col(self) -> i8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Column the king lands on (two squares toward the rook).
    #[inline]
    #[must_use]
    pub const fn king_target_col(self) -> i8 {
        match self {
            CastleSide::Kingside => KING_HOME_COL + 2,
            CastleSide::Queenside => KING_HOME_COL - 2,
        }
    }

    /// Column the rook lands on (the square the king crossed).
    #[inline]
    #[must_use]
    pub const fn rook_target_col(self) -> i8 {
        match self {
            CastleSide::Kingside => KING_HOME_COL + 1,
            CastleSide::Queenside => KING_HOME_COL - 1,
        }
    }

    /// Wing whose rook starts on `col`, if any.
    #[must_use]
    pub const fn from_corner_col(col: i8) -> Option<CastleSide> {
        match col {
            7 => Some(CastleSide::Kingside),
            0 => Some(CastleSide::Queenside),
            _ => None,
        }
    }
}

/// Castling rights represented as a bitmask.
///
/// Inside a game rights only ever get removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// True if `color` may still castle on either wing
    #[inline]
    #[must_use]
    pub const fn has_any(self, color: Color) -> bool {
        self.has(color, CastleSide::Kingside) || self.has(color, CastleSide::Queenside)
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::bit_for(color, side);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Remove both rights of a color (its king moved)
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastleSide::Kingside);
        self.remove(color, CastleSide::Queenside);
    }

    /// True if every right set in `self` is also set in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: CastlingRights) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    const fn bit_for(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => CASTLE_WHITE_K,
            (Color::White, CastleSide::Queenside) => CASTLE_WHITE_Q,
            (Color::Black, CastleSide::Kingside) => CASTLE_BLACK_K,
            (Color::Black, CastleSide::Queenside) => CASTLE_BLACK_Q,
        }
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("-");
        }
        for (bit, c) in [
            (CASTLE_WHITE_K, 'K'),
            (CASTLE_WHITE_Q, 'Q'),
            (CASTLE_BLACK_K, 'k'),
            (CASTLE_BLACK_Q, 'q'),
        ] {
            if self.0 & bit != 0 {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_and_none() {
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                assert!(CastlingRights::all().has(color, side));
                assert!(!CastlingRights::none().has(color, side));
            }
        }
    }

    #[test]
    fn test_remove_is_independent() {
        let mut rights = CastlingRights::all();
        rights.remove(Color::White, CastleSide::Queenside);
        assert!(rights.has(Color::White, CastleSide::Kingside));
        assert!(!rights.has(Color::White, CastleSide::Queenside));
        assert!(rights.has(Color::Black, CastleSide::Queenside));
        assert!(rights.is_subset_of(CastlingRights::all()));
        assert!(!CastlingRights::all().is_subset_of(rights));
    }

    #[test]
    fn test_remove_color() {
        let mut rights = CastlingRights::all();
        rights.remove_color(Color::Black);
        assert!(!rights.has_any(Color::Black));
        assert!(rights.has_any(Color::White));
        assert_eq!(rights.to_string(), "KQ");
    }

    #[test]
    fn test_side_columns() {
        assert_eq!(CastleSide::Kingside.king_target_col(), 6);
        assert_eq!(CastleSide::Kingside.rook_target_col(), 5);
        assert_eq!(CastleSide::Queenside.king_target_col(), 2);
        assert_eq!(CastleSide::Queenside.rook_target_col(), 3);
        assert_eq!(CastleSide::from_corner_col(0), Some(CastleSide::Queenside));
        assert_eq!(CastleSide::from_corner_col(4), None);
    }
}
