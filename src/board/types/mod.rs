//! Core chess types.
//!
//! This module contains the value types shared by every layer:
//! - `Color`, `PieceKind`, `Piece` and `Cell` - what sits on a square
//! - `Position` and `Direction` - coordinates and steps
//! - `CastlingRights` and `CastleSide` - castling state
//! - `LastMove` and `PositionList` - move records and generator output

mod castling;
mod moves;
mod piece;
mod position;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{LastMove, PositionList, PositionListIntoIter, MAX_DESTINATIONS};
pub use piece::{Cell, Color, Piece, PieceKind};
pub use position::{Direction, Position, BOARD_SIZE};

pub(crate) use castling::KING_HOME_COL;
