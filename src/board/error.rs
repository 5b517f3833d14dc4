//! Error types for board input.
//!
//! Only caller input is reported through these types. A broken game
//! invariant (a missing king, an off-board write) panics instead.

use std::fmt;

/// Error type for position parsing and conversion failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Coordinates outside the 8x8 grid
    OffBoard { col: i8, row: i8 },
    /// Square name not of the form `[a-h][1-8]`
    InvalidName { name: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::OffBoard { col, row } => {
                write!(f, "Position (col {col}, row {row}) is off the board")
            }
            PositionError::InvalidName { name } => {
                write!(f, "Invalid square name '{name}'")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for positions assembled with `GameBuilder`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A color has no king, or more than one
    KingCount { color: crate::board::Color, found: usize },
    /// A pawn placed on its own back row or its promotion row
    PawnOnEdgeRow { position: crate::board::Position },
    /// The side not to move is in check, so its king could be captured
    OpponentInCheck { color: crate::board::Color },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            SetupError::PawnOnEdgeRow { position } => {
                write!(f, "Pawn on {position} sits on a back rank")
            }
            SetupError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but it is not {color}'s move")
            }
        }
    }
}

impl std::error::Error for SetupError {}
