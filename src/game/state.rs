use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    Board, CastlingRights, Cell, Color, LastMove, MoveContext, Position, PositionList,
};

#[cfg(feature = "serde")]
use super::builder::validated;
#[cfg(feature = "serde")]
use crate::board::SetupError;

/// Check classification of the side to move after a committed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KingStatus {
    #[default]
    NoChecks,
    Check,
    Checkmate,
}

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GamePhase {
    /// The side to move is free to play.
    Ongoing(Color),
    /// The side to move is in check and has a way out.
    Check(Color),
    /// The game is over; `winner` delivered mate.
    Checkmate { winner: Color },
    /// The side to move has no legal move but is not in check.
    Stalemate(Color),
}

impl GamePhase {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GamePhase::Checkmate { .. } | GamePhase::Stalemate(_))
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::Ongoing(side) => write!(f, "{side} to move"),
            GamePhase::Check(side) => write!(f, "{side} to move, in check"),
            GamePhase::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GamePhase::Stalemate(side) => write!(f, "stalemate, {side} cannot move"),
        }
    }
}

/// One game: board, side to move, castling rights and the last move.
///
/// Mutated only through [`GameState::try_play_move`]. Independent games are
/// independent values; nothing is shared between them.
///
/// Deserializing runs the same checks as [`GameBuilder::build`](super::GameBuilder::build)
/// and recomputes the phase.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "StoredGame"))]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) last_move: Option<LastMove>,
    pub(crate) phase: GamePhase,
}

/// Wire form of a [`GameState`]; the phase is derived, not trusted.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct StoredGame {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    last_move: Option<LastMove>,
}

#[cfg(feature = "serde")]
impl TryFrom<StoredGame> for GameState {
    type Error = SetupError;

    fn try_from(stored: StoredGame) -> Result<Self, Self::Error> {
        validated(
            stored.board,
            stored.side_to_move,
            stored.castling,
            stored.last_move,
        )
    }
}

/// Standard starting position, White to move, every castling right intact.
#[must_use]
pub fn initial_state() -> GameState {
    GameState::new()
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            last_move: None,
            phase: GamePhase::Ongoing(Color::White),
        }
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Content of `pos`.
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Cell {
        self.board.read(pos)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[must_use]
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Check classification of the side to move.
    #[must_use]
    pub fn status(&self) -> KingStatus {
        match self.phase {
            GamePhase::Ongoing(_) | GamePhase::Stalemate(_) => KingStatus::NoChecks,
            GamePhase::Check(_) => KingStatus::Check,
            GamePhase::Checkmate { .. } => KingStatus::Checkmate,
        }
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    pub(crate) fn move_context(&self) -> MoveContext {
        MoveContext {
            last_move: self.last_move,
            castling: self.castling,
        }
    }

    /// Pseudo-legal destinations of the piece on `pos` (empty if none).
    ///
    /// These may still leave the mover in check; [`legal_moves`](Self::legal_moves)
    /// filters them.
    #[must_use]
    pub fn possible_moves(&self, pos: Position) -> PositionList {
        self.board.possible_moves(pos, &self.move_context())
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} | castling {}", self.phase, self.castling)?;
        if let Some(last) = self.last_move {
            write!(f, " | last {last}")?;
        }
        Ok(())
    }
}
