//! Fluent builder for constructing game positions.
//!
//! Allows setting up a game piece by piece instead of playing moves from the
//! start.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, PieceKind, Position};
//! use chess_rules::GameBuilder;
//!
//! let game = GameBuilder::new()
//!     .piece(Position::new(4, 7), Color::White, PieceKind::King)
//!     .piece(Position::new(4, 0), Color::Black, PieceKind::King)
//!     .piece(Position::new(0, 6), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(game.possible_moves(Position::new(0, 6)).len(), 2);
//! ```

use crate::board::{
    Board, CastleSide, CastlingRights, Cell, Color, LastMove, PieceKind, Position, SetupError,
};

use super::state::{GamePhase, GameState};

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    last_move: Option<LastMove>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Create a new empty board builder with no castling rights.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            last_move: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        GameBuilder {
            board: Board::new(),
            castling: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece, replacing whatever was on the square.
    ///
    /// # Panics
    ///
    /// If `pos` is off the board.
    #[must_use]
    pub fn piece(mut self, pos: Position, color: Color, kind: PieceKind) -> Self {
        self.board.write(pos, Cell::occupied(color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, pos: Position) -> Self {
        self.board.write(pos, Cell::Empty);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Enable one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.castling.set(color, side);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::none();
        self
    }

    /// Record the move that "just happened", e.g. a double step enabling
    /// en passant.
    #[must_use]
    pub const fn last_move(mut self, last: LastMove) -> Self {
        self.last_move = Some(last);
        self
    }

    /// Build the game.
    ///
    /// Each color needs exactly one king, no pawn may stand on the first or
    /// last row, and the side that just moved may not be left in check.
    pub fn build(self) -> Result<GameState, SetupError> {
        validated(self.board, self.side_to_move, self.castling, self.last_move)
    }
}

/// Assemble a `GameState` from its parts, refusing positions no game could
/// reach.
pub(crate) fn validated(
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    last_move: Option<LastMove>,
) -> Result<GameState, SetupError> {
    for color in Color::BOTH {
        let found = board.count(color, PieceKind::King);
        if found != 1 {
            return Err(SetupError::KingCount { color, found });
        }
    }
    if let Some((position, _)) = board
        .pieces()
        .find(|(pos, piece)| piece.kind == PieceKind::Pawn && (pos.row == 0 || pos.row == 7))
    {
        return Err(SetupError::PawnOnEdgeRow { position });
    }
    // The side to move could capture this king.
    let waiting = side_to_move.opponent();
    if board.is_in_check(waiting) {
        return Err(SetupError::OpponentInCheck { color: waiting });
    }

    let mut game = GameState {
        board,
        side_to_move,
        castling,
        last_move,
        phase: GamePhase::Ongoing(side_to_move),
    };
    game.refresh_phase();
    Ok(game)
}
