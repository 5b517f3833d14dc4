#[macro_use]
mod logging;

pub mod board;
pub mod game;

pub use board::{Board, Cell, Color, PieceKind, Position};
pub use game::{initial_state, GameBuilder, GamePhase, GameSession, GameState, KingStatus, MoveOutcome};
