//! Game state, move execution and status classification.
//!
//! [`GameState`] is the aggregate root: it owns the board, the side to move,
//! castling rights and the last move, and changes only through
//! [`GameState::try_play_move`].
//!
//! # Example
//! ```
//! use chess_rules::{initial_state, KingStatus, Position};
//!
//! let mut game = initial_state();
//! let outcome = game.try_play_move("e2".parse().unwrap(), "e4".parse().unwrap());
//! assert!(!outcome.rejected_self_check);
//! assert_eq!(outcome.status, KingStatus::NoChecks);
//! assert!(game.piece_at(Position::new(4, 4)).piece().is_some());
//! ```

mod builder;
mod controller;
mod session;
mod state;

#[cfg(test)]
mod tests;

pub use builder::GameBuilder;
pub use controller::MoveOutcome;
pub use session::GameSession;
pub use state::{initial_state, GamePhase, GameState, KingStatus};
