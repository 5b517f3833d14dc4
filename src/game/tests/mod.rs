//! Game controller tests.
//!
//! Tests are organized into separate files by category:
//! - `mobility.rs` - Initial-position move counts and read idempotence
//! - `self_check.rs` - Rejection of moves that expose the own king
//! - `castling.rs` - Castling execution and rights bookkeeping
//! - `en_passant.rs` - En-passant eligibility and capture
//! - `promotion.rs` - Automatic queen promotion
//! - `mate.rs` - Check, checkmate and stalemate classification
//! - `proptest.rs` - Property-based tests over random games


use crate::board::Position;
use crate::game::{GameState, MoveOutcome};

/// Parse a square name such as `"e4"`.
pub(super) fn sq(name: &str) -> Position {
    name.parse().expect("valid square name")
}

/// Play a move given by square names.
pub(super) fn play(game: &mut GameState, from: &str, to: &str) -> MoveOutcome {
    game.try_play_move(sq(from), sq(to))
}
