//! Shared handle to one game for hosts that serve several threads.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{Cell, Color, Position, PositionList};

use super::controller::MoveOutcome;
use super::state::{GamePhase, GameState};

/// A cloneable, thread-safe handle owning one [`GameState`].
///
/// Clones share the same game; separate sessions never share state. A move
/// attempt holds the lock for its whole duration, so readers only ever see a
/// committed or untouched position.
#[derive(Clone, Debug)]
pub struct GameSession {
    state: Arc<Mutex<GameState>>,
}

impl GameSession {
    /// A session playing from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        GameSession {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn try_play_move(&self, start: Position, end: Position) -> MoveOutcome {
        self.state.lock().try_play_move(start, end)
    }

    #[must_use]
    pub fn possible_moves(&self, pos: Position) -> PositionList {
        self.state.lock().possible_moves(pos)
    }

    #[must_use]
    pub fn legal_moves(&self, pos: Position) -> PositionList {
        self.state.lock().legal_moves(pos)
    }

    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Cell {
        self.state.lock().piece_at(pos)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.state.lock().side_to_move()
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.state.lock().phase()
    }

    /// A copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.lock().clone()
    }

    /// Run `f` against the current state under the lock.
    pub fn with_state<R>(&self, f: impl FnOnce(&GameState) -> R) -> R {
        f(&self.state.lock())
    }

    /// True if both handles refer to the same game.
    #[must_use]
    pub fn same_game(&self, other: &GameSession) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_one_game() {
        let session = GameSession::new();
        let other = session.clone();
        let outcome = session.try_play_move(Position::new(4, 6), Position::new(4, 4));
        assert!(outcome.is_accepted());
        assert_eq!(other.side_to_move(), Color::Black);
        assert!(session.same_game(&other));
    }

    #[test]
    fn test_sessions_are_independent() {
        let first = GameSession::new();
        let second = GameSession::new();
        first.try_play_move(Position::new(4, 6), Position::new(4, 4));
        assert_eq!(second.side_to_move(), Color::White);
        assert!(second.piece_at(Position::new(4, 4)).is_empty());
        assert!(!first.same_game(&second));
    }

    #[test]
    fn test_games_on_separate_threads() {
        let handles: Vec<_> = (0..4)
            .map(|col| {
                thread::spawn(move || {
                    let session = GameSession::new();
                    session.try_play_move(Position::new(col, 6), Position::new(col, 4));
                    session.snapshot()
                })
            })
            .collect();
        for (col, handle) in handles.into_iter().enumerate() {
            let state = handle.join().unwrap();
            assert_eq!(state.side_to_move(), Color::Black);
            assert!(!state.piece_at(Position::new(col as i8, 4)).is_empty());
            assert_eq!(state.board().pieces().count(), 32);
        }
    }

    #[test]
    fn test_concurrent_readers_see_committed_state() {
        let session = GameSession::new();
        let reader = session.clone();
        let writer = thread::spawn(move || {
            session.try_play_move(Position::new(6, 7), Position::new(5, 5));
        });
        let seen = reader.with_state(|state| state.board().pieces().count());
        writer.join().unwrap();
        assert_eq!(seen, 32);
        assert_eq!(reader.side_to_move(), Color::Black);
    }
}
