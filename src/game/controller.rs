//! Move validation and commit.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    Board, CastleSide, Cell, Color, LastMove, Piece, PieceKind, Position, PositionList,
    KING_HOME_COL,
};

use super::state::{GamePhase, GameState, KingStatus};

/// Result of [`GameState::try_play_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    /// The move would have left the mover's king attacked; nothing changed.
    pub rejected_self_check: bool,
    /// Check classification of the new side to move. Meaningless when rejected.
    pub status: KingStatus,
    /// The new side to move has no legal move and is not in check.
    pub stalemate: bool,
}

impl MoveOutcome {
    const fn rejected() -> Self {
        MoveOutcome {
            rejected_self_check: true,
            status: KingStatus::NoChecks,
            stalemate: false,
        }
    }

    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        !self.rejected_self_check
    }
}

/// Cells touched by a speculative move.
struct Snapshot {
    cells: [Option<(Position, Cell)>; 3],
}

impl Snapshot {
    fn take(board: &Board, squares: [Option<Position>; 3]) -> Self {
        Snapshot {
            cells: squares.map(|sq| sq.map(|pos| (pos, board.read(pos)))),
        }
    }

    fn restore(self, board: &mut Board) {
        // Restore in reverse so a repeated square ends with its oldest value.
        for (pos, cell) in self.cells.into_iter().rev().flatten() {
            board.write(pos, cell);
        }
    }
}

/// Play `start` -> `end` on `board` (removing `victim` for en passant),
/// test the mover's king, and put everything back.
fn exposes_king(board: &mut Board, start: Position, end: Position, victim: Option<Position>) -> bool {
    let snapshot = Snapshot::take(board, [Some(start), Some(end), victim]);
    let moved = board.take(start);
    board.write(end, moved);
    if let Some(victim) = victim {
        board.take(victim);
    }
    let exposed = match moved.piece() {
        Some(piece) => board.is_in_check(piece.color),
        None => false,
    };
    snapshot.restore(board);
    exposed
}

impl GameState {
    /// Attempt to play `start` -> `end` for the side to move.
    ///
    /// `end` is expected to come from [`possible_moves`](Self::possible_moves)
    /// for `start`; pseudo-legality is not re-derived here. A move that would
    /// leave the mover's king attacked is rejected and leaves the state
    /// untouched.
    ///
    /// # Panics
    ///
    /// If `start` does not hold a piece of the side to move, or either
    /// position is off the board.
    pub fn try_play_move(&mut self, start: Position, end: Position) -> MoveOutcome {
        let mover = self.side_to_move;
        let piece = match self.board.read(start) {
            Cell::Occupied(piece) if piece.color == mover => piece,
            other => panic!("{start} holds {other:?}, not a {mover} piece to move"),
        };

        let victim = self.en_passant_victim(piece, end);
        if exposes_king(&mut self.board, start, end, victim) {
            debug_log!("rejected {} {}-{}: leaves own king in check", piece, start, end);
            return MoveOutcome::rejected();
        }

        self.commit(piece, start, end, victim);
        self.classify_position(mover)
    }

    /// `possible_moves` minus those that would leave the mover in check.
    #[must_use]
    pub fn legal_moves(&self, pos: Position) -> PositionList {
        let mut moves = self.possible_moves(pos);
        let Some(piece) = self.board.read(pos).piece() else {
            return moves;
        };
        let mut scratch = self.board;
        moves.retain(|to| !exposes_king(&mut scratch, pos, to, self.en_passant_victim(piece, to)));
        moves
    }

    /// Does `color` have any move that keeps its king safe?
    #[must_use]
    pub fn has_moves_available(&self, color: Color) -> bool {
        let ctx = self.move_context();
        let mut scratch = self.board;
        self.board.pieces_of(color).any(|(from, kind)| {
            let piece = Piece::new(color, kind);
            self.board
                .destinations(from, color, kind, &ctx)
                .into_iter()
                .any(|to| !exposes_king(&mut scratch, from, to, self.en_passant_victim(piece, to)))
        })
    }

    /// Square of the pawn an en-passant capture onto `end` would remove.
    fn en_passant_victim(&self, piece: Piece, end: Position) -> Option<Position> {
        let last = self.last_move?;
        let hits = piece.kind == PieceKind::Pawn
            && last.piece.color != piece.color
            && last.passed_square() == Some(end);
        hits.then_some(last.end)
    }

    /// Which castle, if any, a king move from `start` to `end` is.
    fn castle_side(&self, piece: Piece, start: Position, end: Position) -> Option<CastleSide> {
        if piece.kind != PieceKind::King
            || start != Position::new(KING_HOME_COL, piece.color.back_row())
            || end.row != start.row
        {
            return None;
        }
        CastleSide::BOTH
            .into_iter()
            .find(|&side| end.col == side.king_target_col() && self.castling.has(piece.color, side))
    }

    fn commit(&mut self, piece: Piece, start: Position, end: Position, victim: Option<Position>) {
        let captured = self.board.read(end).piece();
        let castle = self.castle_side(piece, start, end);

        self.board.take(start);
        self.board.write(end, Cell::Occupied(piece));

        if let Some(victim) = victim {
            self.board.take(victim);
            debug_log!("{} captures en passant on {}, removing {}", piece, end, victim);
        }

        match piece.kind {
            PieceKind::King => {
                if let Some(side) = castle {
                    let row = start.row;
                    let rook = self.board.take(Position::new(side.rook_corner_col(), row));
                    self.board.write(Position::new(side.rook_target_col(), row), rook);
                    debug_log!("{} castles {:?}", piece.color, side);
                }
                self.castling.remove_color(piece.color);
            }
            PieceKind::Rook => self.drop_corner_right(piece.color, start),
            PieceKind::Pawn if end.row == piece.color.promotion_row() => {
                self.board
                    .write(end, Cell::occupied(piece.color, PieceKind::Queen));
                debug_log!("{} promotes on {}", piece, end);
            }
            _ => {}
        }

        if let Some(captured) = captured {
            if captured.kind == PieceKind::Rook {
                self.drop_corner_right(captured.color, end);
            }
        }

        self.last_move = Some(LastMove::new(piece, start, end));
        self.side_to_move = piece.color.opponent();
        trace_log!("committed {} {}-{}, rights {}", piece, start, end, self.castling);
    }

    /// A rook of `color` leaving or being captured on `square`; clears the
    /// right of the wing whose corner that is.
    fn drop_corner_right(&mut self, color: Color, square: Position) {
        if square.row != color.back_row() {
            return;
        }
        if let Some(side) = CastleSide::from_corner_col(square.col) {
            self.castling.remove(color, side);
        }
    }

    /// Classify the position for the new side to move after `mover` played.
    fn classify_position(&mut self, mover: Color) -> MoveOutcome {
        let phase = self.evaluate_phase();
        self.phase = phase;

        let status = match phase {
            GamePhase::Ongoing(_) | GamePhase::Stalemate(_) => KingStatus::NoChecks,
            GamePhase::Check(side) => {
                debug_log!("{} is in check", side);
                KingStatus::Check
            }
            GamePhase::Checkmate { winner } => {
                debug_assert_eq!(winner, mover);
                KingStatus::Checkmate
            }
        };
        if phase.is_over() {
            info_log!("game over: {}", phase);
        }

        MoveOutcome {
            rejected_self_check: false,
            status,
            stalemate: matches!(phase, GamePhase::Stalemate(_)),
        }
    }

    /// Recompute the phase from scratch, for states assembled by hand.
    pub(crate) fn refresh_phase(&mut self) {
        self.phase = self.evaluate_phase();
    }

    fn evaluate_phase(&self) -> GamePhase {
        let side = self.side_to_move;
        let in_check = self.board.is_in_check(side);
        match (in_check, self.has_moves_available(side)) {
            (true, true) => GamePhase::Check(side),
            (true, false) => GamePhase::Checkmate {
                winner: side.opponent(),
            },
            (false, true) => GamePhase::Ongoing(side),
            (false, false) => GamePhase::Stalemate(side),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_restores_overlapping_squares() {
        let mut board = Board::new();
        let before = board;
        let e2 = Position::new(4, 6);
        let e4 = Position::new(4, 4);
        let snapshot = Snapshot::take(&board, [Some(e2), Some(e4), Some(e2)]);
        board.take(e2);
        board.write(e4, Cell::occupied(Color::White, PieceKind::Pawn));
        snapshot.restore(&mut board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_exposes_king_leaves_board_unchanged() {
        let mut board = Board::new();
        let before = board;
        assert!(!exposes_king(&mut board, Position::new(4, 6), Position::new(4, 4), None));
        assert_eq!(board, before);
    }

    #[test]
    fn test_rejected_outcome_shape() {
        let outcome = MoveOutcome::rejected();
        assert!(outcome.rejected_self_check);
        assert!(!outcome.is_accepted());
        assert!(!outcome.stalemate);
    }
}
