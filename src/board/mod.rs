//! Board representation and pseudo-legal move generation.
//!
//! The grid is a plain array of cells. Move generation walks rays and
//! offsets square by square through [`classify`], and check detection reuses
//! the generators from the king's square.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, MoveContext, Position};
//!
//! let board = Board::new();
//! let e2: Position = "e2".parse().unwrap();
//! let moves = board.possible_moves(e2, &MoveContext::default());
//! assert_eq!(moves.len(), 2);
//! ```

mod check;
mod error;
mod geometry;
mod movegen;
mod render;
mod state;
mod types;

pub use error::{PositionError, SetupError};
pub use geometry::{classify, CellState};
pub use movegen::MoveContext;
pub use render::cell_tag;
pub use state::Board;
pub use types::{
    CastleSide, CastlingRights, Cell, Color, Direction, LastMove, Piece, PieceKind, Position,
    PositionList, PositionListIntoIter, BOARD_SIZE, MAX_DESTINATIONS,
};

pub(crate) use types::KING_HOME_COL;
