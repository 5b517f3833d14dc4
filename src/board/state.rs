use super::{Cell, Color, Piece, PieceKind, Position};

const SQUARES: usize = 64;

/// Pieces on each back rank, a-file to h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid of cells.
///
/// Accessors assume an on-board position; routing through
/// [`classify`](super::classify) first is the caller's job. An off-board
/// access panics.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    #[cfg_attr(feature = "serde", serde(with = "cells_serde"))]
    cells: [Cell; SQUARES],
}

impl Board {
    /// Standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            for color in Color::BOTH {
                board.write(
                    Position::new(col, color.back_row()),
                    Cell::occupied(color, *kind),
                );
                board.write(
                    Position::new(col, color.pawn_start_row()),
                    Cell::occupied(color, PieceKind::Pawn),
                );
            }
        }
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [Cell::Empty; SQUARES],
        }
    }

    /// Content of `pos`.
    #[inline]
    #[must_use]
    pub fn read(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    #[inline]
    pub fn write(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Empty `pos` and return what was there.
    #[inline]
    pub fn take(&mut self, pos: Position) -> Cell {
        std::mem::take(&mut self.cells[pos.index()])
    }

    /// Every occupied square with its piece, row by row from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.piece().map(|p| (Position::from_index(idx), p)))
    }

    /// Squares holding `color`'s pieces.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, PieceKind)> + '_ {
        self.pieces()
            .filter(move |(_, piece)| piece.color == color)
            .map(|(pos, piece)| (pos, piece.kind))
    }

    /// Where `color`'s king stands, if it has one.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, kind)| *kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }

    /// Number of pieces of one kind and color.
    #[must_use]
    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces_of(color).filter(|(_, k)| *k == kind).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(feature = "serde")]
mod cells_serde {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Cell, SQUARES};

    pub(super) fn serialize<S: Serializer>(cells: &[Cell; SQUARES], s: S) -> Result<S::Ok, S::Error> {
        cells.as_slice().serialize(s)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[Cell; SQUARES], D::Error> {
        let cells = Vec::<Cell>::deserialize(d)?;
        let len = cells.len();
        cells
            .try_into()
            .map_err(|_| D::Error::invalid_length(len, &"64 cells"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = Board::new();
        assert_eq!(board.pieces().count(), 32);
        assert!(board
            .read(Position::new(4, 7))
            .holds(Color::White, PieceKind::King));
        assert!(board
            .read(Position::new(3, 0))
            .holds(Color::Black, PieceKind::Queen));
        assert!(board
            .read(Position::new(0, 6))
            .holds(Color::White, PieceKind::Pawn));
        assert!(board.read(Position::new(4, 4)).is_empty());
        for color in Color::BOTH {
            assert_eq!(board.count(color, PieceKind::Pawn), 8);
            assert_eq!(board.count(color, PieceKind::King), 1);
        }
    }

    #[test]
    fn test_find_king() {
        let board = Board::new();
        assert_eq!(board.find_king(Color::White), Some(Position::new(4, 7)));
        assert_eq!(board.find_king(Color::Black), Some(Position::new(4, 0)));
        assert_eq!(Board::empty().find_king(Color::White), None);
    }

    #[test]
    fn test_write_and_take() {
        let mut board = Board::empty();
        let pos = Position::new(2, 5);
        board.write(pos, Cell::occupied(Color::Black, PieceKind::Knight));
        assert_eq!(board.pieces_of(Color::Black).count(), 1);
        assert_eq!(
            board.take(pos),
            Cell::occupied(Color::Black, PieceKind::Knight)
        );
        assert!(board.read(pos).is_empty());
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_off_board_read_panics() {
        let _ = Board::new().read(Position::new(0, 8));
    }
}
