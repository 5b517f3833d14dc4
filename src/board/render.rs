//! Text rendering of the grid for debug output and simple front-ends.

use std::fmt;

use super::{Board, Cell, Color, PieceKind, Position, BOARD_SIZE};

/// Two-letter tag for a cell: color then kind, `--` when empty.
///
/// Knights use `h` (horse) so that no two tags collide with the bishop `b`
/// used for Black.
#[must_use]
pub fn cell_tag(cell: Cell) -> String {
    let Some(piece) = cell.piece() else {
        return "--".to_string();
    };
    let color = match piece.color {
        Color::White => 'w',
        Color::Black => 'b',
    };
    let kind = match piece.kind {
        PieceKind::Knight => 'h',
        other => other.to_char(),
    };
    format!("{color}{kind}")
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{} |", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                write!(f, " {}", cell_tag(self.read(Position::new(col, row))))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  +------------------------")?;
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "  {}", (b'a' + col as u8) as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        fmt::Display::fmt(self, f)
    }
}
