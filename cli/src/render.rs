use std::fmt;
use sweeper_core::{Board, Cell, CellState};

fn glyph(cell: &Cell) -> char {
    match (cell.state(), cell.adjacent_mines()) {
        (CellState::Locked, _) => '#',
        (CellState::WrongMine, _) => '*',
        (CellState::Unlocked, Some(0)) => '.',
        (CellState::Unlocked, Some(count)) => char::from(b'0' + count),
        (CellState::Unlocked, None) => '*',
    }
}

/// Text picture of the board with the banner on top and column numbers on the side.
pub(crate) struct Screen<'a> {
    pub banner: &'a str,
    pub board: &'a Board,
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.banner)?;

        write!(f, "    ")?;
        for col in 0..self.board.cols() {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;

        for (row, cells) in self.board.grid().rows().into_iter().enumerate() {
            write!(f, "{:>3} ", row)?;
            for cell in cells {
                write!(f, "{:>3}", glyph(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
