use sweeper_core::{CellIndex, Coord, coords_to_index};

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Command {
    Reveal(CellIndex),
    /// Blank line, ask again.
    Skip,
    Quit,
}

/// Parses one line: `ROW COL`, a single linear index, or `q`/`quit`. Blank lines are skipped.
pub(crate) fn parse_command(line: &str, rows: Coord, cols: Coord) -> Result<Command, String> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => Ok(Command::Skip),
        ["q"] | ["quit"] => Ok(Command::Quit),
        [index] => {
            let index: CellIndex = index
                .parse()
                .map_err(|_| format!("not a cell index: {index}"))?;
            Ok(Command::Reveal(index))
        }
        [row, col] => {
            let row: Coord = row.parse().map_err(|_| format!("not a row: {row}"))?;
            let col: Coord = col.parse().map_err(|_| format!("not a column: {col}"))?;
            if row >= rows || col >= cols {
                return Err(format!("({row}, {col}) is outside the {rows}x{cols} board"));
            }
            Ok(Command::Reveal(coords_to_index((row, col), cols)))
        }
        _ => Err("expected `ROW COL`, an index, or `q`".to_string()),
    }
}
