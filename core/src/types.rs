/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Row-major linear index of a cell, `0..rows * cols`.
pub type CellIndex = usize;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Splits a linear index into `(row, col)` for a board `cols` wide.
pub fn index_to_coords(index: CellIndex, cols: Coord) -> Coord2 {
    let cols = usize::from(cols);
    let row = index / cols;
    let col = index - row * cols;
    (row.try_into().unwrap(), col.try_into().unwrap())
}

pub fn coords_to_index((row, col): Coord2, cols: Coord) -> CellIndex {
    usize::from(row) * usize::from(cols) + usize::from(col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_coords() {
        assert_eq!(index_to_coords(0, 18), (0, 0));
        assert_eq!(index_to_coords(17, 18), (0, 17));
        assert_eq!(index_to_coords(18, 18), (1, 0));
        assert_eq!(index_to_coords(251, 18), (13, 17));
        assert_eq!(coords_to_index((13, 17), 18), 251);
    }

    #[test]
    fn mult_saturates() {
        assert_eq!(mult(14, 18), 252);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 4_294_836_225);
    }
}
