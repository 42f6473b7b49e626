use crate::*;

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterator over the in-bounds neighbors of a cell, yielded as linear indices.
///
/// Yields at most eight items, never the center itself and never the same index twice.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(center: CellIndex, bounds: Coord2) -> Self {
        Self {
            center: index_to_coords(center, bounds.1),
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = CellIndex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if let Some(coords) = next_item {
                return Some(coords_to_index(coords, self.bounds.1));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(DISPLACEMENTS.len() - usize::from(self.index)))
    }
}

/// Neighbors of `index` on a `rows` by `cols` grid, clipped at edges and corners.
///
/// The result only depends on the grid shape, never on board contents.
pub fn neighbors_of(index: CellIndex, rows: Coord, cols: Coord) -> Result<NeighborIter> {
    if index >= mult(rows, cols) as CellIndex {
        return Err(GameError::InvalidIndex);
    }
    Ok(NeighborIter::new(index, (rows, cols)))
}
