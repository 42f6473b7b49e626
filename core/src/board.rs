use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::ArrayView2;
use serde::Serialize;

use crate::*;

/// Row-major grid of cells together with the positions of its mines.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    rows: Coord,
    cols: Coord,
    mines: Vec<CellIndex>,
    cells: Vec<Cell>,
}

impl Board {
    /// Builds a locked board with mines at `mine_indices` and the adjacency counts filled in.
    pub fn from_mine_indices(rows: Coord, cols: Coord, mine_indices: &[CellIndex]) -> Result<Self> {
        let total_cells = mult(rows, cols);
        let invalid = GameError::InvalidConfiguration {
            rows,
            cols,
            mines: mine_indices.len().try_into().unwrap_or(CellCount::MAX),
        };

        if rows == 0 || cols == 0 {
            return Err(invalid);
        }

        let mut cells = vec![Cell::safe(); total_cells as usize];
        for &index in mine_indices {
            let cell = cells.get_mut(index).ok_or(GameError::InvalidIndex)?;
            if cell.is_mine() {
                return Err(invalid);
            }
            *cell = Cell::mine();
        }

        let mine_count = mine_indices.len() as CellCount;
        if mine_count == 0 || mine_count >= total_cells {
            return Err(invalid);
        }

        let mut board = Self {
            rows,
            cols,
            mines: mine_indices.to_vec(),
            cells,
        };
        for &mine in mine_indices {
            for neighbor in board.iter_neighbors(mine) {
                board.cells[neighbor].bump_adjacent();
            }
        }

        Ok(board)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.rows, self.cols, self.mine_count())
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index < self.cells.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    pub fn rows(&self) -> Coord {
        self.rows
    }

    pub fn cols(&self) -> Coord {
        self.cols
    }

    pub fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    /// Mine positions in the order they were placed.
    pub fn mine_indices(&self) -> &[CellIndex] {
        &self.mines
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: CellIndex) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Two-dimensional view indexed by `[row, col]`, handy for rendering row by row.
    pub fn grid(&self) -> ArrayView2<'_, Cell> {
        ArrayView2::from_shape(
            (usize::from(self.rows), usize::from(self.cols)),
            self.cells.as_slice(),
        )
        .expect("cell count always matches the board shape")
    }

    pub fn neighbors(&self, index: CellIndex) -> Result<NeighborIter> {
        let index = self.validate_index(index)?;
        Ok(self.iter_neighbors(index))
    }

    /// Safe cells that still wait to be revealed.
    pub fn locked_safe_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_locked() && !cell.is_mine())
            .count() as CellCount
    }

    /// Whether every safe cell has been revealed.
    pub fn is_cleared(&self) -> bool {
        !self
            .cells
            .iter()
            .any(|cell| cell.is_locked() && !cell.is_mine())
    }

    pub(crate) fn cell_mut(&mut self, index: CellIndex) -> &mut Cell {
        &mut self.cells[index]
    }

    pub(crate) fn iter_neighbors(&self, index: CellIndex) -> NeighborIter {
        NeighborIter::new(index, self.size())
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[index]
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "({row}, {col}) is outside the {}x{} board",
            self.rows,
            self.cols
        );
        &self.cells[coords_to_index((row, col), self.cols)]
    }
}
