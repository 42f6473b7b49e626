use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Locked,
    Unlocked,
    /// Mine shown at the end of a lost game.
    WrongMine,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Locked
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    state: CellState,
    adjacent_mines: Option<u8>,
    is_mine: bool,
}

impl Cell {
    pub(crate) const fn safe() -> Self {
        Self {
            state: CellState::Locked,
            adjacent_mines: Some(0),
            is_mine: false,
        }
    }

    pub(crate) const fn mine() -> Self {
        Self {
            state: CellState::Locked,
            adjacent_mines: None,
            is_mine: true,
        }
    }

    pub const fn state(&self) -> CellState {
        self.state
    }

    /// Count of mines among the neighbors, `None` for mine cells.
    pub const fn adjacent_mines(&self) -> Option<u8> {
        self.adjacent_mines
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_locked(&self) -> bool {
        matches!(self.state, CellState::Locked)
    }

    /// A safe cell with no mines around it, the seed of a flood reveal.
    pub const fn is_empty(&self) -> bool {
        matches!(self.adjacent_mines, Some(0))
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    pub(crate) fn bump_adjacent(&mut self) {
        if let Some(count) = self.adjacent_mines.as_mut() {
            *count += 1;
        }
    }
}
