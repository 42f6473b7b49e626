use alloc::vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    MineHit,
    /// Safe cell opened. `unlocked` is zero when the cell was already open.
    Revealed { unlocked: CellCount },
}

impl RevealOutcome {
    /// Whether this outcome changed the board.
    pub const fn has_update(self) -> bool {
        match self {
            Self::MineHit => true,
            Self::Revealed { unlocked } => unlocked > 0,
        }
    }
}

/// Opens the cell at `index`.
///
/// Hitting a mine turns every mine on the board into [`CellState::WrongMine`]. Opening an empty
/// cell floods outwards through the connected empty region and its border.
pub fn reveal(board: &mut Board, index: CellIndex) -> Result<RevealOutcome> {
    let index = board.validate_index(index)?;
    let cell = board[index];

    if cell.is_mine() {
        let shown = reveal_all_mines(board);
        log::trace!("Mine hit at {}, showing {} mines", index, shown);
        return Ok(RevealOutcome::MineHit);
    }

    if !cell.is_locked() {
        return Ok(RevealOutcome::Revealed { unlocked: 0 });
    }

    let unlocked = if cell.is_empty() {
        flood_reveal(board, index)?
    } else {
        board.cell_mut(index).set_state(CellState::Unlocked);
        1
    };
    log::trace!("Revealed {} cells from {}", unlocked, index);

    Ok(RevealOutcome::Revealed { unlocked })
}

/// Unlocks the empty cell at `index`, its connected empty region and the border of that region.
///
/// Only locked, safe cells are ever unlocked, so every cell is visited at most once.
pub fn flood_reveal(board: &mut Board, index: CellIndex) -> Result<CellCount> {
    let index = board.validate_index(index)?;
    if !board[index].is_empty() {
        return Err(GameError::NotEmpty);
    }

    let mut unlocked = 0;
    if board[index].is_locked() {
        board.cell_mut(index).set_state(CellState::Unlocked);
        unlocked += 1;
    }

    let mut to_visit = vec![index];
    while let Some(visit_index) = to_visit.pop() {
        for neighbor in board.iter_neighbors(visit_index) {
            let cell = board.cell_mut(neighbor);
            if !cell.is_locked() || cell.is_mine() {
                continue;
            }

            cell.set_state(CellState::Unlocked);
            unlocked += 1;

            if cell.is_empty() {
                to_visit.push(neighbor);
            }
        }
    }

    Ok(unlocked)
}

/// Shows every mine as [`CellState::WrongMine`], returning how many changed.
pub fn reveal_all_mines(board: &mut Board) -> CellCount {
    let mut shown = 0;
    for i in 0..board.mine_indices().len() {
        let index = board.mine_indices()[i];
        let cell = board.cell_mut(index);
        if cell.state() != CellState::WrongMine {
            cell.set_state(CellState::WrongMine);
            shown += 1;
        }
    }
    shown
}
