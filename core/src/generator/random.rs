use alloc::vec;
use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Purely random mine placement driven by an injected random source.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator<R> {
    rng: R,
}

impl<R: Rng> RandomBoardGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomBoardGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> BoardGenerator for RandomBoardGenerator<R> {
    fn generate(&mut self, config: GameConfig) -> Result<Board> {
        generate(config.rows, config.cols, config.mines, &mut self.rng)
    }
}

/// Places `mine_count` distinct mines uniformly at random and counts their neighbors.
pub fn generate<R: Rng + ?Sized>(
    rows: Coord,
    cols: Coord,
    mine_count: CellCount,
    rng: &mut R,
) -> Result<Board> {
    let config = GameConfig::new(rows, cols, mine_count)?;
    log::debug!(
        "Generating {}x{} board with {} mines",
        config.rows,
        config.cols,
        config.mines
    );

    let total_cells = config.total_cells() as CellIndex;
    let mut taken = vec![false; total_cells];
    let mut mines = Vec::with_capacity(config.mines as usize);

    // rejection sampling, duplicates are drawn again
    while mines.len() < config.mines as usize {
        let index = rng.random_range(0..total_cells);
        if !taken[index] {
            taken[index] = true;
            mines.push(index);
        }
    }

    let board = Board::from_mine_indices(config.rows, config.cols, &mines)?;
    log::trace!("Placed mines at {:?}", board.mine_indices());
    Ok(board)
}
