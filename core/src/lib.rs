#![no_std]

extern crate alloc;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub use adjacency::*;
pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use tile::*;
pub use types::*;

mod adjacency;
mod board;
mod engine;
mod error;
mod generator;
mod session;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const DEFAULT_ROWS: Coord = 14;
    pub const DEFAULT_COLS: Coord = 18;
    pub const DEFAULT_MINES: CellCount = 40;

    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(rows, cols, mines).validate()
    }

    /// Checks `0 < mines < rows * cols` on a non-empty grid.
    pub fn validate(self) -> Result<Self> {
        if self.rows == 0 || self.cols == 0 || self.mines == 0 || self.mines >= self.total_cells()
        {
            return Err(GameError::InvalidConfiguration {
                rows: self.rows,
                cols: self.cols,
                mines: self.mines,
            });
        }
        Ok(self)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_ROWS, Self::DEFAULT_COLS, Self::DEFAULT_MINES)
    }
}

/// Starts a session on a freshly generated board.
pub fn start_new_game<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<GameSession> {
    GameSession::start(config, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn default_config_is_the_classic_board() {
        let config = GameConfig::default();

        assert_eq!(config.total_cells(), 252);
        assert_eq!(config.safe_cells(), 212);
        assert_eq!(config.validate(), Ok(config));
    }

    #[test]
    fn config_bounds_are_strict() {
        assert!(GameConfig::new(3, 3, 1).is_ok());
        assert!(GameConfig::new(3, 3, 8).is_ok());
        assert_eq!(
            GameConfig::new(3, 3, 9),
            Err(GameError::InvalidConfiguration {
                rows: 3,
                cols: 3,
                mines: 9
            })
        );
        assert!(GameConfig::new(3, 3, 0).is_err());
        assert!(GameConfig::new(0, 3, 1).is_err());
        assert!(GameConfig::new(3, 0, 1).is_err());
    }

    #[test]
    fn start_new_game_accepts_any_valid_shape() {
        let mut rng = SmallRng::seed_from_u64(11);
        let session = start_new_game(GameConfig::new(1, 2, 1).unwrap(), &mut rng).unwrap();

        assert_eq!(session.board().total_cells(), 2);
        assert_eq!(session.board().mine_count(), 1);
        assert_eq!(
            start_new_game(GameConfig::new_unchecked(2, 2, 4), &mut rng).unwrap_err(),
            GameError::InvalidConfiguration {
                rows: 2,
                cols: 2,
                mines: 4
            }
        );
    }

    #[test]
    fn config_reads_from_json() {
        let config: GameConfig =
            serde_json::from_str(r#"{"rows": 9, "cols": 9, "mines": 10}"#).unwrap();
        assert_eq!(config, GameConfig::new(9, 9, 10).unwrap());
    }
}
