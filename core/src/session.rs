use alloc::boxed::Box;
use core::fmt;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    /// Title line shown above the board.
    pub const fn banner(self) -> &'static str {
        match self {
            Self::Playing => "Good luck!",
            Self::Won => "You won! :)",
            Self::Lost => "You lost! :(",
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

type Callback = Box<dyn FnOnce()>;

#[derive(Default)]
struct Callbacks {
    on_win: Option<Callback>,
    on_lose: Option<Callback>,
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_win", &self.on_win.is_some())
            .field("on_lose", &self.on_lose.is_some())
            .finish()
    }
}

/// Result of a single player move.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Turn<'a> {
    pub state: GameState,
    pub outcome: RevealOutcome,
    pub board: &'a Board,
}

/// One game: a board, the play state and the terminal notifications.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    state: GameState,
    callbacks: Callbacks,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: Default::default(),
            callbacks: Default::default(),
        }
    }

    /// Generates a fresh board for `config` and starts playing on it.
    pub fn start<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        Self::start_with(RandomBoardGenerator::new(rng), config)
    }

    /// Starts playing on a board produced by `generator`.
    pub fn start_with<G: BoardGenerator>(mut generator: G, config: GameConfig) -> Result<Self> {
        let board = generator.generate(config)?;
        log::debug!(
            "New game: {}x{} with {} mines",
            board.rows(),
            board.cols(),
            board.mine_count()
        );
        Ok(Self::new(board))
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Called once if the game is won.
    pub fn on_win(&mut self, callback: impl FnOnce() + 'static) {
        self.callbacks.on_win = Some(Box::new(callback));
    }

    /// Called once if the game is lost.
    pub fn on_lose(&mut self, callback: impl FnOnce() + 'static) {
        self.callbacks.on_lose = Some(Box::new(callback));
    }

    pub fn reveal_cell(&mut self, index: CellIndex) -> Result<Turn<'_>> {
        let index = self.board.validate_index(index)?;
        self.check_not_finished()?;

        let outcome = reveal(&mut self.board, index)?;
        match outcome {
            RevealOutcome::MineHit => self.end_game(false),
            _ if outcome.has_update() && self.board.is_cleared() => self.end_game(true),
            _ => {}
        }

        Ok(Turn {
            state: self.state,
            outcome,
            board: &self.board,
        })
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        let callback = if won {
            self.state = GameState::Won;
            self.callbacks.on_win.take()
        } else {
            self.state = GameState::Lost;
            self.callbacks.on_lose.take()
        };
        self.callbacks = Callbacks::default();
        log::debug!("Game finished: {:?}", self.state);

        if let Some(callback) = callback {
            callback();
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell as Counter;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    struct Tally {
        wins: Rc<Counter<u32>>,
        losses: Rc<Counter<u32>>,
    }

    fn session(rows: Coord, cols: Coord, mines: &[CellIndex]) -> (GameSession, Tally) {
        let mut session = GameSession::new(Board::from_mine_indices(rows, cols, mines).unwrap());
        let tally = Tally {
            wins: Rc::new(Counter::new(0)),
            losses: Rc::new(Counter::new(0)),
        };

        let wins = tally.wins.clone();
        session.on_win(move || wins.set(wins.get() + 1));
        let losses = tally.losses.clone();
        session.on_lose(move || losses.set(losses.get() + 1));

        (session, tally)
    }

    #[test]
    fn center_mine_scenario_is_won_after_eight_reveals() {
        let (mut session, tally) = session(3, 3, &[4]);

        let turn = session.reveal_cell(0).unwrap();
        assert_eq!(turn.outcome, RevealOutcome::Revealed { unlocked: 1 });
        assert_eq!(turn.board.locked_safe_count(), 7);

        for index in [1, 2, 3, 5, 6, 7] {
            assert_eq!(session.reveal_cell(index).unwrap().state, GameState::Playing);
        }
        assert_eq!(tally.wins.get(), 0);

        let turn = session.reveal_cell(8).unwrap();
        assert_eq!(turn.state, GameState::Won);
        assert_eq!(tally.wins.get(), 1);
        assert_eq!(tally.losses.get(), 0);
    }

    #[test]
    fn one_locked_safe_cell_is_not_a_win() {
        let (mut session, tally) = session(3, 3, &[4]);

        for index in [0, 1, 2, 3, 5, 6, 7] {
            session.reveal_cell(index).unwrap();
        }

        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.board().locked_safe_count(), 1);
        assert_eq!(tally.wins.get(), 0);
    }

    #[test]
    fn flood_can_win_in_one_move() {
        let (mut session, tally) = session(3, 3, &[8]);

        let turn = session.reveal_cell(0).unwrap();

        assert_eq!(turn.state, GameState::Won);
        assert_eq!(tally.wins.get(), 1);
    }

    #[test]
    fn mine_hit_loses_once_and_shows_all_mines() {
        let (mut session, tally) = session(3, 3, &[0, 8]);

        let turn = session.reveal_cell(8).unwrap();

        assert_eq!(turn.state, GameState::Lost);
        assert_eq!(turn.outcome, RevealOutcome::MineHit);
        assert_eq!(turn.board[0].state(), CellState::WrongMine);
        assert_eq!(turn.board[8].state(), CellState::WrongMine);
        assert_eq!(tally.losses.get(), 1);

        assert_eq!(session.reveal_cell(0).unwrap_err(), GameError::AlreadyEnded);
        assert_eq!(session.reveal_cell(1).unwrap_err(), GameError::AlreadyEnded);
        assert_eq!(tally.losses.get(), 1);
        assert_eq!(tally.wins.get(), 0);
        assert_eq!(session.board()[1].state(), CellState::Locked);
    }

    #[test]
    fn repeated_reveal_changes_nothing() {
        let (mut session, tally) = session(3, 3, &[4]);
        session.reveal_cell(0).unwrap();
        let before = session.board().clone();

        let turn = session.reveal_cell(0).unwrap();

        assert!(!turn.outcome.has_update());
        assert_eq!(turn.state, GameState::Playing);
        assert_eq!(session.board(), &before);
        assert_eq!(tally.wins.get() + tally.losses.get(), 0);
    }

    #[test]
    fn won_session_rejects_moves_without_notifying_again() {
        let (mut session, tally) = session(2, 1, &[0]);

        assert_eq!(session.reveal_cell(1).unwrap().state, GameState::Won);
        assert_eq!(session.reveal_cell(1).unwrap_err(), GameError::AlreadyEnded);
        assert_eq!(session.reveal_cell(0).unwrap_err(), GameError::AlreadyEnded);
        assert_eq!(tally.wins.get(), 1);
        assert_eq!(tally.losses.get(), 0);
        assert_eq!(session.board()[0].state(), CellState::Locked);
    }

    #[test]
    fn out_of_range_move_is_rejected() {
        let (mut session, _) = session(3, 3, &[4]);
        assert_eq!(session.reveal_cell(42).unwrap_err(), GameError::InvalidIndex);
        assert_eq!(session.state(), GameState::Playing);
    }

    #[test]
    fn start_uses_the_injected_source() {
        let config = GameConfig::default();
        let a = GameSession::start(config, &mut SmallRng::seed_from_u64(5)).unwrap();
        let b = GameSession::start(config, &mut SmallRng::seed_from_u64(5)).unwrap();

        assert_eq!(a.board(), b.board());
        assert_eq!(a.board().mine_count(), 40);
        assert_eq!(a.state(), GameState::Playing);
        assert!(!a.is_finished());
    }

    struct FixedLayout(&'static [CellIndex]);

    impl BoardGenerator for FixedLayout {
        fn generate(&mut self, config: GameConfig) -> Result<Board> {
            Board::from_mine_indices(config.rows, config.cols, self.0)
        }
    }

    #[test]
    fn start_with_plays_on_the_generated_board() {
        let config = GameConfig::new(3, 3, 1).unwrap();
        let mut session = GameSession::start_with(FixedLayout(&[4]), config).unwrap();

        assert_eq!(session.board().mine_indices(), [4]);
        assert_eq!(session.reveal_cell(4).unwrap().state, GameState::Lost);
    }

    #[test]
    fn start_with_surfaces_generator_errors() {
        let config = GameConfig::new(3, 3, 1).unwrap();
        let err = GameSession::start_with(FixedLayout(&[9]), config).unwrap_err();
        assert_eq!(err, GameError::InvalidIndex);
    }

    #[test]
    fn banners_follow_the_state() {
        assert_eq!(GameState::Playing.banner(), "Good luck!");
        assert_eq!(GameState::Won.banner(), "You won! :)");
        assert_eq!(GameState::Lost.banner(), "You lost! :(");
    }
}
