use core::time::Duration;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Ready -> Playing
/// - Ready -> Won
/// - Ready -> Lost
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No cell revealed yet
    #[default]
    Ready,
    Playing,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Owns the current board and drives one game after another.
///
/// This is what a frontend talks to: it forwards grid coordinates from pointer input, polls
/// [`Session::state`] after every move and reads the board for drawing. Starting a new game or
/// switching difficulty discards the board and allocates a fresh one.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    policy: GenerationPolicy,
    board: Board,
    state: SessionState,
    rng: SmallRng,
    elapsed: Duration,
    triggered_mine: Option<Coord2>,
}

impl Session {
    /// Starts the first game. `seed` drives mine placement for this and every following game.
    pub fn new(config: GameConfig, policy: GenerationPolicy, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut session = Self {
            config,
            policy,
            board: Board::for_config(&config),
            state: Default::default(),
            rng: SmallRng::seed_from_u64(seed),
            elapsed: Duration::ZERO,
            triggered_mine: None,
        };
        session.start()?;
        Ok(session)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn policy(&self) -> GenerationPolicy {
        self.policy
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// The mine that ended a lost game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Mines not yet accounted for by a flag, negative when there are more flags than mines.
    pub fn mines_left(&self) -> isize {
        if self.board.is_generated() {
            self.board.mines_remaining()
        } else {
            // no mines laid yet, the board only tracks flags so far
            (self.config.mines as isize) + self.board.mines_remaining()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.as_secs()
    }

    /// Advances the game clock by one frame. Time only runs between the first reveal and the end.
    pub fn tick(&mut self, delta: Duration) {
        if matches!(self.state, SessionState::Playing) {
            self.elapsed += delta;
        }
    }

    /// Throws the current board away and starts over with the same configuration.
    pub fn new_game(&mut self) -> Result<()> {
        self.start()
    }

    /// Starts a new game with a different board size or mine count.
    pub fn change_config(&mut self, config: GameConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.start()
    }

    /// Reveals a cell and expands it when it holds no adjacent mines.
    ///
    /// Under [`GenerationPolicy::Deferred`] the first reveal lays the mines, keeping the
    /// revealed cell and its neighbors clear.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        if !self.board[coords].is_hidden() {
            return Ok(RevealOutcome::AlreadyRevealedOrFlagged);
        }
        if !self.board.is_generated() {
            self.generate(Some(coords))?;
        }

        let outcome = self.board.reveal_and_expand(coords)?;
        match outcome {
            RevealOutcome::AlreadyRevealedOrFlagged => {}
            RevealOutcome::Mine => {
                self.triggered_mine = Some(coords);
                self.end_game(false);
            }
            _ if self.board.is_won() => self.end_game(true),
            _ => self.mark_started(),
        }
        Ok(outcome)
    }

    /// Toggles a flag, returning the change to the remaining-mines counter.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagDelta> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;
        self.board.toggle_flag(coords)
    }

    fn start(&mut self) -> Result<()> {
        self.board = Board::for_config(&self.config);
        self.state = SessionState::Ready;
        self.elapsed = Duration::ZERO;
        self.triggered_mine = None;

        if matches!(self.policy, GenerationPolicy::Eager) {
            self.generate(None)?;
        }
        log::debug!(
            "New {}x{} game with {} mines, policy: {:?}",
            self.config.cols,
            self.config.rows,
            self.config.mines,
            self.policy
        );
        Ok(())
    }

    fn generate(&mut self, safe_origin: Option<Coord2>) -> Result<()> {
        let seed: u64 = self.rng.random();
        RandomMineGenerator::new(seed).generate(&mut self.board, self.config.mines, safe_origin)
    }

    fn mark_started(&mut self) {
        if matches!(self.state, SessionState::Ready) {
            log::debug!("Game started");
            self.state = SessionState::Playing;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            SessionState::Won
        } else {
            SessionState::Lost
        };
        log::debug!(
            "Game ended after {:?}: {:?}, triggered mine: {:?}",
            self.elapsed,
            self.state,
            self.triggered_mine
        );
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
