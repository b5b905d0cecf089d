//! The game engine: board, turn state and move application.

use crate::action::Move;
use crate::config::{FirstMover, GameConfig};
use crate::coords::parse_coordinate_input;
use crate::error::GameError;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::rules::{self, Line, Outcome};
use crate::types::{Board, Cell, Coordinate, Turn};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};
use tracing::{debug, info, instrument, warn};

/// One game of N×N tic-tac-toe.
///
/// Owns the board and the turn. The only mutator is [`Game::apply_move`];
/// everything else reads. Deciding *who* is allowed to move (human or
/// computer seat) is left to the caller.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) turn: Turn,
    pub(crate) first_mover: Turn,
    pub(crate) first_was_random: bool,
    pub(crate) last_move: Option<Move>,
}

impl Game {
    /// Creates a game, drawing a random first mover from the OS RNG if asked to.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, &mut OsRng)
    }

    /// Creates a game, drawing a random first mover from `rng` if asked to.
    ///
    /// `rng` must be a cryptographically strong generator. The draw happens
    /// here, once; the result is fixed for the rest of the game.
    #[instrument(skip(rng))]
    pub fn with_rng<R>(config: GameConfig, rng: &mut R) -> Self
    where
        R: RngCore + CryptoRng,
    {
        let (first_mover, first_was_random) = match config.first() {
            FirstMover::Player => (Turn::Player, false),
            FirstMover::Computer => (Turn::Computer, false),
            FirstMover::Random => {
                let turn = if rng.gen_bool(0.5) {
                    Turn::Player
                } else {
                    Turn::Computer
                };
                (turn, true)
            }
        };

        info!(
            size = config.size(),
            first = %first_mover,
            random = first_was_random,
            multi = config.multi(),
            "New game"
        );

        Self {
            board: Board::new(*config.size()),
            config,
            turn: first_mover,
            first_mover,
            first_was_random,
            last_move: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns the configuration the game was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// True when both seats are human.
    pub fn is_multiplayer(&self) -> bool {
        *self.config.multi()
    }

    /// The side that moved (or will move) first. Stable for the whole game.
    pub fn first_mover(&self) -> Turn {
        self.first_mover
    }

    /// True if the first mover was drawn at random.
    pub fn first_was_random(&self) -> bool {
        self.first_was_random
    }

    /// Coordinate of the most recent move.
    pub fn last_move(&self) -> Option<Coordinate> {
        self.last_move.map(|m| m.coordinate)
    }

    /// Side that made the most recent move.
    pub fn last_mover(&self) -> Option<Turn> {
        self.last_move.map(|m| m.turn)
    }

    /// Every empty cell, row-major.
    pub fn open_cells(&self) -> Vec<Coordinate> {
        self.board.open_cells()
    }

    /// True iff `(row, col)` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..size`.
    #[instrument(skip(self))]
    pub fn is_spot_open(&self, row: usize, col: usize) -> bool {
        self.board.is_empty(row, col)
    }

    /// Stamps the current side's mark at `(row, col)` and passes the turn.
    ///
    /// The caller checks [`Game::is_spot_open`] and whose turn it is first;
    /// this never fails on its own.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..size`.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Move {
        debug_assert!(
            self.is_spot_open(row, col),
            "apply_move on taken cell ({row}, {col})"
        );

        let mov = Move::new(self.turn, Coordinate::new(row, col));
        self.board.set(row, col, Cell::Occupied(mov.turn));
        self.last_move = Some(mov);
        self.turn = self.turn.other();

        debug!(%mov, "Move applied");

        if cfg!(debug_assertions)
            && let Err(violations) = EngineInvariants::check_all(self)
        {
            panic!("Engine invariants violated after {mov}: {violations:?}");
        }

        mov
    }

    /// Parses move text, checks the spot, and applies the move.
    ///
    /// Rejections leave the board and the turn untouched.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidFormat`] if the text is not a coordinate on this board.
    /// - [`GameError::SpotTaken`] if the cell is occupied.
    #[instrument(skip(self))]
    pub fn submit_input(&mut self, text: &str) -> Result<Move, GameError> {
        let at = parse_coordinate_input(text, self.size()).inspect_err(|e| {
            warn!(error = %e, "Rejected move text");
        })?;

        if !self.is_spot_open(at.row, at.col) {
            warn!(coordinate = %at, "Rejected taken spot");
            return Err(GameError::SpotTaken { coordinate: at });
        }

        Ok(self.apply_move(at.row, at.col))
    }

    /// Picks an empty cell uniformly at random. Does not change the board.
    ///
    /// # Errors
    ///
    /// [`GameError::NoMovesAvailable`] if the board is full. Check
    /// [`Game::get_winner`] before asking for a computer move.
    #[instrument(skip(self, rng))]
    pub fn choose_computer_move<R>(&self, rng: &mut R) -> Result<Coordinate, GameError>
    where
        R: RngCore + CryptoRng,
    {
        let open = self.board.open_cells();
        let choice = open
            .choose(rng)
            .copied()
            .ok_or(GameError::NoMovesAvailable)?;
        debug!(coordinate = %choice, open = open.len(), "Computer chose");
        Ok(choice)
    }

    /// [`Game::choose_computer_move`] using the OS RNG.
    ///
    /// # Errors
    ///
    /// [`GameError::NoMovesAvailable`] if the board is full.
    pub fn choose_computer_move_os(&self) -> Result<Coordinate, GameError> {
        self.choose_computer_move(&mut OsRng)
    }

    /// Chooses a random open cell and applies it for the current side.
    ///
    /// # Errors
    ///
    /// [`GameError::NoMovesAvailable`] if the board is full.
    pub fn play_computer_move<R>(&mut self, rng: &mut R) -> Result<Move, GameError>
    where
        R: RngCore + CryptoRng,
    {
        let at = self.choose_computer_move(rng)?;
        Ok(self.apply_move(at.row, at.col))
    }

    /// Winner, tie, or `None` while play continues.
    ///
    /// Rescans the whole board on every call.
    pub fn get_winner(&self) -> Option<Outcome> {
        rules::get_winner(&self.board)
    }

    /// The first complete line, if any, and who owns it.
    pub fn winning_line(&self) -> Option<(Line, Turn)> {
        rules::winning_line(&self.board)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn game(size: usize, first: FirstMover) -> Game {
        Game::new(GameConfig::new(size, first, false))
    }

    #[test]
    fn test_new_game_is_empty() {
        let game = game(3, FirstMover::Player);
        assert_eq!(game.turn(), Turn::Player);
        assert_eq!(game.first_mover(), Turn::Player);
        assert!(!game.first_was_random());
        assert_eq!(game.last_move(), None);
        assert_eq!(game.open_cells().len(), 9);
        assert_eq!(game.get_winner(), None);
    }

    #[test]
    fn test_computer_first() {
        let game = game(5, FirstMover::Computer);
        assert_eq!(game.turn(), Turn::Computer);
        assert_eq!(game.size(), 5);
    }

    #[test]
    fn test_apply_move_flips_turn_and_records_last_move() {
        let mut game = game(3, FirstMover::Player);
        let mov = game.apply_move(1, 2);

        assert_eq!(mov, Move::new(Turn::Player, Coordinate::new(1, 2)));
        assert_eq!(game.turn(), Turn::Computer);
        assert_eq!(game.last_move(), Some(Coordinate::new(1, 2)));
        assert_eq!(game.last_mover(), Some(Turn::Player));
        assert!(!game.is_spot_open(1, 2));
        assert_eq!(game.board().get(1, 2), Cell::Occupied(Turn::Player));
    }

    #[test]
    fn test_submit_input_rejections_leave_state_alone() {
        let mut game = game(3, FirstMover::Player);
        game.submit_input("b2").unwrap();
        let before = game.board().clone();

        assert!(matches!(
            game.submit_input("2B"),
            Err(GameError::SpotTaken { coordinate }) if coordinate == Coordinate::new(1, 1)
        ));
        assert!(matches!(
            game.submit_input("Z9"),
            Err(GameError::InvalidFormat { .. })
        ));
        assert_eq!(game.turn(), Turn::Computer);
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_seeded_random_first_is_deterministic() {
        let config = GameConfig::new(3, FirstMover::Random, false);
        let a = Game::with_rng(config, &mut ChaCha8Rng::seed_from_u64(7));
        let b = Game::with_rng(config, &mut ChaCha8Rng::seed_from_u64(7));
        assert!(a.first_was_random());
        assert_eq!(a.first_mover(), b.first_mover());
        assert_eq!(a.turn(), a.first_mover());
    }

    #[test]
    fn test_computer_move_picks_open_cell() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut game = game(3, FirstMover::Computer);
        for _ in 0..9 {
            let at = game.choose_computer_move(&mut rng).unwrap();
            assert!(game.is_spot_open(at.row, at.col));
            game.apply_move(at.row, at.col);
        }
        assert_eq!(
            game.choose_computer_move(&mut rng),
            Err(GameError::NoMovesAvailable)
        );
    }

    #[test]
    fn test_computer_move_is_uniform_over_open_cells() {
        let mut game = game(3, FirstMover::Player);
        game.apply_move(1, 1);
        let open = game.open_cells();
        assert_eq!(open.len(), 8);

        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let mut counts = std::collections::HashMap::new();
        for _ in 0..8000 {
            let at = game.choose_computer_move(&mut rng).unwrap();
            assert_ne!(at, Coordinate::new(1, 1));
            *counts.entry(at).or_insert(0usize) += 1;
        }

        assert_eq!(counts.len(), open.len());
        for at in open {
            let n = counts[&at];
            assert!((800..=1200).contains(&n), "{at} drawn {n} times");
        }
        assert_eq!(game.board().filled(), 1);
    }

    #[test]
    fn test_computer_move_is_deterministic_per_seed() {
        let mut game = game(4, FirstMover::Computer);
        game.apply_move(0, 0);
        game.apply_move(3, 3);

        let mut a = ChaCha8Rng::seed_from_u64(17);
        let mut b = ChaCha8Rng::seed_from_u64(17);
        for _ in 0..32 {
            assert_eq!(
                game.choose_computer_move(&mut a),
                game.choose_computer_move(&mut b)
            );
        }
    }

    #[test]
    fn test_computer_move_only_choice() {
        let mut game = game(2, FirstMover::Player);
        game.apply_move(0, 0);
        game.apply_move(0, 1);
        game.apply_move(1, 1);
        let mov = game.play_computer_move(&mut OsRng).unwrap();
        assert_eq!(mov, Move::new(Turn::Computer, Coordinate::new(1, 0)));
    }

    #[test]
    fn test_zero_board_is_an_immediate_tie() {
        let game = game(0, FirstMover::Player);
        assert_eq!(game.get_winner(), Some(Outcome::Tie));
        assert_eq!(game.choose_computer_move_os(), Err(GameError::NoMovesAvailable));
    }

    #[test]
    fn test_one_by_one_first_move_wins() {
        let mut game = game(1, FirstMover::Computer);
        game.apply_move(0, 0);
        assert_eq!(game.get_winner(), Some(Outcome::Winner(Turn::Computer)));
    }

    #[test]
    #[should_panic]
    fn test_is_spot_open_out_of_range_panics() {
        game(3, FirstMover::Player).is_spot_open(0, 3);
    }
}
