//! N×N tic-tac-toe game engine.
//!
//! The engine owns the board and the turn, validates and applies moves,
//! detects wins and ties on boards of any size, and picks uniformly random
//! moves for the computer seat from a cryptographically strong source.
//! Presentation (drawing the board, reading input, argument parsing) lives
//! outside this crate; it talks to the engine through plain data.
//!
//! # Example
//!
//! ```
//! use tictac_core::{FirstMover, Game, GameConfig, Outcome, Turn};
//!
//! let mut game = Game::new(GameConfig::new(3, FirstMover::Player, false));
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.apply_move(row, col);
//! }
//! assert_eq!(game.get_winner(), Some(Outcome::Winner(Turn::Player)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod coords;
mod error;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use action::Move;
pub use config::{FirstMover, GameConfig};
pub use coords::{
    MAX_LABELLED_SIZE, column_letter, convert_coordinates, parse_coordinate_input,
};
pub use error::GameError;
pub use game::Game;
pub use rules::{Line, Outcome};
pub use types::{Board, Cell, Coordinate, Turn};
