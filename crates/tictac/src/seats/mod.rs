//! Seats: where each turn's move comes from.

mod computer;
mod human;

pub use computer::ComputerSeat;
pub use human::HumanSeat;

use anyhow::Result;
use tictac_core::{Game, GameError, Move, Turn};

/// Result of asking a seat for a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    /// A move was applied to the game.
    Played(Move),
    /// The input was rejected; the game is unchanged and the seat will be asked again.
    Rejected(GameError),
}

/// A source of moves for one side of the board.
#[async_trait::async_trait]
pub trait Seat: Send {
    /// Produces and applies one move for the side to move, or reports why the
    /// input was rejected.
    ///
    /// Returns `Err` only for failures the game cannot recover from (closed
    /// input, a move requested on a full board).
    async fn attempt(&mut self, game: &mut Game) -> Result<Attempt>;

    /// Text shown before the seat is asked for a move.
    fn announce(&self, turn: Turn, ascii: bool) -> String;

    /// Whether the seat is played by a person.
    fn is_human(&self) -> bool;
}
