//! Full-board detection.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if every cell is occupied.
///
/// A full board with no complete line is a tie. A 0×0 board is trivially full.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}
