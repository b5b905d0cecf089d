//! Win and tie detection for boards of any size.

use crate::rules::draw::is_full;
use crate::types::{Board, Cell, Coordinate, Turn};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A full row, full column, or one of the two diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row `r`, left to right.
    Row(usize),
    /// Column `c`, top to bottom.
    Column(usize),
    /// Top-left to bottom-right: every `(i, i)`.
    MainDiagonal,
    /// Top-right to bottom-left: every `(i, size - 1 - i)`.
    AntiDiagonal,
}

impl Line {
    /// Every line on a `size`×`size` board, in scan order: rows, then columns,
    /// then the main diagonal, then the anti-diagonal.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }

    /// Cells making up this line on a `size`×`size` board.
    pub fn coordinates(self, size: usize) -> impl Iterator<Item = Coordinate> {
        (0..size).map(move |i| match self {
            Line::Row(r) => Coordinate::new(r, i),
            Line::Column(c) => Coordinate::new(i, c),
            Line::MainDiagonal => Coordinate::new(i, i),
            Line::AntiDiagonal => Coordinate::new(i, size - 1 - i),
        })
    }

    /// The side owning every cell of this line, if there is one.
    ///
    /// A line with no cells (0×0 board) has no owner.
    pub fn owner(self, board: &Board) -> Option<Turn> {
        let mut cells = self
            .coordinates(board.size())
            .map(|at| board.get(at.row, at.col));
        let lead = cells.next()?.owner()?;
        cells
            .all(|cell| cell == Cell::Occupied(lead))
            .then_some(lead)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(r) => write!(f, "row {}", r + 1),
            Line::Column(c) => write!(f, "column {}", char::from(b'A' + (*c % 26) as u8)),
            Line::MainDiagonal => f.write_str("main diagonal"),
            Line::AntiDiagonal => f.write_str("anti-diagonal"),
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A side completed a line.
    Winner(Turn),
    /// The board filled up with no complete line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Turn> {
        match self {
            Outcome::Winner(turn) => Some(*turn),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(turn) => write!(f, "{} wins!", turn),
            Outcome::Tie => f.write_str("It's a tie!"),
        }
    }
}

/// First complete line in scan order, with its owner.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winning_line(board: &Board) -> Option<(Line, Turn)> {
    Line::all(board.size()).find_map(|line| line.owner(board).map(|turn| (line, turn)))
}

/// Returns the side that owns a complete line, if any.
pub fn check_winner(board: &Board) -> Option<Turn> {
    winning_line(board).map(|(_, turn)| turn)
}

/// Full-board rescan: the winner, a tie, or `None` while the game goes on.
#[instrument(skip(board), fields(size = board.size()))]
pub fn get_winner(board: &Board) -> Option<Outcome> {
    if let Some(turn) = check_winner(board) {
        return Some(Outcome::Winner(turn));
    }
    if is_full(board) {
        return Some(Outcome::Tie);
    }
    None
}
