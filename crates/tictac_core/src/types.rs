//! Core domain types for N×N tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side to move. Each side stamps its own mark into the cells it takes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Turn {
    /// The human seat (or the first human in a two-human game).
    Player,
    /// The computer seat (or the second human in a two-human game).
    Computer,
}

impl Turn {
    /// Returns the other side.
    pub fn other(self) -> Self {
        match self {
            Turn::Player => Turn::Computer,
            Turn::Computer => Turn::Player,
        }
    }

    /// Display mark for this side: a full block for the player, a light shade for the computer.
    pub fn mark(self) -> char {
        match self {
            Turn::Player => '█',
            Turn::Computer => '░',
        }
    }

    /// Plain ASCII mark, for terminals that cannot draw block glyphs.
    pub fn ascii_mark(self) -> char {
        match self {
            Turn::Player => 'X',
            Turn::Computer => 'O',
        }
    }

    /// Capitalized display name.
    pub fn name(self) -> &'static str {
        match self {
            Turn::Player => "Player",
            Turn::Computer => "Computer",
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name(), self.mark())
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell taken by a side.
    Occupied(Turn),
}

impl Cell {
    /// Returns the occupying side, if any.
    pub fn owner(self) -> Option<Turn> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(turn) => Some(turn),
        }
    }
}

/// A 0-based board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Coordinate {
    /// Creates a coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Square N×N board, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of `size`×`size` cells.
    ///
    /// Sizes 0 and 1 are allowed.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is outside `0..size`. Callers validate
    /// coordinates through [`crate::parse_coordinate_input`] first.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Returns true if `(row, col)` is empty.
    ///
    /// # Panics
    ///
    /// Panics on out-of-range coordinates, like [`Board::get`].
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Cell::Empty
    }

    /// Sets a cell. Only the engine writes to the board.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics, so a 0x0 board yields no rows.
        self.cells.chunks(self.size.max(1))
    }

    /// Coordinates of every empty cell, row-major.
    pub fn open_cells(&self) -> Vec<Coordinate> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(idx, _)| Coordinate::new(idx / self.size, idx % self.size))
            .collect()
    }

    /// Number of cells holding `turn`'s mark.
    pub fn count(&self, turn: Turn) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(turn))
            .count()
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) is outside the {size}x{size} board",
            size = self.size
        );
        row * self.size + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_other_flips_both_ways() {
        for turn in Turn::iter() {
            assert_ne!(turn.other(), turn);
            assert_eq!(turn.other().other(), turn);
        }
    }

    #[test]
    fn test_marks_are_distinct() {
        assert_ne!(Turn::Player.mark(), Turn::Computer.mark());
        assert_ne!(Turn::Player.ascii_mark(), Turn::Computer.ascii_mark());
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4);
        assert_eq!(board.cells().len(), 16);
        assert_eq!(board.filled(), 0);
        assert_eq!(board.open_cells().len(), 16);
    }

    #[test]
    fn test_zero_board_has_no_rows() {
        let board = Board::new(0);
        assert!(board.cells().is_empty());
        assert_eq!(board.rows().count(), 0);
        assert!(board.open_cells().is_empty());
    }

    #[test]
    fn test_open_cells_maps_row_major() {
        let mut board = Board::new(3);
        board.set(0, 0, Cell::Occupied(Turn::Player));
        board.set(1, 2, Cell::Occupied(Turn::Computer));

        let open = board.open_cells();
        assert_eq!(open.len(), 7);
        assert!(!open.contains(&Coordinate::new(0, 0)));
        assert!(!open.contains(&Coordinate::new(1, 2)));
        assert!(open.contains(&Coordinate::new(2, 1)));
        assert_eq!(board.count(Turn::Player), 1);
        assert_eq!(board.count(Turn::Computer), 1);
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 board")]
    fn test_out_of_range_panics() {
        let board = Board::new(3);
        board.get(3, 0);
    }
}
