//! Plain-text rendering of the game state.

use tictac_core::{Board, Game, GameError, Line, Outcome, Turn, column_letter};

/// Mark for `turn` in the chosen glyph set.
pub fn mark(turn: Turn, ascii: bool) -> char {
    if ascii { turn.ascii_mark() } else { turn.mark() }
}

/// Info lines: first mover, board size and opponent, then the last move.
///
/// ```text
/// First Move: Player █ | 3x3 Board | Opponent: Computer
/// Last Move: Computer ░ A3
/// ```
pub fn render_header(game: &Game, ascii: bool) -> String {
    let first = game.first_mover();
    let opponent = if game.is_multiplayer() { "Human" } else { "Computer" };
    let random = if game.first_was_random() { " (random)" } else { "" };

    let mut out = format!(
        "First Move: {} {}{} | {}x{} Board | Opponent: {}\n",
        first.name(),
        mark(first, ascii),
        random,
        game.size(),
        game.size(),
        opponent
    );

    if let (Some(turn), Some(at)) = (game.last_mover(), game.last_move()) {
        out.push_str(&format!("Last Move: {} {} {}\n", turn.name(), mark(turn, ascii), at));
    }
    out
}

/// The grid with lettered columns and numbered rows. Empty cells are blank.
/// Boards wider than [`tictac_core::MAX_LABELLED_SIZE`] have no column names.
///
/// ```text
///     A   B   C
/// 1   █ │   │ ░
///    ───┼───┼───
/// 2     │ █ │
/// ```
pub fn render_board(board: &Board, ascii: bool) -> String {
    let size = board.size();
    let gutter = size.to_string().len();
    let mut out = String::new();

    out.push_str(&" ".repeat(gutter + 1));
    for col in 0..size {
        out.push_str(&format!(" {} ", column_letter(col)));
        if col + 1 < size {
            out.push(' ');
        }
    }
    out.push('\n');

    for (r, row) in board.rows().enumerate() {
        if r > 0 {
            out.push_str(&" ".repeat(gutter + 1));
            out.push_str(&vec!["───"; size].join("┼"));
            out.push('\n');
        }
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell.owner() {
                Some(turn) => format!(" {} ", mark(turn, ascii)),
                None => "   ".to_string(),
            })
            .collect();
        out.push_str(&format!("{:>gutter$} {}\n", r + 1, cells.join("│")));
    }
    out
}

/// Message for a rejected move.
pub fn render_error(err: &GameError) -> String {
    match err {
        GameError::InvalidFormat { .. } => "Invalid row and column chosen!".to_string(),
        other => other.to_string(),
    }
}

/// Everything shown before a move: header, board and any pending error.
pub fn render_game(game: &Game, ascii: bool, error: Option<&GameError>) -> String {
    let mut out = render_header(game, ascii);
    out.push('\n');
    out.push_str(&render_board(game.board(), ascii));
    out.push('\n');
    if let Some(err) = error {
        out.push_str(&render_error(err));
        out.push('\n');
    }
    out
}

/// Final message. Wins and ties read differently.
pub fn render_outcome(outcome: &Outcome, line: Option<Line>, ascii: bool) -> String {
    match (outcome, line) {
        (Outcome::Winner(turn), Some(line)) => format!(
            "{} {} wins with {}!",
            turn.name(),
            mark(*turn, ascii),
            line
        ),
        (Outcome::Winner(turn), None) => format!("{} {} wins!", turn.name(), mark(*turn, ascii)),
        (Outcome::Tie, _) => "It's a tie!".to_string(),
    }
}

/// Prompt shown before a seat moves.
pub fn render_prompt(turn: Turn, ascii: bool) -> String {
    format!("{} {} move: ", turn.name(), mark(turn, ascii))
}
