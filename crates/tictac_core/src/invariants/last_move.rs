//! Last-move consistency.

use super::Invariant;
use crate::{Cell, Game};

/// Invariant: the recorded last move sits on the board with its mover's mark,
/// and the mover is not the side to move now.
pub struct LastMoveInvariant;

impl Invariant<Game> for LastMoveInvariant {
    fn holds(game: &Game) -> bool {
        match game.last_move {
            None => game.board().filled() == 0,
            Some(mov) => {
                let at = mov.coordinate;
                game.board().get(at.row, at.col) == Cell::Occupied(mov.turn)
                    && game.turn() == mov.turn.other()
            }
        }
    }

    fn description() -> &'static str {
        "Last move is on the board and its mover is not to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, Turn};

    #[test]
    fn test_fresh_game_holds() {
        assert!(LastMoveInvariant::holds(&Game::new(GameConfig::default())));
    }

    #[test]
    fn test_after_move_holds() {
        let mut game = Game::new(GameConfig::default());
        game.apply_move(2, 1);
        assert!(LastMoveInvariant::holds(&game));
    }

    #[test]
    fn test_marks_without_last_move_violate() {
        let mut game = Game::new(GameConfig::default());
        game.board.set(0, 0, Cell::Occupied(Turn::Player));
        assert!(!LastMoveInvariant::holds(&game));
    }
}
