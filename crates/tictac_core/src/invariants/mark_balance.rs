//! Mark balance: turns alternate, so the first mover is never more than one mark ahead.

use super::Invariant;
use crate::Game;

/// Invariant: the first mover has as many marks as the other side, or one more,
/// and it is the first mover's turn exactly when the counts are equal.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let first = game.first_mover();
        let leader = game.board().count(first);
        let trailer = game.board().count(first.other());

        match leader.checked_sub(trailer) {
            Some(0) => game.turn() == first,
            Some(1) => game.turn() == first.other(),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Turns alternate strictly starting from the first mover"
    }
}
