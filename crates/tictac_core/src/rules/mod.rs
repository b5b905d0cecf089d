//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the engine, the invariants and the tests share one
//! definition of "won" and "full".

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, Outcome, check_winner, get_winner, winning_line};
