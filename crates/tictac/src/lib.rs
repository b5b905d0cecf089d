//! Terminal front end for the `tictac_core` engine.
//!
//! - **Cli / Settings**: flags layered over an optional TOML file
//! - **Render**: plain-text header, board and messages
//! - **Seats**: human (line input) and computer (random, paced) move sources
//! - **Session**: the display / move / check loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod render;
mod seats;
mod session;
mod settings;

pub use cli::Cli;
pub use render::{
    mark, render_board, render_error, render_game, render_header, render_outcome, render_prompt,
};
pub use seats::{Attempt, ComputerSeat, HumanSeat, Seat};
pub use session::Session;
pub use settings::{Overrides, Settings, SettingsError, SettingsFile, ThinkDelay};
