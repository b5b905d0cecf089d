//! Construction-time game configuration.

use crate::error::GameError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Who moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FirstMover {
    /// The player moves first.
    #[default]
    Player,
    /// The computer (or second human) moves first.
    Computer,
    /// Drawn once, uniformly, when the game is created.
    Random,
}

impl FirstMover {
    /// Lowercase token used on the command line and in settings files.
    pub fn token(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Computer => "computer",
            Self::Random => "random",
        }
    }
}

impl FromStr for FirstMover {
    type Err = GameError;

    /// Accepts `player`, `computer`, `random` or their first letter, in any case.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "player" | "p" => Ok(Self::Player),
            "computer" | "c" => Ok(Self::Computer),
            "random" | "r" => Ok(Self::Random),
            other => Err(GameError::invalid_configuration(format!(
                "unrecognized first mover {other:?} (expected player, computer or random)"
            ))),
        }
    }
}

impl TryFrom<String> for FirstMover {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FirstMover> for String {
    fn from(value: FirstMover) -> Self {
        value.token().to_string()
    }
}

impl std::fmt::Display for FirstMover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Immutable inputs fixed when a [`crate::Game`] is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    size: usize,
    /// First-mover selection.
    first: FirstMover,
    /// Both seats are human.
    multi: bool,
}

impl GameConfig {
    /// Default board side length.
    pub const DEFAULT_SIZE: usize = 3;

    /// Creates a configuration.
    #[instrument]
    pub fn new(size: usize, first: FirstMover, multi: bool) -> Self {
        Self { size, first, multi }
    }

    /// Returns a copy with a different board size.
    pub fn with_size(self, size: usize) -> Self {
        Self { size, ..self }
    }

    /// Returns a copy with a different first mover.
    pub fn with_first(self, first: FirstMover) -> Self {
        Self { first, ..self }
    }

    /// Returns a copy with multiplayer switched on or off.
    pub fn with_multi(self, multi: bool) -> Self {
        Self { multi, ..self }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE, FirstMover::Player, false)
    }
}
