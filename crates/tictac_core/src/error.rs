//! Error taxonomy for the game engine.

use crate::types::Coordinate;

/// Errors surfaced by the engine and its input contract.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Move text did not parse into an in-range coordinate.
    #[display("Invalid row and column chosen: {:?}", input)]
    InvalidFormat {
        /// The text as the user typed it.
        input: String,
    },

    /// The coordinate names a cell that is already taken.
    #[display("Spot {} has already been taken!", coordinate)]
    SpotTaken {
        /// The occupied cell.
        coordinate: Coordinate,
    },

    /// Construction-time parameters make no sense.
    #[display("Invalid configuration: {}", message)]
    InvalidConfiguration {
        /// What was wrong.
        message: String,
    },

    /// A computer move was requested on a full board.
    #[display("No moves available: the board is full")]
    NoMovesAvailable,
}

impl GameError {
    /// Builds an [`GameError::InvalidConfiguration`].
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// True for errors the input loop handles by re-prompting.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. } | Self::SpotTaken { .. })
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_and_taken_messages_differ() {
        let invalid = GameError::InvalidFormat {
            input: "z9".to_string(),
        };
        let taken = GameError::SpotTaken {
            coordinate: Coordinate::new(1, 2),
        };
        assert!(invalid.to_string().contains("Invalid"));
        assert_eq!(taken.to_string(), "Spot C2 has already been taken!");
    }

    #[test]
    fn test_only_input_errors_are_recoverable() {
        assert!(GameError::InvalidFormat { input: String::new() }.is_recoverable());
        assert!(GameError::SpotTaken { coordinate: Coordinate::new(0, 0) }.is_recoverable());
        assert!(!GameError::NoMovesAvailable.is_recoverable());
        assert!(!GameError::invalid_configuration("bad").is_recoverable());
    }
}
