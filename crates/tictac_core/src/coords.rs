//! Alphanumeric coordinate labels ("A1", "C2", ...) and the move-text parser.

use crate::error::GameError;
use crate::types::Coordinate;
use tracing::instrument;

/// Widest board whose columns can be named with a single letter.
pub const MAX_LABELLED_SIZE: usize = 26;

/// Upper-case letter naming 0-based column `col`. Only defined for `col < 26`.
pub fn column_letter(col: usize) -> char {
    debug_assert!(col < MAX_LABELLED_SIZE, "column {col} has no single-letter label");
    char::from(b'A' + (col % MAX_LABELLED_SIZE) as u8)
}

/// Converts a 0-based `(row, col)` to its label: column letter, then 1-based row.
///
/// `(0, 0)` is `"A1"`, `(1, 2)` is `"C2"`. Only defined for `col < 26`.
pub fn convert_coordinates(row: usize, col: usize) -> String {
    format!("{}{}", column_letter(col), row + 1)
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&convert_coordinates(self.row, self.col))
    }
}

/// Parses move text for a `size`×`size` board.
///
/// Whitespace anywhere in the text is ignored and letters are case-insensitive.
/// Both `<letter><row>` ("b2") and `<row><letter>` ("2B") are accepted, where
/// the letter is one of the first `size` letters and the row is in `1..=size`,
/// written without leading zeros.
///
/// # Errors
///
/// Returns [`GameError::InvalidFormat`] for anything else.
#[instrument]
pub fn parse_coordinate_input(text: &str, size: usize) -> Result<Coordinate, GameError> {
    let invalid = || GameError::InvalidFormat {
        input: text.to_string(),
    };

    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let (letter, digits) = match (compact.chars().next(), compact.chars().last()) {
        (Some(first), Some(_)) if first.is_ascii_alphabetic() => (first, &compact[1..]),
        (Some(_), Some(last)) if last.is_ascii_alphabetic() => {
            (last, &compact[..compact.len() - 1])
        }
        _ => return Err(invalid()),
    };

    if digits.is_empty()
        || digits.starts_with('0')
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let col = (letter as u8 - b'a') as usize;
    let row_number: usize = digits.parse().map_err(|_| invalid())?;

    if col >= size || row_number == 0 || row_number > size {
        return Err(invalid());
    }

    Ok(Coordinate::new(row_number - 1, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_literals() {
        assert_eq!(convert_coordinates(0, 0), "A1");
        assert_eq!(convert_coordinates(1, 2), "C2");
        assert_eq!(convert_coordinates(2, 0), "A3");
        assert_eq!(convert_coordinates(9, 25), "Z10");
    }

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letter(0), 'A');
        assert_eq!(column_letter(25), 'Z');
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Coordinate::new(0, 1).to_string(), "B1");
    }

    #[test]
    fn test_parse_either_order_any_case() {
        let expected = Coordinate::new(1, 1);
        for text in ["B2", "b2", "2b", "2B", " b 2 ", "\t2\nb"] {
            assert_eq!(parse_coordinate_input(text, 3), Ok(expected), "{text:?}");
        }
    }

    #[test]
    fn test_parse_corners() {
        assert_eq!(parse_coordinate_input("a1", 3), Ok(Coordinate::new(0, 0)));
        assert_eq!(parse_coordinate_input("3c", 3), Ok(Coordinate::new(2, 2)));
        assert_eq!(parse_coordinate_input("c1", 3), Ok(Coordinate::new(0, 2)));
    }

    #[test]
    fn test_parse_multi_digit_rows() {
        assert_eq!(parse_coordinate_input("J10", 10), Ok(Coordinate::new(9, 9)));
        assert_eq!(parse_coordinate_input("10a", 10), Ok(Coordinate::new(9, 0)));
        assert!(parse_coordinate_input("a10", 9).is_err());
        assert!(parse_coordinate_input("a010", 10).is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range_and_garbage() {
        for text in [
            "Z9", "d1", "a4", "a0", "", "   ", "a", "1", "ab", "12", "a1b", "1a1", "a+1", "é1",
            "a01", "001a", "a00",
        ] {
            assert!(
                matches!(
                    parse_coordinate_input(text, 3),
                    Err(GameError::InvalidFormat { .. })
                ),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_on_empty_board_always_fails() {
        assert!(parse_coordinate_input("a1", 0).is_err());
    }
}
