//! First-class guess actions for mastermind.
//!
//! Guesses are domain events, not side effects. They can be validated,
//! serialized for replay and logged before the game ever scores them.

use crate::types::{Color, ROW_SIZE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A guess: four colors submitted for one round.
///
/// The array type makes a wrong-length guess unrepresentable; use the
/// [`TryFrom`] impl when the input arrives with a dynamic length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guess {
    colors: [Color; ROW_SIZE],
}

impl Guess {
    /// Creates a new guess.
    #[instrument]
    pub fn new(colors: [Color; ROW_SIZE]) -> Self {
        Self { colors }
    }

    /// Returns the guessed colors in peg order.
    pub fn colors(&self) -> &[Color; ROW_SIZE] {
        &self.colors
    }
}

impl TryFrom<&[Color]> for Guess {
    type Error = GuessError;

    fn try_from(colors: &[Color]) -> Result<Self, Self::Error> {
        let colors: [Color; ROW_SIZE] = colors
            .try_into()
            .map_err(|_| GuessError::InvalidLength(colors.len()))?;
        Ok(Self { colors })
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels: Vec<_> = self.colors.iter().map(Color::label).collect();
        write!(f, "[{}]", labels.join(", "))
    }
}

/// Error that can occur when validating a guess.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// The guess repeats a color; all four must be distinct.
    #[display("Color {} appears more than once in the guess", _0)]
    DuplicateColor(Color),

    /// The input was not exactly four colors long.
    #[display("A guess takes exactly {} colors, got {}", ROW_SIZE, _0)]
    InvalidLength(usize),
}

impl std::error::Error for GuessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_slice() {
        let colors = vec![Color::Red, Color::Green, Color::Blue, Color::Yellow];
        let guess = Guess::try_from(colors.as_slice()).expect("Valid length");
        assert_eq!(guess.colors(), &[Color::Red, Color::Green, Color::Blue, Color::Yellow]);
    }

    #[test]
    fn test_try_from_wrong_length() {
        let colors = vec![Color::Red, Color::Green];
        assert_eq!(
            Guess::try_from(colors.as_slice()),
            Err(GuessError::InvalidLength(2))
        );
    }

    #[test]
    fn test_display() {
        let guess = Guess::new([Color::Red, Color::Green, Color::Blue, Color::Violet]);
        assert_eq!(guess.to_string(), "[Red, Green, Blue, Violet]");
    }
}
