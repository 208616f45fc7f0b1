//! Guess scoring against the secret row.

use crate::action::{Guess, GuessError};
use crate::types::{Cell, Color, MatchState, Row, ROW_SIZE};
use std::collections::HashSet;
use tracing::instrument;

/// Scores a guess against the secret row.
///
/// Evaluates positions 0-3 in index order, in a single pass:
/// 1. A color present anywhere in the secret marks the cell `HasColor`.
///    Presence is position-independent and checked against a lookup
///    built once from the secret's colors.
/// 2. A positional match folds in `ExactPosition`, yielding
///    `ExactMatch` when both apply.
/// 3. A cell still `NotDefined` after both checks becomes `Wrong`.
///
/// Presence does not consume secret pegs: a secret color matches every
/// guess position probing it. Neither input is mutated; the scored row
/// is newly built, so repeated calls with equal inputs return equal
/// results.
///
/// # Errors
///
/// Returns `GuessError::DuplicateColor` if the guess repeats a color.
/// The check runs before any scoring work.
#[instrument]
pub fn score_guess(secret: &Row, guess: &Guess) -> Result<Row, GuessError> {
    if let Some(color) = find_duplicate(guess.colors()) {
        return Err(GuessError::DuplicateColor(color));
    }

    let secret_colors = secret.colors();

    let mut cells = guess.colors().map(Cell::new);
    for (index, cell) in cells.iter_mut().enumerate() {
        let color = cell.color();
        let mut state = MatchState::NotDefined;

        if secret_colors.contains(&color) {
            state = MatchState::HasColor;
        }
        if color == secret_colors[index] {
            state = state.with_exact_position();
        }
        if state == MatchState::NotDefined {
            state = MatchState::Wrong;
        }

        *cell = Cell::with_state(color, state);
    }

    Ok(Row::new(cells))
}

/// Returns the first color that appears more than once, if any.
///
/// Set-cardinality check: four distinct colors fill the set without a
/// rejected insert.
fn find_duplicate(colors: &[Color; ROW_SIZE]) -> Option<Color> {
    let mut seen = HashSet::with_capacity(ROW_SIZE);
    colors.iter().copied().find(|color| !seen.insert(*color))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(row: &Row) -> [MatchState; ROW_SIZE] {
        row.cells().map(|cell| cell.state())
    }

    #[test]
    fn test_mixed_feedback() {
        let secret = Row::secret([Color::Green, Color::Red, Color::Violet, Color::Yellow]);
        let guess = Guess::new([Color::Blue, Color::Green, Color::Red, Color::Yellow]);

        let scored = score_guess(&secret, &guess).expect("Valid guess");

        assert_eq!(
            states(&scored),
            [
                MatchState::Wrong,
                MatchState::HasColor,
                MatchState::HasColor,
                MatchState::ExactMatch,
            ]
        );
    }

    #[test]
    fn test_guessing_the_secret_scores_all_exact() {
        let colors = [Color::Red, Color::Green, Color::Blue, Color::Violet];
        let secret = Row::secret(colors);

        let scored = score_guess(&secret, &Guess::new(colors)).expect("Valid guess");

        assert!(scored.iter().all(|c| c.state() == MatchState::ExactMatch));
    }

    #[test]
    fn test_all_wrong() {
        let secret = Row::secret([Color::Red, Color::Red, Color::Red, Color::Red]);
        let guess = Guess::new([Color::Green, Color::Blue, Color::Yellow, Color::Violet]);

        let scored = score_guess(&secret, &guess).expect("Valid guess");

        assert!(scored.iter().all(|c| c.state() == MatchState::Wrong));
    }

    #[test]
    fn test_duplicate_guess_rejected() {
        let guess = Guess::new([Color::Red, Color::Red, Color::Blue, Color::Yellow]);

        for colors in [
            [Color::Green, Color::Red, Color::Violet, Color::Yellow],
            [Color::Red, Color::Green, Color::Blue, Color::Violet],
        ] {
            let secret = Row::secret(colors);
            assert_eq!(
                score_guess(&secret, &guess),
                Err(GuessError::DuplicateColor(Color::Red))
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let secret = Row::secret([Color::Violet, Color::Blue, Color::Green, Color::Red]);
        let guess = Guess::new([Color::Blue, Color::Violet, Color::Green, Color::Yellow]);

        let first = score_guess(&secret, &guess).expect("Valid guess");
        let second = score_guess(&secret, &guess).expect("Valid guess");

        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_secret_colors_score_independently() {
        // Presence is not consumed: both Red positions in the secret
        // leave a single guessed Red marked by presence plus position.
        let secret = Row::secret([Color::Red, Color::Red, Color::Blue, Color::Green]);
        let guess = Guess::new([Color::Red, Color::Blue, Color::Green, Color::Yellow]);

        let scored = score_guess(&secret, &guess).expect("Valid guess");

        assert_eq!(
            states(&scored),
            [
                MatchState::ExactMatch,
                MatchState::HasColor,
                MatchState::HasColor,
                MatchState::Wrong,
            ]
        );
    }
}
