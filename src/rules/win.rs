//! Win detection for scored rows.

use crate::types::{MatchState, Row};
use tracing::instrument;

/// Checks if a scored row is a winning row.
///
/// A row wins when every cell is exactly `ExactMatch`.
#[instrument]
pub fn is_winning_row(row: &Row) -> bool {
    row.iter().all(|cell| cell.state() == MatchState::ExactMatch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Color};

    #[test]
    fn test_all_exact_matches_win() {
        let row = Row::secret([Color::Red, Color::Green, Color::Blue, Color::Yellow]);
        assert!(is_winning_row(&row));
    }

    #[test]
    fn test_single_has_color_is_not_a_win() {
        let row = Row::new([
            Cell::secret(Color::Red),
            Cell::secret(Color::Green),
            Cell::with_state(Color::Blue, MatchState::HasColor),
            Cell::secret(Color::Yellow),
        ]);
        assert!(!is_winning_row(&row));
    }

    #[test]
    fn test_unevaluated_row_is_not_a_win() {
        let row = Row::guess([Color::Red, Color::Green, Color::Blue, Color::Yellow]);
        assert!(!is_winning_row(&row));
    }
}
