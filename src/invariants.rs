//! Named invariants over recorded game state.
//!
//! Invariants are logical properties that must hold after every state
//! transition. They are checked in debug builds and can be tested
//! independently.

use crate::game::{Game, GameStatus, MAX_ROUNDS};
use crate::round::Round;
use tracing::warn;

/// Invariant: every cell in every recorded round is terminally
/// classified as `Wrong`, `HasColor` or `ExactMatch`.
pub struct CellsClassified;

impl CellsClassified {
    /// Checks the invariant against the given game.
    pub fn holds(game: &Game) -> bool {
        let valid = game
            .rounds()
            .iter()
            .all(|round| round.row().iter().all(|cell| cell.state().is_classified()));
        if !valid {
            warn!("Unclassified cell in a recorded round");
        }
        valid
    }
}

/// Invariant: the status agrees with the recorded rounds.
///
/// `Win` requires the last recorded round to be a win; any other
/// status requires that no winning round was ever recorded.
pub struct StatusConsistent;

impl StatusConsistent {
    /// Checks the invariant against the given game.
    pub fn holds(game: &Game) -> bool {
        let valid = match game.status() {
            GameStatus::Win => game.rounds().last().is_some_and(Round::is_win),
            GameStatus::Playing | GameStatus::GameOver => {
                !game.rounds().iter().any(Round::is_win)
            }
        };
        if !valid {
            warn!(status = %game.status(), "Status inconsistent with recorded rounds");
        }
        valid
    }
}

/// Invariant: the lazy round-limit check admits at most one round past
/// the limit.
pub struct RoundsBounded;

impl RoundsBounded {
    /// Checks the invariant against the given game.
    pub fn holds(game: &Game) -> bool {
        let valid = game.rounds().len() <= MAX_ROUNDS + 1;
        if !valid {
            warn!(rounds = game.rounds().len(), "Round count over the lazy limit");
        }
        valid
    }
}

/// Asserts that all game invariants hold (panics on violation in debug
/// builds).
pub fn assert_invariants(game: &Game) {
    debug_assert!(CellsClassified::holds(game), "Cell classification violated");
    debug_assert!(StatusConsistent::holds(game), "Status consistency violated");
    debug_assert!(RoundsBounded::holds(game), "Round bound violated");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Guess;
    use crate::types::Color;

    const SECRET: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Violet];

    #[test]
    fn test_invariants_hold_for_fresh_game() {
        let game = Game::new(SECRET);
        assert!(CellsClassified::holds(&game));
        assert!(StatusConsistent::holds(&game));
        assert!(RoundsBounded::holds(&game));
    }

    #[test]
    fn test_invariants_hold_through_a_full_game() {
        let mut game = Game::new(SECRET);
        let guess = Guess::new([Color::Green, Color::Blue, Color::Red, Color::Yellow]);

        for _ in 0..3 {
            game.play(guess).expect("Valid guess");
            assert!(CellsClassified::holds(&game));
            assert!(StatusConsistent::holds(&game));
        }

        game.play(Guess::new(SECRET)).expect("Valid guess");
        assert!(StatusConsistent::holds(&game));
        assert!(RoundsBounded::holds(&game));
    }
}
