//! Runtime state machine for a mastermind game.

use crate::action::{Guess, GuessError};
use crate::invariants::assert_invariants;
use crate::round::Round;
use crate::rules;
use crate::types::{Color, Row, ROW_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

/// Maximum number of rounds before the game is lost.
///
/// The limit is checked lazily with a strict greater-than, so a ninth
/// round can still be recorded; the call after that flips the game to
/// `GameOver` without recording anything.
pub const MAX_ROUNDS: usize = 8;

/// Current status of the game.
///
/// `Win` and `GameOver` are terminal: once reached, no transition
/// leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    Playing,
    /// A guess matched the secret row.
    Win,
    /// The round limit was exceeded.
    GameOver,
}

impl GameStatus {
    /// True for `Win` and `GameOver`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Win | GameStatus::GameOver)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GameStatus::Playing => "Playing",
            GameStatus::Win => "Win",
            GameStatus::GameOver => "GameOver",
        };
        write!(f, "{}", label)
    }
}

/// Result of a `play` call - explicit state report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Round scored and recorded; the game continues.
    Playing,
    /// Round scored and recorded; the guess matched the secret.
    Win,
    /// Round limit exceeded; nothing recorded, game is over.
    GameOver,
    /// The game had already finished; the call changed nothing.
    AlreadyFinished(GameStatus),
}

// ─────────────────────────────────────────────────────────────
//  Game
// ─────────────────────────────────────────────────────────────

/// A mastermind game: a fixed secret row plus the rounds played so far.
///
/// The lifecycle is `Playing -> Win | GameOver`. [`Game::play`] is the
/// only mutator; on a terminal status it is a no-op that reports the
/// status it found.
///
/// A game is a plain owned value and `play` takes `&mut self`, so a
/// call is already atomic with respect to any reader. Callers sharing
/// a game across threads wrap it in a `Mutex`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// The secret row, fixed at construction.
    secret: Row,
    /// Played rounds in play order (append-only).
    rounds: Vec<Round>,
    /// Current status.
    status: GameStatus,
}

impl Game {
    /// Creates a new game with the given secret colors.
    ///
    /// The secret is not checked for duplicate colors; only guesses
    /// are.
    #[instrument]
    pub fn new(secret: [Color; ROW_SIZE]) -> Self {
        Self {
            secret: Row::secret(secret),
            rounds: Vec::new(),
            status: GameStatus::Playing,
        }
    }

    /// Plays one round with the given guess.
    ///
    /// On a terminal status this records nothing and reports the
    /// status via [`PlayOutcome::AlreadyFinished`]. Past the round
    /// limit it flips to `GameOver` and records nothing. Otherwise the
    /// guess is scored, the round recorded, and the status moves to
    /// `Win` if the guess matched the secret.
    ///
    /// # Errors
    ///
    /// Returns `GuessError::DuplicateColor` if the guess repeats a
    /// color. The game is left unchanged: no partial round is
    /// recorded and the status stays `Playing`.
    #[instrument(skip(self), fields(status = %self.status, rounds = self.rounds.len()))]
    pub fn play(&mut self, guess: Guess) -> Result<PlayOutcome, GuessError> {
        if self.status.is_terminal() {
            warn!(status = %self.status, "play called on a finished game");
            return Ok(PlayOutcome::AlreadyFinished(self.status));
        }

        if self.rounds_exceeded() {
            self.status = GameStatus::GameOver;
            debug!(rounds = self.rounds.len(), "round limit exceeded");
            assert_invariants(self);
            return Ok(PlayOutcome::GameOver);
        }

        let scored = rules::score_guess(&self.secret, &guess)?;
        let round = Round::new(scored);
        let won = round.is_win();
        self.rounds.push(round);

        if won {
            self.status = GameStatus::Win;
        }

        debug!(rounds = self.rounds.len(), won, "round recorded");
        assert_invariants(self);

        Ok(if won {
            PlayOutcome::Win
        } else {
            PlayOutcome::Playing
        })
    }

    /// Rebuilds a game by replaying guesses from the start.
    ///
    /// Stops early once the game reaches a terminal status; remaining
    /// guesses are reported as no-ops by `play` and change nothing.
    ///
    /// # Errors
    ///
    /// Returns the first `GuessError` hit while replaying.
    #[instrument(skip(guesses), fields(count = guesses.len()))]
    pub fn replay(secret: [Color; ROW_SIZE], guesses: &[Guess]) -> Result<Self, GuessError> {
        let mut game = Game::new(secret);
        for guess in guesses {
            game.play(*guess)?;
        }
        Ok(game)
    }

    /// True once more rounds than the limit have been recorded.
    pub fn rounds_exceeded(&self) -> bool {
        self.rounds.len() > MAX_ROUNDS
    }

    /// Per-round feedback in play order.
    ///
    /// Recomputed fresh from the recorded rounds on every call, so the
    /// sequence can be restarted by calling again.
    pub fn stats(&self) -> impl Iterator<Item = HashMap<Color, &'static str>> + '_ {
        self.rounds.iter().map(Round::results)
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the recorded rounds in play order.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Returns the secret row.
    pub fn secret(&self) -> &Row {
        &self.secret
    }
}
