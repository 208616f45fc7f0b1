//! Strictly Mastermind - pure code-breaking game logic
//!
//! The scoring core of a mastermind-style game: score a guessed row of
//! colored pegs against a fixed secret row, and track round-by-round
//! progression toward a win or a round-limit loss.
//!
//! # Architecture
//!
//! - **Types**: colors, match states, cells and fixed-length rows
//! - **Rules**: pure scoring and win-detection functions
//! - **Round**: one scored guess, immutable once recorded
//! - **Game**: the `Playing -> Win | GameOver` state machine
//!
//! # Example
//!
//! ```
//! use strictly_mastermind::{Color, Game, Guess, PlayOutcome};
//!
//! let mut game = Game::new([Color::Green, Color::Red, Color::Violet, Color::Yellow]);
//!
//! let outcome = game.play(Guess::new([
//!     Color::Blue,
//!     Color::Green,
//!     Color::Red,
//!     Color::Yellow,
//! ]))?;
//! assert_eq!(outcome, PlayOutcome::Playing);
//!
//! let outcome = game.play(Guess::new([
//!     Color::Green,
//!     Color::Red,
//!     Color::Violet,
//!     Color::Yellow,
//! ]))?;
//! assert_eq!(outcome, PlayOutcome::Win);
//! # Ok::<(), strictly_mastermind::GuessError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod game;
mod invariants;
mod round;
mod rules;
mod types;

// Crate-level exports - Guess actions
pub use action::{Guess, GuessError};

// Crate-level exports - Game state machine
pub use game::{Game, GameStatus, PlayOutcome, MAX_ROUNDS};

// Crate-level exports - Invariant checks
pub use invariants::{assert_invariants, CellsClassified, RoundsBounded, StatusConsistent};

// Crate-level exports - Round records
pub use round::Round;

// Crate-level exports - Scoring rules
pub use rules::{is_winning_row, score_guess};

// Crate-level exports - Domain types
pub use types::{Cell, Color, MatchState, Row, ROW_SIZE};
