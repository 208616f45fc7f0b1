//! Core domain types for mastermind.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of pegs in a row.
pub const ROW_SIZE: usize = 4;

/// Peg color drawn from the fixed five-color set.
///
/// Colors have equality and hashing only; there is no ordering
/// between them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Color {
    /// Red peg.
    Red,
    /// Green peg.
    Green,
    /// Blue peg.
    Blue,
    /// Yellow peg.
    Yellow,
    /// Violet peg.
    Violet,
}

impl Color {
    /// All five colors.
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Violet,
    ];

    /// Get label for this color (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Violet => "Violet",
        }
    }

    /// Parse from label (case-insensitive).
    #[instrument]
    pub fn from_label(s: &str) -> Option<Color> {
        <Color as strum::IntoEnumIterator>::iter()
            .find(|color| color.label().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Evaluated match state of a single peg.
///
/// Discriminants preserve the wire-friendly bit layout: `HasColor` and
/// `ExactPosition` are independent flags and `ExactMatch` is their
/// combination. State transitions during scoring go through
/// [`MatchState::with_exact_position`] so that every combination the
/// scorer can produce is an explicit variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchState {
    /// Not yet evaluated.
    NotDefined = 0,
    /// Color does not appear anywhere in the secret row.
    Wrong = 1,
    /// Color exists somewhere in the secret row, position unknown.
    HasColor = 1 << 1,
    /// Positional hit recorded without a presence hit. Scoring never
    /// produces this state: a positional match implies presence.
    ExactPosition = 1 << 2,
    /// Correct color in the correct slot (`HasColor | ExactPosition`).
    ExactMatch = (1 << 1) | (1 << 2),
}

impl MatchState {
    /// Returns the underlying flag bits.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Folds a positional hit into this state.
    ///
    /// Equivalent to `self | ExactPosition` in the flag layout, written
    /// as an exhaustive match so the compiler checks every combination.
    pub fn with_exact_position(self) -> Self {
        match self {
            MatchState::NotDefined => MatchState::ExactPosition,
            MatchState::HasColor => MatchState::ExactMatch,
            // Wrong is only ever assigned after both scoring steps ran;
            // a positional hit would have marked presence first.
            MatchState::Wrong => MatchState::Wrong,
            MatchState::ExactPosition => MatchState::ExactPosition,
            MatchState::ExactMatch => MatchState::ExactMatch,
        }
    }

    /// True once the state is a terminal classification: one of
    /// `Wrong`, `HasColor` or `ExactMatch`.
    pub fn is_classified(self) -> bool {
        matches!(
            self,
            MatchState::Wrong | MatchState::HasColor | MatchState::ExactMatch
        )
    }

    /// Get the human-readable label for this state.
    pub fn label(&self) -> &'static str {
        match self {
            MatchState::ExactMatch => "Correct!",
            MatchState::ExactPosition => "Exact Position",
            MatchState::HasColor => "Has Color",
            MatchState::NotDefined => "Not Defined",
            MatchState::Wrong => "Wrong",
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        MatchState::NotDefined
    }
}

impl std::fmt::Display for MatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One peg: a color plus its evaluated match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    color: Color,
    state: MatchState,
}

impl Cell {
    /// Creates an unevaluated cell.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            state: MatchState::NotDefined,
        }
    }

    /// Creates a cell with an explicit state.
    pub fn with_state(color: Color, state: MatchState) -> Self {
        Self { color, state }
    }

    /// Creates a secret-row cell.
    ///
    /// Secret pegs are trivially correct relative to themselves, so the
    /// state is always `ExactMatch` regardless of the caller.
    pub fn secret(color: Color) -> Self {
        Self {
            color,
            state: MatchState::ExactMatch,
        }
    }

    /// Returns the cell's color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the cell's match state.
    pub fn state(&self) -> MatchState {
        self.state
    }
}

/// A fixed-length row of exactly [`ROW_SIZE`] cells.
///
/// Rows carry no validation of their own; guess validation happens in
/// the scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Cells in peg order (0-3).
    cells: [Cell; ROW_SIZE],
}

impl Row {
    /// Creates a row from already-built cells.
    pub fn new(cells: [Cell; ROW_SIZE]) -> Self {
        Self { cells }
    }

    /// Creates a secret row: every cell fixed to `ExactMatch`.
    #[instrument]
    pub fn secret(colors: [Color; ROW_SIZE]) -> Self {
        Self {
            cells: colors.map(Cell::secret),
        }
    }

    /// Creates an unevaluated guess row.
    #[instrument]
    pub fn guess(colors: [Color; ROW_SIZE]) -> Self {
        Self {
            cells: colors.map(Cell::new),
        }
    }

    /// Gets the cell at the given index (0-3).
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Returns all cells as an array reference.
    pub fn cells(&self) -> &[Cell; ROW_SIZE] {
        &self.cells
    }

    /// Iterates over the cells in peg order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Returns the row's colors in peg order.
    pub fn colors(&self) -> [Color; ROW_SIZE] {
        self.cells.map(|cell| cell.color())
    }
}
