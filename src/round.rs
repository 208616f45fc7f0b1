//! One played round of mastermind.

use crate::rules;
use crate::types::{Color, Row};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single played round: the scored row for one guess.
///
/// Rounds are created by the game when a guess is scored and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    row: Row,
}

impl Round {
    /// Creates a round from a scored row.
    pub fn new(row: Row) -> Self {
        Self { row }
    }

    /// Returns the scored row.
    pub fn row(&self) -> &Row {
        &self.row
    }

    /// Returns the round's feedback as a color-to-label map.
    ///
    /// Keyed by color, so a duplicate color within the scored row keeps
    /// the entry of its last index. Guesses are validated to be
    /// duplicate-free before scoring, so this only matters for rows
    /// built by hand.
    pub fn results(&self) -> HashMap<Color, &'static str> {
        self.row
            .iter()
            .map(|cell| (cell.color(), cell.state().label()))
            .collect()
    }

    /// True when every cell in the row is an exact match.
    pub fn is_win(&self) -> bool {
        rules::is_winning_row(&self.row)
    }
}
