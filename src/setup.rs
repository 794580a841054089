use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Cell, Color, second};

pub const PIECES_PER_PLAYER: usize = 8;

const FIRST_PIECES: [(u8, u8); PIECES_PER_PLAYER] = [
    (11, 2),
    (11, 16),
    (18, 5),
    (18, 13),
    (13, 7),
    (13, 11),
    (17, 7),
    (17, 11),
];
const SECOND_PIECES: [(u8, u8); PIECES_PER_PLAYER] = [
    (7, 2),
    (7, 16),
    (0, 5),
    (0, 13),
    (5, 7),
    (5, 11),
    (1, 7),
    (1, 11),
];
const FIRST_THRONE: Cell = Cell::new(3, 9);
const SECOND_THRONE: Cell = Cell::new(15, 9);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("cell {0} is off the board")]
    OutOfBounds(Cell),
    #[error("cell {0} is used more than once")]
    Duplicate(Cell),
    #[error("{color:?} has {count} pieces, expected between 1 and 8")]
    PieceCount { color: Color, count: usize },
}

/// Starting position of a game.
///
/// `first_throne` belongs to the first player, so the second player wins by
/// reaching it, and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    pub first_color: Color,
    pub first_pieces: Vec<Cell>,
    pub second_pieces: Vec<Cell>,
    pub first_throne: Cell,
    pub second_throne: Cell,
}

impl GameSetup {
    pub fn validate(&self) -> Result<(), SetupError> {
        let sides = [
            (self.first_color, &self.first_pieces),
            (second(self.first_color), &self.second_pieces),
        ];
        for (color, pieces) in sides {
            if pieces.is_empty() || pieces.len() > PIECES_PER_PLAYER {
                return Err(SetupError::PieceCount {
                    color,
                    count: pieces.len(),
                });
            }
        }

        let mut seen = HashSet::new();
        let cells = self
            .first_pieces
            .iter()
            .chain(&self.second_pieces)
            .chain([&self.first_throne, &self.second_throne]);
        for &cell in cells {
            if !cell.in_bounds() {
                return Err(SetupError::OutOfBounds(cell));
            }
            if !seen.insert(cell) {
                return Err(SetupError::Duplicate(cell));
            }
        }

        Ok(())
    }
}

impl Default for GameSetup {
    /// The standard mirrored layout: eight pieces a side, thrones on the
    /// middle column.
    fn default() -> Self {
        Self {
            first_color: Color::Black,
            first_pieces: FIRST_PIECES.into_iter().map(Cell::from).collect(),
            second_pieces: SECOND_PIECES.into_iter().map(Cell::from).collect(),
            first_throne: FIRST_THRONE,
            second_throne: SECOND_THRONE,
        }
    }
}
