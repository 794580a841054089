use serde::{Deserialize, Serialize};

use crate::board::BOARD_SIZE;
use crate::rules::MoveError;

/// A board coordinate, `(row, col)`, both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Row-major offset into a flat grid. Only meaningful for in-bounds cells.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Cells strictly between `self` and `other` when both lie on one row or
    /// one column. Empty for adjacent, identical or non-aligned cells.
    pub fn cells_between(self, other: Cell) -> impl Iterator<Item = Cell> {
        let (lo, hi, fixed, vertical) = if self.col == other.col {
            (self.row.min(other.row), self.row.max(other.row), self.col, true)
        } else if self.row == other.row {
            (self.col.min(other.col), self.col.max(other.col), self.row, false)
        } else {
            (0, 0, 0, true)
        };

        (lo.saturating_add(1)..hi).map(move |v| {
            if vertical {
                Cell::new(v, fixed)
            } else {
                Cell::new(fixed, v)
            }
        })
    }
}

impl From<(u8, u8)> for Cell {
    fn from((row, col): (u8, u8)) -> Self {
        Cell::new(row, col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Ball color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Encoding used by flat board arrays: 1=white, 2=black (0 is empty).
    pub fn code(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 2,
        }
    }
}

/// The other color.
pub fn second(color: Color) -> Color {
    match color {
        Color::White => Color::Black,
        Color::Black => Color::White,
    }
}

/// Result of a move attempt.
///
/// Contract:
/// - `Invalid`: nothing changed, the reason says why.
/// - `Moved` / `MovedWithCapture`: the caller switches turns if play goes on.
/// - `GameOver`: the mover reached the opponent's throne; do not switch turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail")]
pub enum MoveOutcome {
    Invalid(MoveError),
    Moved,
    MovedWithCapture,
    GameOver(Color),
}

impl MoveOutcome {
    pub fn is_invalid(&self) -> bool {
        matches!(self, MoveOutcome::Invalid(_))
    }
}

/// One applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub color: Color,
    pub from: Cell,
    pub to: Cell,
    pub captured: Option<Cell>,
}

/// Public per-player view returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub color: Color,
    pub pieces: Vec<Cell>,
    pub piece_count: u8,
    pub throne: Cell,
    pub opponent_throne: Cell,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Row-major, 1 marks a wall cell.
    pub walls: Vec<u8>,
    /// Row-major, see [`Color::code`].
    pub board: Vec<u8>,
    pub active_color: Color,
    pub winner: Option<Color>,
    /// First player, then second player.
    pub players: Vec<PlayerView>,
    pub move_count: u32,
}
