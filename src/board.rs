use once_cell::sync::Lazy;

use crate::types::{Cell, Color};

pub const BOARD_SIZE: usize = 19;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;
const WORDS: usize = NUM_CELLS.div_ceil(64);
const LAST: usize = BOARD_SIZE - 1;

static STANDARD_WALLS: Lazy<WallGrid> = Lazy::new(WallGrid::build_standard);

/// Fixed obstacle layer stored as a 361-bit bitboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallGrid {
    bits: [u64; WORDS],
}

impl WallGrid {
    /// The fortress layout shared by every game. Built on first use.
    pub fn standard() -> WallGrid {
        *STANDARD_WALLS
    }

    /// Unions the fixed coordinate ranges. The result is symmetric across
    /// both the middle row and the middle column.
    fn build_standard() -> WallGrid {
        let mut grid = WallGrid { bits: [0; WORDS] };

        for i in 1..=7 {
            grid.insert(i, 2);
            grid.insert(i, 16);
            grid.insert(LAST - i, 2);
            grid.insert(LAST - i, 16);
        }
        for i in 0..=5 {
            grid.insert(i, 5);
            grid.insert(i, 13);
            grid.insert(LAST - i, 5);
            grid.insert(LAST - i, 13);
        }
        for i in 1..=5 {
            grid.insert(i, 7);
            grid.insert(i, 11);
            grid.insert(LAST - i, 7);
            grid.insert(LAST - i, 11);
        }
        for i in 3..=8 {
            grid.insert(7, i);
            grid.insert(11, i);
            grid.insert(7, LAST - i);
            grid.insert(11, LAST - i);
        }
        for i in 7..=11 {
            grid.insert(5, i);
            grid.insert(13, i);
        }
        grid.insert(1, 8);
        grid.insert(1, 10);
        grid.insert(17, 8);
        grid.insert(17, 10);

        grid
    }

    fn insert(&mut self, row: usize, col: usize) {
        let pos = row * BOARD_SIZE + col;
        self.bits[pos / 64] |= bit(pos);
    }

    /// Out-of-bounds cells are never walls.
    pub fn contains(&self, cell: Cell) -> bool {
        if !cell.in_bounds() {
            return false;
        }
        let pos = cell.index();
        (self.bits[pos / 64] & bit(pos)) != 0
    }

    pub fn count(&self) -> u32 {
        self.bits.iter().map(|word| word.count_ones()).sum()
    }

    /// Converts to a row-major array where 1=wall, 0=open.
    pub fn to_array(&self) -> Vec<u8> {
        (0..NUM_CELLS)
            .map(|pos| u8::from((self.bits[pos / 64] & bit(pos)) != 0))
            .collect()
    }
}

/// Ball layer. Independent of [`WallGrid`]: a wall cell may hold a ball.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceGrid {
    cells: [Option<Color>; NUM_CELLS],
}

impl PieceGrid {
    pub fn new() -> Self {
        Self {
            cells: [None; NUM_CELLS],
        }
    }

    pub fn get(&self, cell: Cell) -> Option<Color> {
        if cell.in_bounds() {
            self.cells[cell.index()]
        } else {
            None
        }
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.get(cell).is_some()
    }

    /// Callers must pass an in-bounds cell.
    pub fn set(&mut self, cell: Cell, color: Option<Color>) {
        debug_assert!(cell.in_bounds(), "cell {cell} is off the board");
        self.cells[cell.index()] = color;
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == Some(color)).count()
    }

    /// Converts to a row-major array, see [`Color::code`].
    pub fn to_array(&self) -> Vec<u8> {
        self.cells
            .iter()
            .map(|c| c.map_or(0, Color::code))
            .collect()
    }
}

impl Default for PieceGrid {
    fn default() -> Self {
        Self::new()
    }
}

fn bit(pos: usize) -> u64 {
    1u64 << (pos % 64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mirrored(cell: Cell) -> [Cell; 2] {
        let last = LAST as u8;
        [
            Cell::new(last - cell.row, cell.col),
            Cell::new(cell.row, last - cell.col),
        ]
    }

    #[test]
    fn standard_layout_has_expected_wall_count() {
        assert_eq!(WallGrid::standard().count(), 106);
    }

    #[test]
    fn standard_layout_is_symmetric_across_both_axes() {
        let walls = WallGrid::standard();

        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let cell = Cell::new(row, col);
                for image in mirrored(cell) {
                    assert_eq!(walls.contains(cell), walls.contains(image), "{cell}");
                }
            }
        }
    }

    #[test]
    fn spot_checks_match_the_fortress_shape() {
        let walls = WallGrid::standard();

        assert!(walls.contains(Cell::new(7, 2)));
        assert!(walls.contains(Cell::new(11, 2)));
        assert!(walls.contains(Cell::new(0, 5)));
        assert!(walls.contains(Cell::new(5, 9)));
        assert!(walls.contains(Cell::new(1, 8)));
        assert!(walls.contains(Cell::new(17, 10)));

        assert!(!walls.contains(Cell::new(9, 2)));
        assert!(!walls.contains(Cell::new(7, 9)));
        assert!(!walls.contains(Cell::new(3, 9)));
        assert!(!walls.contains(Cell::new(15, 9)));
        assert!(!walls.contains(Cell::new(0, 0)));
        assert!(!walls.contains(Cell::new(19, 2)));
    }

    #[test]
    fn wall_array_matches_contains() {
        let walls = WallGrid::standard();
        let cells = walls.to_array();

        assert_eq!(cells.len(), NUM_CELLS);
        assert_eq!(cells.iter().filter(|c| **c == 1).count(), 106);
        assert_eq!(cells[Cell::new(7, 3).index()], 1);
        assert_eq!(cells[Cell::new(8, 3).index()], 0);
    }

    #[test]
    fn piece_grid_set_get_and_count() {
        let mut grid = PieceGrid::new();
        grid.set(Cell::new(9, 0), Some(Color::Black));
        grid.set(Cell::new(9, 4), Some(Color::White));
        grid.set(Cell::new(9, 5), Some(Color::White));
        grid.set(Cell::new(9, 5), None);

        assert_eq!(grid.get(Cell::new(9, 0)), Some(Color::Black));
        assert!(!grid.is_occupied(Cell::new(9, 5)));
        assert_eq!(grid.get(Cell::new(9, 30)), None);
        assert_eq!(grid.count(Color::Black), 1);
        assert_eq!(grid.count(Color::White), 1);

        let cells = grid.to_array();
        assert_eq!(cells[Cell::new(9, 0).index()], 2);
        assert_eq!(cells[Cell::new(9, 4).index()], 1);
    }
}
