//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or hold a locked piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the board (y < 0) are never stored.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row-major grid of cells, `grid[y][x]`.
pub type Grid = [[Cell; WIDTH]; HEIGHT];

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check whether `shape` placed at (x, y) collides with nothing.
    ///
    /// Every filled cell must be inside the side walls and above the floor.
    /// Cells above the top edge (y < 0) are allowed and never overlap.
    pub fn fits(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.minos().all(|(dx, dy)| {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return false;
            }
            py < 0 || self.is_valid(px, py)
        })
    }

    /// Write `kind` into every filled cell of `shape` at (x, y).
    ///
    /// Cells outside the board are skipped; returns false if any were.
    pub fn lock(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) -> bool {
        let mut all_written = true;
        for (dx, dy) in shape.minos() {
            all_written &= self.set(x + dx, y + dy, Some(kind));
        }
        all_written
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the indices that were cleared, bottom first.
    ///
    /// Rows above each cleared row move down; empty rows fill in from the top.
    /// Uses a two-pointer compaction, so clearing several rows at once gives
    /// the same board as clearing them one by one.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, HEIGHT> {
        let mut cleared_rows = ArrayVec::new();
        let mut write_y = HEIGHT;

        // Scan from bottom to top
        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * WIDTH;
                    self.cells
                        .copy_within(src_start..src_start + WIDTH, write_y * WIDTH);
                }
            }
        }

        // Whatever is left above the last written row becomes empty.
        self.cells[..write_y * WIDTH].fill(None);

        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the cells into a 2D grid.
    pub fn write_grid(&self, out: &mut Grid) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * WIDTH;
            row.copy_from_slice(&self.cells[start..start + WIDTH]);
        }
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from bottom-aligned text rows for tests.
    ///
    /// `.` is empty; a piece letter is a locked cell of that kind.
    #[cfg(test)]
    pub(crate) fn from_ascii(rows: &[&str]) -> Self {
        assert!(rows.len() <= HEIGHT);
        let mut board = Self::new();
        let top = HEIGHT - rows.len();
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), WIDTH, "row {i} must be {WIDTH} wide");
            for (x, ch) in row.chars().enumerate() {
                if ch != '.' {
                    let kind: PieceKind = ch.to_string().parse().expect("piece letter");
                    board.set(x as i8, (top + i) as i8, Some(kind));
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
