//! Pieces module - tetromino matrices and rotation
//!
//! Each kind has a fixed base matrix (a tight rectangular grid of filled /
//! empty cells). Rotation is a plain 90° matrix turn: transpose with column
//! reversal, so width and height swap. There is no kick table; a blocked
//! rotation is simply refused by the engine.

use crate::types::{PieceKind, BOARD_WIDTH};

/// Largest side of any piece matrix
pub const MAX_SIDE: usize = 4;

/// Offset of a single mino relative to the piece origin (top-left of its box)
pub type MinoOffset = (i8, i8);

/// Rectangular boolean piece matrix, stored in a fixed 4x4 array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [[bool; MAX_SIDE]; MAX_SIDE],
    width: u8,
    height: u8,
}

impl Shape {
    /// Spawn orientation for a piece kind
    pub fn base(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_pattern(&["####"]),
            PieceKind::L => Self::from_pattern(&["#.", "#.", "##"]),
            PieceKind::J => Self::from_pattern(&[".#", ".#", "##"]),
            PieceKind::O => Self::from_pattern(&["##", "##"]),
            PieceKind::Z => Self::from_pattern(&["##.", ".##"]),
            PieceKind::S => Self::from_pattern(&[".##", "##."]),
            PieceKind::T => Self::from_pattern(&["###", ".#."]),
        }
    }

    /// Build a shape from text rows, `#` filled and anything else empty.
    fn from_pattern(rows: &[&str]) -> Self {
        let mut cells = [[false; MAX_SIDE]; MAX_SIDE];
        let mut width = 0;
        for (y, row) in rows.iter().enumerate() {
            width = width.max(row.len());
            for (x, ch) in row.bytes().enumerate() {
                cells[y][x] = ch == b'#';
            }
        }
        Self {
            cells,
            width: width as u8,
            height: rows.len() as u8,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at column `x`, row `y` of the matrix is filled
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.cells[y][x]
    }

    /// Rotate 90°: `rotated[i][j] = self[j][width - 1 - i]`.
    ///
    /// The new matrix is `height` wide and `width` tall.
    pub fn rotated(&self) -> Self {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut cells = [[false; MAX_SIDE]; MAX_SIDE];
        for (i, row) in cells.iter_mut().enumerate().take(w) {
            for (j, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[j][w - 1 - i];
            }
        }
        Self {
            cells,
            width: self.height,
            height: self.width,
        }
    }

    /// Filled cells as (dx, dy) offsets, row by row.
    pub fn minos(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        let w = self.width as usize;
        let h = self.height as usize;
        (0..h).flat_map(move |y| {
            (0..w)
                .filter(move |&x| self.cells[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Column that centers this shape horizontally on the board
    pub fn spawn_x(&self) -> i8 {
        ((BOARD_WIDTH - self.width) / 2) as i8
    }
}
