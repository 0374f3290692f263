use serde::Serialize;

use crate::board::Grid;
use crate::game_state::Phase;
use crate::types::{Cell, INITIAL_FALL_INTERVAL_MS};

/// What a renderer needs for one frame: the board with the falling piece
/// drawn in, plus the status fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    /// `board[y][x]`, row 0 at the top.
    pub board: Grid,
    pub score: u32,
    pub level: u32,
    pub fall_interval_ms: u32,
    pub paused: bool,
    pub game_over: bool,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.board.get(y).and_then(|row| row.get(x)).copied().flatten()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Default::default(),
            score: 0,
            level: 1,
            fall_interval_ms: INITIAL_FALL_INTERVAL_MS,
            paused: false,
            game_over: false,
            phase: Phase::Ready,
        }
    }
}
