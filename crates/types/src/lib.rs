//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, so they can be shared by the
//! engine, the scheduler, key mapping and any renderer.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Gravity and Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_FALL_INTERVAL_MS` | 1000 | Fall interval at level 1 |
//! | `MIN_FALL_INTERVAL_MS` | 100 | Fall interval floor |
//! | `FALL_INTERVAL_NUMERATOR` / `FALL_INTERVAL_DENOMINATOR` | 4/5 | Speed-up per level-up |
//! | `SCORE_PER_LEVEL` | 1000 | Points needed per level |
//! | `LINE_SCORES` | 0/100/300/500/800 | Points by simultaneous lines (× level) |
//!
//! # Examples
//!
//! ```
//! use tetris_engine_types::{Direction, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Parse from string (case-insensitive)
//! let piece: PieceKind = "t".parse().unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let action: GameAction = "moveLeft".parse().unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//! assert_eq!(Direction::Left.dx(), -1);
//!
//! // Unknown names are rejected at the boundary
//! assert!("sideways".parse::<Direction>().is_err());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fall interval at level 1 (one row per second)
pub const INITIAL_FALL_INTERVAL_MS: u32 = 1000;

/// The fall interval never drops below this value
pub const MIN_FALL_INTERVAL_MS: u32 = 100;

/// Speed-up factor applied on each level increase (4/5 = ×0.8)
pub const FALL_INTERVAL_NUMERATOR: u32 = 4;

/// Denominator of the speed-up factor
pub const FALL_INTERVAL_DENOMINATOR: u32 = 5;

/// Points per level: `level = score / SCORE_PER_LEVEL + 1`
pub const SCORE_PER_LEVEL: u32 = 1000;

/// Line clear scoring table, indexed by simultaneous lines cleared.
///
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
///
/// Points are multiplied by the current level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Rejection of a malformed name at the interface boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown piece kind: {0:?}")]
    PieceKind(String),
    #[error("unknown direction: {0:?}")]
    Direction(String),
    #[error("unknown game action: {0:?}")]
    GameAction(String),
}

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and display color:
/// - **I**: Cyan, 1x4 bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All variants, in a fixed order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Single uppercase letter name
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_engine_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_str(), "I");
    /// assert_eq!(PieceKind::O.as_str(), "O");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Display color as `(r, g, b)`.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0x00, 0xf0, 0xf0),
            PieceKind::O => (0xf0, 0xf0, 0x00),
            PieceKind::T => (0xa0, 0x00, 0xf0),
            PieceKind::S => (0x00, 0xf0, 0x00),
            PieceKind::Z => (0xf0, 0x00, 0x00),
            PieceKind::J => (0x00, 0x00, 0xf0),
            PieceKind::L => (0xf0, 0xa0, 0x00),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PieceKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "i" => Ok(PieceKind::I),
            "o" => Ok(PieceKind::O),
            "t" => Ok(PieceKind::T),
            "s" => Ok(PieceKind::S),
            "z" => Ok(PieceKind::Z),
            "j" => Ok(PieceKind::J),
            "l" => Ok(PieceKind::L),
            _ => Err(ParseError::PieceKind(s.to_string())),
        }
    }
}

/// Horizontal move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column offset for one step in this direction
    pub fn dx(&self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    /// Accepts "left" | "l" and "right" | "r" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(ParseError::Direction(s.to_string())),
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// This is the generic control surface: two horizontal directions, soft drop,
/// rotate, pause and reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Apply one gravity step immediately
    SoftDrop,
    /// Rotate piece 90°
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start over from an empty board
    Reset,
}

impl GameAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Reset => "reset",
        }
    }
}

impl From<Direction> for GameAction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
        }
    }
}

impl FromStr for GameAction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "moveleft" => Ok(GameAction::MoveLeft),
            "moveright" => Ok(GameAction::MoveRight),
            "softdrop" => Ok(GameAction::SoftDrop),
            "rotate" => Ok(GameAction::Rotate),
            "pause" => Ok(GameAction::Pause),
            "reset" => Ok(GameAction::Reset),
            _ => Err(ParseError::GameAction(s.to_string())),
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell locked with the specified piece kind
pub type Cell = Option<PieceKind>;
