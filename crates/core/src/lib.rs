//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and the engine state machine.
//! It has **zero dependencies** on UI, timers or I/O: gravity is a plain
//! [`GameState::tick`] call, and whoever owns the clock decides when to call it.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with collision checks and line clearing
//! - [`game_state`]: The engine: active piece, position, score, level, speed, flags
//! - [`pieces`]: Tetromino matrices and 90° rotation
//! - [`rng`]: Piece sources (uniform random, scripted)
//! - [`scoring`]: Line-clear points, level and fall interval rules
//! - [`snapshot`]: Renderable copy of the board plus status fields
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every spawn picks one of the 7 kinds with equal probability
//! - **Plain rotation**: 90° matrix rotation, rejected if blocked (no wall kicks)
//! - **Gravity lock**: a piece locks on the first tick it cannot move down
//! - **Scoring**: 100/300/500/800 for 1-4 lines, times the current level
//! - **Levels**: one level per 1000 points; each level-up speeds gravity by ×0.8
//!
//! # Example
//!
//! ```
//! use tetris_engine_core::{GameState, ScriptedPieces};
//! use tetris_engine_types::{Direction, PieceKind};
//!
//! let mut game = GameState::with_source(ScriptedPieces::new(&[PieceKind::O]));
//! game.spawn_piece();
//! assert_eq!(game.active().unwrap().position(), (4, 0));
//!
//! game.move_horizontal(Direction::Left);
//! game.tick();
//! assert_eq!(game.active().unwrap().position(), (3, 1));
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tetris_engine_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, LockEvent, Phase, Tetromino};
pub use pieces::Shape;
pub use rng::{PieceSource, ScriptedPieces, UniformPieces};
pub use scoring::{calculate_level, calculate_line_score, next_fall_interval_ms};
pub use snapshot::GameSnapshot;
