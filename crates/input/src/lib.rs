//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` events into [`crate::types::GameAction`]s. Only fresh key
//! presses produce actions; auto-repeat and release events are dropped here,
//! so the engine never has to tell a held key from a new press.

pub mod event;
pub mod map;

pub use tetris_engine_types as types;

pub use event::{translate_event, InputEvent};
pub use map::{handle_key_event, should_quit};
