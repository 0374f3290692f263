//! Terminal front-end for the engine.
//!
//! [`GameView`] draws a [`core::GameSnapshot`] into a [`FrameBuffer`]
//! (pure, testable), and [`TerminalRenderer`] puts framebuffers on screen
//! through `crossterm`. The board is drawn two terminal columns per cell to
//! keep cells roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_engine_core as core;
pub use tetris_engine_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{changed_rows, encode_frame, TerminalRenderer};
