//! Tetris engine (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `tetris_engine::{types,core,runtime,input,term}`.

pub use tetris_engine_core as core;
pub use tetris_engine_input as input;
pub use tetris_engine_runtime as runtime;
pub use tetris_engine_term as term;
pub use tetris_engine_types as types;
