//! Runtime module - everything around the engine that involves time or the
//! process environment.
//!
//! The engine in [`tetris_engine_core`] is a synchronous state machine with no
//! clock. This crate supplies:
//!
//! - [`config`]: environment-driven settings (seed, log file, log filter)
//! - [`logging`]: `env_logger` setup writing to a file
//! - [`scheduler`]: a gravity timer that restarts when the fall interval changes
//! - [`driver`]: an async task that serializes actions and gravity ticks onto
//!   one engine and publishes snapshots
//!
//! # Environment Variables
//!
//! - `TETRIS_SEED`: u64 seed for piece selection (default: OS entropy)
//! - `TETRIS_LOG_FILE`: write logs to this file (default: logging off)
//! - `TETRIS_LOG`: log filter, `env_logger` syntax (default: "info")

pub mod config;
pub mod driver;
pub mod logging;
pub mod scheduler;

pub use tetris_engine_core as core;
pub use tetris_engine_types as types;

pub use config::{ConfigError, RuntimeConfig};
pub use driver::Driver;
pub use logging::init_logging;
pub use scheduler::GravityTimer;
