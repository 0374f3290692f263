//! Driver - runs one game on the async runtime.
//!
//! Player actions arrive on an `mpsc` channel and gravity ticks come from a
//! [`GravityTimer`]. Both are handled in the same `select!` loop, so every
//! engine mutation happens on one task in arrival order. After each mutation
//! the timer is synced to the engine's fall interval and the new snapshot is
//! published on a `watch` channel.

use log::{debug, info};
use tokio::sync::{mpsc, watch};

use crate::core::{GameSnapshot, GameState, PieceSource, UniformPieces};
use crate::scheduler::GravityTimer;
use crate::types::GameAction;

pub struct Driver<S = UniformPieces> {
    state: GameState<S>,
    snapshot_tx: watch::Sender<GameSnapshot>,
}

impl<S: PieceSource> Driver<S> {
    pub fn new(state: GameState<S>) -> Self {
        let (snapshot_tx, _) = watch::channel(state.snapshot());
        Self { state, snapshot_tx }
    }

    /// Receiver that always holds the latest published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Run until `actions` is closed and drained.
    ///
    /// Returns the snapshot of the final state.
    pub async fn run(mut self, mut actions: mpsc::UnboundedReceiver<GameAction>) -> GameSnapshot {
        let mut gravity = GravityTimer::new(self.state.fall_interval_ms());
        let mut falling = self.gravity_enabled();

        loop {
            tokio::select! {
                action = actions.recv() => match action {
                    Some(action) => self.state.apply_action(action),
                    None => break,
                },
                _ = gravity.tick(), if falling => self.state.tick(),
            }

            if let Some(event) = self.state.take_last_event() {
                debug!(
                    "lock {}: {} lines, +{} points",
                    event.kind, event.lines_cleared, event.points
                );
            }

            if gravity.sync(self.state.fall_interval_ms()) {
                debug!("fall interval now {}ms", gravity.period_ms());
            }

            let enabled = self.gravity_enabled();
            if enabled && !falling {
                gravity.restart();
            }
            falling = enabled;

            self.publish();
        }

        info!(
            "driver stopped: score {} level {}",
            self.state.score(),
            self.state.level()
        );
        self.state.snapshot()
    }

    fn gravity_enabled(&self) -> bool {
        !self.state.paused() && !self.state.game_over()
    }

    fn publish(&self) {
        let snapshot = self.state.snapshot();
        self.snapshot_tx.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
    }
}
