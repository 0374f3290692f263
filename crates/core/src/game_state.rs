//! Game state module - the engine state machine
//!
//! Owns the board, the single falling piece and all status fields. Every
//! mutation goes through one of the commands below; refused commands
//! (blocked move, blocked rotation, anything while paused or over) leave the
//! state untouched and report nothing.
//!
//! ```text
//! Ready --spawn--> Falling <--pause/resume--> Paused
//!                     |
//!                  tick (blocked)
//!                     v
//!                  Locking --> Spawning --> Falling
//!                     |
//!                     +--> GameOver --reset--> Ready
//! ```

use log::{debug, info};
use serde::Serialize;

use crate::board::Board;
use crate::pieces::{MinoOffset, Shape};
use crate::rng::{PieceSource, UniformPieces};
use crate::scoring::{calculate_level, calculate_line_score, next_fall_interval_ms};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Current orientation of the piece matrix
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at the top-center spawn position
    pub fn new(kind: PieceKind) -> Self {
        let shape = Shape::base(kind);
        Self {
            kind,
            x: shape.spawn_x(),
            y: 0,
            shape,
        }
    }

    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// Board coordinates of every mino
    pub fn minos(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        self.shape
            .minos()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check if all minos are inside the walls and off locked cells
    pub fn fits(&self, board: &Board) -> bool {
        board.fits(&self.shape, self.x, self.y)
    }

    fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    fn rotated(self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..self
        }
    }
}

/// Observable engine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// No active piece yet; the next command spawns one
    Ready,
    Falling,
    Paused,
    GameOver,
}

/// Outcome of the most recent lock (consumed by observers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
    pub level_up: bool,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformPieces> {
    board: Board,
    active: Option<Tetromino>,
    source: S,
    score: u32,
    level: u32,
    fall_interval_ms: u32,
    paused: bool,
    game_over: bool,
    last_event: Option<LockEvent>,
}

impl GameState<UniformPieces> {
    /// Create a new game with a seeded uniform piece source
    pub fn new(seed: u64) -> Self {
        Self::with_source(UniformPieces::new(seed))
    }

    /// Create a new game seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_source(UniformPieces::from_entropy())
    }
}

impl Default for GameState<UniformPieces> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game drawing pieces from `source`
    pub fn with_source(source: S) -> Self {
        Self {
            board: Board::new(),
            active: None,
            source,
            score: 0,
            level: 1,
            fall_interval_ms: INITIAL_FALL_INTERVAL_MS,
            paused: false,
            game_over: false,
            last_event: None,
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current gravity period; the scheduler should tick at this rate.
    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.paused {
            Phase::Paused
        } else if self.active.is_none() {
            Phase::Ready
        } else {
            Phase::Falling
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Place a fresh random piece at the top-center. No-op after game over.
    pub fn spawn_piece(&mut self) {
        if self.game_over {
            return;
        }
        let piece = Tetromino::new(self.source.next_kind());
        debug!("spawn {} at ({}, {})", piece.kind, piece.x, piece.y);
        self.active = Some(piece);
    }

    fn accepts_commands(&self) -> bool {
        !self.paused && !self.game_over
    }

    /// The falling piece, spawning one first if there is none.
    fn ensure_active(&mut self) -> Option<Tetromino> {
        if self.active.is_none() {
            self.spawn_piece();
        }
        self.active
    }

    /// Shift the active piece one column, if it fits there.
    pub fn move_horizontal(&mut self, direction: Direction) {
        if !self.accepts_commands() {
            return;
        }
        let Some(active) = self.ensure_active() else {
            return;
        };
        let candidate = active.shifted(direction.dx(), 0);
        if candidate.fits(&self.board) {
            self.active = Some(candidate);
        }
    }

    /// Rotate the active piece 90° in place. No wall kicks.
    pub fn rotate(&mut self) {
        if !self.accepts_commands() {
            return;
        }
        let Some(active) = self.ensure_active() else {
            return;
        };
        let candidate = active.rotated();
        if candidate.fits(&self.board) {
            self.active = Some(candidate);
        }
    }

    /// Gravity step: move down one row, or lock and spawn the next piece.
    pub fn tick(&mut self) {
        if !self.accepts_commands() {
            return;
        }
        let Some(active) = self.ensure_active() else {
            return;
        };
        let candidate = active.shifted(0, 1);
        if candidate.fits(&self.board) {
            self.active = Some(candidate);
            return;
        }
        self.lock_piece(active);
    }

    /// Manual down command; same as one gravity step.
    pub fn soft_drop(&mut self) {
        self.tick();
    }

    /// Lock `piece` into the board, clear lines, score, and spawn the next piece.
    fn lock_piece(&mut self, piece: Tetromino) {
        // A piece that locks while still touching the top row never entered
        // the playfield.
        if piece.minos().any(|(_, y)| y <= 0) {
            self.game_over = true;
            self.last_event = Some(LockEvent {
                kind: piece.kind,
                lines_cleared: 0,
                points: 0,
                level_up: false,
                game_over: true,
            });
            info!("game over: score {} level {}", self.score, self.level);
            return;
        }

        let written = self.board.lock(&piece.shape, piece.x, piece.y, piece.kind);
        debug_assert!(written, "piece below the top row must lie fully on the board");
        self.active = None;

        let lines_cleared = self.board.clear_full_rows().len();
        let points = calculate_line_score(lines_cleared, self.level);
        self.score = self.score.saturating_add(points);

        let new_level = calculate_level(self.score);
        let level_up = new_level > self.level;
        if level_up {
            self.level = new_level;
            self.fall_interval_ms = next_fall_interval_ms(self.fall_interval_ms);
            info!(
                "level {} reached, fall interval {}ms",
                self.level, self.fall_interval_ms
            );
        }

        debug!(
            "locked {} at ({}, {}): {} lines, +{} points",
            piece.kind, piece.x, piece.y, lines_cleared, points
        );
        self.last_event = Some(LockEvent {
            kind: piece.kind,
            lines_cleared: lines_cleared as u32,
            points,
            level_up,
            game_over: false,
        });

        self.spawn_piece();
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Back to the initial state: empty board, no piece, score 0, level 1.
    ///
    /// The piece source keeps its position in its sequence.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.level = 1;
        self.fall_interval_ms = INITIAL_FALL_INTERVAL_MS;
        self.paused = false;
        self.game_over = false;
        self.last_event = None;
        info!("game reset");
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_horizontal(Direction::Left),
            GameAction::MoveRight => self.move_horizontal(Direction::Right),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Reset => self.reset(),
        }
    }

    /// Write the renderable state into `out` without allocating.
    ///
    /// The active piece is drawn over the board; its cells above the top edge
    /// are left out.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);

        if let Some(active) = self.active {
            for (x, y) in active.minos() {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    out.board[y as usize][x as usize] = Some(active.kind);
                }
            }
        }

        out.score = self.score;
        out.level = self.level;
        out.fall_interval_ms = self.fall_interval_ms;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.phase = self.phase();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
