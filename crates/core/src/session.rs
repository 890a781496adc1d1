//! Game session module - the rule state machine
//!
//! Ties together the board, the piece source, collision checks, line clearing and scoring.
//! A session is driven entirely from outside: the caller forwards player intents and calls
//! [`GameSession::tick`] with the time elapsed since the previous call.

use serde::Serialize;

use crate::board::Board;
use crate::collision::is_valid;
use crate::config::GameConfig;
use crate::lines::clear_full_rows;
use crate::piece::Piece;
use crate::rng::PieceSource;
use crate::scoring::{fall_interval_ms, level_for_score, line_clear_points};
use crate::snapshot::{GameSnapshot, NextPreview};
use crate::types::{GameAction, Grid, LockEvent};

/// Lifecycle phase of a session.
///
/// `Spawning`, `Locking` and `Clearing` only exist while a lock is being resolved; between
/// calls a started session is either `Falling` or `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// Constructed but not started
    Ready,
    Spawning,
    Falling,
    Locking,
    Clearing,
    /// Terminal: ticks and input are ignored until the next `start`
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    source: PieceSource,
    board: Board,
    active: Option<Piece>,
    next: Option<Piece>,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    fall_interval_ms: u32,
    fall_timer_ms: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameSession {
    /// Create a session; pieces are seeded from `config.seed` or from entropy.
    pub fn new(config: GameConfig) -> Self {
        let source = match config.seed {
            Some(seed) => PieceSource::new(seed),
            None => PieceSource::from_entropy(),
        };
        Self::with_source(config, source)
    }

    /// Create a session drawing pieces from `source`.
    pub fn with_source(config: GameConfig, source: PieceSource) -> Self {
        let config = config.sanitized();
        Self {
            fall_interval_ms: fall_interval_ms(1, &config),
            config,
            source,
            board: Board::new(),
            active: None,
            next: None,
            phase: Phase::Ready,
            score: 0,
            level: 1,
            lines: 0,
            fall_timer_ms: 0,
            last_event: None,
        }
    }

    /// Start a fresh game on an empty board.
    ///
    /// Calling this on a running or finished session restarts it.
    pub fn start(&mut self) {
        self.start_with_board(Board::new());
    }

    /// Start a fresh game on a caller-constructed board.
    pub fn start_with_board(&mut self, board: Board) {
        self.board = board;
        self.active = None;
        self.next = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.fall_interval_ms = fall_interval_ms(1, &self.config);
        self.fall_timer_ms = 0;
        self.last_event = None;

        log::info!("session started (seed {})", self.source.seed());
        self.spawn_next();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once started and until the game is lost.
    pub fn is_running(&self) -> bool {
        !matches!(self.phase, Phase::Ready | Phase::GameOver)
    }

    pub fn has_ended(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total rows cleared this game
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity interval
    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    /// Current gravity interval in seconds
    pub fn fall_speed_secs(&self) -> f32 {
        self.fall_interval_ms as f32 / 1000.0
    }

    pub fn seed(&self) -> u64 {
        self.source.seed()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// Piece that becomes active after the current one locks
    pub fn next_piece(&self) -> Option<Piece> {
        self.next
    }

    /// Locked cells plus the active piece, ready to draw.
    pub fn render_grid(&self) -> Grid {
        self.board.render_grid(self.active.as_ref())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.render_grid(),
            next: self.next.map(NextPreview::from),
            phase: self.phase,
            score: self.score,
            level: self.level,
            lines: self.lines,
            fall_interval_ms: self.fall_interval_ms,
            seed: self.source.seed(),
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Move the active piece one column left
    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1, 0)
    }

    /// Move the active piece one column right
    pub fn move_right(&mut self) -> bool {
        self.try_shift(1, 0)
    }

    /// Move the active piece one row down. A blocked soft drop never locks.
    pub fn soft_drop(&mut self) -> bool {
        self.try_shift(0, 1)
    }

    /// Advance the active piece to its next rotation state, if it fits.
    pub fn rotate(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        piece.rotate();
        if is_valid(piece, &self.board) {
            return true;
        }
        piece.unrotate();
        false
    }

    /// Apply a game action, returning whether anything changed
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Restart => {
                self.start();
                true
            }
        }
    }

    /// Advance the gravity clock by `elapsed_ms`.
    ///
    /// At most one gravity step happens per call; the clock restarts from zero after it.
    /// Returns true when a gravity step was taken.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.fall_interval_ms {
            return false;
        }

        self.fall_timer_ms = 0;
        self.gravity_step();
        true
    }

    fn gravity_step(&mut self) {
        let Some(mut piece) = self.active else {
            return;
        };

        piece.translate(0, 1);
        if is_valid(&piece, &self.board) {
            self.active = Some(piece);
            return;
        }

        // A blocked step only locks once the piece has entered the playfield; above it the
        // piece keeps its position and retries on the next step.
        if piece.row > 0 {
            self.lock_active();
        }
    }

    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        piece.translate(dx, dy);
        if is_valid(piece, &self.board) {
            return true;
        }
        piece.translate(-dx, -dy);
        false
    }

    /// Lock the active piece, clear rows, score, and either spawn or end the game.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.set_phase(Phase::Locking);
        self.board.lock(&piece);
        log::debug!(
            "locked {:?} at ({}, {}) rotation {}",
            piece.kind,
            piece.col,
            piece.row,
            piece.rotation
        );

        // Loss is judged on the stack as locked, before any row is cleared.
        let topped_out = self.board.has_cells_above(1);

        self.set_phase(Phase::Clearing);
        let cleared = clear_full_rows(&mut self.board);
        let gained = line_clear_points(cleared, &self.config);
        self.score = self.score.saturating_add(gained);
        self.lines = self.lines.saturating_add(cleared as u32);

        let level = level_for_score(self.score, self.level, &self.config);
        let level_up = level > self.level;
        if level_up {
            self.level = level;
            self.fall_interval_ms = fall_interval_ms(level, &self.config);
            log::debug!(
                "level {} reached, fall interval {}ms",
                self.level,
                self.fall_interval_ms
            );
        }

        if topped_out {
            log::info!(
                "game over: stack reached the top (score {}, level {})",
                self.score,
                self.level
            );
            self.set_phase(Phase::GameOver);
        } else {
            self.spawn_next();
        }

        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            score_gained: gained,
            level_up,
            game_over: self.phase == Phase::GameOver,
        });
    }

    /// Promote the next piece (or a fresh one on start) and draw a new next piece.
    fn spawn_next(&mut self) {
        self.set_phase(Phase::Spawning);

        let piece = match self.next.take() {
            Some(piece) => piece,
            None => self.source.spawn(),
        };
        self.next = Some(self.source.spawn());
        self.active = Some(piece);

        if !is_valid(&piece, &self.board) {
            log::info!(
                "game over: {:?} cannot spawn (score {}, level {})",
                piece.kind,
                self.score,
                self.level
            );
            self.set_phase(Phase::GameOver);
            return;
        }

        log::debug!("spawned {:?}", piece.kind);
        self.set_phase(Phase::Falling);
    }

    fn set_phase(&mut self, phase: Phase) {
        log::trace!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
