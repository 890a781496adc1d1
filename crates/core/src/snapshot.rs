use serde::Serialize;

use crate::piece::{Matrix, Piece};
use crate::session::Phase;
use crate::types::{Grid, PieceKind, Rgb};

/// What a "next piece" preview panel needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextPreview {
    pub kind: PieceKind,
    pub color: Rgb,
    pub matrix: Matrix,
}

impl From<Piece> for NextPreview {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            color: value.color,
            matrix: value.matrix(),
        }
    }
}

/// Read-only view of a session for renderers and observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub next: Option<NextPreview>,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
