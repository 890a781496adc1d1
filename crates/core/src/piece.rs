//! Piece module - shape catalog and the falling piece
//!
//! Every variant is stored as a list of pre-enumerated rotation states. A rotation state is a
//! small occupancy matrix (`1` = filled) whose top-left corner sits at the piece origin.
//! States are listed clockwise starting from the spawn orientation.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::types::{Coord, PieceKind, Rgb, BOARD_WIDTH, PALETTE, SPAWN_REFERENCE_WIDTH};

/// Occupancy matrix of one rotation state, indexed `[row][col]`.
pub type Matrix = &'static [&'static [u8]];

/// Upper bound on filled cells in any rotation state (4x4 local matrix).
pub const MAX_CELLS: usize = 16;

const I_STATES: [Matrix; 2] = [
    &[&[1, 1, 1, 1]],
    &[&[1], &[1], &[1], &[1]],
];

const O_STATES: [Matrix; 1] = [&[&[1, 1], &[1, 1]]];

const T_STATES: [Matrix; 4] = [
    &[&[0, 1, 0], &[1, 1, 1]],
    &[&[1, 0], &[1, 1], &[1, 0]],
    &[&[1, 1, 1], &[0, 1, 0]],
    &[&[0, 1], &[1, 1], &[0, 1]],
];

const L_STATES: [Matrix; 4] = [
    &[&[0, 0, 1], &[1, 1, 1]],
    &[&[1, 0], &[1, 0], &[1, 1]],
    &[&[1, 1, 1], &[1, 0, 0]],
    &[&[1, 1], &[0, 1], &[0, 1]],
];

const J_STATES: [Matrix; 4] = [
    &[&[1, 0, 0], &[1, 1, 1]],
    &[&[1, 1], &[1, 0], &[1, 0]],
    &[&[1, 1, 1], &[0, 0, 1]],
    &[&[0, 1], &[0, 1], &[1, 1]],
];

const S_STATES: [Matrix; 2] = [
    &[&[0, 1, 1], &[1, 1, 0]],
    &[&[1, 0], &[1, 1], &[0, 1]],
];

const Z_STATES: [Matrix; 2] = [
    &[&[1, 1, 0], &[0, 1, 1]],
    &[&[0, 1], &[1, 1], &[1, 0]],
];

/// All rotation states of a variant, clockwise from the spawn orientation.
pub fn rotation_states(kind: PieceKind) -> &'static [Matrix] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
    }
}

/// Spawn origin shared by every variant: horizontally centered, top row.
pub const SPAWN_ORIGIN: Coord = Coord::new(
    (BOARD_WIDTH / 2) as i8 - (SPAWN_REFERENCE_WIDTH / 2) as i8,
    0,
);

/// The falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    /// Column of the local matrix's top-left corner
    pub col: i8,
    /// Row of the local matrix's top-left corner
    pub row: i8,
    /// Index into `rotation_states(kind)`, always reduced modulo the state count
    pub rotation: u8,
    pub color: Rgb,
}

impl Piece {
    /// Create a piece at the spawn origin with the given color.
    pub fn new(kind: PieceKind, color: Rgb) -> Self {
        Self {
            kind,
            col: SPAWN_ORIGIN.col,
            row: SPAWN_ORIGIN.row,
            rotation: 0,
            color,
        }
    }

    /// Spawn a piece with a palette color drawn uniformly from `rng`.
    pub fn spawn<R: Rng + ?Sized>(kind: PieceKind, rng: &mut R) -> Self {
        let color = PALETTE[rng.random_range(0..PALETTE.len())];
        Self::new(kind, color)
    }

    /// Number of rotation states of this piece's variant.
    pub fn rotation_count(&self) -> u8 {
        rotation_states(self.kind).len() as u8
    }

    /// Occupancy matrix of the current rotation state.
    pub fn matrix(&self) -> Matrix {
        let states = rotation_states(self.kind);
        states[self.rotation as usize % states.len()]
    }

    /// Absolute coordinates covered by the piece.
    pub fn occupied_cells(&self) -> ArrayVec<Coord, MAX_CELLS> {
        let mut cells = ArrayVec::new();
        for (dy, line) in self.matrix().iter().enumerate() {
            for (dx, &filled) in line.iter().enumerate() {
                if filled != 0 {
                    cells.push(Coord::new(self.col + dx as i8, self.row + dy as i8));
                }
            }
        }
        cells
    }

    /// Advance to the next rotation state. Does not check legality.
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % self.rotation_count();
    }

    /// Step back to the previous rotation state; exact inverse of [`Piece::rotate`].
    pub fn unrotate(&mut self) {
        let count = self.rotation_count();
        self.rotation = (self.rotation + count - 1) % count;
    }

    /// Shift the origin by `(dx, dy)`.
    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.col += dx;
        self.row += dy;
    }
}
