//! Board module - the locked cells of the playfield
//!
//! Locked cells are kept as a sparse map from coordinate to color. The map may hold cells with
//! a negative row: a piece that locks while partly above the playfield keeps those cells so the
//! session can detect a topped-out stack.
//! Coordinates: column 0..9 left to right, row 0..19 top to bottom.

use std::collections::HashMap;

use crate::piece::Piece;
use crate::types::{Coord, Grid, Rgb, BACKGROUND, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board - 10 columns x 20 rows of locked cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    locked: HashMap<Coord, Rgb>,
}

/// Target row of a cell at `row` once everything above `threshold` drops by one.
#[inline]
fn shifted_row(row: i8, threshold: i8) -> i8 {
    if row < threshold {
        row + 1
    } else {
        row
    }
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from an explicit, caller-owned map of locked cells.
    pub fn from_locked(locked: HashMap<Coord, Rgb>) -> Self {
        Self { locked }
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Color locked at `coord`, if any
    pub fn get(&self, coord: Coord) -> Option<Rgb> {
        self.locked.get(&coord).copied()
    }

    pub fn is_locked(&self, coord: Coord) -> bool {
        self.locked.contains_key(&coord)
    }

    /// Number of locked cells
    pub fn len(&self) -> usize {
        self.locked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locked.is_empty()
    }

    /// Iterate locked cells in no particular order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Rgb)> + '_ {
        self.locked.iter().map(|(&coord, &color)| (coord, color))
    }

    /// True if any locked cell sits on a row above `row`.
    pub fn has_cells_above(&self, row: i8) -> bool {
        self.locked.keys().any(|coord| coord.row < row)
    }

    /// Compose locked cells and the active piece into a renderable grid.
    ///
    /// Cells on negative rows are skipped. The active piece is painted last.
    pub fn render_grid(&self, active: Option<&Piece>) -> Grid {
        let mut grid = [[BACKGROUND; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

        for (&coord, &color) in &self.locked {
            paint(&mut grid, coord, color);
        }

        if let Some(piece) = active {
            for coord in piece.occupied_cells() {
                paint(&mut grid, coord, piece.color);
            }
        }

        grid
    }

    /// Record every cell of `piece` with the piece's color, including cells above the board.
    pub fn lock(&mut self, piece: &Piece) {
        for coord in piece.occupied_cells() {
            self.locked.insert(coord, piece.color);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: i8) -> bool {
        (0..BOARD_WIDTH as i8).all(|col| self.locked.contains_key(&Coord::new(col, row)))
    }

    /// Delete every locked cell on `row`.
    pub fn remove_row(&mut self, row: i8) {
        for col in 0..BOARD_WIDTH as i8 {
            self.locked.remove(&Coord::new(col, row));
        }
    }

    /// Move every locked cell above `below_row` down by one row.
    ///
    /// The map is rebuilt rather than edited in place so no cell can be overwritten before it
    /// has moved.
    pub fn shift_rows_down(&mut self, below_row: i8) {
        let locked = std::mem::take(&mut self.locked);
        self.locked = locked
            .into_iter()
            .map(|(coord, color)| (Coord::new(coord.col, shifted_row(coord.row, below_row)), color))
            .collect();
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.locked.clear();
    }
}

impl FromIterator<(Coord, Rgb)> for Board {
    fn from_iter<T: IntoIterator<Item = (Coord, Rgb)>>(iter: T) -> Self {
        Self::from_locked(iter.into_iter().collect())
    }
}

fn paint(grid: &mut Grid, coord: Coord, color: Rgb) {
    if coord.row < 0 || coord.col < 0 {
        return;
    }
    if let Some(cell) = grid
        .get_mut(coord.row as usize)
        .and_then(|line| line.get_mut(coord.col as usize))
    {
        *cell = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, PALETTE};

    const RED: Rgb = Rgb::new(255, 0, 0);

    fn filled_row(row: i8) -> impl Iterator<Item = (Coord, Rgb)> {
        (0..BOARD_WIDTH as i8).map(move |col| (Coord::new(col, row), RED))
    }

    #[test]
    fn test_shifted_row() {
        assert_eq!(shifted_row(3, 10), 4);
        assert_eq!(shifted_row(-1, 10), 0);
        assert_eq!(shifted_row(10, 10), 10);
        assert_eq!(shifted_row(15, 10), 15);
    }

    #[test]
    fn test_lock_keeps_negative_rows() {
        let mut board = Board::new();
        let mut piece = Piece::new(PieceKind::I, PALETTE[0]);
        piece.rotate();
        piece.row = -2;

        board.lock(&piece);

        assert_eq!(board.len(), 4);
        assert_eq!(board.get(Coord::new(3, -2)), Some(PALETTE[0]));
        assert!(board.has_cells_above(0));
    }

    #[test]
    fn test_render_grid_skips_hidden_rows() {
        let board: Board = [(Coord::new(0, -1), RED), (Coord::new(0, 19), RED)]
            .into_iter()
            .collect();
        let grid = board.render_grid(None);

        assert_eq!(grid[19][0], RED);
        assert_eq!(grid[0][0], BACKGROUND);
    }

    #[test]
    fn test_render_grid_paints_active_last() {
        let piece = Piece::new(PieceKind::O, PALETTE[1]);
        let board: Board = [(Coord::new(3, 0), RED)].into_iter().collect();

        let grid = board.render_grid(Some(&piece));

        assert_eq!(grid[0][3], PALETTE[1]);
        assert_eq!(grid[1][4], PALETTE[1]);
        // Locked map itself is untouched.
        assert_eq!(board.get(Coord::new(3, 0)), Some(RED));
    }

    #[test]
    fn test_row_full_and_remove() {
        let mut board: Board = filled_row(19).collect();
        assert!(board.is_row_full(19));
        assert!(!board.is_row_full(18));

        board.remove_row(19);
        assert!(board.is_empty());

        // Removing an empty row is a no-op.
        board.remove_row(5);
        assert!(board.is_empty());
    }

    #[test]
    fn test_shift_rows_down_moves_only_rows_above() {
        let mut board: Board = [
            (Coord::new(0, 16), RED),
            (Coord::new(0, 17), PALETTE[0]),
            (Coord::new(0, 19), PALETTE[1]),
        ]
        .into_iter()
        .collect();

        board.shift_rows_down(18);

        assert_eq!(board.len(), 3);
        assert_eq!(board.get(Coord::new(0, 16)), None);
        assert_eq!(board.get(Coord::new(0, 17)), Some(RED));
        assert_eq!(board.get(Coord::new(0, 18)), Some(PALETTE[0]));
        assert_eq!(board.get(Coord::new(0, 19)), Some(PALETTE[1]));
    }
}
