//! Line clearing
//!
//! Rows are scanned from the floor upward. Clearing a row drops everything above it by one,
//! which moves the next candidate into the row just cleared, so that index is examined again
//! before the scan continues upward.

use crate::board::Board;
use crate::types::BOARD_HEIGHT;

/// Remove every full row, compact the rows above, and return how many rows were removed.
pub fn clear_full_rows(board: &mut Board) -> usize {
    let mut cleared = 0;
    let mut row = BOARD_HEIGHT as i8 - 1;

    while row >= 0 {
        if board.is_row_full(row) {
            board.remove_row(row);
            board.shift_rows_down(row);
            cleared += 1;
        } else {
            row -= 1;
        }
    }

    if cleared > 0 {
        log::debug!("cleared {} row(s)", cleared);
    }
    cleared
}
