//! Collision checks for the active piece
//!
//! One predicate decides legality for every kind of motion: sideways moves, soft drops,
//! gravity steps and rotations are all applied first and then checked here.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Check whether `piece` fits on `board` at its current origin and rotation.
///
/// Every occupied cell must lie inside the column bounds. Cells above the playfield
/// (negative row) are not checked against locked cells; cells inside it must be free.
pub fn is_valid(piece: &Piece, board: &Board) -> bool {
    piece.occupied_cells().iter().all(|&coord| {
        if coord.col < 0 || coord.col >= BOARD_WIDTH as i8 {
            return false;
        }
        if coord.row < 0 {
            return true;
        }
        coord.row < BOARD_HEIGHT as i8 && !board.is_locked(coord)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, PieceKind, PALETTE};

    #[test]
    fn test_spawned_piece_is_valid_on_empty_board() {
        for kind in PieceKind::ALL {
            assert!(is_valid(&Piece::new(kind, PALETTE[0]), &Board::new()));
        }
    }

    #[test]
    fn test_column_bounds() {
        let board = Board::new();
        let mut piece = Piece::new(PieceKind::I, PALETTE[0]);

        piece.col = -1;
        assert!(!is_valid(&piece, &board));

        piece.col = 6;
        assert!(is_valid(&piece, &board));
        piece.col = 7;
        assert!(!is_valid(&piece, &board));
    }

    #[test]
    fn test_floor() {
        let board = Board::new();
        let mut piece = Piece::new(PieceKind::O, PALETTE[0]);

        piece.row = 18;
        assert!(is_valid(&piece, &board));
        piece.row = 19;
        assert!(!is_valid(&piece, &board));
    }

    #[test]
    fn test_hidden_rows_ignore_locked_cells() {
        let board: Board = [(Coord::new(3, -1), PALETTE[0])].into_iter().collect();
        let mut piece = Piece::new(PieceKind::O, PALETTE[1]);
        piece.row = -2;

        // Overlaps (3, -1) but above the playfield: tolerated.
        assert!(is_valid(&piece, &board));

        // Column bounds still apply above the playfield.
        piece.col = -1;
        assert!(!is_valid(&piece, &board));
    }

    #[test]
    fn test_locked_cell_blocks() {
        let board: Board = [(Coord::new(4, 1), PALETTE[0])].into_iter().collect();
        let piece = Piece::new(PieceKind::O, PALETTE[1]);
        assert!(!is_valid(&piece, &board));
    }
}
