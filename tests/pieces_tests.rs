//! Piece catalog and rotation tests

use blockfall::core::{is_valid, rotation_states, Board, Piece, PieceSource, SPAWN_ORIGIN};
use blockfall::types::{Coord, PieceKind, PALETTE};

#[test]
fn test_rotation_state_counts() {
    assert_eq!(rotation_states(PieceKind::I).len(), 2);
    assert_eq!(rotation_states(PieceKind::O).len(), 1);
    assert_eq!(rotation_states(PieceKind::T).len(), 4);
    assert_eq!(rotation_states(PieceKind::L).len(), 4);
    assert_eq!(rotation_states(PieceKind::J).len(), 4);
    assert_eq!(rotation_states(PieceKind::S).len(), 2);
    assert_eq!(rotation_states(PieceKind::Z).len(), 2);
}

#[test]
fn test_spawn_shapes() {
    let cells = |kind| {
        let mut cells = Piece::new(kind, PALETTE[0]).occupied_cells().to_vec();
        cells.sort();
        cells
    };
    let sorted = |mut v: Vec<Coord>| {
        v.sort();
        v
    };

    assert_eq!(
        cells(PieceKind::I),
        sorted((3..7).map(|c| Coord::new(c, 0)).collect())
    );
    assert_eq!(
        cells(PieceKind::J),
        sorted(vec![
            Coord::new(3, 0),
            Coord::new(3, 1),
            Coord::new(4, 1),
            Coord::new(5, 1)
        ])
    );
    assert_eq!(
        cells(PieceKind::L),
        sorted(vec![
            Coord::new(5, 0),
            Coord::new(3, 1),
            Coord::new(4, 1),
            Coord::new(5, 1)
        ])
    );
}

#[test]
fn test_rotation_wraps_around() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::new(kind, PALETTE[0]);
        let start = piece;
        for _ in 0..piece.rotation_count() {
            piece.rotate();
        }
        assert_eq!(piece, start, "{:?}", kind);
    }
}

#[test]
fn test_o_rotation_is_identity() {
    let mut piece = Piece::new(PieceKind::O, PALETTE[0]);
    let before = piece.occupied_cells();
    piece.rotate();
    assert_eq!(piece.rotation, 0);
    assert_eq!(piece.occupied_cells(), before);
}

#[test]
fn test_every_variant_fits_at_spawn() {
    let board = Board::new();
    let mut source = PieceSource::new(2024);
    for _ in 0..50 {
        let piece = source.spawn();
        assert_eq!((piece.col, piece.row), (SPAWN_ORIGIN.col, SPAWN_ORIGIN.row));
        assert!(is_valid(&piece, &board));
        assert!(PALETTE.contains(&piece.color));
    }
}

#[test]
fn test_vertical_i_against_right_wall_cannot_turn() {
    let board = Board::new();
    let mut piece = Piece::new(PieceKind::I, PALETTE[0]);
    piece.rotate();
    piece.col = 9;
    piece.row = 5;
    assert!(is_valid(&piece, &board));

    piece.rotate();
    assert!(!is_valid(&piece, &board));
}

#[test]
fn test_seeded_sources_agree() {
    let mut a = PieceSource::new(42);
    let mut b = PieceSource::new(42);
    let first: Vec<_> = (0..30).map(|_| a.spawn()).collect();
    let second: Vec<_> = (0..30).map(|_| b.spawn()).collect();
    assert_eq!(first, second);
}
