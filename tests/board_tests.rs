//! Board tests - grid access, gravity, clearing, movement checks

use cmyk_drop::core::{Board, Tile};
use cmyk_drop::types::Mask;

#[test]
fn test_board_new_empty() {
    let board = Board::new(5, 6);
    assert_eq!(board.width(), 5);
    assert_eq!(board.height(), 6);

    for y in 0..6 {
        for x in 0..5 {
            assert!(board.is_empty(x, y), "Cell ({}, {}) should be empty", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(5, 6);

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(5, 0), None);
    assert_eq!(board.get(0, 6), None);
    assert!(!board.is_empty(-1, 0));
    assert!(!board.is_occupied(-1, 0));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(5, 6);

    assert!(board.set(2, 3, Tile::new(0, 0, Mask::M)));
    assert_eq!(board.tile(2, 3).map(|t| t.color()), Some(Mask::M));
    assert!(board.is_occupied(2, 3));

    assert!(board.set(2, 3, None));
    assert!(board.is_empty(2, 3));

    assert!(!board.set(5, 0, Tile::new(0, 0, Mask::M)));
}

#[test]
fn test_cell_can_move_rules() {
    let board = Board::parse(&[
        ". . .",
        "c cM m",
    ])
    .unwrap();

    // out of bounds
    assert!(!board.cell_can_move(0, 1, -1, 0, Mask::C));
    assert!(!board.cell_can_move(0, 1, 0, 1, Mask::C));
    // empty target
    assert!(board.cell_can_move(0, 1, 1, 0, Mask::C));
    // target lacks the moving component
    assert!(board.cell_can_move(0, 1, 0, -1, Mask::M));
    // target holds it at rest
    assert!(!board.cell_can_move(0, 1, 0, -1, Mask::C));
    assert!(!board.cell_can_move(2, 1, 0, -1, Mask::M));
    // target holds it as its own active component
    assert!(board.cell_can_move(1, 1, 0, -1, Mask::M));
    // nothing to move
    assert!(!board.cell_can_move(0, 1, 1, 0, Mask::EMPTY));
}

#[test]
fn test_gravity_moves_one_cell_per_pass() {
    let mut board = Board::parse(&[
        "c . .",
        ". . .",
        ". . .",
        ". . .",
    ])
    .unwrap();

    for expected_y in [2, 1, 0] {
        assert!(board.apply_gravity_pass());
        assert_eq!(board.tile(0, expected_y).map(|t| t.position()), Some((0, expected_y)));
        assert_eq!(board.tile_count(), 1);
    }
    assert!(!board.apply_gravity_pass());
}

#[test]
fn test_gravity_column_drops_together() {
    // floor-up scan lets a whole column above a gap drop together, one cell each
    let mut board = Board::parse(&[
        "y .",
        "m .",
        "c .",
        ". .",
    ])
    .unwrap();

    assert!(board.apply_gravity_pass());
    let after = Board::parse(&[
        ". .",
        "y .",
        "m .",
        "c .",
    ])
    .unwrap();
    assert_eq!(board, after);
}

#[test]
fn test_gravity_never_merges_or_passes_through() {
    let mut board = Board::parse(&[
        "c .",
        "m .",
    ])
    .unwrap();
    let before = board.clone();
    assert!(!board.apply_gravity_pass());
    assert_eq!(board, before);
}

#[test]
fn test_gravity_keeps_active_cells_in_place() {
    let mut board = Board::parse(&[
        "mC .",
        ". .",
    ])
    .unwrap();
    assert!(!board.apply_gravity_pass());
    assert_eq!(board.tile(0, 1).unwrap().active(), Mask::C);
}

#[test]
fn test_clear_saturated_counts_and_is_idempotent() {
    let mut board = Board::parse(&[
        "cmy . m",
        "c cmy cmy",
    ])
    .unwrap();

    assert_eq!(board.clear_saturated(), 3);
    assert_eq!(board.clear_saturated(), 0);
    assert_eq!(board.tile_count(), 2);
    // nothing fell during the clear
    assert!(board.is_empty(1, 0));
    assert!(board.is_occupied(2, 1));
}
