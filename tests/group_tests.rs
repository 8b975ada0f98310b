//! Active group tests - all-or-nothing movement, slam, swap, landing

use cmyk_drop::core::{ActiveGroup, Board, Pos};
use cmyk_drop::types::Mask;

fn spawn(rows: &[&str], column: i32, masks: &[Mask]) -> (Board, ActiveGroup) {
    let mut board = Board::parse(rows).unwrap();
    let group = ActiveGroup::spawn(&mut board, column, masks).unwrap();
    (board, group)
}

/// Every resting tile has no active bits; every member cell has some, within its colour.
fn assert_active_invariants(board: &Board, group: &ActiveGroup) {
    for tile in board.tiles() {
        assert!(tile.active().is_subset_of(tile.color()));
        let member = group.contains(tile.x(), tile.y());
        assert_eq!(!tile.is_resting(), member, "tile {:?}", tile);
    }
}

#[test]
fn test_group_moves_down_as_stack() {
    let (mut board, mut group) = spawn(&[". . .", ". . .", ". . .", ". . ."], 1, &[Mask::C, Mask::C]);
    assert!(group.move_by(&mut board, 0, -1));
    assert_eq!(group.members(), &[Pos::new(1, 2), Pos::new(1, 1)]);
    assert_eq!(board.active_at(1, 2), Mask::C);
    assert_eq!(board.active_at(1, 1), Mask::C);
    assert!(board.is_empty(1, 3));
    assert_active_invariants(&board, &group);
}

#[test]
fn test_group_move_is_all_or_nothing() {
    // left of the bottom member holds yellow, the top member's left is free
    let (mut board, mut group) = spawn(&[". . .", "y . .", ". . ."], 1, &[Mask::C, Mask::Y]);
    let before = board.clone();
    assert!(!group.can_move(&board, -1, 0));
    assert!(!group.move_by(&mut board, -1, 0));
    assert_eq!(board, before);
    assert_eq!(group.members(), &[Pos::new(1, 2), Pos::new(1, 1)]);

    assert!(group.move_by(&mut board, 1, 0));
    assert_active_invariants(&board, &group);
}

#[test]
fn test_group_never_moves_up() {
    let (board, group) = spawn(&[". . .", ". . ."], 1, &[Mask::M]);
    assert!(!group.can_move(&board, 0, 1));
}

#[test]
fn test_group_passes_through_and_leaves_resting_colour() {
    let (mut board, mut group) = spawn(&[". . .", ". m .", ". . ."], 1, &[Mask::Y]);
    assert!(group.move_by(&mut board, 0, -1));
    let cell = board.tile(1, 1).unwrap();
    assert_eq!(cell.color(), Mask::M.union(Mask::Y));
    assert_eq!(cell.active(), Mask::Y);

    assert!(group.move_by(&mut board, 0, -1));
    let left_behind = board.tile(1, 1).unwrap();
    assert_eq!(left_behind.color(), Mask::M);
    assert!(left_behind.is_resting());
    assert_eq!(board.active_at(1, 0), Mask::Y);
    assert_active_invariants(&board, &group);
}

#[test]
fn test_slam_drops_until_blocked() {
    let (mut board, mut group) = spawn(
        &[". . .", ". . .", ". . .", ". . .", ". c ."],
        1,
        &[Mask::M, Mask::C],
    );
    // bottom member is cyan, blocked by the resting cyan at the floor
    assert_eq!(group.slam(&mut board), 2);
    assert_eq!(group.members(), &[Pos::new(1, 2), Pos::new(1, 1)]);
    assert_eq!(group.slam(&mut board), 0);
}

#[test]
fn test_swap_exchanges_vertical_order() {
    let (mut board, mut group) = spawn(&[". . .", ". . .", ". . ."], 1, &[Mask::C, Mask::Y]);
    assert!(group.swap(&mut board));
    assert_eq!(group.masks(&board).as_slice(), &[Mask::Y, Mask::C]);
    assert_eq!(group.members(), &[Pos::new(1, 2), Pos::new(1, 1)]);
    assert_active_invariants(&board, &group);
}

#[test]
fn test_swap_keeps_resting_colour() {
    let (mut board, mut group) = spawn(&[". m .", ". . .", ". . ."], 1, &[Mask::C, Mask::Y]);
    assert!(group.swap(&mut board));
    let top = board.tile(1, 2).unwrap();
    assert_eq!(top.color(), Mask::M.union(Mask::Y));
    assert_eq!(top.active(), Mask::Y);
    let bottom = board.tile(1, 1).unwrap();
    assert_eq!(bottom.color(), Mask::C);
    assert_eq!(bottom.active(), Mask::C);
}

#[test]
fn test_swap_blocked_leaves_board_unchanged() {
    // the bottom cell already rests cyan, so the top cyan cannot enter it
    let (mut board, mut group) = spawn(&[". . .", ". c .", ". . ."], 1, &[Mask::C, Mask::M]);
    let before = board.clone();
    assert!(!group.swap(&mut board));
    assert_eq!(board, before);
}

#[test]
fn test_swap_of_equal_colours_is_rejected() {
    let (mut board, mut group) = spawn(&[". . .", ". . .", ". . ."], 1, &[Mask::C, Mask::C]);
    let before = board.clone();
    assert!(!group.swap(&mut board));
    assert_eq!(board, before);
}

#[test]
fn test_swap_requires_two_members() {
    let (mut board, mut single) = spawn(&[". . .", ". . ."], 1, &[Mask::C]);
    assert!(!single.swap(&mut board));

    let (mut board, mut triple) = spawn(&[". . .", ". . .", ". . ."], 1, &[Mask::C, Mask::M, Mask::Y]);
    let before = board.clone();
    assert!(!triple.swap(&mut board));
    assert_eq!(board, before);
}

#[test]
fn test_clear_active_flags_settles_members() {
    let (mut board, mut group) = spawn(&[". . .", ". y .", ". . ."], 1, &[Mask::C]);
    group.move_by(&mut board, 0, -1);
    group.clear_active_flags(&mut board);
    assert!(board.tiles().all(|tile| tile.is_resting()));
    assert_eq!(board.tile(1, 1).unwrap().color(), Mask::C.union(Mask::Y));
}
