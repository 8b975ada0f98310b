//! Active group module - the falling piece
//!
//! The group is an ordered list of board positions stacked in one column, top
//! member first. It owns no tile data: each member's controlled colour is the
//! active sub-mask of the board cell at that position, and moving a member moves
//! only that sub-mask through the grid. Resting colour it passes stays where it is.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::SpawnConflict;
use crate::types::{Mask, MAX_GROUP_SIZE};

/// A board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveGroup {
    /// Member positions, index 0 is the top of the stack
    members: ArrayVec<Pos, MAX_GROUP_SIZE>,
}

impl ActiveGroup {
    /// Place a new group in `column`, `masks[0]` on the top row and the rest below it.
    ///
    /// Every destination is checked before anything is placed: if a cell already
    /// holds the component about to be spawned there, nothing changes and the
    /// conflict is returned. Otherwise each mask is folded into its cell (creating
    /// the tile when empty) as that cell's active sub-mask.
    pub fn spawn(board: &mut Board, column: i32, masks: &[Mask]) -> Result<Self, SpawnConflict> {
        debug_assert!(masks.len() <= MAX_GROUP_SIZE);
        let top = board.height() as i32 - 1;

        let mut members = ArrayVec::new();
        for (i, &mask) in masks.iter().take(MAX_GROUP_SIZE).enumerate() {
            let pos = Pos::new(column, top - i as i32);
            let blocked = match board.get(pos.x, pos.y) {
                None => true,
                Some(cell) => mask.is_empty() || cell.is_some_and(|tile| tile.contains(mask)),
            };
            if blocked {
                return Err(SpawnConflict {
                    x: pos.x,
                    y: pos.y,
                    mask,
                });
            }
            members.push(pos);
        }

        for (pos, &mask) in members.iter().zip(masks) {
            board.deposit(pos.x, pos.y, mask);
        }

        Ok(Self { members })
    }

    /// Member positions, top first
    pub fn members(&self) -> &[Pos] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.members.contains(&Pos::new(x, y))
    }

    /// Active sub-mask held by each member, top first
    pub fn masks(&self, board: &Board) -> ArrayVec<Mask, MAX_GROUP_SIZE> {
        self.members
            .iter()
            .map(|pos| board.active_at(pos.x, pos.y))
            .collect()
    }

    /// All-or-nothing movement check: every member must be able to move.
    /// The group never moves upward.
    pub fn can_move(&self, board: &Board, dx: i32, dy: i32) -> bool {
        if dy > 0 || self.members.is_empty() {
            return false;
        }
        self.members.iter().all(|pos| {
            board.cell_can_move(pos.x, pos.y, dx, dy, board.active_at(pos.x, pos.y))
        })
    }

    /// Move the whole group by (dx, dy). Returns false, leaving the board untouched,
    /// if any member is blocked.
    ///
    /// Members are processed from the leading end of the motion backward, so a
    /// member's destination has always been vacated before it is entered.
    pub fn move_by(&mut self, board: &mut Board, dx: i32, dy: i32) -> bool {
        if !self.can_move(board, dx, dy) {
            return false;
        }

        // Top-first storage: moving down, the bottom member leads.
        let order: ArrayVec<usize, MAX_GROUP_SIZE> = if dy < 0 {
            (0..self.members.len()).rev().collect()
        } else {
            (0..self.members.len()).collect()
        };

        for i in order {
            let from = self.members[i];
            let to = from.offset(dx, dy);
            let mask = board.active_at(from.x, from.y);
            board.lift(from.x, from.y, mask);
            board.deposit(to.x, to.y, mask);
            self.members[i] = to;
        }

        true
    }

    /// Drop the group until it is blocked. Returns the number of rows fallen.
    pub fn slam(&mut self, board: &mut Board) -> u32 {
        let mut rows = 0;
        while self.move_by(board, 0, -1) {
            rows += 1;
        }
        rows
    }

    /// Exchange the vertical order of a two-member group.
    ///
    /// Requires the top member to be able to move down and the bottom member to be
    /// able to move up at the same time. The member positions stay the same; their
    /// active sub-masks trade cells. Any other group size is rejected, and so is a pair
    /// holding the same colour (nothing would change).
    pub fn swap(&mut self, board: &mut Board) -> bool {
        let [top, bottom] = self.members.as_slice() else {
            return false;
        };
        let (top, bottom) = (*top, *bottom);
        if top != bottom.offset(0, 1) {
            return false;
        }

        let upper = board.active_at(top.x, top.y);
        let lower = board.active_at(bottom.x, bottom.y);
        if upper == lower {
            return false;
        }
        if !(board.cell_can_move(top.x, top.y, 0, -1, upper)
            && board.cell_can_move(bottom.x, bottom.y, 0, 1, lower))
        {
            return false;
        }

        board.lift(top.x, top.y, upper);
        board.lift(bottom.x, bottom.y, lower);
        board.deposit(bottom.x, bottom.y, upper);
        board.deposit(top.x, top.y, lower);
        true
    }

    /// Drop members whose cell no longer holds an active component
    /// (their tile was cleared). Returns whether any member remains.
    pub fn retain_live(&mut self, board: &Board) -> bool {
        self.members
            .retain(|pos| !board.active_at(pos.x, pos.y).is_empty());
        !self.members.is_empty()
    }

    /// Landing: every member's tile comes to rest with whatever colour it holds.
    pub fn clear_active_flags(self, board: &mut Board) {
        for pos in &self.members {
            board.settle(pos.x, pos.y);
        }
    }
}
