use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell};
use crate::group::Pos;

/// One occupied cell as seen by render collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellView {
    pub x: i32,
    pub y: i32,
    pub color: u8,
    pub active: u8,
}

/// Read-only copy of the grid, row-major from the floor (`y * width + x`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardView {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Option<CellView>>,
}

impl BoardView {
    pub fn from_board(board: &Board) -> Self {
        let mut view = Self::default();
        view.fill_from(board);
        view
    }

    /// Overwrite with the contents of `board`, reusing the allocation
    pub fn fill_from(&mut self, board: &Board) {
        self.width = board.width();
        self.height = board.height();
        self.cells.clear();
        self.cells.extend(board.cells().iter().map(|cell| {
            cell.map(|tile| CellView {
                x: tile.x(),
                y: tile.y(),
                color: tile.color().bits(),
                active: tile.active().bits(),
            })
        }));
    }

    pub fn get(&self, x: i32, y: i32) -> Option<CellView> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        self.cells[y as usize * self.width + x as usize]
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub board: BoardView,
    pub board_hash: u64,
    /// Active group member positions, top first
    pub active: Vec<Pos>,
    pub score: u32,
    pub total_spawned: u64,
    pub tick_interval: f64,
    pub game_over: bool,
    pub slamming: bool,
    pub ticks: u64,
}

/// One byte per cell: colour bits in 0..3, active bits in 3..6, 0 when empty
pub fn cell_byte(cell: &Cell) -> u8 {
    cell.map_or(0, |tile| tile.color().bits() | tile.active().bits() << 3)
}

/// FNV-1a 64-bit
pub fn fnv1a64(bytes: impl Iterator<Item = u8>) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

/// FNV-1a 64 over [`cell_byte`] of every cell, floor row first
pub fn board_hash(board: &Board) -> u64 {
    fnv1a64(board.cells().iter().map(cell_byte))
}
