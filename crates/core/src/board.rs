//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds one tile.
//! Uses a flat vector in row-major order for cache locality; the size is fixed at
//! construction and never reallocates.
//! Coordinates: (x, y) where x ranges 0..width (left to right) and y ranges
//! 0..height with y = 0 the floor.

use std::fmt;

use crate::tile::Tile;
use crate::types::Mask;

/// A board cell (None = empty)
pub type Cell = Option<Tile>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Parse a board from text rows, top row first.
    ///
    /// Each row holds `width` whitespace-separated tokens: `.` for an empty cell,
    /// otherwise the letters of the tile's colour. Lowercase letters are resting
    /// components, uppercase letters are active ones (`"mC"` is magenta at rest with
    /// an active cyan). Returns `None` on ragged rows or unknown letters.
    ///
    /// ```
    /// use cmyk_drop_core::Board;
    /// use cmyk_drop_core::types::Mask;
    ///
    /// let board = Board::parse(&[
    ///     ". C .",
    ///     ". my .",
    /// ]).unwrap();
    /// assert_eq!(board.tile(1, 1).unwrap().active(), Mask::C);
    /// assert_eq!(board.tile(1, 0).unwrap().color(), Mask::M.union(Mask::Y));
    /// ```
    pub fn parse(rows: &[&str]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.split_whitespace().count();
        let mut board = Self::new(width, height);

        for (row_from_top, row) in rows.iter().enumerate() {
            let y = (height - 1 - row_from_top) as i32;
            let mut tokens = 0usize;
            for (x, token) in row.split_whitespace().enumerate() {
                tokens += 1;
                if x >= width {
                    return None;
                }
                if token == "." {
                    continue;
                }
                let (color, active) = parse_token(token)?;
                board.set(x as i32, y, Tile::with_active(x as i32, y, color, active));
            }
            if tokens != width {
                return None;
            }
        }

        Some(board)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Tile at (x, y), None if empty or out of bounds
    pub fn tile(&self, x: i32, y: i32) -> Option<Tile> {
        self.get(x, y).flatten()
    }

    /// Set cell at position (x, y); a stored tile is relocated to (x, y).
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell.map(|tile| tile.at(x, y));
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Active sub-mask at (x, y) (empty for empty or out-of-bounds cells)
    pub fn active_at(&self, x: i32, y: i32) -> Mask {
        self.tile(x, y).map_or(Mask::EMPTY, |tile| tile.active())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over every stored tile, floor row first
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Whether a component `moving` at (x, y) may move to (x + dx, y + dy).
    ///
    /// The target must be in bounds. An empty target always accepts. An occupied
    /// target accepts when it does not already hold `moving`, or when its own
    /// active sub-mask is exactly `moving` (that component is about to leave).
    pub fn cell_can_move(&self, x: i32, y: i32, dx: i32, dy: i32, moving: Mask) -> bool {
        if moving.is_empty() {
            return false;
        }
        match self.get(x + dx, y + dy) {
            None => false,
            Some(None) => true,
            Some(Some(target)) => !target.contains(moving) || target.active() == moving,
        }
    }

    /// Remove `mask` from the tile at (x, y). The residual colour stays in place;
    /// the cell empties when nothing is left. Returns the bits actually removed.
    pub fn lift(&mut self, x: i32, y: i32, mask: Mask) -> Mask {
        let Some(idx) = self.index(x, y) else {
            return Mask::EMPTY;
        };
        let Some(tile) = self.cells[idx] else {
            return Mask::EMPTY;
        };
        let (residual, removed) = tile.split_off(mask);
        self.cells[idx] = residual;
        removed
    }

    /// Fold an active `mask` into (x, y), creating the tile if the cell is empty.
    /// The cell's active sub-mask becomes exactly `mask`.
    /// Returns false if out of bounds or `mask` is empty.
    pub fn deposit(&mut self, x: i32, y: i32, mask: Mask) -> bool {
        let Some(incoming) = Tile::new_active(x, y, mask) else {
            return false;
        };
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        self.cells[idx] = Some(match self.cells[idx] {
            Some(existing) => existing.merge(incoming).activate(mask),
            None => incoming,
        });
        true
    }

    /// Clear the active sub-mask at (x, y), leaving the colour at rest
    pub fn settle(&mut self, x: i32, y: i32) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = self.cells[idx].map(Tile::settled);
        }
    }

    /// Clear every active sub-mask on the board
    pub fn settle_all(&mut self) {
        for cell in &mut self.cells {
            *cell = cell.map(Tile::settled);
        }
    }

    /// One gravity pass over resting tiles.
    ///
    /// Rows are scanned from the floor upward, and left to right within a row. A
    /// resting tile drops one cell when the cell below is empty; it never merges into
    /// an occupied cell. Because rows below are already visited, a tile moves at most
    /// one cell per pass. Cells holding an active component do not fall.
    ///
    /// Returns whether anything moved.
    pub fn apply_gravity_pass(&mut self) -> bool {
        let width = self.width;
        let mut moved_any = false;

        for y in 1..self.height {
            for x in 0..width {
                let idx = y * width + x;
                let below = idx - width;
                let Some(tile) = self.cells[idx] else {
                    continue;
                };
                if !tile.is_resting() || self.cells[below].is_some() {
                    continue;
                }
                self.cells[below] = Some(tile.at(x as i32, (y - 1) as i32));
                self.cells[idx] = None;
                moved_any = true;
            }
        }

        moved_any
    }

    /// Remove every saturated tile and return how many were removed.
    /// Nothing falls here; the next gravity pass settles the stack.
    pub fn clear_saturated(&mut self) -> usize {
        let mut cleared = 0;
        for cell in &mut self.cells {
            if cell.is_some_and(|tile| tile.is_saturated()) {
                *cell = None;
                cleared += 1;
            }
        }
        cleared
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

fn parse_token(token: &str) -> Option<(Mask, Mask)> {
    let mut color = Mask::EMPTY;
    let mut active = Mask::EMPTY;
    for ch in token.chars() {
        let mask = Mask::from_str(ch.encode_utf8(&mut [0u8; 4]))?;
        color = color.union(mask);
        if ch.is_ascii_uppercase() {
            active = active.union(mask);
        }
    }
    (!color.is_empty()).then_some((color, active))
}

/// Renders the [`Board::parse`] format, top row first.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height as i32).rev() {
            for x in 0..self.width as i32 {
                if x > 0 {
                    f.write_str(" ")?;
                }
                let Some(tile) = self.tile(x, y) else {
                    f.write_str(".")?;
                    continue;
                };
                for (component, letter) in Mask::PRIMARIES.into_iter().zip(['c', 'm', 'y']) {
                    if !tile.contains(component) {
                        continue;
                    }
                    if tile.active().intersects(component) {
                        write!(f, "{}", letter.to_ascii_uppercase())?;
                    } else {
                        write!(f, "{}", letter)?;
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
