//! Tile module - a single coloured cell value
//!
//! A tile is a colour mask plus the subset of that mask currently under player
//! control (the active sub-mask). Every operation is pure and returns a new tile.
//! The invariant `active ⊆ color` is enforced by every constructor.

use serde::{Deserialize, Serialize};

use crate::types::Mask;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    color: Mask,
    active: Mask,
    x: i32,
    y: i32,
}

impl Tile {
    /// Create a resting tile. Returns `None` for the empty mask (no tile exists).
    pub fn new(x: i32, y: i32, color: Mask) -> Option<Self> {
        Self::with_active(x, y, color, Mask::EMPTY)
    }

    /// Create a tile whose whole colour is active (a freshly spawned group member).
    pub fn new_active(x: i32, y: i32, color: Mask) -> Option<Self> {
        Self::with_active(x, y, color, color)
    }

    /// Create a tile with an explicit active sub-mask, clipped to `color`.
    pub fn with_active(x: i32, y: i32, color: Mask, active: Mask) -> Option<Self> {
        if color.is_empty() {
            return None;
        }
        Some(Self {
            color,
            active: active.intersection(color),
            x,
            y,
        })
    }

    pub fn color(&self) -> Mask {
        self.color
    }

    pub fn active(&self) -> Mask {
        self.active
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// True when no part of the tile is under player control
    pub fn is_resting(&self) -> bool {
        self.active.is_empty()
    }

    /// Fold `other` into `self`: colours and active sub-masks are unioned,
    /// the position of `self` is kept.
    pub fn merge(self, other: Tile) -> Tile {
        Tile {
            color: self.color.union(other.color),
            active: self.active.union(other.active),
            ..self
        }
    }

    /// Remove `mask` from the colour.
    ///
    /// Returns the residual tile (`None` when nothing is left) and the bits that were
    /// actually removed. The residual's active sub-mask loses the removed bits too.
    pub fn split_off(self, mask: Mask) -> (Option<Tile>, Mask) {
        let removed = self.color.intersection(mask);
        let residual = Self::with_active(
            self.x,
            self.y,
            self.color.difference(mask),
            self.active.difference(mask),
        );
        (residual, removed)
    }

    /// True when the tile shares any component with `mask`
    pub fn contains(&self, mask: Mask) -> bool {
        self.color.intersects(mask)
    }

    /// True when the colour is black (`K`)
    pub fn is_saturated(&self) -> bool {
        self.color.is_saturated()
    }

    /// The same tile relocated to `(x, y)`
    pub fn at(self, x: i32, y: i32) -> Tile {
        Tile { x, y, ..self }
    }

    /// The same tile with its active sub-mask replaced (clipped to the colour)
    pub fn activate(self, active: Mask) -> Tile {
        Tile {
            active: active.intersection(self.color),
            ..self
        }
    }

    /// The same tile with no active component
    pub fn settled(self) -> Tile {
        Tile {
            active: Mask::EMPTY,
            ..self
        }
    }
}
