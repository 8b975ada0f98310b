//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the simulation.
//! All types are plain data with no behaviour beyond bit arithmetic, making them
//! usable in any context (core logic, render collaborators, scripted drivers).
//!
//! # Colour Masks
//!
//! Every tile carries a 3-bit subtractive colour mask:
//!
//! | Bit | Value | Component |
//! |-----|-------|-----------|
//! | 0 | 1 | Cyan (`C`) |
//! | 1 | 2 | Magenta (`M`) |
//! | 2 | 4 | Yellow (`Y`) |
//! | all | 7 | Black (`K`), saturated, cleared for score |
//!
//! A mask of 0 never exists on the board: an empty cell holds no tile at all.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 7 | Board columns (must be odd) |
//! | `DEFAULT_HEIGHT` | 14 | Board rows, `y = 0` is the floor |
//! | `DEFAULT_SPAWN_GROUP_SIZE` | 2 | Tiles per falling group |
//! | `DEFAULT_TICK_INTERVAL` | 0.5 | Seconds between simulation ticks |
//! | `DEFAULT_SPEED_UP_RATE` | 10 | Groups spawned between speed-ups |
//! | `DEFAULT_SPEED_UP_MULTIPLIER` | 0.9 | Tick interval factor per speed-up |
//!
//! # Examples
//!
//! ```
//! use cmyk_drop_types::{Intent, Mask};
//!
//! // Cyan plus magenta plus yellow saturates to black.
//! let k = Mask::C.union(Mask::M).union(Mask::Y);
//! assert_eq!(k, Mask::K);
//! assert!(k.is_saturated());
//!
//! // Removing a component leaves the rest.
//! assert_eq!(k.difference(Mask::C), Mask::M.union(Mask::Y));
//!
//! // Parse masks and intents (case-insensitive)
//! assert_eq!(Mask::from_str("cm"), Some(Mask::from_bits(0b011)));
//! assert_eq!(Intent::from_str("swap"), Some(Intent::Swap));
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells
pub const DEFAULT_WIDTH: usize = 7;

/// Default board height in cells
pub const DEFAULT_HEIGHT: usize = 14;

/// Default number of tiles stacked in each spawned group
pub const DEFAULT_SPAWN_GROUP_SIZE: usize = 2;

/// Default seconds between simulation ticks
pub const DEFAULT_TICK_INTERVAL: f64 = 0.5;

/// Default number of spawned groups between difficulty ramps
pub const DEFAULT_SPEED_UP_RATE: u32 = 10;

/// Default factor applied to the tick interval on each ramp
pub const DEFAULT_SPEED_UP_MULTIPLIER: f64 = 0.9;

/// Upper bound on the configured spawn group size.
///
/// Group members live in a fixed-capacity stack buffer of this size.
pub const MAX_GROUP_SIZE: usize = 8;

/// Points awarded when exactly two saturated tiles clear in one phase.
pub const PAIR_CLEAR_POINTS: u32 = 3;

/// Channel intensity used by [`Mask::rgb`] (0.75 of full scale).
pub const RGB_INTENSITY: u8 = 191;

/// A 3-bit subtractive colour mask over Cyan, Magenta and Yellow.
///
/// Masks are `Copy` values; every operation returns a new mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mask(u8);

impl Mask {
    /// No colour
    pub const EMPTY: Mask = Mask(0);
    /// Cyan
    pub const C: Mask = Mask(1 << 0);
    /// Magenta
    pub const M: Mask = Mask(1 << 1);
    /// Yellow
    pub const Y: Mask = Mask(1 << 2);
    /// Black: all three components, the saturated state
    pub const K: Mask = Mask(0b111);

    /// The three single-component masks a spawn can draw
    pub const PRIMARIES: [Mask; 3] = [Mask::C, Mask::M, Mask::Y];

    /// Build a mask from raw bits. Bits above bit 2 are discarded.
    pub const fn from_bits(bits: u8) -> Self {
        Mask(bits & Self::K.0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when all three components are present
    pub const fn is_saturated(self) -> bool {
        self.0 == Self::K.0
    }

    pub const fn union(self, other: Mask) -> Mask {
        Mask(self.0 | other.0)
    }

    pub const fn intersection(self, other: Mask) -> Mask {
        Mask(self.0 & other.0)
    }

    /// Components of `self` that are not in `other`
    pub const fn difference(self, other: Mask) -> Mask {
        Mask(self.0 & !other.0)
    }

    /// True when the masks share at least one component
    pub const fn intersects(self, other: Mask) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_subset_of(self, other: Mask) -> bool {
        self.0 & !other.0 == 0
    }

    /// Number of components present (0..=3)
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate the single-component masks contained in `self`, C first.
    pub fn components(self) -> impl Iterator<Item = Mask> {
        Self::PRIMARIES
            .into_iter()
            .filter(move |primary| self.intersects(*primary))
    }

    /// Parse a mask from its letters (case-insensitive, any order).
    ///
    /// `"k"` is accepted for the saturated mask and `"-"` or `""` for the empty one.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmyk_drop_types::Mask;
    ///
    /// assert_eq!(Mask::from_str("YC"), Some(Mask::C.union(Mask::Y)));
    /// assert_eq!(Mask::from_str("k"), Some(Mask::K));
    /// assert_eq!(Mask::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let mut bits = 0u8;
        for ch in s.chars() {
            bits |= match ch.to_ascii_lowercase() {
                'c' => Self::C.0,
                'm' => Self::M.0,
                'y' => Self::Y.0,
                'k' => Self::K.0,
                '-' => 0,
                _ => return None,
            };
        }
        Some(Mask(bits))
    }

    /// Canonical lowercase name (`"-"` for empty, `"k"` for saturated)
    pub fn as_str(&self) -> &'static str {
        match self.0 {
            0 => "-",
            1 => "c",
            2 => "m",
            3 => "cm",
            4 => "y",
            5 => "cy",
            6 => "my",
            _ => "k",
        }
    }

    /// RGB colour for render collaborators.
    ///
    /// Each component absorbs its complementary channel: cyan removes red, magenta
    /// removes green, yellow removes blue. Remaining channels light at
    /// [`RGB_INTENSITY`]. The empty mask is white background, `K` is black.
    pub fn rgb(self) -> [u8; 3] {
        if self.is_empty() {
            return [u8::MAX; 3];
        }
        let channel = |component: Mask| {
            if self.intersects(component) {
                0
            } else {
                RGB_INTENSITY
            }
        };
        [channel(Self::C), channel(Self::M), channel(Self::Y)]
    }
}

/// Player intents forwarded by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    MoveDown,
    Slam,
    Swap,
}

impl Intent {
    /// Parse intent from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Some(Intent::MoveLeft),
            "moveright" | "right" => Some(Intent::MoveRight),
            "movedown" | "down" => Some(Intent::MoveDown),
            "slam" => Some(Intent::Slam),
            "swap" => Some(Intent::Swap),
            _ => None,
        }
    }

    /// Parse the one-letter script form used by scripted drivers:
    /// `L`, `R`, `D`, `S` (slam), `W` (swap).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'L' => Some(Intent::MoveLeft),
            'R' => Some(Intent::MoveRight),
            'D' => Some(Intent::MoveDown),
            'S' => Some(Intent::Slam),
            'W' => Some(Intent::Swap),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::MoveDown => "moveDown",
            Intent::Slam => "slam",
            Intent::Swap => "swap",
        }
    }
}

/// What the last simulation tick did (consumed by observers such as a score display).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LastEvent {
    /// The active group came to rest this tick.
    pub landed: bool,
    /// Saturated tiles removed by the clear phase.
    pub cleared: u32,
    /// Points awarded for `cleared`.
    pub points: u32,
    /// A new group was placed at the spawner.
    pub spawned: bool,
    /// The tick interval shortened this tick.
    pub sped_up: bool,
    /// The spawn failed and the session ended.
    pub game_over: bool,
}
