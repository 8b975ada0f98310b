//! Error types.

use thiserror::Error;

use crate::types::{Mask, MAX_GROUP_SIZE};

/// Rejected session configuration. No session is created.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The spawner sits in the centre column, so the width must be odd.
    #[error("board width must be odd, got {0}")]
    EvenWidth(usize),

    #[error("board width must be at least 3, got {0}")]
    WidthTooSmall(usize),

    #[error("board height must be at least 1")]
    ZeroHeight,

    #[error("spawn group size must be at least 1")]
    EmptyGroup,

    #[error("spawn group size {0} exceeds the maximum of {max}", max = MAX_GROUP_SIZE)]
    GroupTooLarge(usize),

    #[error("spawn group size {size} does not fit a board of height {height}")]
    GroupTallerThanBoard { size: usize, height: usize },

    #[error("tick interval must be a positive number of seconds, got {0}")]
    TickInterval(f64),

    #[error("speed-up rate must be at least 1")]
    SpeedUpRate,

    #[error("speed-up multiplier must be in (0, 1], got {0}")]
    SpeedUpMultiplier(f64),

    /// A pre-seeded board does not match the configured dimensions.
    #[error("board is {actual_width}x{actual_height}, config expects {width}x{height}")]
    BoardMismatch {
        width: usize,
        height: usize,
        actual_width: usize,
        actual_height: usize,
    },
}

/// The spawner cell already holds the component being spawned.
///
/// This is the game-over trigger, never a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("spawn blocked at ({x}, {y}): cell already holds {}", .mask.as_str())]
pub struct SpawnConflict {
    pub x: i32,
    pub y: i32,
    pub mask: Mask,
}
