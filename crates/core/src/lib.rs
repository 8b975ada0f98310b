//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains all the puzzle rules, state management, and tick logic.
//! It has **no dependencies** on rendering, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed and same intents produce identical sessions
//! - **Testable**: The clock is supplied by the caller; colours come from an injectable source
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`tile`]: colour mask plus active sub-mask, pure merge/split operations
//! - [`board`]: width x height grid with gravity, clearing and mask transfer primitives
//! - [`group`]: the falling piece, all-or-nothing movement, slam and swap
//! - [`rng`]: spawn colour sources (seeded LCG, fixed sequences)
//! - [`scoring`]: clear points and the difficulty schedule
//! - [`state`]: score, spawn total, tick interval, game over
//! - [`session`]: the tick sequencer and intent handling
//! - [`snapshot`]: read-only views for render collaborators
//!
//! # Rules
//!
//! - Tiles carry a 3-bit subtractive colour (Cyan, Magenta, Yellow)
//! - The falling group's colour passes through resting tiles that lack it, merging in
//!   and detaching again as it moves; a tile that already holds it blocks
//! - A tile holding all three components (black) is cleared for one point, two at
//!   once score three
//! - Resting tiles fall one cell per tick into empty space and never merge
//! - The session ends when a spawn cell already holds the colour being spawned
//!
//! # Example
//!
//! ```
//! use cmyk_drop_core::{Session, SessionConfig};
//! use cmyk_drop_core::types::Intent;
//!
//! let mut session = Session::new(SessionConfig::new(5, 8, 2, 0.5, 10, 0.9)).unwrap();
//!
//! // The first tick spawns a group at the top of the centre column.
//! assert!(session.advance(0.5).redraw_needed);
//! assert!(session.apply_intent(Intent::MoveLeft));
//! session.apply_intent(Intent::Swap);
//!
//! assert_eq!(session.score(), 0);
//! assert!(!session.is_game_over());
//! ```
//!
//! # Timing
//!
//! Call [`Session::advance`](session::Session::advance) once per frame with the elapsed
//! seconds, after applying that frame's intents. A tick fires whenever the accumulated
//! time reaches the current tick interval.

pub mod board;
pub mod config;
pub mod error;
pub mod group;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod tile;

pub use cmyk_drop_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell};
pub use config::SessionConfig;
pub use error::{ConfigError, SpawnConflict};
pub use group::{ActiveGroup, Pos};
pub use rng::{ColorSource, FixedColors, SimpleRng};
pub use scoring::clear_points;
pub use session::{new_session, Session, TickResult};
pub use snapshot::{BoardView, CellView, SessionSnapshot};
pub use state::SessionState;
pub use tile::Tile;
