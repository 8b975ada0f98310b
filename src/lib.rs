//! CMYK drop (workspace facade crate).
//!
//! Re-exports the simulation under a stable `cmyk_drop::{core, types}` path while the
//! implementation lives in dedicated crates under `crates/`.

pub use cmyk_drop_core as core;
pub use cmyk_drop_types as types;
