//! Seeded, deterministic 2-D dungeon generation: non-overlapping rooms joined by a
//! minimum spanning tree of L-shaped corridors, rasterized to a tile grid.

pub mod error;
pub mod mapgen;
pub mod rng;

pub use error::{ConfigError, LevelDecodeError};
pub use mapgen::*;
pub use rng::Mt19937;
