//! Procedural level generation split into coherent submodules.

pub mod config;
pub mod export;
pub mod model;

mod generator;
mod grid;
mod layout;
mod raster;
mod roles;
mod seed;

pub use config::GeneratorConfig;
pub use export::{CorridorRecord, LevelDocument, RoomRecord};
pub use generator::{GENERATOR_NAME, ProceduralLevelGenerator};
pub use grid::TileGrid;
pub use model::{Corridor, Level, LevelMetadata, Pos, Room, RoomType, Tile};

use crate::error::ConfigError;

/// Validates `config` and generates one level from it.
pub fn generate_level(config: &GeneratorConfig, seed: Option<u64>) -> Result<Level, ConfigError> {
    Ok(ProceduralLevelGenerator::new(config.clone())?.generate(seed))
}
