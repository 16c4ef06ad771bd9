//! High-level level generation orchestration that composes placement, routing, roles,
//! and rasterization.

use log::debug;
use rayon::prelude::*;

use crate::error::ConfigError;
use crate::rng::Mt19937;

use super::config::GeneratorConfig;
use super::grid::TileGrid;
use super::layout::{connect_rooms, place_rooms};
use super::model::{Level, LevelMetadata, Tile};
use super::raster::{paint_corridors, paint_rooms};
use super::roles::assign_special_rooms;
use super::seed::generate_runtime_seed;

pub const GENERATOR_NAME: &str = "ProceduralLevelGenerator";

/// Seeded dungeon generator. Holds only validated configuration, so one instance can
/// serve any number of concurrent `generate` calls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProceduralLevelGenerator {
    config: GeneratorConfig,
}

impl ProceduralLevelGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a level. Without a seed one is drawn from runtime entropy and
    /// recorded in the result, so any level can be reproduced from its `seed()`.
    pub fn generate(&self, seed: Option<u64>) -> Level {
        let seed = seed.unwrap_or_else(generate_runtime_seed);
        let mut rng = Mt19937::new(seed);
        let config = &self.config;

        let mut tile_map = TileGrid::filled(config.width, config.height, Tile::Wall);
        let mut rooms = place_rooms(&mut rng, config);
        let corridors = connect_rooms(&mut rng, &rooms);
        assign_special_rooms(&mut rng, &mut rooms);
        paint_rooms(&mut tile_map, &rooms);
        paint_corridors(&mut tile_map, &corridors);

        debug!(
            "seed {seed}: placed {} of {} rooms with {} corridors",
            rooms.len(),
            config.num_rooms,
            corridors.len()
        );

        let metadata = LevelMetadata {
            room_count: rooms.len(),
            corridor_count: corridors.len(),
            generator: GENERATOR_NAME.to_string(),
            requested_rooms: config.num_rooms,
        };
        Level::from_parts(rooms, corridors, tile_map, seed, metadata)
    }

    /// Generates one level per seed in parallel, returned in input order.
    pub fn generate_batch(&self, seeds: &[u64]) -> Vec<Level> {
        seeds.par_iter().map(|&seed| self.generate(Some(seed))).collect()
    }
}
