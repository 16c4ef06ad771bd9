//! Generator settings resolved from defaults, an optional TOML file, and CLI flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use levelgen::GeneratorConfig;
use serde::Deserialize;

/// On-disk layout: a single `[generator]` table whose missing keys keep their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsFile {
    #[serde(default)]
    generator: GeneratorConfig,
}

pub fn load_generator_config(path: &Path) -> Result<GeneratorConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let settings: SettingsFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(settings.generator)
}

/// Flag values that take precedence over whatever the config file or defaults hold.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub num_rooms: Option<usize>,
    pub min_room_size: Option<usize>,
    pub max_room_size: Option<usize>,
    pub max_placement_attempts: Option<usize>,
}

impl ConfigOverrides {
    pub fn apply(self, mut config: GeneratorConfig) -> GeneratorConfig {
        let fields = [
            (self.width, &mut config.width),
            (self.height, &mut config.height),
            (self.num_rooms, &mut config.num_rooms),
            (self.min_room_size, &mut config.min_room_size),
            (self.max_room_size, &mut config.max_room_size),
            (self.max_placement_attempts, &mut config.max_placement_attempts),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        config
    }
}

pub fn resolve_config(path: Option<&Path>, overrides: ConfigOverrides) -> Result<GeneratorConfig> {
    let base = match path {
        Some(path) => load_generator_config(path)?,
        None => GeneratorConfig::default(),
    };
    Ok(overrides.apply(base))
}
