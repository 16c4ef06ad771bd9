//! Generator parameters and the construction-time validation contract.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const MIN_GRID_SIZE: usize = 10;
pub const MIN_ROOM_SIZE: usize = 2;
/// Rooms keep this many wall tiles between themselves and the grid edge.
pub const GRID_MARGIN: usize = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    /// Target room count. Slots that fail placement are skipped.
    pub num_rooms: usize,
    pub min_room_size: usize,
    pub max_room_size: usize,
    /// Candidate draws per room slot before the slot is given up.
    pub max_placement_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 40,
            num_rooms: 12,
            min_room_size: 4,
            max_room_size: 10,
            max_placement_attempts: 50,
        }
    }
}

impl GeneratorConfig {
    pub fn with_grid(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_rooms(mut self, num_rooms: usize) -> Self {
        self.num_rooms = num_rooms;
        self
    }

    pub fn with_room_size(mut self, min_room_size: usize, max_room_size: usize) -> Self {
        self.min_room_size = min_room_size;
        self.max_room_size = max_room_size;
        self
    }

    pub fn with_placement_attempts(mut self, attempts: usize) -> Self {
        self.max_placement_attempts = attempts;
        self
    }

    /// Checks grid size first, then the room-size bounds, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_GRID_SIZE || self.height < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall { width: self.width, height: self.height });
        }
        if self.min_room_size < MIN_ROOM_SIZE {
            return Err(ConfigError::MinRoomSizeTooSmall { min_room_size: self.min_room_size });
        }
        let limit = self.width.min(self.height) - 2 * GRID_MARGIN;
        if self.max_room_size > limit {
            return Err(ConfigError::MaxRoomSizeTooLarge {
                max_room_size: self.max_room_size,
                limit,
            });
        }
        if self.min_room_size > self.max_room_size {
            return Err(ConfigError::InvertedRoomSizeBounds {
                min_room_size: self.min_room_size,
                max_room_size: self.max_room_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GeneratorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_grids_below_ten_tiles() {
        let config = GeneratorConfig::default().with_grid(5, 5);
        assert_eq!(config.validate(), Err(ConfigError::GridTooSmall { width: 5, height: 5 }));

        let narrow = GeneratorConfig::default().with_grid(40, 9).with_room_size(2, 4);
        assert!(matches!(narrow.validate(), Err(ConfigError::GridTooSmall { .. })));
    }

    #[test]
    fn rejects_rooms_smaller_than_two_tiles() {
        let config = GeneratorConfig { min_room_size: 1, ..GeneratorConfig::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MinRoomSizeTooSmall { min_room_size: 1 })
        );
    }

    #[test]
    fn rejects_inverted_room_size_bounds() {
        let config = GeneratorConfig::default().with_room_size(8, 4);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedRoomSizeBounds { min_room_size: 8, max_room_size: 4 })
        );
    }

    #[test]
    fn rejects_rooms_that_cannot_fit_inside_the_margin() {
        let config = GeneratorConfig::default().with_grid(12, 30).with_room_size(4, 11);
        assert_eq!(
            config.validate(),
            Err(ConfigError::MaxRoomSizeTooLarge { max_room_size: 11, limit: 10 })
        );

        let largest = GeneratorConfig::default().with_grid(12, 30).with_room_size(4, 10);
        assert_eq!(largest.validate(), Ok(()));
    }

    #[test]
    fn partial_tables_fall_back_to_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"width": 30, "num_rooms": 5}"#).expect("valid config json");
        assert_eq!(config.width, 30);
        assert_eq!(config.num_rooms, 5);
        assert_eq!(config.height, 40);
        assert_eq!(config.max_placement_attempts, 50);
    }
}
