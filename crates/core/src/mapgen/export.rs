//! Structural dump, JSON, and ASCII renderings of a generated [`Level`].
//!
//! [`LevelDocument`] is the stable interchange shape: top-level keys `seed`, `width`,
//! `height`, `metadata`, `rooms`, `corridors`, `tile_map` in that order, rooms carrying
//! their computed `center`, corridor paths as `[x, y]` pairs and the tile map as one
//! string per row.

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::LevelDecodeError;

use super::grid::TileGrid;
use super::model::{Corridor, Level, LevelMetadata, Pos, Room, RoomType, Tile};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDocument {
    pub seed: u64,
    pub width: usize,
    pub height: usize,
    pub metadata: LevelMetadata,
    pub rooms: Vec<RoomRecord>,
    pub corridors: Vec<CorridorRecord>,
    pub tile_map: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub id: usize,
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
    pub room_type: RoomType,
    pub center: [usize; 2],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorridorRecord {
    pub from_room: usize,
    pub to_room: usize,
    pub path: Vec<[usize; 2]>,
}

impl From<&Room> for RoomRecord {
    fn from(room: &Room) -> Self {
        let center = room.center();
        Self {
            id: room.id,
            x: room.x,
            y: room.y,
            width: room.width,
            height: room.height,
            room_type: room.room_type,
            center: [center.x, center.y],
        }
    }
}

impl From<&RoomRecord> for Room {
    fn from(record: &RoomRecord) -> Self {
        Self {
            id: record.id,
            x: record.x,
            y: record.y,
            width: record.width,
            height: record.height,
            room_type: record.room_type,
        }
    }
}

impl From<&Corridor> for CorridorRecord {
    fn from(corridor: &Corridor) -> Self {
        Self {
            from_room: corridor.from_room,
            to_room: corridor.to_room,
            path: corridor.path.iter().map(|cell| [cell.x, cell.y]).collect(),
        }
    }
}

impl From<&CorridorRecord> for Corridor {
    fn from(record: &CorridorRecord) -> Self {
        Self {
            from_room: record.from_room,
            to_room: record.to_room,
            path: record.path.iter().map(|&[x, y]| Pos { x, y }).collect(),
        }
    }
}

impl Level {
    pub fn to_dict(&self) -> LevelDocument {
        LevelDocument {
            seed: self.seed(),
            width: self.width(),
            height: self.height(),
            metadata: self.metadata().clone(),
            rooms: self.rooms().iter().map(RoomRecord::from).collect(),
            corridors: self.corridors().iter().map(CorridorRecord::from).collect(),
            tile_map: self.tile_map().rows(),
        }
    }

    /// Encodes [`Level::to_dict`] as JSON, pretty-printed with `indent` spaces or
    /// compact when `indent` is `None`.
    pub fn to_json(&self, indent: Option<usize>) -> serde_json::Result<String> {
        let document = self.to_dict();
        let Some(width) = indent else {
            return serde_json::to_string(&document);
        };

        let indent = vec![b' '; width];
        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(&indent));
        document.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    pub fn to_ascii(&self) -> String {
        self.tile_map().to_ascii()
    }

    pub fn from_json(json: &str) -> Result<Self, LevelDecodeError> {
        let document: LevelDocument = serde_json::from_str(json)?;
        Self::try_from(document)
    }
}

impl TryFrom<LevelDocument> for Level {
    type Error = LevelDecodeError;

    fn try_from(document: LevelDocument) -> Result<Self, Self::Error> {
        if document.tile_map.len() != document.height {
            return Err(LevelDecodeError::RowCount {
                expected: document.height,
                actual: document.tile_map.len(),
            });
        }

        // Sized by the rows actually present; `width` and `height` are untrusted here.
        let mut tiles = Vec::new();
        for (row, line) in document.tile_map.iter().enumerate() {
            let columns = line.chars().count();
            if columns != document.width {
                return Err(LevelDecodeError::RowWidth {
                    row,
                    expected: document.width,
                    actual: columns,
                });
            }
            for (column, symbol) in line.chars().enumerate() {
                let tile = Tile::from_symbol(symbol)
                    .ok_or(LevelDecodeError::UnknownTile { symbol, row, column })?;
                tiles.push(tile);
            }
        }

        let tile_map = TileGrid::from_tiles(document.width, document.height, tiles);
        Ok(Level::from_parts(
            document.rooms.iter().map(Room::from).collect(),
            document.corridors.iter().map(Corridor::from).collect(),
            tile_map,
            document.seed,
            document.metadata,
        ))
    }
}
