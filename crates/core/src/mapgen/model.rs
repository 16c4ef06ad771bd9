//! Public data models for generated levels: tiles, rooms, corridors, and the level itself.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use super::grid::TileGrid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Floor,
    Corridor,
    Start,
    End,
    Boss,
    Treasure,
    Empty,
}

impl Tile {
    pub const ALL: [Tile; 8] = [
        Tile::Wall,
        Tile::Floor,
        Tile::Corridor,
        Tile::Start,
        Tile::End,
        Tile::Boss,
        Tile::Treasure,
        Tile::Empty,
    ];

    pub fn symbol(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
            Self::Corridor => ',',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Boss => 'B',
            Self::Treasure => 'T',
            Self::Empty => ' ',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|tile| tile.symbol() == symbol)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    #[default]
    Normal,
    Start,
    End,
    Boss,
    Treasure,
}

impl RoomType {
    /// Marker painted on the room's center cell.
    pub fn tile(self) -> Tile {
        match self {
            Self::Normal => Tile::Floor,
            Self::Start => Tile::Start,
            Self::End => Tile::End,
            Self::Boss => Tile::Boss,
            Self::Treasure => Tile::Treasure,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Start => "start",
            Self::End => "end",
            Self::Boss => "boss",
            Self::Treasure => "treasure",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Room {
    /// Placement slot the room was accepted in.
    pub id: usize,
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
    pub room_type: RoomType,
}

impl Room {
    pub fn new(id: usize, x: usize, y: usize, width: usize, height: usize) -> Self {
        Self { id, x, y, width, height, room_type: RoomType::Normal }
    }

    pub fn center(&self) -> Pos {
        Pos { x: self.x + self.width / 2, y: self.y + self.height / 2 }
    }

    /// True when the boxes grown by `padding` on every side intersect on both axes.
    pub fn overlaps(&self, other: &Room, padding: usize) -> bool {
        self.x < other.x + other.width + padding
            && self.x + self.width + padding > other.x
            && self.y < other.y + other.height + padding
            && self.y + self.height + padding > other.y
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= self.x
            && pos.x < self.x + self.width
            && pos.y >= self.y
            && pos.y < self.y + self.height
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Corridor {
    pub from_room: usize,
    pub to_room: usize,
    /// Cells walked from the source center (exclusive) to the target center (inclusive).
    pub path: Vec<Pos>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredMetadata")]
pub struct LevelMetadata {
    pub room_count: usize,
    pub corridor_count: usize,
    pub generator: String,
    pub requested_rooms: usize,
}

/// Metadata as found in stored levels. Documents without `requested_rooms` asked for
/// exactly the rooms they hold.
#[derive(Deserialize)]
struct StoredMetadata {
    room_count: usize,
    corridor_count: usize,
    generator: String,
    requested_rooms: Option<usize>,
}

impl From<StoredMetadata> for LevelMetadata {
    fn from(stored: StoredMetadata) -> Self {
        Self {
            room_count: stored.room_count,
            corridor_count: stored.corridor_count,
            generator: stored.generator,
            requested_rooms: stored.requested_rooms.unwrap_or(stored.room_count),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    width: usize,
    height: usize,
    rooms: Vec<Room>,
    corridors: Vec<Corridor>,
    tile_map: TileGrid,
    seed: u64,
    metadata: LevelMetadata,
}

impl Level {
    pub(crate) fn from_parts(
        rooms: Vec<Room>,
        corridors: Vec<Corridor>,
        tile_map: TileGrid,
        seed: u64,
        metadata: LevelMetadata,
    ) -> Self {
        Self {
            width: tile_map.width(),
            height: tile_map.height(),
            rooms,
            corridors,
            tile_map,
            seed,
            metadata,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    pub fn tile_map(&self) -> &TileGrid {
        &self.tile_map
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn metadata(&self) -> &LevelMetadata {
        &self.metadata
    }

    pub fn tile_at(&self, pos: Pos) -> Tile {
        self.tile_map.get(pos).unwrap_or(Tile::Wall)
    }

    pub fn room(&self, id: usize) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    pub fn rooms_of_type(&self, room_type: RoomType) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(move |room| room.room_type == room_type)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        push_word(&mut bytes, self.width);
        push_word(&mut bytes, self.height);
        bytes.extend(self.seed.to_le_bytes());

        push_word(&mut bytes, self.rooms.len());
        for room in &self.rooms {
            for value in [room.id, room.x, room.y, room.width, room.height] {
                push_word(&mut bytes, value);
            }
            bytes.push(room.room_type.tile().symbol() as u8);
        }

        push_word(&mut bytes, self.corridors.len());
        for corridor in &self.corridors {
            push_word(&mut bytes, corridor.from_room);
            push_word(&mut bytes, corridor.to_room);
            push_word(&mut bytes, corridor.path.len());
            for cell in &corridor.path {
                push_word(&mut bytes, cell.x);
                push_word(&mut bytes, cell.y);
            }
        }

        bytes.extend(self.tile_map.tiles().iter().map(|tile| tile.symbol() as u8));
        bytes
    }

    /// Stable 64-bit digest of [`Level::canonical_bytes`].
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

/// Every index and dimension is encoded as a full `u64` word.
fn push_word(bytes: &mut Vec<u8>, value: usize) {
    bytes.extend((value as u64).to_le_bytes());
}
