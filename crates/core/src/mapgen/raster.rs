//! Rasterization of rooms and corridors onto the tile grid.

use super::grid::TileGrid;
use super::model::{Corridor, Pos, Room, Tile};

pub(super) fn paint_rooms(grid: &mut TileGrid, rooms: &[Room]) {
    for room in rooms {
        for y in room.y..room.y + room.height {
            for x in room.x..room.x + room.width {
                grid.set(Pos { x, y }, Tile::Floor);
            }
        }
        grid.set(room.center(), room.room_type.tile());
    }
}

/// Corridors only replace walls; room interiors and markers stay intact.
pub(super) fn paint_corridors(grid: &mut TileGrid, corridors: &[Corridor]) {
    for cell in corridors.iter().flat_map(|corridor| &corridor.path) {
        if grid.get(*cell) == Some(Tile::Wall) {
            grid.set(*cell, Tile::Corridor);
        }
    }
}
