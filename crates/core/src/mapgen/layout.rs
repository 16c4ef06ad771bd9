//! Room placement and minimum-spanning-tree corridor routing for base level topology.

use log::trace;

use crate::rng::Mt19937;

use super::config::{GRID_MARGIN, GeneratorConfig};
use super::grid::manhattan;
use super::model::{Corridor, Pos, Room};

/// Rooms must keep at least this many wall tiles between each other.
pub(super) const ROOM_PADDING: usize = 1;

pub(super) fn place_rooms(rng: &mut Mt19937, config: &GeneratorConfig) -> Vec<Room> {
    let mut rooms: Vec<Room> = Vec::with_capacity(config.num_rooms);
    for slot in 0..config.num_rooms {
        let placed = (0..config.max_placement_attempts).find_map(|_| {
            let candidate = draw_candidate(rng, config, slot);
            (!rooms.iter().any(|existing| candidate.overlaps(existing, ROOM_PADDING)))
                .then_some(candidate)
        });
        match placed {
            Some(room) => rooms.push(room),
            None => trace!(
                "room slot {slot} skipped after {} attempts",
                config.max_placement_attempts
            ),
        }
    }
    rooms
}

fn draw_candidate(rng: &mut Mt19937, config: &GeneratorConfig, slot: usize) -> Room {
    let width = rng.int_in_range(config.min_room_size, config.max_room_size);
    let height = rng.int_in_range(config.min_room_size, config.max_room_size);
    let x = rng.int_in_range(GRID_MARGIN, config.width - width - GRID_MARGIN);
    let y = rng.int_in_range(GRID_MARGIN, config.height - height - GRID_MARGIN);
    Room::new(slot, x, y, width, height)
}

/// Greedy Prim-style tree over room centers: repeatedly joins the closest
/// (connected, pending) pair by Manhattan distance until every room is reached.
pub(super) fn connect_rooms(rng: &mut Mt19937, rooms: &[Room]) -> Vec<Corridor> {
    if rooms.len() < 2 {
        return Vec::new();
    }

    let mut connected_room_indices = vec![0_usize];
    let mut pending_room_indices: Vec<usize> = (1..rooms.len()).collect();
    let mut corridors = Vec::with_capacity(rooms.len() - 1);

    while !pending_room_indices.is_empty() {
        let mut best_choice: Option<(usize, usize, usize)> = None;
        for &connected_index in &connected_room_indices {
            let connected_center = rooms[connected_index].center();
            for &pending_index in &pending_room_indices {
                let distance = manhattan(connected_center, rooms[pending_index].center());
                // Ascending index order with a strict comparison keeps the first minimum.
                let should_replace = match best_choice {
                    None => true,
                    Some((best_distance, best_connected_index, best_pending_index)) => {
                        (distance, connected_index, pending_index)
                            < (best_distance, best_connected_index, best_pending_index)
                    }
                };
                if should_replace {
                    best_choice = Some((distance, connected_index, pending_index));
                }
            }
        }

        let Some((_, connected_index, pending_index)) = best_choice else {
            break;
        };
        let from_room = &rooms[connected_index];
        let to_room = &rooms[pending_index];
        let horizontal_first = rng.chance(0.5);
        corridors.push(Corridor {
            from_room: from_room.id,
            to_room: to_room.id,
            path: l_shaped_path(from_room.center(), to_room.center(), horizontal_first),
        });

        connected_room_indices.push(pending_index);
        pending_room_indices.retain(|&index| index != pending_index);
    }

    corridors
}

/// Walks one tile at a time along the first axis until aligned, then along the other.
/// The start cell is not included; the end cell is.
pub(super) fn l_shaped_path(start: Pos, end: Pos, horizontal_first: bool) -> Vec<Pos> {
    let mut path = Vec::with_capacity(manhattan(start, end));
    let mut cursor = start;
    if horizontal_first {
        walk_horizontal(&mut path, &mut cursor, end.x);
        walk_vertical(&mut path, &mut cursor, end.y);
    } else {
        walk_vertical(&mut path, &mut cursor, end.y);
        walk_horizontal(&mut path, &mut cursor, end.x);
    }
    path
}

fn walk_horizontal(path: &mut Vec<Pos>, cursor: &mut Pos, target_x: usize) {
    while cursor.x != target_x {
        cursor.x = if target_x > cursor.x { cursor.x + 1 } else { cursor.x - 1 };
        path.push(*cursor);
    }
}

fn walk_vertical(path: &mut Vec<Pos>, cursor: &mut Pos, target_y: usize) {
    while cursor.y != target_y {
        cursor.y = if target_y > cursor.y { cursor.y + 1 } else { cursor.y - 1 };
        path.push(*cursor);
    }
}
