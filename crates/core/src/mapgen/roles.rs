//! Special-room role assignment: start, end, boss, and treasure rooms.

use crate::rng::Mt19937;

use super::model::{Room, RoomType};

pub(super) const MIN_ROOMS_FOR_BOSS: usize = 4;
pub(super) const TREASURE_CHANCE: f64 = 0.2;

pub(super) fn assign_special_rooms(rng: &mut Mt19937, rooms: &mut [Room]) {
    let Some(last_index) = rooms.len().checked_sub(1) else {
        return;
    };
    rooms[0].room_type = RoomType::Start;
    rooms[last_index].room_type = RoomType::End;

    if rooms.len() >= MIN_ROOMS_FOR_BOSS {
        let boss_index = rng.int_in_range(rooms.len() / 2, rooms.len() - 2);
        rooms[boss_index].room_type = RoomType::Boss;
    }

    if last_index < 2 {
        return;
    }
    for room in &mut rooms[1..last_index] {
        // Only rooms still marked normal draw from the stream.
        if room.room_type == RoomType::Normal && rng.chance(TREASURE_CHANCE) {
            room.room_type = RoomType::Treasure;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of_rooms(count: usize) -> Vec<Room> {
        (0..count).map(|id| Room::new(id, 1 + id * 6, 1, 4, 4)).collect()
    }

    #[test]
    fn empty_room_list_is_left_alone() {
        let mut rng = Mt19937::new(1);
        let mut rooms = Vec::new();
        assign_special_rooms(&mut rng, &mut rooms);
        assert!(rooms.is_empty());
    }

    #[test]
    fn single_room_ends_up_as_the_end_room() {
        let mut rng = Mt19937::new(1);
        let mut rooms = row_of_rooms(1);
        assign_special_rooms(&mut rng, &mut rooms);
        assert_eq!(rooms[0].room_type, RoomType::End);
    }

    #[test]
    fn small_levels_get_start_and_end_but_no_boss() {
        for seed in 0..50 {
            let mut rng = Mt19937::new(seed);
            let mut rooms = row_of_rooms(3);
            assign_special_rooms(&mut rng, &mut rooms);
            assert_eq!(rooms[0].room_type, RoomType::Start);
            assert_eq!(rooms[2].room_type, RoomType::End);
            assert!(rooms.iter().all(|room| room.room_type != RoomType::Boss));
        }
    }

    #[test]
    fn boss_lands_in_the_back_half_before_the_end_room() {
        for seed in 0..200 {
            let mut rng = Mt19937::new(seed);
            let mut rooms = row_of_rooms(9);
            assign_special_rooms(&mut rng, &mut rooms);

            let bosses: Vec<usize> = rooms
                .iter()
                .enumerate()
                .filter(|(_, room)| room.room_type == RoomType::Boss)
                .map(|(index, _)| index)
                .collect();
            assert_eq!(bosses.len(), 1, "seed {seed}");
            assert!((4..=7).contains(&bosses[0]), "seed {seed} put boss at {}", bosses[0]);
            assert_eq!(rooms[0].room_type, RoomType::Start);
            assert_eq!(rooms[8].room_type, RoomType::End);
        }
    }

    #[test]
    fn treasure_rooms_appear_at_roughly_the_configured_rate() {
        let mut treasure = 0;
        let mut eligible = 0;
        for seed in 0..400 {
            let mut rng = Mt19937::new(seed);
            let mut rooms = row_of_rooms(10);
            assign_special_rooms(&mut rng, &mut rooms);
            eligible += 7;
            treasure += rooms.iter().filter(|room| room.room_type == RoomType::Treasure).count();
        }
        let rate = treasure as f64 / eligible as f64;
        assert!((0.15..0.25).contains(&rate), "treasure rate {rate}");
    }
}
