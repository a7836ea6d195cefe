//! Random distinct-room placement of the player, the wumpus and the hazards.

use rand::Rng;
use wumpus_core::{HuntLayout, HuntRules, RoomIndex, ROOM_COUNT};

use crate::rooms::RoomTable;

/// Picks a room uniformly at random among every room of the cave.
pub(crate) fn random_room<R: Rng + ?Sized>(rng: &mut R) -> RoomIndex {
    RoomIndex::new(rng.gen_range(0..ROOM_COUNT) as u8)
}

/// Draws distinct rooms for the player, the wumpus, the bats and the pits, in
/// that order.
///
/// Each draw is resampled until it misses every earlier draw. The rules must
/// have been validated: fewer rooms are excluded than the cave holds, so every
/// draw terminates.
pub(crate) fn draw_layout<R: Rng + ?Sized>(rules: &HuntRules, rng: &mut R) -> HuntLayout {
    let mut drawn: Vec<RoomIndex> = Vec::with_capacity(rules.placements());
    for _ in 0..rules.placements() {
        let room = draw_excluding(&drawn, rng);
        drawn.push(room);
    }

    let pits = drawn.split_off(2 + rules.bat_count);
    let bats = drawn.split_off(2);
    HuntLayout {
        player: drawn[0],
        wumpus: drawn[1],
        bats,
        pits,
    }
}

fn draw_excluding<R: Rng + ?Sized>(excluded: &[RoomIndex], rng: &mut R) -> RoomIndex {
    debug_assert!(
        excluded.len() < ROOM_COUNT,
        "cannot draw a room distinct from all {} rooms",
        excluded.len()
    );
    loop {
        let candidate = random_room(rng);
        if !excluded.contains(&candidate) {
            return candidate;
        }
    }
}

/// Marks the wumpus, bat and pit rooms of `layout` in the table.
pub(crate) fn mark_hazards(rooms: &mut RoomTable, layout: &HuntLayout) {
    rooms.room_mut(layout.wumpus).wumpus = true;
    for bat in &layout.bats {
        rooms.room_mut(*bat).bat = true;
    }
    for pit in &layout.pits {
        rooms.room_mut(*pit).pit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn layouts_assign_pairwise_distinct_rooms() {
        let rules = HuntRules::default();
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let layout = draw_layout(&rules, &mut rng);
            assert_eq!(layout.bats.len(), 2);
            assert_eq!(layout.pits.len(), 2);
            assert_eq!(layout.validate(&rules), Ok(()));
            assert_ne!(layout.player, layout.wumpus);
        }
    }

    #[test]
    fn crowded_rules_still_place_every_hazard() {
        let rules = HuntRules {
            bat_count: 9,
            pit_count: 9,
            ..HuntRules::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let layout = draw_layout(&rules, &mut rng);
        assert_eq!(layout.rooms().count(), ROOM_COUNT);
        assert_eq!(layout.validate(&rules), Ok(()));
    }

    #[test]
    fn draws_reach_every_room() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut seen = [false; ROOM_COUNT];
        for _ in 0..1_000 {
            seen[random_room(&mut rng).slot()] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn marking_flags_exactly_the_layout_rooms() {
        let layout = HuntLayout {
            player: RoomIndex::new(0),
            wumpus: RoomIndex::new(7),
            bats: vec![RoomIndex::new(3), RoomIndex::new(12)],
            pits: vec![RoomIndex::new(15), RoomIndex::new(19)],
        };
        let mut rooms = RoomTable::new();
        mark_hazards(&mut rooms, &layout);

        let wumpus_rooms: Vec<u8> = rooms
            .iter()
            .filter(|(_, room)| room.wumpus)
            .map(|(index, _)| index.get())
            .collect();
        let bat_rooms: Vec<u8> = rooms
            .iter()
            .filter(|(_, room)| room.bat)
            .map(|(index, _)| index.get())
            .collect();
        let pit_rooms: Vec<u8> = rooms
            .iter()
            .filter(|(_, room)| room.pit)
            .map(|(index, _)| index.get())
            .collect();
        assert_eq!(wumpus_rooms, [7]);
        assert_eq!(bat_rooms, [3, 12]);
        assert_eq!(pit_rooms, [15, 19]);
        assert!(!rooms.room(layout.player).wumpus);
    }
}
