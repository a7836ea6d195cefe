//! Per-room hazard flags and display numbers layered over the fixed graph.

use rand::{seq::SliceRandom, Rng};
use wumpus_core::{RoomIndex, RoomNumber, CONNECTIONS_PER_ROOM, ROOM_COUNT};

use crate::graph;

/// Mutable state of a single room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Room {
    /// Label shown to the player.
    pub(crate) number: RoomNumber,
    pub(crate) wumpus: bool,
    pub(crate) bat: bool,
    pub(crate) pit: bool,
}

impl Room {
    const fn labelled(number: RoomNumber) -> Self {
        Self {
            number,
            wumpus: false,
            bat: false,
            pit: false,
        }
    }
}

/// Table holding every room of the cave, addressed by stable index.
///
/// Tunnel lists are cached sorted by display number so the order in which
/// rooms are presented never reveals the underlying graph. Sorting changes the
/// presentation order only; the rooms reached are always the graph's.
#[derive(Clone, Debug)]
pub(crate) struct RoomTable {
    rooms: [Room; ROOM_COUNT],
    tunnels: [[RoomIndex; CONNECTIONS_PER_ROOM]; ROOM_COUNT],
}

impl RoomTable {
    /// Creates a hazard-free table with identity display numbers.
    pub(crate) fn new() -> Self {
        let mut table = Self {
            rooms: [Room::labelled(RoomNumber::new(0)); ROOM_COUNT],
            tunnels: [[RoomIndex::new(0); CONNECTIONS_PER_ROOM]; ROOM_COUNT],
        };
        table.reset_display_numbers();
        table
    }

    /// Clears every hazard flag.
    pub(crate) fn reset(&mut self) {
        for room in &mut self.rooms {
            room.wumpus = false;
            room.bat = false;
            room.pit = false;
        }
    }

    /// Labels every room with its stable index plus one.
    pub(crate) fn reset_display_numbers(&mut self) {
        for (index, room) in RoomIndex::all().zip(self.rooms.iter_mut()) {
            room.number = RoomNumber::new(index.get() + 1);
        }
        self.sort_tunnels();
    }

    /// Deals the display numbers out to the rooms in uniformly random order.
    pub(crate) fn shuffle_display_numbers<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut numbers: Vec<RoomNumber> = self.rooms.iter().map(|room| room.number).collect();
        numbers.shuffle(rng);
        for (room, number) in self.rooms.iter_mut().zip(numbers) {
            room.number = number;
        }
        self.sort_tunnels();
    }

    fn sort_tunnels(&mut self) {
        let rooms = &self.rooms;
        for (index, tunnels) in RoomIndex::all().zip(self.tunnels.iter_mut()) {
            *tunnels = graph::neighbors(index);
            tunnels.sort_by_key(|room| rooms[room.slot()].number);
        }
    }

    pub(crate) fn room(&self, index: RoomIndex) -> &Room {
        &self.rooms[index.slot()]
    }

    pub(crate) fn room_mut(&mut self, index: RoomIndex) -> &mut Room {
        &mut self.rooms[index.slot()]
    }

    pub(crate) fn number(&self, index: RoomIndex) -> RoomNumber {
        self.room(index).number
    }

    /// Stable index of the room carrying the provided display number.
    pub(crate) fn index_of(&self, number: RoomNumber) -> Option<RoomIndex> {
        RoomIndex::all().find(|index| self.number(*index) == number)
    }

    /// Rooms adjacent to `index`, ascending by display number.
    pub(crate) fn tunnels(&self, index: RoomIndex) -> [RoomIndex; CONNECTIONS_PER_ROOM] {
        self.tunnels[index.slot()]
    }

    /// The neighbor of `index` labelled `number`, if the two rooms are joined.
    pub(crate) fn tunnel_to(&self, index: RoomIndex, number: RoomNumber) -> Option<RoomIndex> {
        self.tunnels(index)
            .into_iter()
            .find(|neighbor| self.number(*neighbor) == number)
    }

    /// Iterates rooms in stable index order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (RoomIndex, &Room)> {
        RoomIndex::all().zip(self.rooms.iter())
    }
}
