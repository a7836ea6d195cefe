//! Fixed tunnel layout of the cave.

use wumpus_core::{RoomIndex, CONNECTIONS_PER_ROOM, ROOM_COUNT};

/// Tunnels leaving every room, keyed by stable room index.
///
/// The rooms and tunnels form a dodecahedron: every room joins three others,
/// every tunnel runs both ways, and the shortest cycle visits five rooms.
const TUNNELS: [[u8; CONNECTIONS_PER_ROOM]; ROOM_COUNT] = [
    [1, 4, 5],
    [2, 0, 7],
    [3, 1, 9],
    [4, 2, 11],
    [0, 3, 13],
    [6, 14, 0],
    [7, 5, 15],
    [8, 6, 1],
    [9, 7, 16],
    [10, 8, 2],
    [11, 9, 17],
    [12, 10, 3],
    [13, 11, 18],
    [14, 12, 4],
    [5, 13, 19],
    [16, 19, 6],
    [17, 15, 8],
    [18, 16, 10],
    [19, 17, 12],
    [15, 18, 14],
];

/// Rooms reachable from `room` through a single tunnel, in table order.
pub(crate) fn neighbors(room: RoomIndex) -> [RoomIndex; CONNECTIONS_PER_ROOM] {
    TUNNELS[room.slot()].map(RoomIndex::new)
}
