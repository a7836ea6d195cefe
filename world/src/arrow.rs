//! Room-by-room flight of an arrow through the cave.

use rand::Rng;
use wumpus_core::{ArrowPath, Event, RoomIndex, RoomNumber};

use crate::rooms::RoomTable;

/// How an arrow flight ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flight {
    /// The arrow entered the wumpus's room.
    HitWumpus,
    /// The arrow came back into the archer's room.
    HitPlayer,
    /// The arrow flew its full range without hitting anything.
    Missed,
}

/// Flies an arrow from the player's room for up to `range` hops.
///
/// Every hop follows the path when the requested room is a neighbor other than
/// the room the arrow just left, and otherwise picks uniformly among the
/// neighbors that do not turn the arrow straight back. The flight stops at the
/// first hit; remaining hops are never simulated.
pub(crate) fn fly<R: Rng + ?Sized>(
    rooms: &RoomTable,
    player: RoomIndex,
    path: &ArrowPath,
    range: usize,
    rng: &mut R,
    out_events: &mut Vec<Event>,
) -> Flight {
    let mut current = player;
    let mut previous = None;

    for hop in 0..range {
        let next = next_room(rooms, previous, current, path.hop(hop), rng);
        tracing::trace!(
            "arrow hop {hop}: {} -> {}",
            rooms.number(current),
            rooms.number(next)
        );
        out_events.push(Event::ArrowAdvanced {
            from: rooms.number(current),
            to: rooms.number(next),
        });
        previous = Some(current);
        current = next;

        if rooms.room(current).wumpus {
            return Flight::HitWumpus;
        }
        if current == player {
            return Flight::HitPlayer;
        }
    }

    Flight::Missed
}

fn next_room<R: Rng + ?Sized>(
    rooms: &RoomTable,
    previous: Option<RoomIndex>,
    current: RoomIndex,
    requested: Option<RoomNumber>,
    rng: &mut R,
) -> RoomIndex {
    let aimed = requested
        .and_then(|number| rooms.tunnel_to(current, number))
        .filter(|room| Some(*room) != previous);
    if let Some(room) = aimed {
        return room;
    }

    let candidates: Vec<RoomIndex> = rooms
        .tunnels(current)
        .into_iter()
        .filter(|room| Some(*room) != previous)
        .collect();
    candidates[rng.gen_range(0..candidates.len())]
}
