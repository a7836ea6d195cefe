//! Hazard resolution for the player's arrival and the wumpus's wandering.

use rand::Rng;
use wumpus_core::{Event, Outcome, RoomIndex, CONNECTIONS_PER_ROOM};

use crate::{placement::random_room, rooms::RoomTable};

/// Resolves whatever waits in the room the player just entered.
///
/// A bat drops the player into a uniformly random room, which is then resolved
/// in turn, so a single arrival may chain through several bats. The wumpus
/// takes precedence over a pit, and both end the hunt.
pub(crate) fn resolve_arrival<R: Rng + ?Sized>(
    rooms: &RoomTable,
    player: &mut RoomIndex,
    rng: &mut R,
    out_events: &mut Vec<Event>,
) -> Outcome {
    loop {
        let room = rooms.room(*player);
        if room.wumpus {
            return Outcome::PlayerEaten;
        }
        if room.pit {
            return Outcome::PlayerFell;
        }
        if !room.bat {
            return Outcome::Ongoing;
        }

        let drop = random_room(rng);
        tracing::trace!("bat carries player from {} to {}", room.number, rooms.number(drop));
        out_events.push(Event::PlayerCarriedByBat {
            from: room.number,
            to: rooms.number(drop),
        });
        *player = drop;
    }
}

/// Moves the wumpus through a uniformly random tunnel of its room.
///
/// The wumpus may walk back the way it came. Entering the player's room eats
/// the player.
pub(crate) fn relocate_wumpus<R: Rng + ?Sized>(
    rooms: &mut RoomTable,
    wumpus: &mut RoomIndex,
    player: RoomIndex,
    rng: &mut R,
    out_events: &mut Vec<Event>,
) -> Outcome {
    let from = *wumpus;
    let to = rooms.tunnels(from)[rng.gen_range(0..CONNECTIONS_PER_ROOM)];

    rooms.room_mut(from).wumpus = false;
    rooms.room_mut(to).wumpus = true;
    *wumpus = to;
    out_events.push(Event::WumpusMoved {
        from: rooms.number(from),
        to: rooms.number(to),
    });

    if to == player {
        Outcome::PlayerEaten
    } else {
        Outcome::Ongoing
    }
}
