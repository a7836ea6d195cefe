//! Text the console shows to the player.

use std::fmt::Write as _;

use wumpus_core::{
    Event, HazardSignals, HuntRules, Outcome, RoomSnapshot, CONNECTIONS_PER_ROOM, ROOM_COUNT,
};
use wumpus_system_hunt::Prompt;

pub(crate) const WUMPUS_NEAR: &str = "You smell the wumpus!";
pub(crate) const BAT_NEAR: &str = "You hear flapping!";
pub(crate) const PIT_NEAR: &str = "You feel a breeze!";
pub(crate) const CARRIED_BY_BAT: &str = "You are carried away by a bat!";
pub(crate) const WUMPUS_MOVES: &str = "You hear the sound of the wumpus moving!";

/// Introduction and help text printed before the first hunt.
pub(crate) fn game_info(banner: &str, rules: &HuntRules) -> String {
    format!(
        "{banner}\n\
         Your job is to slay the wumpus living in the cave using bow and arrow.\n\
         Each of the {ROOM_COUNT} rooms is connected to {CONNECTIONS_PER_ROOM} other rooms by dark tunnels.\n\
         In addition to the wumpus, the cave has two hazards: bottomless pits and\n\
         giant bats. If you enter a room with a bottomless pit, it's the end of the\n\
         game for you. If you enter a room with a bat, the bat picks you up and\n\
         drops you into another room. If you enter the room with the wumpus or he\n\
         enters yours, he eats you. There are {pits} pits and {bats} bats in the cave.\n\
         When you enter a room you will be told if a hazard is nearby:\n\
         \t\"{WUMPUS_NEAR}\": It's in an adjacent room.\n\
         \t\"{PIT_NEAR}\": One of the adjacent rooms is a bottomless pit.\n\
         \t\"{BAT_NEAR}\": A giant bat is in an adjacent room.\n\
         During each turn you must make a move. The possible moves are:\n\
         \t\"m #\": Move to an adjacent room.\n\
         \t\"s #[-#...]\": Shoot an arrow through the rooms specified. The\n\
         \t\tfirst room number specified must be an adjacent room. The\n\
         \t\trange of an arrow is {range} rooms, and a path will be chosen at\n\
         \t\trandom if not specified. You have {arrows} arrows at the start of\n\
         \t\tthe game.\n\
         \t\"q\": Quit the game and flee the cave.\n\
         Good luck!\n",
        pits = rules.pit_count,
        bats = rules.bat_count,
        range = rules.arrow_range,
        arrows = rules.arrow_count,
    )
}

/// Lines announcing the hazards next to the player, wumpus first.
pub(crate) fn hazard_lines(signals: HazardSignals) -> Vec<&'static str> {
    [
        (signals.wumpus_near, WUMPUS_NEAR),
        (signals.bat_near, BAT_NEAR),
        (signals.pit_near, PIT_NEAR),
    ]
    .into_iter()
    .filter_map(|(near, line)| near.then_some(line))
    .collect()
}

/// Two-line prompt asking for the next action.
pub(crate) fn prompt(prompt: &Prompt) -> String {
    let (last, rest) = match prompt.tunnels.split_last() {
        Some(split) => split,
        None => return String::new(),
    };
    let rest = rest
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "You are in room {}; There are tunnels to rooms {rest}, and {last};\n\
         You have {} arrows remaining; move (m), shoot (s), or quit (q)?\n",
        prompt.room, prompt.arrows
    )
}

/// Line the player hears when an event happens, if any.
pub(crate) fn event_line(event: &Event) -> Option<&'static str> {
    match event {
        Event::PlayerCarriedByBat { .. } => Some(CARRIED_BY_BAT),
        Event::WumpusMoved { .. } => Some(WUMPUS_MOVES),
        Event::HuntEnded { outcome } => outcome_line(*outcome),
        Event::HuntStarted { .. }
        | Event::PlayerMoved { .. }
        | Event::ArrowShot { .. }
        | Event::ArrowAdvanced { .. } => None,
    }
}

/// Closing line for a finished hunt.
pub(crate) fn outcome_line(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::Ongoing => None,
        Outcome::WumpusSlain => Some("Congratulations, you have slain the wumpus!"),
        Outcome::PlayerEaten => Some("You have been eaten by the wumpus!"),
        Outcome::PlayerFell => Some("You have fallen into a bottomless pit!"),
        Outcome::PlayerShotSelf => Some("You have been hit with your own arrow!"),
        Outcome::PlayerQuit => Some("You flee the cave!"),
    }
}

/// One line per room: `number:neighbors` followed by its occupants.
pub(crate) fn debug_dump(cave: &[RoomSnapshot]) -> String {
    let mut dump = String::new();
    for room in cave {
        let neighbors = room
            .neighbors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let _ = write!(dump, "{}:{neighbors}", room.number);
        for (present, label) in [
            (room.player, " player"),
            (room.wumpus, " wumpus"),
            (room.bat, " bat"),
            (room.pit, " pit"),
        ] {
            if present {
                dump.push_str(label);
            }
        }
        dump.push('\n');
    }
    dump
}
