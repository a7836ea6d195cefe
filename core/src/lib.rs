#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Hunt the Wumpus engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative cave world, and the round-running hunt system. Adapters submit
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then reports [`Event`] values
//! describing what happened inside the cave. Read access never goes through
//! commands; it uses the world's query functions and the snapshot types defined
//! here.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Hunt the Wumpus.";

/// Number of rooms carved into the cave.
pub const ROOM_COUNT: usize = 20;

/// Number of tunnels leaving every room.
pub const CONNECTIONS_PER_ROOM: usize = 3;

/// Rooms that are not hazards but still need a distinct placement: the player
/// and the wumpus.
const ACTOR_COUNT: usize = 2;

/// Permanent identity of a room, used for every adjacency and logic operation.
///
/// Indices run from `0` to [`ROOM_COUNT`] - 1 and never change while the
/// process lives. They are never shown to the player.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RoomIndex(u8);

impl RoomIndex {
    /// Creates a new room index with the provided numeric value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the index.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Position of the room inside dense per-room tables.
    #[must_use]
    pub const fn slot(&self) -> usize {
        self.0 as usize
    }

    /// Reports whether the index addresses a room of the cave.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.slot() < ROOM_COUNT
    }

    /// Iterates every room index of the cave in ascending order.
    pub fn all() -> impl Iterator<Item = RoomIndex> {
        (0..ROOM_COUNT as u8).map(RoomIndex)
    }
}

/// Player-visible label of a room.
///
/// Display numbers are shuffled at the start of every hunt, so the same number
/// names different rooms from one hunt to the next.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RoomNumber(u8);

impl RoomNumber {
    /// Creates a new display number with the provided value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Retrieves the numeric value of the display number.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rooms the player asks an arrow to fly through, in flight order.
///
/// Entry `i` is the desired destination of hop `i`. Hops past the end of the
/// path are unspecified and pick a random tunnel. An empty path is a wild shot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrowPath {
    rooms: Vec<RoomNumber>,
}

impl ArrowPath {
    /// Creates a path that follows the provided rooms.
    #[must_use]
    pub fn new(rooms: Vec<RoomNumber>) -> Self {
        Self { rooms }
    }

    /// Creates a path that leaves every hop to chance.
    #[must_use]
    pub fn wild() -> Self {
        Self::default()
    }

    /// Room the arrow is asked to enter first, if any.
    #[must_use]
    pub fn first(&self) -> Option<RoomNumber> {
        self.rooms.first().copied()
    }

    /// Desired destination for the provided hop.
    #[must_use]
    pub fn hop(&self, hop: usize) -> Option<RoomNumber> {
        self.rooms.get(hop).copied()
    }

    /// Number of hops the player specified.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Reports whether the path leaves every hop to chance.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterator over the specified rooms in flight order.
    pub fn iter(&self) -> impl Iterator<Item = &RoomNumber> {
        self.rooms.iter()
    }
}

impl FromIterator<RoomNumber> for ArrowPath {
    fn from_iter<I: IntoIterator<Item = RoomNumber>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Actions a player may take during a single round of a hunt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Walk through a tunnel into an adjacent room.
    Move {
        /// Display number of the adjacent room to enter.
        target: RoomNumber,
    },
    /// Loose an arrow through the provided rooms.
    Shoot {
        /// Rooms the arrow should follow.
        path: ArrowPath,
    },
    /// Flee the cave, ending the hunt.
    Quit,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Starts a fresh hunt: clears hazards, refills the quiver, shuffles the
    /// room numbers and places the player, the wumpus, the bats and the pits.
    BeginHunt,
    /// Starts a fresh hunt from an explicit layout with identity room numbers.
    BeginHuntWithLayout {
        /// Rooms assigned to the player, the wumpus and every hazard.
        layout: HuntLayout,
    },
    /// Requests that the player walk into an adjacent room.
    Move {
        /// Display number of the adjacent room to enter.
        target: RoomNumber,
    },
    /// Requests that the player shoot an arrow.
    Shoot {
        /// Rooms the arrow should follow.
        path: ArrowPath,
    },
    /// Requests that the player flee the cave.
    Quit,
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        match action {
            Action::Move { target } => Self::Move { target },
            Action::Shoot { path } => Self::Shoot { path },
            Action::Quit => Self::Quit,
        }
    }
}

/// Events reported by the world after processing commands.
///
/// Rooms are identified by display number since events are meant for the
/// player-facing side of the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Announces that a new hunt began.
    HuntStarted {
        /// Room the player starts in.
        room: RoomNumber,
        /// Arrows in the player's quiver.
        arrows: u32,
    },
    /// Confirms that the player walked into an adjacent room.
    PlayerMoved {
        /// Room the player left.
        from: RoomNumber,
        /// Room the player entered.
        to: RoomNumber,
    },
    /// Reports that a bat snatched the player and dropped them elsewhere.
    PlayerCarriedByBat {
        /// Room holding the bat.
        from: RoomNumber,
        /// Room the player was dropped into.
        to: RoomNumber,
    },
    /// Confirms that an arrow left the player's bow.
    ArrowShot {
        /// Arrows left in the quiver after the shot.
        remaining: u32,
    },
    /// Reports a single hop of an arrow in flight.
    ArrowAdvanced {
        /// Room the arrow left.
        from: RoomNumber,
        /// Room the arrow entered.
        to: RoomNumber,
    },
    /// Reports that the wumpus woke up and changed rooms.
    WumpusMoved {
        /// Room the wumpus left.
        from: RoomNumber,
        /// Room the wumpus entered.
        to: RoomNumber,
    },
    /// Announces that the hunt reached a terminal outcome.
    HuntEnded {
        /// Terminal outcome of the hunt.
        outcome: Outcome,
    },
}

/// State of a hunt, either still running or finished for a specific reason.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The hunt is still in progress.
    #[default]
    Ongoing,
    /// The player met the wumpus in the same room.
    PlayerEaten,
    /// The player walked or was dropped into a bottomless pit.
    PlayerFell,
    /// The player's own arrow flew back into their room.
    PlayerShotSelf,
    /// An arrow found the wumpus.
    WumpusSlain,
    /// The player fled the cave.
    PlayerQuit,
}

impl Outcome {
    /// Reports whether the outcome ends the hunt.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// Hazards sensed from the rooms adjacent to the player.
///
/// The signals are independent; every applicable one fires in the same round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HazardSignals {
    /// The wumpus lurks in an adjacent room.
    pub wumpus_near: bool,
    /// A bat roosts in an adjacent room.
    pub bat_near: bool,
    /// A bottomless pit opens in an adjacent room.
    pub pit_near: bool,
}

impl HazardSignals {
    /// Reports whether any hazard is nearby.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.wumpus_near || self.bat_near || self.pit_near
    }
}

/// Immutable representation of a single room used for debug dumps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    /// Display number of the room.
    pub number: RoomNumber,
    /// Display numbers of the adjacent rooms, ascending.
    pub neighbors: [RoomNumber; CONNECTIONS_PER_ROOM],
    /// The player stands in the room.
    pub player: bool,
    /// The wumpus lurks in the room.
    pub wumpus: bool,
    /// A bat roosts in the room.
    pub bat: bool,
    /// A bottomless pit opens in the room.
    pub pit: bool,
}

/// Tunable parameters of a hunt. The cave topology itself is fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HuntRules {
    /// Number of rooms holding a bat.
    pub bat_count: usize,
    /// Number of rooms holding a bottomless pit.
    pub pit_count: usize,
    /// Arrows in the quiver when a hunt starts.
    pub arrow_count: u32,
    /// Maximum number of hops an arrow flies.
    pub arrow_range: usize,
}

impl Default for HuntRules {
    fn default() -> Self {
        Self {
            bat_count: 2,
            pit_count: 2,
            arrow_count: 5,
            arrow_range: 3,
        }
    }
}

impl HuntRules {
    /// Number of distinct rooms a placement assigns: player, wumpus and hazards.
    ///
    /// Saturates at `usize::MAX` for counts no cave could hold.
    #[must_use]
    pub const fn placements(&self) -> usize {
        ACTOR_COUNT
            .saturating_add(self.bat_count)
            .saturating_add(self.pit_count)
    }

    /// Verifies that hunts played under these rules can be set up.
    pub fn validate(&self) -> Result<(), RulesError> {
        let placements = self.placements();
        if placements > ROOM_COUNT {
            return Err(RulesError::TooManyPlacements {
                placements,
                rooms: ROOM_COUNT,
            });
        }
        if self.arrow_range == 0 || self.arrow_range > ROOM_COUNT {
            return Err(RulesError::ArrowRangeOutOfBounds {
                range: self.arrow_range,
                max: ROOM_COUNT,
            });
        }
        Ok(())
    }
}

/// Explicit assignment of the player, the wumpus and the hazards to rooms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuntLayout {
    /// Room the player starts in.
    pub player: RoomIndex,
    /// Room the wumpus starts in.
    pub wumpus: RoomIndex,
    /// Rooms holding a bat.
    pub bats: Vec<RoomIndex>,
    /// Rooms holding a bottomless pit.
    pub pits: Vec<RoomIndex>,
}

impl HuntLayout {
    /// Iterates the assigned rooms in draw order: player, wumpus, bats, pits.
    pub fn rooms(&self) -> impl Iterator<Item = RoomIndex> + '_ {
        [self.player, self.wumpus]
            .into_iter()
            .chain(self.bats.iter().copied())
            .chain(self.pits.iter().copied())
    }

    /// Verifies that the layout fits the rules and assigns pairwise distinct rooms.
    pub fn validate(&self, rules: &HuntRules) -> Result<(), LayoutError> {
        if self.bats.len() != rules.bat_count {
            return Err(LayoutError::BatCount {
                expected: rules.bat_count,
                found: self.bats.len(),
            });
        }
        if self.pits.len() != rules.pit_count {
            return Err(LayoutError::PitCount {
                expected: rules.pit_count,
                found: self.pits.len(),
            });
        }

        let mut claimed = [false; ROOM_COUNT];
        for room in self.rooms() {
            if !room.is_valid() {
                return Err(LayoutError::RoomOutOfRange { room });
            }
            if claimed[room.slot()] {
                return Err(LayoutError::Overlap { room });
            }
            claimed[room.slot()] = true;
        }
        Ok(())
    }
}

/// Reasons a set of hunt rules cannot be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// More distinct placements are required than the cave has rooms.
    #[error("{placements} distinct placements do not fit into {rooms} rooms")]
    TooManyPlacements {
        /// Distinct rooms the rules require.
        placements: usize,
        /// Rooms available in the cave.
        rooms: usize,
    },
    /// The arrow range is zero or exceeds the number of rooms.
    #[error("arrow range {range} must be between 1 and {max}")]
    ArrowRangeOutOfBounds {
        /// Requested arrow range.
        range: usize,
        /// Largest supported arrow range.
        max: usize,
    },
}

/// Reasons an explicit hunt layout is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The layout references a room outside the cave.
    #[error("room index {} is outside the cave", .room.get())]
    RoomOutOfRange {
        /// Offending room index.
        room: RoomIndex,
    },
    /// The layout assigns the same room twice.
    #[error("room index {} is assigned more than once", .room.get())]
    Overlap {
        /// Room assigned more than once.
        room: RoomIndex,
    },
    /// The layout does not place the number of bats the rules require.
    #[error("layout places {found} bats, rules require {expected}")]
    BatCount {
        /// Bats required by the rules.
        expected: usize,
        /// Bats present in the layout.
        found: usize,
    },
    /// The layout does not place the number of pits the rules require.
    #[error("layout places {found} pits, rules require {expected}")]
    PitCount {
        /// Pits required by the rules.
        expected: usize,
        /// Pits present in the layout.
        found: usize,
    },
}

/// Reasons the world refuses to execute a command.
///
/// A refused command never mutates the world.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    /// An action was submitted before any hunt began.
    #[error("no hunt is in progress")]
    HuntNotStarted,
    /// An action was submitted after the hunt ended.
    #[error("the hunt is already over ({outcome:?})")]
    HuntOver {
        /// Terminal outcome of the finished hunt.
        outcome: Outcome,
    },
    /// The requested room is not reachable through a tunnel.
    #[error("room {target} is not adjacent to room {room}")]
    NotAdjacent {
        /// Room the player stands in.
        room: RoomNumber,
        /// Room the player asked for.
        target: RoomNumber,
    },
    /// The player has no arrows left.
    #[error("the quiver is empty")]
    QuiverEmpty,
    /// The arrow path lists more rooms than an arrow can fly.
    #[error("arrow path lists {len} rooms but arrows fly at most {range}")]
    PathTooLong {
        /// Rooms listed in the path.
        len: usize,
        /// Maximum number of hops.
        range: usize,
    },
    /// The provided layout cannot be installed.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
