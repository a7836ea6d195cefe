#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative cave state for Hunt the Wumpus.
//!
//! The [`World`] owns the rooms, the positions of the player and the wumpus,
//! the quiver and the hunt outcome, together with the single random source
//! every draw of a hunt comes from. Mutations go through [`apply`]; reads go
//! through the [`query`] module.

mod arrow;
mod graph;
mod hazards;
mod placement;
mod rooms;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wumpus_core::{
    ArrowPath, Command, CommandError, Event, HuntLayout, HuntRules, Outcome, RoomIndex,
    RoomNumber, RulesError, WELCOME_BANNER,
};

use crate::{arrow::Flight, rooms::RoomTable};

/// Positions and counters of the hunt in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct HuntState {
    player: RoomIndex,
    wumpus: RoomIndex,
    arrows: u32,
    outcome: Outcome,
}

/// Represents the authoritative cave.
///
/// The cave is built once; every hunt resets its hazards and display numbers
/// but never its tunnels. `R` is the random source used for every draw, owned
/// for the lifetime of the world and never reseeded.
#[derive(Debug)]
pub struct World<R = ChaCha8Rng> {
    banner: &'static str,
    rules: HuntRules,
    rooms: RoomTable,
    hunt: Option<HuntState>,
    rng: R,
}

impl World<ChaCha8Rng> {
    /// Creates a cave with default rules seeded from operating system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Creates a cave with default rules and a reproducible random source.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for World<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> World<R> {
    /// Creates a cave with default rules drawing from the provided random source.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self::build(HuntRules::default(), rng)
    }

    /// Creates a cave playing by the provided rules.
    ///
    /// Rules that cannot be set up, such as more hazards than rooms, are
    /// rejected here rather than when a hunt begins.
    pub fn with_rules(rules: HuntRules, rng: R) -> Result<Self, RulesError> {
        rules.validate()?;
        Ok(Self::build(rules, rng))
    }

    fn build(rules: HuntRules, rng: R) -> Self {
        Self {
            banner: WELCOME_BANNER,
            rules,
            rooms: RoomTable::new(),
            hunt: None,
            rng,
        }
    }

    fn begin_hunt(&mut self, out_events: &mut Vec<Event>) {
        self.rooms.reset();
        self.rooms.shuffle_display_numbers(&mut self.rng);
        let layout = placement::draw_layout(&self.rules, &mut self.rng);
        self.install(&layout, out_events);
    }

    fn begin_hunt_with_layout(
        &mut self,
        layout: &HuntLayout,
        out_events: &mut Vec<Event>,
    ) -> Result<(), CommandError> {
        layout.validate(&self.rules)?;
        self.rooms.reset();
        self.rooms.reset_display_numbers();
        self.install(layout, out_events);
        Ok(())
    }

    fn install(&mut self, layout: &HuntLayout, out_events: &mut Vec<Event>) {
        placement::mark_hazards(&mut self.rooms, layout);
        let hunt = HuntState {
            player: layout.player,
            wumpus: layout.wumpus,
            arrows: self.rules.arrow_count,
            outcome: Outcome::Ongoing,
        };
        self.hunt = Some(hunt);

        let room = self.rooms.number(hunt.player);
        tracing::debug!(
            "hunt started in room {room} with {} arrows; wumpus in room {}",
            hunt.arrows,
            self.rooms.number(hunt.wumpus)
        );
        out_events.push(Event::HuntStarted {
            room,
            arrows: hunt.arrows,
        });
    }

    fn move_player(
        &mut self,
        target: RoomNumber,
        out_events: &mut Vec<Event>,
    ) -> Result<(), CommandError> {
        let mut hunt = self.active_hunt()?;
        let destination = self.check_move(&hunt, target)?;

        out_events.push(Event::PlayerMoved {
            from: self.rooms.number(hunt.player),
            to: target,
        });
        hunt.player = destination;
        let outcome =
            hazards::resolve_arrival(&self.rooms, &mut hunt.player, &mut self.rng, out_events);
        self.conclude(hunt, outcome, out_events);
        Ok(())
    }

    fn shoot(&mut self, path: &ArrowPath, out_events: &mut Vec<Event>) -> Result<(), CommandError> {
        let mut hunt = self.active_hunt()?;
        self.check_shot(&hunt, path)?;

        hunt.arrows -= 1;
        out_events.push(Event::ArrowShot {
            remaining: hunt.arrows,
        });

        let flight = arrow::fly(
            &self.rooms,
            hunt.player,
            path,
            self.rules.arrow_range,
            &mut self.rng,
            out_events,
        );
        let outcome = match flight {
            Flight::HitWumpus => Outcome::WumpusSlain,
            Flight::HitPlayer => Outcome::PlayerShotSelf,
            Flight::Missed => hazards::relocate_wumpus(
                &mut self.rooms,
                &mut hunt.wumpus,
                hunt.player,
                &mut self.rng,
                out_events,
            ),
        };
        self.conclude(hunt, outcome, out_events);
        Ok(())
    }

    fn quit(&mut self, out_events: &mut Vec<Event>) -> Result<(), CommandError> {
        let hunt = self.active_hunt()?;
        self.conclude(hunt, Outcome::PlayerQuit, out_events);
        Ok(())
    }

    fn conclude(&mut self, mut hunt: HuntState, outcome: Outcome, out_events: &mut Vec<Event>) {
        hunt.outcome = outcome;
        self.hunt = Some(hunt);
        if outcome.is_terminal() {
            tracing::debug!("hunt ended: {outcome:?}");
            out_events.push(Event::HuntEnded { outcome });
        }
    }
}

impl<R> World<R> {
    /// Returns the hunt in progress, refusing when none has begun or it is over.
    fn active_hunt(&self) -> Result<HuntState, CommandError> {
        match self.hunt {
            None => Err(CommandError::HuntNotStarted),
            Some(hunt) if hunt.outcome.is_terminal() => Err(CommandError::HuntOver {
                outcome: hunt.outcome,
            }),
            Some(hunt) => Ok(hunt),
        }
    }

    fn check_move(&self, hunt: &HuntState, target: RoomNumber) -> Result<RoomIndex, CommandError> {
        self.rooms
            .tunnel_to(hunt.player, target)
            .ok_or(CommandError::NotAdjacent {
                room: self.rooms.number(hunt.player),
                target,
            })
    }

    fn check_shot(&self, hunt: &HuntState, path: &ArrowPath) -> Result<(), CommandError> {
        if hunt.arrows == 0 {
            return Err(CommandError::QuiverEmpty);
        }
        if path.len() > self.rules.arrow_range {
            return Err(CommandError::PathTooLong {
                len: path.len(),
                range: self.rules.arrow_range,
            });
        }
        if let Some(first) = path.first() {
            let _ = self.check_move(hunt, first)?;
        }
        Ok(())
    }
}

/// Applies the provided command to the world.
///
/// Refused commands return an error and leave the world untouched; terminal
/// outcomes such as being eaten are not errors and are reported as events.
pub fn apply<R: Rng>(
    world: &mut World<R>,
    command: Command,
    out_events: &mut Vec<Event>,
) -> Result<(), CommandError> {
    match command {
        Command::BeginHunt => {
            world.begin_hunt(out_events);
            Ok(())
        }
        Command::BeginHuntWithLayout { layout } => world.begin_hunt_with_layout(&layout, out_events),
        Command::Move { target } => world.move_player(target, out_events),
        Command::Shoot { path } => world.shoot(&path, out_events),
        Command::Quit => world.quit(out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use wumpus_core::{
        Action, ArrowPath, CommandError, HazardSignals, HuntRules, Outcome, RoomIndex,
        RoomNumber, RoomSnapshot, CONNECTIONS_PER_ROOM,
    };

    use super::World;

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner<R>(world: &World<R>) -> &'static str {
        world.banner
    }

    /// Rules the cave was built with.
    #[must_use]
    pub fn rules<R>(world: &World<R>) -> &HuntRules {
        &world.rules
    }

    /// Reports whether a hunt has begun and not yet ended.
    #[must_use]
    pub fn hunt_in_progress<R>(world: &World<R>) -> bool {
        world.active_hunt().is_ok()
    }

    /// Reports whether the latest hunt reached a terminal outcome.
    #[must_use]
    pub fn is_hunt_over<R>(world: &World<R>) -> bool {
        outcome(world).is_terminal()
    }

    /// Outcome of the latest hunt; [`Outcome::Ongoing`] before the first hunt.
    #[must_use]
    pub fn outcome<R>(world: &World<R>) -> Outcome {
        world.hunt.map_or(Outcome::Ongoing, |hunt| hunt.outcome)
    }

    /// Hazards lurking in the rooms adjacent to the player.
    #[must_use]
    pub fn hazard_signals<R>(world: &World<R>) -> HazardSignals {
        let Some(hunt) = world.hunt else {
            return HazardSignals::default();
        };

        let mut signals = HazardSignals::default();
        for neighbor in world.rooms.tunnels(hunt.player) {
            let room = world.rooms.room(neighbor);
            signals.wumpus_near |= room.wumpus;
            signals.bat_near |= room.bat;
            signals.pit_near |= room.pit;
        }
        signals
    }

    /// Reports whether the player may walk into the room labelled `target`.
    #[must_use]
    pub fn can_move<R>(world: &World<R>, target: RoomNumber) -> bool {
        world
            .active_hunt()
            .and_then(|hunt| world.check_move(&hunt, target))
            .is_ok()
    }

    /// Reports whether the player may shoot an arrow along `path`.
    ///
    /// Requires an arrow in the quiver, a path no longer than the arrow range
    /// and, when the path names rooms, a first room adjacent to the player.
    #[must_use]
    pub fn can_shoot<R>(world: &World<R>, path: &ArrowPath) -> bool {
        world
            .active_hunt()
            .and_then(|hunt| world.check_shot(&hunt, path))
            .is_ok()
    }

    /// Reports why the world would refuse the action right now, if it would.
    pub fn check_action<R>(world: &World<R>, action: &Action) -> Result<(), CommandError> {
        let hunt = world.active_hunt()?;
        match action {
            Action::Move { target } => world.check_move(&hunt, *target).map(|_| ()),
            Action::Shoot { path } => world.check_shot(&hunt, path),
            Action::Quit => Ok(()),
        }
    }

    /// Reports whether the world would accept the action right now.
    #[must_use]
    pub fn is_valid_action<R>(world: &World<R>, action: &Action) -> bool {
        check_action(world, action).is_ok()
    }

    /// Display number of the player's room.
    #[must_use]
    pub fn player_room<R>(world: &World<R>) -> Option<RoomNumber> {
        world.hunt.map(|hunt| world.rooms.number(hunt.player))
    }

    /// Display numbers of the rooms adjacent to the player, ascending.
    #[must_use]
    pub fn tunnels<R>(world: &World<R>) -> Option<[RoomNumber; CONNECTIONS_PER_ROOM]> {
        world.hunt.map(|hunt| {
            world
                .rooms
                .tunnels(hunt.player)
                .map(|room| world.rooms.number(room))
        })
    }

    /// Arrows left in the player's quiver.
    #[must_use]
    pub fn arrows_remaining<R>(world: &World<R>) -> u32 {
        world.hunt.map_or(0, |hunt| hunt.arrows)
    }

    /// Captures every room for debug dumps, in stable index order.
    #[must_use]
    pub fn debug_snapshot<R>(world: &World<R>) -> Vec<RoomSnapshot> {
        let player = player_index(world);
        world
            .rooms
            .iter()
            .map(|(index, room)| RoomSnapshot {
                number: room.number,
                neighbors: world
                    .rooms
                    .tunnels(index)
                    .map(|neighbor| world.rooms.number(neighbor)),
                player: player == Some(index),
                wumpus: room.wumpus,
                bat: room.bat,
                pit: room.pit,
            })
            .collect()
    }

    /// Stable index of the player's room.
    #[must_use]
    pub fn player_index<R>(world: &World<R>) -> Option<RoomIndex> {
        world.hunt.map(|hunt| hunt.player)
    }

    /// Stable index of the wumpus's room.
    #[must_use]
    pub fn wumpus_index<R>(world: &World<R>) -> Option<RoomIndex> {
        world.hunt.map(|hunt| hunt.wumpus)
    }

    /// Stable indices of the rooms holding a bat, ascending.
    #[must_use]
    pub fn bat_rooms<R>(world: &World<R>) -> Vec<RoomIndex> {
        world
            .rooms
            .iter()
            .filter(|(_, room)| room.bat)
            .map(|(index, _)| index)
            .collect()
    }

    /// Stable indices of the rooms holding a pit, ascending.
    #[must_use]
    pub fn pit_rooms<R>(world: &World<R>) -> Vec<RoomIndex> {
        world
            .rooms
            .iter()
            .filter(|(_, room)| room.pit)
            .map(|(index, _)| index)
            .collect()
    }

    /// Stable indices of the rooms the wumpus flag is set on.
    #[must_use]
    pub fn wumpus_rooms<R>(world: &World<R>) -> Vec<RoomIndex> {
        world
            .rooms
            .iter()
            .filter(|(_, room)| room.wumpus)
            .map(|(index, _)| index)
            .collect()
    }

    /// Display number currently assigned to a room.
    #[must_use]
    pub fn room_number<R>(world: &World<R>, room: RoomIndex) -> RoomNumber {
        world.rooms.number(room)
    }

    /// Stable index of the room labelled `number`.
    #[must_use]
    pub fn room_index<R>(world: &World<R>, number: RoomNumber) -> Option<RoomIndex> {
        world.rooms.index_of(number)
    }

    /// Rooms adjacent to `room`, ascending by display number.
    #[must_use]
    pub fn neighbors<R>(world: &World<R>, room: RoomIndex) -> [RoomIndex; CONNECTIONS_PER_ROOM] {
        world.rooms.tunnels(room)
    }
}
