#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Round-by-round driver that plays a hunt against a [`Player`].
//!
//! Every round discloses the hazards next to the player, asks for an action
//! until the world would accept one, applies it and hands the resulting events
//! back to the player. The driver never reaches into the world's state; it
//! only issues commands and reads queries.

use rand::Rng;
use thiserror::Error;
use wumpus_core::{
    Action, Command, CommandError, Event, HazardSignals, HuntLayout, Outcome, RoomNumber,
    RoomSnapshot, CONNECTIONS_PER_ROOM,
};
use wumpus_world::{self as world, query, World};

/// Everything a player is told before choosing an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    /// Display number of the player's room.
    pub room: RoomNumber,
    /// Rooms reachable through the tunnels of the player's room, ascending.
    pub tunnels: [RoomNumber; CONNECTIONS_PER_ROOM],
    /// Arrows left in the quiver.
    pub arrows: u32,
    /// Every room of the cave, for players that want to cheat.
    pub cave: Vec<RoomSnapshot>,
}

impl Prompt {
    /// Captures the prompt for the hunt in progress.
    fn capture<R>(world: &World<R>) -> Result<Self, CommandError> {
        let room = query::player_room(world).ok_or(CommandError::HuntNotStarted)?;
        let tunnels = query::tunnels(world).ok_or(CommandError::HuntNotStarted)?;
        Ok(Self {
            room,
            tunnels,
            arrows: query::arrows_remaining(world),
            cave: query::debug_snapshot(world),
        })
    }
}

/// Decision maker on the other side of a hunt, such as a console or a script.
pub trait Player {
    /// Failure raised while talking to the player.
    type Error;

    /// Discloses the hazards lurking next to the player's room.
    fn sense(&mut self, signals: HazardSignals) -> Result<(), Self::Error>;

    /// Chooses the action for the current round.
    fn choose_action(&mut self, prompt: &Prompt) -> Result<Action, Self::Error>;

    /// Reports that the chosen action cannot be taken; another one is requested.
    fn action_rejected(
        &mut self,
        action: &Action,
        reason: &CommandError,
    ) -> Result<(), Self::Error> {
        let _ = (action, reason);
        Ok(())
    }

    /// Hands over the events produced by the world.
    fn observe(&mut self, events: &[Event]) -> Result<(), Self::Error>;
}

/// Failure that interrupts a hunt.
#[derive(Debug, Error)]
pub enum HuntError<E> {
    /// The world refused to play the round.
    #[error("the cave refused the round: {0}")]
    World(#[from] CommandError),
    /// The player could not be reached.
    #[error("the player could not act: {0}")]
    Player(E),
}

/// Pure system that orchestrates the rounds of a hunt.
#[derive(Debug, Default)]
pub struct Hunt {
    rounds: u32,
}

impl Hunt {
    /// Number of rounds resolved since the last hunt began.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Begins a new hunt with randomly drawn positions.
    pub fn begin<R: Rng, P: Player>(
        &mut self,
        world: &mut World<R>,
        player: &mut P,
    ) -> Result<(), HuntError<P::Error>> {
        self.start(world, Command::BeginHunt, player)
    }

    /// Begins a new hunt with caller-provided positions.
    pub fn begin_with_layout<R: Rng, P: Player>(
        &mut self,
        world: &mut World<R>,
        layout: HuntLayout,
        player: &mut P,
    ) -> Result<(), HuntError<P::Error>> {
        self.start(world, Command::BeginHuntWithLayout { layout }, player)
    }

    fn start<R: Rng, P: Player>(
        &mut self,
        world: &mut World<R>,
        command: Command,
        player: &mut P,
    ) -> Result<(), HuntError<P::Error>> {
        let mut events = Vec::new();
        world::apply(world, command, &mut events)?;
        self.rounds = 0;
        player.observe(&events).map_err(HuntError::Player)
    }

    /// Plays a single round and returns the outcome it left the hunt in.
    ///
    /// Actions the world would refuse are reported back to the player and a
    /// new one is requested; they never consume the round.
    pub fn play_round<R: Rng, P: Player>(
        &mut self,
        world: &mut World<R>,
        player: &mut P,
    ) -> Result<Outcome, HuntError<P::Error>> {
        let prompt = Prompt::capture(world)?;
        if query::is_hunt_over(world) {
            return Err(CommandError::HuntOver {
                outcome: query::outcome(world),
            }
            .into());
        }

        player
            .sense(query::hazard_signals(world))
            .map_err(HuntError::Player)?;

        let action = loop {
            let action = player.choose_action(&prompt).map_err(HuntError::Player)?;
            match query::check_action(world, &action) {
                Ok(()) => break action,
                Err(reason) => {
                    tracing::debug!("rejected {action:?}: {reason}");
                    player
                        .action_rejected(&action, &reason)
                        .map_err(HuntError::Player)?;
                }
            }
        };

        let mut events = Vec::new();
        world::apply(world, action.into(), &mut events)?;
        self.rounds += 1;
        player.observe(&events).map_err(HuntError::Player)?;

        let outcome = query::outcome(world);
        tracing::trace!("round {} resolved: {outcome:?}", self.rounds);
        Ok(outcome)
    }

    /// Begins a hunt and plays rounds until it reaches a terminal outcome.
    pub fn run<R: Rng, P: Player>(
        &mut self,
        world: &mut World<R>,
        player: &mut P,
    ) -> Result<Outcome, HuntError<P::Error>> {
        self.begin(world, player)?;
        loop {
            let outcome = self.play_round(world, player)?;
            if outcome.is_terminal() {
                tracing::debug!("hunt finished after {} rounds: {outcome:?}", self.rounds);
                return Ok(outcome);
            }
        }
    }
}
