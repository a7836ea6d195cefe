use wumpus_core::{ArrowPath, Command, Event, Outcome, RoomSnapshot};
use wumpus_world::{self as world, query, World};

#[derive(Debug, PartialEq)]
struct ReplayOutcome {
    events: Vec<Event>,
    snapshot: Vec<RoomSnapshot>,
    outcome: Outcome,
}

/// Plays several hunts with a simple scripted strategy: step through the
/// lowest numbered tunnel, shoot through the highest one, and flee once the
/// quiver is empty.
fn replay(seed: u64) -> ReplayOutcome {
    let mut world = World::seeded(seed);
    let mut events = Vec::new();

    for _ in 0..5 {
        world::apply(&mut world, Command::BeginHunt, &mut events).expect("hunt begins");
        let mut walk = true;
        while query::hunt_in_progress(&world) {
            let tunnels = query::tunnels(&world).expect("hunt in progress");
            walk = !walk;
            let command = if query::arrows_remaining(&world) == 0 {
                Command::Quit
            } else if walk {
                Command::Move { target: tunnels[0] }
            } else {
                Command::Shoot {
                    path: ArrowPath::new(vec![tunnels[2]]),
                }
            };
            world::apply(&mut world, command, &mut events).expect("valid command");
        }
    }

    ReplayOutcome {
        events,
        snapshot: query::debug_snapshot(&world),
        outcome: query::outcome(&world),
    }
}

#[test]
fn identical_seeds_replay_identically() {
    let first = replay(0x42f0_e1eb_d4a5_3c21);
    let second = replay(0x42f0_e1eb_d4a5_3c21);
    assert_eq!(first, second, "replay diverged between runs");
    assert!(first.outcome.is_terminal());

    let hunts_ended = first
        .events
        .iter()
        .filter(|event| matches!(event, Event::HuntEnded { .. }))
        .count();
    assert_eq!(hunts_ended, 5);
}

#[test]
fn different_seeds_shuffle_differently() {
    let first = replay(1);
    let second = replay(2);
    assert_ne!(first.snapshot, second.snapshot);
}
