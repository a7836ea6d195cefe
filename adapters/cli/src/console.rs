//! Console player that reads actions from a line-oriented input.

use std::io::{self, BufRead, Write};

use wumpus_core::{Action, ArrowPath, CommandError, Event, HazardSignals, RoomNumber};
use wumpus_system_hunt::{Player, Prompt};

use crate::messages;

/// One parsed line of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Input {
    /// An action to submit to the hunt.
    Action(Action),
    /// A request to print every room of the cave.
    Debug,
}

/// Parses a single line of input.
///
/// The first non-blank character selects the action; room numbers follow,
/// separated by anything that is not a digit. A shot reads at most `range`
/// rooms. Lines that name no known action yield `None`.
pub(crate) fn parse_line(line: &str, range: usize) -> Option<Input> {
    let line = line.trim_start();
    let mut chars = line.chars();
    let kind = chars.next()?;
    let mut rooms = chars
        .as_str()
        .split(|c: char| !c.is_ascii_digit())
        .filter(|token| !token.is_empty())
        // Numbers too large for a label name no room.
        .map(|token| RoomNumber::new(token.parse().unwrap_or(0)));

    match kind {
        'm' => rooms
            .next()
            .map(|target| Input::Action(Action::Move { target })),
        's' => Some(Input::Action(Action::Shoot {
            path: rooms.take(range).collect::<ArrowPath>(),
        })),
        'q' => Some(Input::Action(Action::Quit)),
        'd' => Some(Input::Debug),
        _ => None,
    }
}

/// Player on the other side of a terminal.
#[derive(Debug)]
pub(crate) struct ConsolePlayer<I, O> {
    input: I,
    output: O,
    arrow_range: usize,
}

impl<I: BufRead, O: Write> ConsolePlayer<I, O> {
    /// Creates a player reading from `input` and writing to `output`.
    pub(crate) fn new(input: I, output: O, arrow_range: usize) -> Self {
        Self {
            input,
            output,
            arrow_range,
        }
    }

    /// Writes free-form text such as the game info.
    pub(crate) fn show(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    #[cfg(test)]
    fn into_output(self) -> O {
        self.output
    }
}

impl<I: BufRead, O: Write> Player for ConsolePlayer<I, O> {
    type Error = io::Error;

    fn sense(&mut self, signals: HazardSignals) -> io::Result<()> {
        writeln!(self.output)?;
        for line in messages::hazard_lines(signals) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn choose_action(&mut self, prompt: &Prompt) -> io::Result<Action> {
        loop {
            self.show(&messages::prompt(prompt))?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("input closed; fleeing the cave");
                return Ok(Action::Quit);
            }

            match parse_line(&line, self.arrow_range) {
                Some(Input::Action(action)) => return Ok(action),
                Some(Input::Debug) => self.show(&messages::debug_dump(&prompt.cave))?,
                None => tracing::trace!("ignoring input {:?}", line.trim_end()),
            }
        }
    }

    fn action_rejected(&mut self, _action: &Action, reason: &CommandError) -> io::Result<()> {
        writeln!(self.output, "You cannot do that: {reason}.")
    }

    fn observe(&mut self, events: &[Event]) -> io::Result<()> {
        for line in events.iter().filter_map(messages::event_line) {
            writeln!(self.output, "{line}")?;
        }
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wumpus_core::{Outcome, RoomSnapshot};

    fn number(value: u8) -> RoomNumber {
        RoomNumber::new(value)
    }

    fn shoot(rooms: &[u8]) -> Option<Input> {
        Some(Input::Action(Action::Shoot {
            path: rooms.iter().copied().map(RoomNumber::new).collect(),
        }))
    }

    fn prompt() -> Prompt {
        Prompt {
            room: number(1),
            tunnels: [number(2), number(5), number(6)],
            arrows: 5,
            cave: vec![RoomSnapshot {
                number: number(1),
                neighbors: [number(2), number(5), number(6)],
                player: true,
                wumpus: false,
                bat: false,
                pit: false,
            }],
        }
    }

    #[test]
    fn parses_moves() {
        assert_eq!(
            parse_line("m 12\n", 3),
            Some(Input::Action(Action::Move { target: number(12) }))
        );
        assert_eq!(
            parse_line("  m4", 3),
            Some(Input::Action(Action::Move { target: number(4) }))
        );
        assert_eq!(parse_line("m\n", 3), None);
    }

    #[test]
    fn parses_shots_with_any_separator() {
        assert_eq!(parse_line("s 2-3-4", 3), shoot(&[2, 3, 4]));
        assert_eq!(parse_line("s 2 3,4", 3), shoot(&[2, 3, 4]));
        assert_eq!(parse_line("s 7", 3), shoot(&[7]));
        assert_eq!(parse_line("s", 3), shoot(&[]));
    }

    #[test]
    fn shots_are_cut_to_the_arrow_range() {
        assert_eq!(parse_line("s 1-2-3-4-5", 3), shoot(&[1, 2, 3]));
        assert_eq!(parse_line("s 1-2-3-4-5", 5), shoot(&[1, 2, 3, 4, 5]));
    }

    #[test]
    fn oversized_numbers_name_no_room() {
        assert_eq!(parse_line("s 2-999", 3), shoot(&[2, 0]));
    }

    #[test]
    fn parses_quit_and_debug() {
        assert_eq!(parse_line("q", 3), Some(Input::Action(Action::Quit)));
        assert_eq!(parse_line("d\n", 3), Some(Input::Debug));
        assert_eq!(parse_line("x 3", 3), None);
        assert_eq!(parse_line("   \n", 3), None);
    }

    #[test]
    fn unknown_input_prompts_again() {
        let input = "jump\nd\nm 5\n".as_bytes();
        let mut player = ConsolePlayer::new(input, Vec::new(), 3);
        let action = player.choose_action(&prompt()).expect("in-memory io");
        assert_eq!(action, Action::Move { target: number(5) });

        let output = String::from_utf8(player.into_output()).expect("utf8 output");
        assert_eq!(output.matches("You are in room 1;").count(), 3);
        assert!(output.contains("1:2,5,6 player\n"));
    }

    #[test]
    fn closed_input_flees_the_cave() {
        let mut player = ConsolePlayer::new(io::empty(), Vec::new(), 3);
        let action = player.choose_action(&prompt()).expect("in-memory io");
        assert_eq!(action, Action::Quit);
    }

    #[test]
    fn senses_and_events_are_printed() {
        let mut player = ConsolePlayer::new(io::empty(), Vec::new(), 3);
        player
            .sense(HazardSignals {
                bat_near: true,
                ..HazardSignals::default()
            })
            .expect("in-memory io");
        player
            .observe(&[
                Event::ArrowShot { remaining: 4 },
                Event::WumpusMoved {
                    from: number(3),
                    to: number(4),
                },
                Event::HuntEnded {
                    outcome: Outcome::PlayerEaten,
                },
            ])
            .expect("in-memory io");

        let output = String::from_utf8(player.into_output()).expect("utf8 output");
        assert_eq!(
            output,
            "\nYou hear flapping!\n\
             You hear the sound of the wumpus moving!\n\
             You have been eaten by the wumpus!\n"
        );
    }
}
