use std::{
    io::Write,
    process::{Command, Stdio},
};

fn play(args: &[&str], input: &str) -> String {
    session(args, input).0
}

/// Runs the binary to completion and returns its stdout and stderr.
fn session(args: &[&str], input: &str) -> (String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_wumpus"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to launch wumpus binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to feed input");
    let output = child.wait_with_output().expect("wumpus binary did not exit");
    assert!(output.status.success(), "wumpus exited with {}", output.status);
    (
        String::from_utf8(output.stdout).expect("utf8 output"),
        String::from_utf8(output.stderr).expect("utf8 diagnostics"),
    )
}

#[test]
fn quitting_flees_the_cave() {
    let output = play(&["--seed", "7"], "q\n");
    assert!(output.starts_with("Welcome to Hunt the Wumpus.\n"));
    assert!(output.contains("You have 5 arrows remaining; move (m), shoot (s), or quit (q)?"));
    assert!(output.ends_with("You flee the cave!\n"));
}

#[test]
fn debug_dump_lists_every_room() {
    let output = play(&["--seed", "11", "--skip-intro"], "d\nq\n");
    assert!(!output.contains("Welcome to Hunt the Wumpus."));
    let rooms: Vec<&str> = output
        .lines()
        .filter(|line| line.split_once(':').is_some_and(|(n, _)| n.parse::<u8>().is_ok()))
        .collect();
    assert_eq!(rooms.len(), 20);
    let holding = |occupant: &str| rooms.iter().filter(|line| line.contains(occupant)).count();
    assert_eq!(holding(" player"), 1);
    assert_eq!(holding(" wumpus"), 1);
    assert_eq!(holding(" bat"), 2);
    assert_eq!(holding(" pit"), 2);
}

#[test]
fn closed_input_ends_the_hunt() {
    let output = play(&["--seed", "3", "--skip-intro"], "");
    assert!(output.ends_with("You flee the cave!\n"));
}

#[test]
fn verbose_flag_traces_the_hunt_on_stderr() {
    let (output, diagnostics) = session(&["--seed", "5", "--skip-intro", "-v"], "q\n");
    assert!(output.ends_with("You flee the cave!\n"));
    assert!(diagnostics.contains("hunt started in room"));
    assert!(diagnostics.contains("PlayerQuit"));
    assert!(!diagnostics.contains("You flee the cave!"));
}
