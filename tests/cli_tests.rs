use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_binary(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_guess-my-number"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn guess-my-number");

    {
        let mut stdin = child.stdin.take().expect("stdin not piped");
        // the game may exit before reading everything
        let _ = stdin.write_all(input.as_bytes());
    }

    child.wait_with_output().expect("failed to wait for guess-my-number")
}

const ALL_DIGITS: &str = "0\n1\n2\n3\n4\n5\n6\n7\n8\n9\n";

#[test]
fn win_exits_successfully() {
    for seed in ["0", "1", "42", "12345"] {
        let output = run_binary(&["--seed", seed], ALL_DIGITS);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(output.status.success(), "seed {seed}: {:?}", output.status);
        assert!(stdout.contains("You win"), "seed {seed}: {stdout}");
    }
}

#[test]
fn win_without_arguments() {
    let output = run_binary(&[], ALL_DIGITS);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("You win"));
}

#[test]
fn same_seed_gives_same_game() {
    let first = run_binary(&["--seed", "7"], ALL_DIGITS);
    let second = run_binary(&["--seed", "7"], ALL_DIGITS);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn invalid_guess_exits_with_error() {
    let output = run_binary(&[], "abc\n");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("error: invalid guess"), "{stderr}");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("You win"));
}

#[test]
fn end_of_input_exits_with_error() {
    let output = run_binary(&["--seed", "3"], "");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("error: input ended"), "{stderr}");
}
