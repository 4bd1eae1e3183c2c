use std::io::{Read, Write};
use std::process::{Command, Stdio};

fn run_binary(args: &[&str], script: &str) -> (bool, String, String) {
    let exe = env!("CARGO_BIN_EXE_chess_board");
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();

    let mut stdout = String::new();
    child.stdout.take().unwrap().read_to_string(&mut stdout).unwrap();
    let mut stderr = String::new();
    child.stderr.take().unwrap().read_to_string(&mut stderr).unwrap();
    let status = child.wait().expect("binary did not exit");
    (status.success(), stdout, stderr)
}

#[test]
fn two_click_game_smoke_test() {
    let (ok, out, _) = run_binary(&[], "e2\ne4\ne7\ne5\ng1\nf3\nlayout\nquit\n");
    assert!(ok);
    assert!(out.contains("selected e2: e4 e3"), "output was: {out}");
    assert!(
        out.contains("rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R"),
        "output was: {out}"
    );
}

#[test]
fn rejected_click_leaves_board_alone() {
    let (ok, out, _) = run_binary(&[], "a1\na5\nlayout\n");
    assert!(ok);
    assert!(out.contains("illegal a1a5"));
    assert!(out.contains("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"));
}

#[test]
fn legacy_flag_changes_pawn_rule() {
    let (ok, out, _) = run_binary(&["--legacy-pawns"], "e2e3\ne2e4\nlayout\n");
    assert!(ok);
    assert!(out.contains("illegal e2e3"));
    assert!(out.contains("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"));
}

#[test]
fn unknown_flag_exits_with_usage() {
    let (ok, _, err) = run_binary(&["--bogus"], "");
    assert!(!ok);
    assert!(err.contains("usage"));
}
