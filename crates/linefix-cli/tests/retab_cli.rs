// crates/linefix-cli/tests/retab_cli.rs

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

fn run_ok(cmd: &mut Command) -> String {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn fixture(dir: &Path) {
    fs::create_dir_all(dir.join("src")).unwrap();
    fs::write(dir.join("src/A.java"), b"a\tb  \n").unwrap();
    fs::write(dir.join("src/B.java"), b"clean\n").unwrap();
    fs::write(dir.join("src/c.txt"), b"\tleft  \n").unwrap();
}

#[cfg(not(windows))]
#[test]
fn retabber_rewrites_java_files_under_root() {
    let dir = tempfile::tempdir().expect("tempdir");
    fixture(dir.path());

    let stdout = run_ok(Command::new(env!("CARGO_BIN_EXE_retabber")).arg(dir.path()));

    assert_eq!(fs::read(dir.path().join("src/A.java")).unwrap(), b"a    b\n");
    assert_eq!(fs::read(dir.path().join("src/B.java")).unwrap(), b"clean\n");
    assert_eq!(fs::read(dir.path().join("src/c.txt")).unwrap(), b"\tleft  \n");
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("A.java"));
}

#[test]
fn retabber_defaults_to_current_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    fixture(dir.path());

    run_ok(Command::new(env!("CARGO_BIN_EXE_retabber")).current_dir(dir.path()));
    let a = fs::read(dir.path().join("src/A.java")).unwrap();
    assert!(!a.contains(&b'\t'));
}

#[test]
fn linefix_retab_dry_run_and_options() {
    let dir = tempfile::tempdir().expect("tempdir");
    fixture(dir.path());

    let stdout = run_ok(Command::new(env!("CARGO_BIN_EXE_linefix")).args([
        "retab",
        dir.path().to_str().unwrap(),
        "--suffix",
        ".txt",
        "--tab-width",
        "2",
        "--dry-run",
    ]));
    assert!(stdout.contains("c.txt"));
    assert_eq!(fs::read(dir.path().join("src/c.txt")).unwrap(), b"\tleft  \n");

    run_ok(Command::new(env!("CARGO_BIN_EXE_linefix")).args([
        "retab",
        dir.path().to_str().unwrap(),
        "--suffix",
        ".txt",
        "--tab-width",
        "2",
    ]));
    let c = fs::read(dir.path().join("src/c.txt")).unwrap();
    assert!(c.starts_with(b"  left"));
    assert_eq!(fs::read(dir.path().join("src/A.java")).unwrap(), b"a\tb  \n");
}

#[test]
fn missing_root_fails_with_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path().join("absent");
    let out = Command::new(env!("CARGO_BIN_EXE_linefix"))
        .args(["retab", root.to_str().unwrap(), "--keep-going"])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("absent"));
}

#[test]
fn zero_tab_width_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = Command::new(env!("CARGO_BIN_EXE_linefix"))
        .args(["retab", dir.path().to_str().unwrap(), "--tab-width", "0"])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
}

#[test]
fn keep_going_prints_rewritten_paths() {
    let dir = tempfile::tempdir().expect("tempdir");
    fixture(dir.path());

    let stdout = run_ok(Command::new(env!("CARGO_BIN_EXE_linefix")).args([
        "retab",
        dir.path().to_str().unwrap(),
        "--keep-going",
    ]));
    assert!(stdout.contains("A.java"));
    assert!(!stdout.contains("B.java"));
}

#[test]
fn closed_stdout_does_not_panic() {
    let dir = tempfile::tempdir().expect("tempdir");
    for i in 0..64 {
        fs::write(dir.path().join(format!("F{i}.java")), b"\tx\n").unwrap();
    }

    let mut child = Command::new(env!("CARGO_BIN_EXE_linefix"))
        .args(["retab", dir.path().to_str().unwrap()])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn command");
    drop(child.stdout.take());
    let out = child.wait_with_output().expect("wait");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_ne!(out.status.code(), Some(101), "stderr: {stderr}");
    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
}
