use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_shell(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lsh"))
        .env("USER", "tester")
        .env_remove("LSH_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start lsh");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let output = run_shell("");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "tester> ");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_exit_stops_reading() {
    let output = run_shell("exit 7\nhelp\n");

    assert_eq!(output.status.code(), Some(0));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("built in"));
}

#[test]
fn test_help_on_stdout_errors_on_stderr() {
    let output = run_shell("help\ncd\ndoes-not-exist-xyz\n");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success());
    assert!(stdout.contains("  cd\n  help\n  exit\n"));
    assert!(!stdout.contains("expected argument"));
    assert!(stderr.contains("lsh: expected argument to \"cd\""));
    assert!(stderr.contains("lsh: does-not-exist-xyz: "));
}

#[test]
fn test_children_write_to_inherited_stdout() {
    let output = run_shell("echo hello   world\nfalse\nexit\n");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("hello world\n"));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_cd_affects_later_children() {
    let dir = tempfile::tempdir().unwrap();
    let canonical = std::fs::canonicalize(dir.path()).unwrap();

    let output = run_shell(&format!("cd {}\npwd\n", canonical.display()));

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(&format!("{}\n", canonical.display())));
}

#[test]
fn test_rejects_command_line_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_lsh"))
        .arg("unexpected")
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert!(!output.status.success());
}
