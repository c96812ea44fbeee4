//! End-to-end runs of the `minsh` binary with piped standard input.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run_shell(args: &[&str], input: &str, cwd: &Path) -> Output {
    run_shell_bytes(args, input.as_bytes(), cwd)
}

fn run_shell_bytes(args: &[&str], input: &[u8], cwd: &Path) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_minsh"))
        .args(args)
        .current_dir(cwd)
        .env_remove("MINSH_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn minsh");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input)
        .unwrap();
    child.wait_with_output().expect("wait for minsh")
}

#[test]
fn end_of_input_exits_successfully() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_shell(&[], "", tmp.path());
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "> ");
}

#[test]
fn exit_stops_reading() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_shell(&[], "exit 3\nhelp\n", tmp.path());
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "> ");
}

#[test]
fn help_banner_and_custom_prompt() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_shell(&["--prompt", "$ "], "help\n", tmp.path());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(out.status.success());
    assert!(stdout.starts_with("$ minsh\n"), "stdout: {}", stdout);
    assert!(stdout.contains("  cd\n  help\n  exit\n"));
    assert!(stdout.ends_with("$ "));
}

#[test]
fn errors_go_to_stderr_and_the_loop_continues() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_shell(
        &[],
        "cd\ncd no-such-dir\nminsh-test-no-such-program\nexit\n",
        tmp.path(),
    );
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(out.status.success());
    assert!(stderr.contains("sh: expected argument to \"cd\""), "stderr: {}", stderr);
    assert!(stderr.contains("sh: no-such-dir: "), "stderr: {}", stderr);
    assert!(
        stderr.contains("sh: minsh-test-no-such-program: command not found"),
        "stderr: {}",
        stderr
    );
}

#[test]
#[cfg(unix)]
fn external_programs_run_in_the_directory_set_by_cd() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("sub dir")).unwrap();
    let out = run_shell(
        &[],
        "cd 'sub dir'\nsh -c \"echo 'quoted  text' > made-here\"\n",
        tmp.path(),
    );
    assert!(out.status.success());
    let written = std::fs::read_to_string(tmp.path().join("sub dir").join("made-here")).unwrap();
    assert_eq!(written, "quoted  text\n");
}

#[test]
#[cfg(unix)]
fn child_output_is_inherited() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_shell(&["--prompt", ""], "echo a\\ b \"c d\"\nfalse\necho after\n", tmp.path());
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "a b c d\nafter\n");
}

#[test]
fn unknown_flag_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_shell(&["--definitely-not-a-flag"], "", tmp.path());
    assert!(!out.status.success());
}

#[test]
#[cfg(unix)]
fn invalid_utf8_does_not_end_the_session() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run_shell_bytes(&["--prompt", ""], b"echo caf\xe9\necho after\n", tmp.path());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(out.status.success());
    assert!(stdout.ends_with("after\n"), "stdout: {}", stdout);
}

#[test]
#[cfg(unix)]
fn cd_into_directory_named_like_a_flag() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("-x")).unwrap();
    let out = run_shell(&[], "cd -x\nsh -c 'pwd > here'\ncd -x extra\n", tmp.path());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(out.status.success());
    assert!(tmp.path().join("-x").join("here").exists(), "stderr: {}", stderr);
    assert!(stderr.starts_with("sh: cd: "), "stderr: {}", stderr);
}
