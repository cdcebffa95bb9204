//! Tests for handing control to age.

use crate::support::*;

#[test]
fn test_arg0_is_resolved_path() {
    let t = Test::new();

    let output = t.run(&["-d", "in.age"]);
    assert_success(&output);
    assert_stdout_contains(&output, &format!("argv0={}", t.age_path().display()));
}

#[test]
fn test_exit_code_passthrough() {
    let t = Test::new();

    let output = t.cmd().env("FAKE_AGE_EXIT", "42").arg("in").output().unwrap();
    assert_eq!(output.status.code(), Some(42));
}

#[test]
fn test_environment_inherited() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("FAKE_AGE_ENV", "kept as is")
        .arg("in")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "env=kept as is");
}

#[test]
fn test_stdin_inherited() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("FAKE_AGE_READ", "1")
        .arg("-e")
        .write_stdin("plaintext line\n")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "stdin=plaintext line");
}

#[test]
fn test_exec_failure_reported() {
    let t = Test::new();
    // Executable, so PATH lookup succeeds; the kernel then rejects the interpreter
    t.install_age("#!/nonexistent/interpreter\n");

    let output = t.run(&["in"]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, &format!("exec {}", t.age_path().display()));
    assert_age_not_run(&output);
}

#[test]
fn test_unexecutable_age_not_found() {
    let t = Test::new();
    std::fs::write(t.age_path(), "not a script").unwrap();
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(t.age_path(), std::fs::Permissions::from_mode(0o644)).unwrap();
    }

    let output = t.run(&["in"]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "age: executable file not found");
}
