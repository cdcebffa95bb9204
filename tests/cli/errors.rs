//! Tests for failure reporting.

use crate::support::*;

#[test]
fn test_no_args_prints_usage() {
    let t = Test::new();

    let output = t.run(&[]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "age-github -r @artyom");
    assert_age_not_run(&output);
}

#[test]
fn test_missing_age() {
    let mut t = Test::without_age();
    let mock = t.serve_keys_times("alice", ALICE_KEYS, 0);

    let output = t.run(&["-r", "@alice", "in"]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "executable file not found");
    mock.assert();
}

#[test]
fn test_invalid_handle_no_request() {
    let mut t = Test::new();
    let mock = t
        .server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create();

    let output = t.run(&["-r", "@1abc", "in"]);
    assert_failure(&output);
    assert_stderr_contains(
        &output,
        "fetching keys for github user \"1abc\": not a valid github user name",
    );
    assert_age_not_run(&output);
    mock.assert();
}

#[test]
fn test_no_keys_found() {
    let mut t = Test::new();
    t.serve_keys("empty", "");

    let output = t.run(&["-r", "@empty", "in"]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "no keys found for github user \"empty\"");
    assert_age_not_run(&output);
}

#[test]
fn test_unknown_user() {
    let mut t = Test::new();
    t.server
        .mock("GET", "/ghost.keys")
        .with_status(404)
        .with_header("content-type", "text/plain")
        .with_body("Not Found")
        .create();

    let output = t.run(&["--recipient=@ghost", "in"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "unexpected response code \"404 Not Found\"");
    assert_age_not_run(&output);
}

#[test]
fn test_html_response_rejected() {
    let mut t = Test::new();
    t.server
        .mock("GET", "/alice.keys")
        .with_header("content-type", "text/html")
        .with_body("<html></html>")
        .create();

    let output = t.run(&["-r", "@alice", "in"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "unexpected content type \"text/html\"");
}

#[test]
fn test_error_is_single_line() {
    let mut t = Test::new();
    t.serve_keys("empty", "");

    let output = t.run(&["-r", "@empty"]);
    assert_eq!(stderr(&output).trim_end().lines().count(), 1);
}

#[test]
fn test_debug_logs_on_stderr_only() {
    let mut t = Test::new();
    t.serve_keys("alice", ALICE_KEYS);

    let output = t
        .cmd()
        .env("AGE_GITHUB_LOG", "age_github=debug")
        .args(["-r", "@alice", "in"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "fetching keys");
    assert!(!stdout(&output).contains("DEBUG"));
}

#[test]
fn test_fetch_failure_exit_code() {
    let t = Test::new();

    // Nothing listens on the discard port
    t.cmd()
        .env("AGE_GITHUB_KEYS_URL", "http://127.0.0.1:9")
        .args(["-r", "@alice", "in"])
        .assert()
        .code(1)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains(
            "fetching keys for github user \"alice\"",
        ));
}
