//! Integration tests for the maybe-io helpers and the `maybe` binary
//!
//! HTTP tests run against a local axum server; exit-path tests run the
//! binary as a child process since `unwrap_or_panic` ends the process.


use std::time::Duration;

use maybe_io::config::HttpConfig;
use maybe_io::{IoOutcome, MaybeError, fs, http};
use test_utils::{TestServer, run_maybe, stderr_of, stdout_of};

fn expect_err(outcome: IoOutcome<String>) -> MaybeError {
    outcome.into_result().unwrap_err()
}

fn error_text(outcome: IoOutcome<String>) -> String {
    expect_err(outcome).to_string()
}

// ============================================================================
// Blocking HTTP
// ============================================================================

#[test]
fn test_get_blocking_ok_body() {
    let server = TestServer::start();
    let client = http::create_blocking_client(&HttpConfig::default());

    let outcome = http::get_blocking(&client, &server.url("/ok"));
    assert_eq!(outcome.into_result().unwrap(), "ok");
}

#[test]
fn test_get_blocking_404_is_err_with_code() {
    let server = TestServer::start();
    let client = http::create_blocking_client(&HttpConfig::default());

    let outcome = http::get_blocking(&client, &server.url("/missing"));
    assert!(outcome.is_err());
    let message = error_text(outcome);
    assert!(message.contains("404"), "message was: {message}");
    assert!(message.contains("GET"));
}

#[test]
fn test_post_blocking_echoes_body() {
    let server = TestServer::start();
    let client = http::create_blocking_client(&HttpConfig::default());

    let outcome = http::post_blocking(&client, &server.url("/echo"), "hello", "text/plain");
    assert_eq!(outcome.into_result().unwrap(), "hello");
}

#[test]
fn test_post_blocking_500_is_err() {
    let server = TestServer::start();
    let client = http::create_blocking_client(&HttpConfig::default());

    let outcome = http::post_blocking(&client, &server.url("/boom"), "{}", "application/json");
    let err = expect_err(outcome);
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("POST request failed with status code 500"));
}

#[test]
fn test_post_blocking_sends_utf8_content_type() {
    let server = TestServer::start();
    let client = http::create_blocking_client(&HttpConfig::default());

    let outcome = http::post_blocking(&client, &server.url("/content-type"), "{}", "application/json");
    assert_eq!(outcome.unwrap(), "application/json; charset=utf-8");
}

#[test]
fn test_get_blocking_connection_refused_is_http_err() {
    // Bind then drop to get a port nothing listens on
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = http::create_blocking_client(&HttpConfig::default());

    let outcome = http::get_blocking(&client, &format!("http://127.0.0.1:{port}/"));
    let err = expect_err(outcome);
    assert!(matches!(err, MaybeError::Http(_)));
    assert!(!err.to_string().is_empty());
}

// ============================================================================
// Async HTTP
// ============================================================================

#[tokio::test]
async fn test_get_ok_body() {
    let server = TestServer::start();
    let client = http::create_client(&HttpConfig::default());

    let outcome = http::get(&client, &server.url("/ok")).await;
    assert_eq!(outcome.into_result().unwrap(), "ok");
}

#[tokio::test]
async fn test_get_404_is_err_with_code() {
    let server = TestServer::start();
    let client = http::create_client(&HttpConfig::default());

    let outcome = http::get(&client, &server.url("/missing")).await;
    let message = error_text(outcome);
    assert!(message.contains("404"), "message was: {message}");
}

#[tokio::test]
async fn test_post_echoes_body() {
    let server = TestServer::start();
    let client = http::create_client(&HttpConfig::default());

    let outcome = http::post(&client, &server.url("/echo"), "payload", "text/plain").await;
    assert_eq!(outcome.unwrap_or("wrong".to_string()), "payload");
}

#[tokio::test]
async fn test_timeout_is_its_own_error() {
    let server = TestServer::start();
    let config = HttpConfig::default().with_timeout(Duration::from_millis(200));
    let client = http::create_client(&config);

    let outcome = http::get(&client, &server.url("/slow")).await;
    let err = expect_err(outcome);
    assert!(matches!(err, MaybeError::Timeout { method: "GET", .. }), "got: {err:?}");
}

// ============================================================================
// Files through the public API
// ============================================================================

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round.txt");

    assert!(fs::read(&path).is_err());
    assert!(fs::write(&path, "abc").is_ok());
    assert_eq!(fs::read(&path).into_result().unwrap(), "abc");
    assert!(fs::remove(&path).is_ok());
    assert!(fs::read(&path).is_err());
}

// ============================================================================
// `maybe` binary: exit behaviour
// ============================================================================

#[test]
fn test_cli_read_missing_file_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let output = run_maybe(&["read", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = stderr_of(&output);
    assert!(stderr.contains("fatal:"), "stderr was: {stderr}");
    assert!(stderr.contains("absent.txt"));
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn test_cli_write_then_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cli.txt");
    let path = path.to_str().unwrap();

    assert!(run_maybe(&["write", path, "abc"]).status.success());
    assert!(run_maybe(&["append", path, "def"]).status.success());

    let output = run_maybe(&["read", path]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "abcdef");
    assert!(stderr_of(&output).is_empty());
}

#[test]
fn test_cli_remove_missing_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.txt");

    let output = run_maybe(&["remove", path.to_str().unwrap()]);
    assert!(output.status.success());
}

#[test]
fn test_cli_get_ok_leaves_stderr_untouched() {
    let server = TestServer::start();

    let output = run_maybe(&["get", &server.url("/ok")]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "ok");
    assert!(stderr_of(&output).is_empty());
}

#[test]
fn test_cli_get_404_exits_with_code_in_stderr() {
    let server = TestServer::start();

    let output = run_maybe(&["get", &server.url("/missing")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("404"));
}

#[test]
fn test_cli_blocking_post() {
    let server = TestServer::start();

    let output = run_maybe(&["post", &server.url("/echo"), "sent", "--blocking"]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "sent");
}

#[test]
fn test_cli_demo() {
    let output = run_maybe(&["demo"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("Nested unwrap: true"));
}

#[test]
fn test_cli_demo_end_absent_exits_with_message() {
    let output = run_maybe(&["demo", "--end-absent"]);
    assert_eq!(output.status.code(), Some(1));
    // Demo output is flushed before the exit
    assert!(stdout_of(&output).contains("Unwrapped Value: Test one"));
    assert!(stderr_of(&output).contains("absent value"));
}
