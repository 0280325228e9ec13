//! Tests driving the `courier` binary for the offline commands.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn courier_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("courier");
    path
}

fn run_courier(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = courier_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run courier binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

fn config_path_in(tmp: &TempDir) -> PathBuf {
    tmp.path().join("courier.toml")
}

#[test]
fn test_search_builds_percent_encoded_url() {
    let tmp = TempDir::new().unwrap();

    // No config file: the default server applies.
    let (stdout, stderr, success) = run_courier(&config_path_in(&tmp), &["search", "a b?"]);
    assert!(success, "search failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("http://localhost:8080/search?q=a%20b%3F"));
    assert!(stdout.contains("action: replace-current"));
    assert!(stdout.contains("ok"));
}

#[test]
fn test_search_disposition_background() {
    let tmp = TempDir::new().unwrap();

    let (stdout, _, success) = run_courier(
        &config_path_in(&tmp),
        &["search", "rust", "--disposition", "background"],
    );
    assert!(success);
    assert!(stdout.contains("action: open-unfocused"));
}

#[test]
fn test_search_rejects_unknown_disposition() {
    let tmp = TempDir::new().unwrap();

    let (_, stderr, success) = run_courier(
        &config_path_in(&tmp),
        &["search", "rust", "--disposition", "sideways"],
    );
    assert!(!success);
    assert!(stderr.contains("Unknown disposition"));
}

#[test]
fn test_config_get_defaults() {
    let tmp = TempDir::new().unwrap();

    let (stdout, _, success) = run_courier(&config_path_in(&tmp), &["config", "get"]);
    assert!(success);
    assert!(stdout.contains("http://localhost:8080"));
}

#[test]
fn test_config_set_then_get() {
    let tmp = TempDir::new().unwrap();
    let config_path = config_path_in(&tmp);

    let (stdout, stderr, success) =
        run_courier(&config_path, &["config", "set", "http://10.0.0.5:9999/"]);
    assert!(success, "set failed: stdout={}, stderr={}", stdout, stderr);
    assert!(config_path.exists());

    let (stdout, _, success) = run_courier(&config_path, &["config", "get"]);
    assert!(success);
    assert!(stdout.contains("http://10.0.0.5:9999"));
    // Trailing slash was normalized away.
    assert!(!stdout.contains("9999/"));
}

#[test]
fn test_config_set_rejects_invalid_url() {
    let tmp = TempDir::new().unwrap();
    let config_path = config_path_in(&tmp);

    let (_, stderr, success) = run_courier(&config_path, &["config", "set", "not a url"]);
    assert!(!success);
    assert!(stderr.contains("not a valid URL"));
    assert!(!config_path.exists());
}

#[test]
fn test_search_uses_configured_server() {
    let tmp = TempDir::new().unwrap();
    let config_path = config_path_in(&tmp);

    run_courier(&config_path, &["config", "set", "http://192.168.1.20:8080"]);
    let (stdout, _, success) = run_courier(&config_path, &["search", "x"]);
    assert!(success);
    assert!(stdout.contains("http://192.168.1.20:8080/search?q=x"));
}

#[test]
fn test_answer_rejects_malformed_id() {
    let tmp = TempDir::new().unwrap();

    // Validated before any network access, so this fails fast offline.
    let (_, stderr, success) = run_courier(&config_path_in(&tmp), &["answer", "nope"]);
    assert!(!success);
    assert!(stderr.contains("not a valid answer id"));
}

#[test]
fn test_submit_unreachable_page_fails_at_capture() {
    let tmp = TempDir::new().unwrap();

    let (_, stderr, success) =
        run_courier(&config_path_in(&tmp), &["submit", "http://127.0.0.1:1/page"]);
    assert!(!success);
    assert!(stderr.contains("Failed to fetch"));
}

#[test]
fn test_submit_file_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("gone.pdf");

    let (_, stderr, success) = run_courier(
        &config_path_in(&tmp),
        &[
            "submit-file",
            missing.to_str().unwrap(),
            "--url",
            "http://example.com/gone.pdf",
        ],
    );
    assert!(!success);
    assert!(stderr.contains("Cannot read downloaded file"));
}
