//! Integration tests for the mashup CLI.
//!
//! Every run gets its own temporary home and data directory so the user's
//! real configuration is never touched.
//!
//! Run with: `cargo test --package mashup-cli --test cli_integration`

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Helper to run the mashup CLI isolated inside `home`.
fn run_mashup(home: &Path, args: &[&str]) -> Output {
    mashup_command(home).args(args).output().expect("Failed to execute mashup command")
}

/// Like [`run_mashup`] with extra environment variables.
fn run_mashup_with_env(home: &Path, env: &[(&str, &str)], args: &[&str]) -> Output {
    let mut command = mashup_command(home);
    for (key, value) in env {
        command.env(key, value);
    }
    command.args(args).output().expect("Failed to execute mashup command")
}

fn mashup_command(home: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_mashup"));
    command
        .current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env("MASHUP_DATA_DIR", home.join("store"))
        .env_remove("MASHUP_API_TOKENS")
        .env_remove("MASHUP_MAX_BATCH_SIZE")
        .env_remove("RUST_LOG");
    command
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Write a small elements file covering the core categories.
fn write_elements(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("elements.json");
    fs::write(
        &path,
        r#"{
    "persona": ["Tech Entrepreneurs"],
    "problem": ["managing their time effectively"],
    "technology": ["AI-powered analytics"],
    "business_model": ["subscription"]
}"#,
    )
    .unwrap();
    path
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    let output = run_mashup(temp.path(), &["--help"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("generate"));
    assert!(out.contains("seed"));
    assert!(out.contains("serve"));
}

#[test]
fn test_seed_then_generate_json() {
    let temp = TempDir::new().unwrap();
    let elements = write_elements(temp.path());

    let output = run_mashup(temp.path(), &["seed", elements.to_str().unwrap()]);
    assert!(output.status.success(), "seed failed: {:?}", output);
    assert!(stdout(&output).contains("Seeded 4 elements"));

    let output = run_mashup(
        temp.path(),
        &["generate", "--count", "2", "--no-formats", "--no-action-verbs", "--no-trends", "--json"],
    );
    assert!(output.status.success(), "generate failed: {:?}", output);

    let ideas: Value = serde_json::from_slice(&output.stdout).unwrap();
    let ideas = ideas.as_array().unwrap();
    assert_eq!(ideas.len(), 2);
    assert_eq!(
        ideas[0]["content"]["description"],
        "For tech entrepreneurs, who struggle with managing their time effectively, \
         we're building a solution using AI-powered analytics with a subscription model."
    );
}

#[test]
fn test_generate_fails_without_elements() {
    let temp = TempDir::new().unwrap();
    let output = run_mashup(temp.path(), &["generate"]);

    assert!(!output.status.success());
}

#[test]
fn test_status_lists_pools() {
    let temp = TempDir::new().unwrap();
    let elements = write_elements(temp.path());
    run_mashup(temp.path(), &["seed", elements.to_str().unwrap()]);

    let output = run_mashup(temp.path(), &["status"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("persona"));
    assert!(out.contains("Empty pools"));
    assert!(out.contains("trend"));
}

#[test]
fn test_config_set_and_get() {
    let temp = TempDir::new().unwrap();

    let output = run_mashup(temp.path(), &["config", "get", "max_batch_size"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "20");

    let output = run_mashup(temp.path(), &["config", "set", "max_batch_size", "5"]);
    assert!(output.status.success());

    let output = run_mashup(temp.path(), &["config", "get", "max_batch_size"]);
    assert_eq!(stdout(&output).trim(), "5");

    let output = run_mashup(temp.path(), &["config", "get", "colour"]);
    assert!(!output.status.success());
}

#[test]
fn test_config_set_keeps_env_overrides_out_of_file() {
    let temp = TempDir::new().unwrap();
    let env = [
        ("MASHUP_API_TOKENS", "supersecret=alice"),
        ("MASHUP_DATA_DIR", "/tmp/from-env"),
    ];

    let output = run_mashup_with_env(temp.path(), &env, &["config", "set", "max_batch_size", "5"]);
    assert!(output.status.success(), "config set failed: {:?}", output);

    let output = run_mashup(temp.path(), &["config", "path"]);
    let path = stdout(&output).trim().to_string();
    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.contains("\"max_batch_size\": 5"));
    assert!(!saved.contains("supersecret"));
    assert!(!saved.contains("/tmp/from-env"));

    // The override still applies while the variable is set
    let output = run_mashup_with_env(temp.path(), &env, &["config", "get", "api_tokens"]);
    assert_eq!(stdout(&output).trim(), "***=alice");
}
