mod common;

use common::{spawn_command, spawn_command_in};

// ============================================================================
// version command
// ============================================================================

#[test]
fn version_human() {
    let output = spawn_command(&["version"]);
    assert!(
        output.status.success(),
        "version should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("aadarsh-site"),
        "version output should contain 'aadarsh-site': {stdout}"
    );
    // Check for semver-like pattern (digits.digits.digits)
    assert!(
        stdout.contains('.'),
        "version output should contain a version number: {stdout}"
    );
}

#[test]
fn version_json() {
    let output = spawn_command(&["version", "--format", "json"]);
    assert!(
        output.status.success(),
        "version --format json should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("version JSON should be valid");
    assert!(
        parsed.get("name").is_some(),
        "JSON should have 'name' key: {stdout}"
    );
    assert!(
        parsed.get("version").is_some(),
        "JSON should have 'version' key: {stdout}"
    );
}

// ============================================================================
// completions command
// ============================================================================

#[test]
fn completions_bash() {
    let output = spawn_command(&["completions", "bash"]);
    assert!(
        output.status.success(),
        "completions bash should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "completions bash should produce output");
    assert!(
        stdout.contains("aadarsh-site"),
        "bash completions should reference aadarsh-site: {stdout}"
    );
}

#[test]
fn completions_zsh() {
    let output = spawn_command(&["completions", "zsh"]);
    assert!(
        output.status.success(),
        "completions zsh should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "completions zsh should produce output");
}

#[test]
fn completions_fish() {
    let output = spawn_command(&["completions", "fish"]);
    assert!(
        output.status.success(),
        "completions fish should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "completions fish should produce output");
}

// ============================================================================
// check command
// ============================================================================

#[test]
fn check_human_passes() {
    let output = spawn_command(&["check"]);
    assert!(
        output.status.success(),
        "check should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Check passed"),
        "check should report success: {stderr}"
    );
}

#[test]
fn check_json_passes() {
    let output = spawn_command(&["check", "--format", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("check JSON should be valid");
    assert_eq!(parsed["ok"], true, "check should pass: {stdout}");
    assert_eq!(parsed["errors"], 0);
    assert!(parsed["issues"].as_array().is_some_and(Vec::is_empty));
}

#[test]
fn check_strict_passes() {
    let output = spawn_command(&["check", "--strict"]);
    assert!(
        output.status.success(),
        "strict check should exit 0 for the shipped content"
    );
}

// ============================================================================
// build command
// ============================================================================

#[test]
fn build_writes_page() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("site");
    let output = spawn_command(&["build", "--out-dir", out.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "build should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let html = std::fs::read_to_string(out.join("index.html")).expect("index.html written");
    assert!(html.contains("<h1>Aadarsh</h1>"));
    assert!(html.contains("/आदर्श/"));
    assert!(html.contains("ui/ux"));
    assert_eq!(html.matches("class=\"tag\"").count(), 5);
}

#[test]
fn build_default_out_dir_is_dist() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = spawn_command_in(dir.path(), &["build"]);
    assert!(
        output.status.success(),
        "build should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(dir.path().join("dist/index.html").exists());
}

#[test]
fn build_reports_output_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("site");
    let output = spawn_command(&["build", "--out-dir", out.to_str().unwrap()]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("index.html"),
        "build should report the written file: {stderr}"
    );
}

#[test]
fn build_twice_is_stable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("site");
    let out_arg = out.to_str().unwrap();

    assert!(spawn_command(&["build", "--out-dir", out_arg]).status.success());
    let first = std::fs::read_to_string(out.join("index.html")).expect("first build");

    assert!(spawn_command(&["build", "--out-dir", out_arg]).status.success());
    let second = std::fs::read_to_string(out.join("index.html")).expect("second build");

    assert_eq!(first, second);
}

// ============================================================================
// usage errors
// ============================================================================

#[test]
fn no_subcommand_is_usage_error() {
    let output = spawn_command(&[]);
    assert!(!output.status.success());
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let output = spawn_command(&["deploy"]);
    assert!(!output.status.success());
}
