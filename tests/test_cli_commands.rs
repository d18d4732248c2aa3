mod common;

use common::{fixture_dir, fixture_path, spawn_command};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Loading twice reads and validates once; the second pass is a silent hit.
#[test]
fn load_twice_logs_one_file_load() {
    let dir = fixture_dir();
    let output = spawn_command(&[
        "load",
        "app_config",
        "--config-dir",
        dir.to_str().unwrap(),
    ]);
    assert!(
        output.status.success(),
        "load should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(count(&stderr, "loaded configuration"), 1, "{stderr}");
    assert_eq!(count(&stderr, "validated successfully"), 1, "{stderr}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#""host":"localhost""#), "{stdout}");
    assert!(stdout.contains("1 hit(s), 1 miss(es)"), "{stdout}");
}

#[test]
fn load_json_output() {
    let dir = fixture_dir();
    let output = spawn_command(&[
        "load",
        "app_config",
        "extra_keys",
        "--repeat",
        "3",
        "--format",
        "json",
        "--config-dir",
        dir.to_str().unwrap(),
        "--quiet",
    ]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "--quiet should silence logs");

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("output should be valid JSON");
    assert_eq!(parsed["configs"]["app_config"]["port"], 8080);
    assert_eq!(parsed["configs"]["extra_keys"]["pool"]["max"], 16);
    assert_eq!(parsed["cache"]["misses"], 2);
    assert_eq!(parsed["cache"]["hits"], 4);
}

#[test]
fn load_missing_config_fails_with_config_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let output = spawn_command(&[
        "load",
        "nonexistent",
        "--config-dir",
        dir.path().to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nonexistent.json"), "{stderr}");
    assert!(stderr.contains("ERROR"), "error should be logged: {stderr}");
}

#[test]
fn load_malformed_config_fails() {
    let output = spawn_command(&[
        "load",
        "broken",
        "--config-dir",
        fixture_dir().to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("parse error"));
}

#[test]
fn validate_reports_every_file() {
    let good = fixture_path("app_config.json");
    let bad = fixture_path("port_as_string.json");
    let missing = fixture_path("missing_debug.json");
    let output = spawn_command(&[
        "validate",
        good.to_str().unwrap(),
        bad.to_str().unwrap(),
        missing.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(2));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("app_config.json: ok"), "{stdout}");
    assert!(
        stdout.contains("incorrect type for port: expected integer, got string"),
        "{stdout}"
    );
    assert!(stdout.contains("missing key in configuration: debug"), "{stdout}");
    assert!(String::from_utf8_lossy(&output.stderr).contains("2 file(s) failed validation"));
}

#[test]
fn validate_json_output() {
    let good = fixture_path("extra_keys.json");
    let output = spawn_command(&["validate", "--format", "json", good.to_str().unwrap()]);
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("output should be valid JSON");
    assert_eq!(parsed["schema"]["port"], "integer");
    assert_eq!(parsed["files"][0]["valid"], true);
    assert!(parsed["files"][0].get("error").is_none());
}

#[test]
fn version_json() {
    let output = spawn_command(&["version", "--format", "json"]);
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["name"], "confcache");
    assert_eq!(parsed["version"], env!("CARGO_PKG_VERSION"));
}

/// One `-v` adds debug events such as loader setup; the default is info.
#[test]
fn verbose_flag_enables_debug_events() {
    let dir = fixture_dir();
    let args = ["load", "app_config", "--config-dir", dir.to_str().unwrap()];

    let default_run = spawn_command(&args);
    let default_stderr = String::from_utf8_lossy(&default_run.stderr);
    assert!(default_stderr.contains("loaded configuration"), "{default_stderr}");
    assert!(!default_stderr.contains("creating configuration loader"), "{default_stderr}");

    let mut verbose_args = args.to_vec();
    verbose_args.push("-v");
    let verbose = spawn_command(&verbose_args);
    assert!(verbose.status.success());
    let verbose_stderr = String::from_utf8_lossy(&verbose.stderr);
    assert!(verbose_stderr.contains("DEBUG"), "{verbose_stderr}");
    assert!(verbose_stderr.contains("creating configuration loader"), "{verbose_stderr}");
}

/// `-q` drops info events but the failure is still logged at error level.
#[test]
fn quiet_flag_still_logs_errors() {
    let dir = fixture_dir();
    let output = spawn_command(&[
        "load",
        "app_config",
        "nonexistent",
        "--config-dir",
        dir.to_str().unwrap(),
        "-q",
    ]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR"), "{stderr}");
    assert!(stderr.contains("configuration error"), "{stderr}");
    assert!(!stderr.contains("loaded configuration"), "{stderr}");
}

/// Unparsable arguments exit with the usage code, not the config code.
#[test]
fn bad_arguments_exit_with_usage_code() {
    let output = spawn_command(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(64));

    let output = spawn_command(&["load"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn help_exits_successfully() {
    let output = spawn_command(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
}

/// Names with a directory part resolve below the config directory.
#[test]
fn load_nested_name() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("prod")).unwrap();
    common::write_config(&dir.path().join("prod"), "app", &common::app_config("prod-db", 5432));

    let output = spawn_command(&[
        "load",
        "prod/app",
        "--config-dir",
        dir.path().to_str().unwrap(),
    ]);
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("prod-db"));
}
