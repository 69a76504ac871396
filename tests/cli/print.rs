//! Tests for `tomlenv print`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_print_plaintext_defaults_to_dot_env() {
    let t = Test::with_env(PLAINTEXT_ENV);

    let output = t.print(&[]);

    assert_success(&output);
    assert_stdout_contains(&output, "BASIC=basic\n");
    assert_stdout_contains(&output, "ALPHA=bar\n");
    assert_stdout_contains(&output, "PORT=8080\n");
    assert_stdout_contains(&output, "DEBUG=true\n");
}

#[test]
fn test_print_json_projects_non_strings() {
    let t = Test::with_env(PLAINTEXT_ENV);

    let output = t.print(&["--json"]);
    assert_success(&output);

    let printed = stdout_json(&output);
    assert_eq!(printed["ALPHA"], "bar");
    assert_eq!(printed["PORT"], "8080");
    assert_eq!(printed["HOSTS"], r#"["a","b"]"#);
}

#[test]
fn test_print_typed_keeps_types() {
    let t = Test::with_env(PLAINTEXT_ENV);

    let output = t.print(&["--typed"]);
    assert_success(&output);

    let printed = stdout_json(&output);
    assert_eq!(printed["PORT"], 8080);
    assert_eq!(printed["DEBUG"], true);
    assert_eq!(printed["HOSTS"], serde_json::json!(["a", "b"]));
}

#[test]
fn test_print_first_path_wins() {
    let t = Test::new();
    t.write(".env.local", "ALPHA = \"local\"\n");
    t.write(".env", "ALPHA = \"shared\"\nBETA = \"shared\"\n");

    t.cmd()
        .args(["print", "--path", ".env.local", "--path", ".env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALPHA=local"))
        .stdout(predicate::str::contains("BETA=shared"));
}

#[test]
fn test_print_missing_file_is_partial_not_fatal() {
    let t = Test::with_env("ALPHA = \"bar\"\n");

    let output = t.print(&["--path", "missing.toml", "--path", ".env"]);

    assert_success(&output);
    assert_stdout_contains(&output, "ALPHA=bar");
    assert_stderr_contains(&output, "partial load");
}

#[test]
fn test_print_with_key_reads_vault() {
    let t = Test::with_vault();

    let output = t.print_with_key(GOOD_KEY, &[]);

    assert_success(&output);
    assert_stdout_contains(&output, "ALPHA=zeta");
    assert_stdout_excludes(&output, "BASIC");
    assert_stdout_excludes(&output, "VAULT_DEVELOPMENT");
}

#[test]
fn test_print_rotated_keys() {
    let t = Test::with_vault();
    let keys = format!("{},{}", WRONG_KEY, GOOD_KEY);

    let output = t.print_with_key(&keys, &[]);

    assert_success(&output);
    assert_stdout_contains(&output, "ALPHA=zeta");
}

#[test]
fn test_print_key_without_vault_falls_back() {
    let t = Test::with_env(PLAINTEXT_ENV);

    let output = t.print_with_key(GOOD_KEY, &[]);

    assert_success(&output);
    assert_stdout_contains(&output, "ALPHA=bar");
    assert_stderr_contains(&output, "vault file is missing");
}

#[test]
fn test_print_config_env_var_selects_path() {
    let t = Test::new();
    t.write("app.toml", "NAME = \"app\"\n");

    t.cmd()
        .env("TOMLENV_CONFIG_PATH", "app.toml")
        .arg("print")
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME=app"));
}

#[test]
fn test_print_flag_beats_config_env_var() {
    let t = Test::new();
    t.write("app.toml", "NAME = \"app\"\n");
    t.write("flag.toml", "NAME = \"flag\"\n");

    t.cmd()
        .env("TOMLENV_CONFIG_PATH", "app.toml")
        .args(["print", "--path", "flag.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME=flag"));
}

#[test]
fn test_print_latin1_encoding() {
    let t = Test::new();
    std::fs::write(t.path(".env"), b"NAME = \"caf\xe9\"\n").unwrap();

    let output = t.print(&["--encoding", "latin1"]);

    assert_success(&output);
    assert_stdout_contains(&output, "NAME=café");
}

#[test]
fn test_print_debug_logs_each_key() {
    let t = Test::with_env("ALPHA = \"bar\"\n");

    let output = t.print(&["--debug"]);

    assert_success(&output);
    assert_stderr_contains(&output, "written");
    assert_stderr_contains(&output, "ALPHA");
}

#[test]
fn test_config_env_key_beats_ambient_key() {
    let t = Test::with_vault();

    t.cmd()
        .env("TOMLENV_KEY", WRONG_KEY)
        .env("TOMLENV_CONFIG_KEY", GOOD_KEY)
        .arg("print")
        .assert()
        .success()
        .stdout(predicate::str::contains("ALPHA=zeta"));
}

#[test]
fn test_key_flag_beats_ambient_key() {
    let t = Test::with_vault();

    t.cmd()
        .env("TOMLENV_KEY", WRONG_KEY)
        .args(["print", "--key", GOOD_KEY])
        .assert()
        .success()
        .stdout(predicate::str::contains("ALPHA=zeta"));
}

#[test]
fn test_ambient_key_used_when_no_option_given() {
    let t = Test::with_vault();

    let output = t.print_with_key(WRONG_KEY, &[]);

    assert_failure(&output);
    assert_stderr_contains(&output, "decryption failed");
}

#[test]
fn test_debug_from_config_env_var_logs_each_key() {
    let t = Test::with_env("ALPHA = \"bar\"\n");

    let output = t
        .cmd()
        .env("TOMLENV_CONFIG_DEBUG", "true")
        .arg("print")
        .output()
        .unwrap();

    assert_success(&output);
    assert_stderr_contains(&output, "written");
    assert_stderr_contains(&output, "loaded source");
}

#[test]
fn test_verbose_without_debug_skips_source_lines() {
    let t = Test::with_env("ALPHA = \"bar\"\n");

    let output = t.print(&["--verbose"]);

    assert_success(&output);
    let err = stderr(&output);
    assert!(!err.contains("loaded source"), "unexpected source line: {}", err);
    assert!(!err.contains("written"), "unexpected key line: {}", err);
}
