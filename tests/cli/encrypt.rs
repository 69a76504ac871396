//! Tests for `tomlenv encrypt`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_encrypt_generates_key_and_vault() {
    let t = Test::with_env("ALPHA = \"secret\"\n");

    let output = t.encrypt("production", &[]);

    assert_success(&output);
    assert_stdout_contains(&output, "VAULT_PRODUCTION");
    assert_stdout_contains(&output, "tomlenv://:key_");
    assert_stdout_contains(&output, "environment=production");
    assert!(t.read(".env.vault").contains("VAULT_PRODUCTION"));
}

#[test]
fn test_encrypt_then_print_round_trip() {
    let t = Test::with_env("ALPHA = \"secret\"\nPORT = 5432\n");

    let output = t.encrypt("staging", &["--key", FIXTURE_SECRET]);
    assert_success(&output);
    assert_stdout_excludes(&output, "tomlenv://");

    let key = format!(
        "tomlenv://:key_{}@tomlenv.local/vault?environment=staging",
        FIXTURE_SECRET
    );
    t.cmd()
        .env("TOMLENV_KEY", key)
        .arg("print")
        .assert()
        .success()
        .stdout(predicate::str::contains("ALPHA=secret"))
        .stdout(predicate::str::contains("PORT=5432"));
}

#[test]
fn test_encrypt_missing_input_fails() {
    let t = Test::new();

    t.cmd()
        .args(["encrypt", "--env", "development", "--input", "nope.env"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_encrypt_rejects_key_for_other_environment() {
    let t = Test::with_env("ALPHA = \"secret\"\n");
    let key = format!(
        "tomlenv://:key_{}@tomlenv.local/vault?environment=staging",
        FIXTURE_SECRET
    );

    t.cmd()
        .args(["encrypt", "--env", "production", "--key", &key])
        .assert()
        .failure()
        .stderr(predicate::str::contains("environment 'staging'"));

    assert!(!t.path(".env.vault").exists());
}
