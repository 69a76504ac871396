//! Tests for `tomlenv run`.

use crate::support::*;

#[cfg(unix)]
#[test]
fn test_run_injects_plaintext_values() {
    let t = Test::with_env(PLAINTEXT_ENV);

    let output = t.run(&["sh", "-c", "echo \"$ALPHA:$PORT\""]);

    assert_success(&output);
    assert_stdout_contains(&output, "bar:8080");
}

#[cfg(unix)]
#[test]
fn test_run_keeps_existing_variables() {
    let t = Test::with_env("ALPHA = \"bar\"\n");

    let output = t
        .cmd()
        .env("ALPHA", "preset")
        .args(["run", "--", "sh", "-c", "echo $ALPHA"])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "preset");
}

#[cfg(unix)]
#[test]
fn test_run_override_replaces_existing_variables() {
    let t = Test::with_env("ALPHA = \"bar\"\n");

    let output = t
        .cmd()
        .env("ALPHA", "preset")
        .args(["run", "--override", "--", "sh", "-c", "echo $ALPHA"])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "bar");
}

#[cfg(unix)]
#[test]
fn test_run_override_from_command_argument() {
    let t = Test::with_env("ALPHA = \"bar\"\n");

    let output = t
        .cmd()
        .env("ALPHA", "preset")
        .args([
            "run",
            "--",
            "sh",
            "-c",
            "echo $ALPHA",
            "sh",
            "tomlenv_config_override=true",
        ])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "bar");
}

#[cfg(unix)]
#[test]
fn test_run_decrypts_vault() {
    let t = Test::with_vault();

    let output = t
        .cmd()
        .env("TOMLENV_KEY", GOOD_KEY)
        .args(["run", "--", "sh", "-c", "echo \"[$ALPHA][$BASIC]\""])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "[zeta][]");
}

#[cfg(unix)]
#[test]
fn test_run_exit_code_passthrough() {
    let t = Test::with_env("ALPHA = \"bar\"\n");

    let output = t.run(&["sh", "-c", "exit 42"]);

    assert_exit_code(&output, 42);
}

#[test]
fn test_run_requires_command() {
    let t = Test::new();

    let output = t.cmd().arg("run").output().unwrap();

    assert_failure(&output);
}

#[cfg(unix)]
#[test]
fn test_run_config_key_argument_beats_ambient_key() {
    let t = Test::with_vault();
    let key_arg = format!("tomlenv_config_key={}", GOOD_KEY);

    let output = t
        .cmd()
        .env("TOMLENV_KEY", WRONG_KEY)
        .args(["run", "--", "sh", "-c", "echo $ALPHA", "sh", &key_arg])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "zeta");
}

#[cfg(unix)]
#[test]
fn test_run_debug_from_config_env_var_reports_kept_values() {
    let t = Test::with_env("ALPHA = \"bar\"\n");

    let output = t
        .cmd()
        .env("TOMLENV_CONFIG_DEBUG", "true")
        .env("ALPHA", "preset")
        .args(["run", "--", "true"])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stderr_contains(&output, "was NOT overwritten");
    assert_stderr_contains(&output, "ALPHA");
}

#[cfg(unix)]
#[test]
fn test_run_debug_from_command_argument() {
    let t = Test::with_env("ALPHA = \"bar\"\n");

    let output = t
        .cmd()
        .env("ALPHA", "preset")
        .args(["run", "--", "true", "tomlenv_config_debug=yes"])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stderr_contains(&output, "was NOT overwritten");
}
