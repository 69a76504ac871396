//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Variables a developer machine might have set that would leak into tests.
const SCRUBBED_VARS: &[&str] = &[
    "TOMLENV_KEY",
    "TOMLENV_LOG",
    "TOMLENV_CONFIG_PATH",
    "TOMLENV_CONFIG_ENCODING",
    "TOMLENV_CONFIG_DEBUG",
    "TOMLENV_CONFIG_OVERRIDE",
    "TOMLENV_CONFIG_KEY",
    "TOMLENV_CONFIG_TYPED",
];

impl Test {
    /// Create a tomlenv command running inside the project directory.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("tomlenv").expect("failed to find tomlenv binary");
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `tomlenv print` with extra arguments.
    pub fn print(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("print")
            .args(args)
            .output()
            .expect("failed to run tomlenv print")
    }

    /// Shortcut for `tomlenv print` with `TOMLENV_KEY` set.
    pub fn print_with_key(&self, key: &str, args: &[&str]) -> Output {
        self.cmd()
            .env("TOMLENV_KEY", key)
            .arg("print")
            .args(args)
            .output()
            .expect("failed to run tomlenv print")
    }

    /// Shortcut for `tomlenv run -- <command>`.
    pub fn run(&self, command: &[&str]) -> Output {
        self.cmd()
            .arg("run")
            .arg("--")
            .args(command)
            .output()
            .expect("failed to run tomlenv run")
    }

    /// Shortcut for `tomlenv encrypt --env <environment>` with extra arguments.
    pub fn encrypt(&self, environment: &str, args: &[&str]) -> Output {
        self.cmd()
            .args(["encrypt", "--env", environment])
            .args(args)
            .output()
            .expect("failed to run tomlenv encrypt")
    }
}
