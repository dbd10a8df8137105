//! Shared helpers for texmgr CLI tests.
//!
//! `TestEnv` runs the real binary inside a temporary project directory with
//! `HOME`/`XDG_CONFIG_HOME` pointed at an empty directory, so no user config
//! or `TEXMGR_*` variable from the host leaks into a test.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Result of running the texmgr binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestEnv {
    pub project_root: TempDir,
    home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("create project dir"),
            home_dir: tempfile::tempdir().expect("create home dir"),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file relative to the project root, creating parents
    pub fn write(&self, relative: &str, contents: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, contents).expect("write fixture");
        self
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("read file")
    }

    /// Run with `--color never` from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = self
            .command(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .expect("run texmgr");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// The isolated texmgr command, for tests that need to spawn it
    pub fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_texmgr"));
        command
            .args(["--color", "never"])
            .args(args)
            .current_dir(self.project_root.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.user_config_dir())
            .env_remove("TEXMGR_TIMEOUT_SECS")
            .env_remove("TEXMGR_POLL_INTERVAL_MS")
            .env_remove("TEXMGR_COLOR");
        command
    }

    fn user_config_dir(&self) -> PathBuf {
        self.home_dir.path().join(".config")
    }

    /// Write `<config_dir>/texmgr/config.toml`
    pub fn write_user_config(&self, contents: &str) {
        let dir = self.user_config_dir().join("texmgr");
        fs::create_dir_all(&dir).expect("create user config dir");
        fs::write(dir.join("config.toml"), contents).expect("write user config");
    }
}
