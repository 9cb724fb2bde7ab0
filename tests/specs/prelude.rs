// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Helpers shared by the specs: a scratch project and fluent assertions.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// `nw` with colors and logging pinned.
pub fn cli() -> Command {
    let mut cmd = Command::cargo_bin("nw").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("NW_LOG")
        .env_remove("FSLOUTPUTTYPE")
        .env_remove("NW_CONFIG")
        .env_remove("NW_STOP_ON_UNKNOWN_VERSION")
        .env_remove("NW_TERMINAL_OUTPUT")
        .env_remove("NW_HASH_METHOD");
    cmd
}

/// A scratch directory the binary runs in.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(rel)).unwrap()
    }

    pub fn nw(&self) -> Command {
        let mut cmd = cli();
        cmd.current_dir(self.dir.path());
        cmd
    }
}

/// Captured output of one invocation.
pub struct Output {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

impl Output {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout unexpectedly has {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout.as_str(), expected);
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}

pub trait CommandExt {
    fn passes(&mut self) -> Output;
    fn fails(&mut self) -> Output;
}

impl CommandExt for Command {
    fn passes(&mut self) -> Output {
        let out = capture(self);
        assert_eq!(out.code, Some(0), "expected success, stderr:\n{}", out.stderr);
        out
    }

    fn fails(&mut self) -> Output {
        let out = capture(self);
        assert_ne!(out.code, Some(0), "expected failure, stdout:\n{}", out.stdout);
        out
    }
}

fn capture(cmd: &mut Command) -> Output {
    let output = cmd.output().unwrap();
    Output {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        code: output.status.code(),
    }
}
