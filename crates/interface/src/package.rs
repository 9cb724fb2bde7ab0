// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tool version discovery.

use crate::env;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Where a package reports its version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// Shell command whose stdout contains the version.
    Command(String),
    /// File whose contents contain the version.
    File(PathBuf),
}

/// How to find and parse the version of one package.
#[derive(Debug, Clone)]
pub struct PackageInfo {
    pub name: &'static str,
    pub source: VersionSource,
    /// Extract the version from the raw text; `None` when absent.
    pub parse: fn(&str) -> Option<String>,
}

impl PackageInfo {
    /// Read the version without caching.
    ///
    /// A command that is not installed, or a file that cannot be read,
    /// yields `None`.
    pub fn probe(&self) -> Option<String> {
        let raw = match &self.source {
            VersionSource::Command(cmd) => {
                let environ = env::process_environ();
                let cwd = std::env::current_dir().ok()?;
                let exe = cmd.split_whitespace().next()?;
                if env::which(exe, &environ, &cwd).is_none() {
                    tracing::debug!(package = self.name, command = exe, "version command not found");
                    return None;
                }
                let output = Command::new("sh")
                    .arg("-c")
                    .arg(cmd)
                    .stdin(Stdio::null())
                    .stderr(Stdio::null())
                    .output()
                    .ok()?;
                String::from_utf8_lossy(&output.stdout).into_owned()
            }
            VersionSource::File(path) => match std::fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::debug!(package = self.name, path = %path.display(), error = %e, "version file unreadable");
                    return None;
                }
            },
        };
        let version = (self.parse)(&raw);
        tracing::debug!(package = self.name, version = ?version, "probed package version");
        version
    }
}

/// Versions probed so far, keyed by package name.
///
/// Created once by the caller and shared by reference.
#[derive(Debug, Default)]
pub struct VersionCache {
    versions: Mutex<HashMap<&'static str, Option<String>>>,
}

impl VersionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached version of `package`, probing it on first use.
    pub fn version(&self, package: &PackageInfo) -> Option<String> {
        if let Some(cached) = self.versions.lock().get(package.name) {
            return cached.clone();
        }
        let version = package.probe();
        self.versions.lock().insert(package.name, version.clone());
        version
    }

    /// Forget every cached version.
    pub fn clear(&self) {
        self.versions.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.versions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.lock().is_empty()
    }
}

#[cfg(test)]
#[path = "package_tests.rs"]
mod tests;
