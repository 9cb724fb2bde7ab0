// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized host environment access for interface runs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current process environment, skipping entries that are not UTF-8.
pub fn process_environ() -> BTreeMap<String, String> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

/// Drop entries a child process cannot receive: empty keys, and keys or
/// values containing `=` (keys only) or NUL.
pub fn canonicalize_env(env: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    env.iter()
        .filter(|(k, v)| {
            let valid = !k.is_empty() && !k.contains(['=', '\0']) && !v.contains('\0');
            if !valid {
                tracing::debug!(key = %k, "dropping invalid environment entry");
            }
            valid
        })
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Host name from `HOSTNAME`, falling back to `/etc/hostname`.
pub fn hostname() -> String {
    std::env::var("HOSTNAME")
        .ok()
        .filter(|h| !h.is_empty())
        .or_else(|| {
            std::fs::read_to_string("/etc/hostname")
                .ok()
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
        })
        .unwrap_or_else(|| "localhost".to_string())
}

/// `os-arch` label of the host.
pub fn platform() -> String {
    format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}

/// Resolve `command` against the `PATH` of `env`, relative to `cwd`.
pub fn which(command: &str, env: &BTreeMap<String, String>, cwd: &Path) -> Option<PathBuf> {
    let path = env.get("PATH").map(String::as_str).unwrap_or_default();
    which::which_in(command, Some(path), cwd).ok()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
