// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution configuration.
//!
//! Resolution order: built-in defaults, then the TOML file named by
//! `NW_CONFIG`, then individual `NW_*` environment overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// How file-valued inputs contribute to the input hash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashMethod {
    /// Modification time and size.
    #[default]
    Timestamp,
    /// SHA-256 of the file contents.
    Content,
}

crate::simple_display! {
    HashMethod {
        Timestamp => "timestamp",
        Content => "content",
    }
}

impl FromStr for HashMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "timestamp" => Ok(Self::Timestamp),
            "content" => Ok(Self::Content),
            _ => Err(ConfigError::InvalidValue { key: "hash_method", value: s.to_string() }),
        }
    }
}

/// Where a command's stdout/stderr go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalOutput {
    /// Log each line as it arrives and capture it.
    #[default]
    Stream,
    /// Capture everything and return it once the process exits.
    Allatonce,
    /// Merge both streams into `output.nipype`.
    File,
    /// `stdout.nipype` and `stderr.nipype`.
    FileSplit,
    /// stdout to `stdout.nipype`, stderr captured.
    FileStdout,
    /// stderr to `stderr.nipype`, stdout captured.
    FileStderr,
    /// Discard both streams.
    None,
}

crate::simple_display! {
    TerminalOutput {
        Stream => "stream",
        Allatonce => "allatonce",
        File => "file",
        FileSplit => "file_split",
        FileStdout => "file_stdout",
        FileStderr => "file_stderr",
        None => "none",
    }
}

impl FromStr for TerminalOutput {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stream" => Ok(Self::Stream),
            "allatonce" => Ok(Self::Allatonce),
            "file" => Ok(Self::File),
            "file_split" => Ok(Self::FileSplit),
            "file_stdout" => Ok(Self::FileStdout),
            "file_stderr" => Ok(Self::FileStderr),
            "none" => Ok(Self::None),
            _ => Err(ConfigError::InvalidValue { key: "terminal_output", value: s.to_string() }),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Settings that control how interfaces validate and execute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Fail instead of warning when a tool version cannot be compared.
    pub stop_on_unknown_version: bool,
    pub hash_method: HashMethod,
    pub terminal_output: TerminalOutput,
    /// Write the command line to `command.txt` in the run directory.
    pub write_cmdline: bool,
}

impl ExecutionConfig {
    /// Load from `NW_CONFIG` (if set) and apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("NW_CONFIG").ok().filter(|s| !s.is_empty()) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        toml::from_str(&content)
            .map_err(|source| ConfigError::Toml { path: path.to_path_buf(), source })
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(v) = std::env::var("NW_STOP_ON_UNKNOWN_VERSION") {
            self.stop_on_unknown_version = matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Ok(v) = std::env::var("NW_HASH_METHOD") {
            self.hash_method = v.parse()?;
        }
        if let Ok(v) = std::env::var("NW_TERMINAL_OUTPUT") {
            self.terminal_output = v.parse()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
