// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution record for one interface run.

use crate::env;
use crate::error::InterfaceError;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use nw_core::Value;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Placeholder for linked-library dependencies, which are never probed.
pub const SKIPPED_DEPENDENCIES: &str = "<skipped>";

/// Timing, environment and process details of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Runtime {
    pub interface: String,
    pub cwd: PathBuf,
    /// Directory the run started from and returns to.
    pub prevcwd: PathBuf,
    pub environ: BTreeMap<String, String>,
    pub hostname: String,
    pub platform: String,
    pub cmdline: Option<String>,
    pub command_path: Option<PathBuf>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// Seconds between start and end.
    pub duration: Option<f64>,
    pub returncode: Option<i32>,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub merged: Option<String>,
    pub success_codes: Vec<i32>,
    pub dependencies: String,
    pub traceback: Option<String>,
    pub traceback_args: Vec<String>,
}

impl Runtime {
    pub fn new(interface: impl Into<String>, cwd: PathBuf, prevcwd: PathBuf) -> Self {
        Self {
            interface: interface.into(),
            cwd,
            prevcwd,
            environ: env::process_environ(),
            hostname: env::hostname(),
            platform: env::platform(),
            cmdline: None,
            command_path: None,
            start_time: None,
            end_time: None,
            duration: None,
            returncode: None,
            stdout: None,
            stderr: None,
            merged: None,
            success_codes: vec![0],
            dependencies: SKIPPED_DEPENDENCIES.to_string(),
            traceback: None,
            traceback_args: Vec::new(),
        }
    }

    pub(crate) fn start(&mut self) {
        self.start_time = Some(Utc::now());
    }

    pub(crate) fn finish(&mut self) {
        let end = Utc::now();
        if let Some(start) = self.start_time {
            let elapsed = end - start;
            self.duration = Some(elapsed.num_microseconds().unwrap_or_default() as f64 / 1e6);
        }
        self.end_time = Some(end);
    }

    /// Record the error chain of a failed run.
    pub(crate) fn record_error(&mut self, err: &InterfaceError) {
        let mut messages = vec![err.to_string()];
        let mut source = std::error::Error::source(err);
        while let Some(cause) = source {
            messages.push(cause.to_string());
            source = cause.source();
        }

        self.traceback = Some(format!("{}: {}", err.kind(), messages.join("\n  caused by: ")));
        messages.push(format!(
            "An error of kind {} occurred while running interface {}.",
            err.kind(),
            self.interface
        ));
        self.traceback_args = messages;
    }

    /// Annotate a command that exited outside its success codes.
    pub(crate) fn check_return_code(&mut self) {
        if self.cmdline.is_none() {
            return;
        }
        if let Some(code) = self.returncode.filter(|c| !self.success_codes.contains(c)) {
            self.traceback = Some(format!("RuntimeError: subprocess exited with code {code}."));
        }
    }

    /// True when no failure was recorded.
    pub fn succeeded(&self) -> bool {
        self.traceback.is_none()
    }
}

/// Outcome of [`crate::run`].
#[derive(Debug, Clone, Serialize)]
pub struct InterfaceResult {
    pub interface: String,
    pub runtime: Runtime,
    /// Defined input values the run used.
    pub inputs: IndexMap<String, Value>,
    /// Hex digest of the hashed inputs, see [`nw_core::Inputs::hash_value`].
    pub inputs_hash: String,
    /// `None` when the run failed and the error was ignored.
    pub outputs: Option<IndexMap<String, Value>>,
}

impl InterfaceResult {
    /// Turn a recorded failure into an error.
    pub fn raise_for_status(self) -> Result<Self, InterfaceError> {
        if self.runtime.succeeded() {
            return Ok(self);
        }
        match (&self.runtime.cmdline, self.runtime.returncode) {
            (Some(cmdline), Some(code)) if !self.runtime.success_codes.contains(&code) => {
                Err(InterfaceError::NonZeroExit {
                    cmdline: cmdline.clone(),
                    stdout: self.runtime.stdout.clone().unwrap_or_default(),
                    stderr: self.runtime.stderr.clone().unwrap_or_default(),
                    code,
                })
            }
            _ => Err(InterfaceError::Custom {
                message: self.runtime.traceback.clone().unwrap_or_default(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
