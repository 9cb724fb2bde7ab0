// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Working-directory scope for interface runs.

use crate::error::InterfaceError;
use std::path::{Path, PathBuf};

/// Changes into a directory and changes back when dropped.
#[derive(Debug)]
pub struct CwdGuard {
    previous: PathBuf,
}

impl CwdGuard {
    pub fn enter(dir: &Path) -> Result<Self, InterfaceError> {
        let previous = std::env::current_dir()
            .map_err(|e| InterfaceError::io("failed to read current directory", e))?;
        std::env::set_current_dir(dir).map_err(|e| {
            InterfaceError::io(format!("failed to enter {}", dir.display()), e)
        })?;
        tracing::trace!(dir = %dir.display(), "entered run directory");
        Ok(Self { previous })
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        if let Err(e) = std::env::set_current_dir(&self.previous) {
            tracing::warn!(
                dir = %self.previous.display(),
                error = %e,
                "failed to restore working directory"
            );
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
