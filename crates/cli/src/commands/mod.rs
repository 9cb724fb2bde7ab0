// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod cmdline;
pub mod help;
pub mod inputs;
pub mod list;
pub mod run;

use anyhow::{anyhow, Result};
use nw_core::ExecutionConfig;
use nw_interface::{Interface, VersionCache};

/// Build a catalogue interface by name.
pub fn build(name: &str, config: &ExecutionConfig, versions: &VersionCache) -> Result<Box<dyn Interface>> {
    let entry = nw_tools::lookup(name).ok_or_else(|| {
        anyhow!("unknown interface '{name}'. Run `nw list` to see available interfaces")
    })?;
    Ok((entry.build)(config, versions)?)
}
