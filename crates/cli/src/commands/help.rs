// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nw help <interface>`: describe inputs and outputs.

use anyhow::Result;
use nw_core::ExecutionConfig;
use nw_interface::VersionCache;

pub fn handle(name: &str, config: &ExecutionConfig, versions: &VersionCache) -> Result<()> {
    let iface = super::build(name, config, versions)?;
    print!("{}", iface.help());
    Ok(())
}
