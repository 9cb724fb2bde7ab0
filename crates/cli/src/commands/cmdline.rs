// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nw cmdline <interface>`: print the command line without running it.

use anyhow::{bail, Result};
use clap::Args;
use nw_core::ExecutionConfig;
use nw_interface::VersionCache;

use super::inputs::{apply, InputArgs};

#[derive(Args, Debug)]
pub struct CmdlineArgs {
    /// Interface name (see `nw list`)
    pub interface: String,
    #[command(flatten)]
    pub inputs: InputArgs,
}

pub fn handle(args: CmdlineArgs, config: &ExecutionConfig, versions: &VersionCache) -> Result<()> {
    let mut iface = super::build(&args.interface, config, versions)?;
    apply(iface.as_mut(), &args.inputs)?;
    match iface.cmdline()? {
        Some(line) => println!("{line}"),
        None => bail!("{} runs in-process and has no command line", iface.name()),
    }
    Ok(())
}
