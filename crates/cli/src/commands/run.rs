// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nw run <interface>`: execute and report the result.

use anyhow::{Context, Result};
use clap::Args;
use nw_core::ExecutionConfig;
use nw_interface::{run, RunOptions, VersionCache};
use std::path::PathBuf;

use super::inputs::{apply, InputArgs};
use crate::exit_error::ExitError;
use crate::output::{format_or_json, render_result, OutputFormat};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Interface name (see `nw list`)
    pub interface: String,
    #[command(flatten)]
    pub inputs: InputArgs,
    /// Directory to run in (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
    /// Report failures in the result instead of aborting
    #[arg(long)]
    pub ignore_exception: bool,
    /// Write the non-default inputs to a JSON file before running
    #[arg(long, value_name = "FILE")]
    pub save_inputs: Option<PathBuf>,
}

pub fn handle(
    args: RunArgs,
    config: &ExecutionConfig,
    versions: &VersionCache,
    format: OutputFormat,
) -> Result<()> {
    let mut iface = super::build(&args.interface, config, versions)?;
    apply(iface.as_mut(), &args.inputs)?;
    if let Some(path) = &args.save_inputs {
        iface
            .inputs()
            .save_json(path)
            .with_context(|| format!("saving inputs to {}", path.display()))?;
    }

    let opts = RunOptions {
        cwd: args.cwd,
        ignore_exception: args.ignore_exception,
        stop_on_unknown_version: config.stop_on_unknown_version,
        hash_method: config.hash_method,
        ..RunOptions::default()
    };
    let result = run(iface.as_mut(), opts)?;
    format_or_json(format, &result, || print!("{}", render_result(&result)))?;

    if !result.runtime.succeeded() {
        let traceback = result.runtime.traceback.clone().unwrap_or_default();
        return Err(ExitError::run_failed(format!("{} failed: {traceback}", result.interface)).into());
    }
    Ok(())
}
