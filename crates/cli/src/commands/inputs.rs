// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Input values from `--inputs` files and `--set` flags.

use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use nw_core::{Spec, Value};
use nw_interface::Interface;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// JSON file of input values, loaded before any --set
    #[arg(long, value_name = "FILE")]
    pub inputs: Option<PathBuf>,
    /// Set one input (repeatable), e.g. --set frac=0.4
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,
}

/// Split `name=value`; the value may itself contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value)),
        _ => bail!("invalid --set '{raw}': expected NAME=VALUE"),
    }
}

/// Parse `raw` according to the kind of field `name`.
pub fn parse_value(spec: &Spec, name: &str, raw: &str) -> Result<Value> {
    let field = spec.get(name).ok_or_else(|| anyhow!("unknown input '{name}'"))?;
    field
        .kind
        .parse_str(raw)
        .ok_or_else(|| anyhow!("invalid value '{raw}' for input '{name}': expected {}", field.kind))
}

/// Load the inputs file, then apply each `--set` in order.
pub fn apply(iface: &mut dyn Interface, args: &InputArgs) -> Result<()> {
    if let Some(path) = &args.inputs {
        iface
            .inputs_mut()
            .load_json(path, true)
            .with_context(|| format!("loading inputs from {}", path.display()))?;
    }
    for raw in &args.set {
        let (name, raw_value) = parse_assignment(raw)?;
        let value = parse_value(iface.inputs().spec(), name, raw_value)?;
        tracing::debug!(input = name, value = %value, "setting input from command line");
        iface.inputs_mut().set(name, value)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "inputs_tests.rs"]
mod tests;
