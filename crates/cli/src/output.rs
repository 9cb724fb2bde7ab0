// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt::Write as _;

use clap::ValueEnum;
use nw_interface::InterfaceResult;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Format-branch helper for single results.
///
/// Renders as JSON when `format` is `Json`, otherwise calls `text_fn`.
pub fn format_or_json<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl FnOnce(),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Text => {
            text_fn();
        }
    }
    Ok(())
}

/// Text summary of a finished run.
pub fn render_result(result: &InterfaceResult) -> String {
    let rt = &result.runtime;
    let mut out = String::new();
    let _ = writeln!(out, "{}", crate::color::header(&result.interface));
    if let Some(cmdline) = &rt.cmdline {
        let _ = writeln!(out, "  command:  {cmdline}");
    }
    if let Some(code) = rt.returncode {
        let _ = writeln!(out, "  exit:     {code}");
    }
    if let Some(duration) = rt.duration {
        let _ = writeln!(out, "  duration: {duration:.3}s");
    }
    let _ = writeln!(out, "  cwd:      {}", rt.cwd.display());
    let _ = writeln!(out, "  inputs:   {}", result.inputs_hash);

    match &result.outputs {
        Some(outputs) if !outputs.is_empty() => {
            let _ = writeln!(out, "\nOutputs:");
            let width = outputs.keys().map(String::len).max().unwrap_or(0);
            for (name, value) in outputs {
                let _ = writeln!(out, "  {name:<width$}  {value}");
            }
        }
        Some(_) => {}
        None => {
            let _ = writeln!(out, "\nNo outputs collected.");
        }
    }

    for (label, text) in [("Standard output", &rt.stdout), ("Standard error", &rt.stderr)] {
        if let Some(text) = text.as_deref().filter(|t| !t.trim().is_empty()) {
            let _ = writeln!(out, "\n{label}:\n{}", text.trim_end());
        }
    }
    if let Some(traceback) = &rt.traceback {
        let _ = writeln!(out, "\n{traceback}");
    }
    out
}
