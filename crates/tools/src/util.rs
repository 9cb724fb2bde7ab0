// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process file utilities.

use indexmap::IndexMap;
use nw_cmdline::split_filename;
use nw_core::{FieldSpec, Inputs, SpecError, Value};
use nw_interface::{InterfaceError, Runtime, SimpleInterface};

/// `Rename`: copy a file to a new name in the run directory.
pub fn rename() -> Result<SimpleInterface, SpecError> {
    let inputs = [
        FieldSpec::file("in_file").mandatory().exists().desc("file to rename"),
        FieldSpec::string("format_string").mandatory().desc("new file name"),
        FieldSpec::boolean("keep_ext")
            .default(Value::Bool(false))
            .desc("Keep in_file extension, replace non-extension component of name"),
    ];
    let outputs = [FieldSpec::file("out_file").exists().desc("renamed file")];
    let iface = SimpleInterface::new("Rename", inputs, outputs, Box::new(copy_renamed))?
        .with_doc("Change the name of a file.");
    Ok(iface)
}

fn copy_renamed(
    inputs: &Inputs,
    runtime: &mut Runtime,
) -> Result<IndexMap<String, Value>, InterfaceError> {
    let missing = |field: &str| InterfaceError::Custom { message: format!("{field} is not set") };
    let in_file = inputs.get_str("in_file").ok_or_else(|| missing("in_file"))?;
    let mut name = inputs.get_str("format_string").ok_or_else(|| missing("format_string"))?.to_string();
    if inputs.get("keep_ext").is_some_and(Value::is_truthy) {
        let (_, _, ext) = split_filename(in_file);
        name.push_str(&ext);
    }

    // relative inputs were given from the directory the run started in
    let source = runtime.prevcwd.join(in_file);
    let target = runtime.cwd.join(&name);
    std::fs::copy(&source, &target).map_err(|source| InterfaceError::Io {
        context: format!("failed to copy {in_file} to {}", target.display()),
        source,
    })?;
    tracing::debug!(from = %in_file, to = %target.display(), "renamed file");
    Ok(IndexMap::from([("out_file".to_string(), Value::Str(target.display().to_string()))]))
}

#[cfg(test)]
#[path = "util_tests.rs"]
mod tests;
