// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help text formatting for interfaces

use std::fmt::Write;

use crate::field::FieldSpec;
use crate::spec::Spec;

/// Format the help page for an interface.
///
/// `command` is `None` for in-process interfaces.
pub fn format_help(
    name: &str,
    command: Option<&str>,
    doc: Option<&str>,
    inputs: &Spec,
    outputs: &Spec,
) -> String {
    let mut out = String::new();

    // 1. Header
    let _ = writeln!(out, "{name}");
    if let Some(cmd) = command {
        let _ = writeln!(out, "\nWraps the executable command `{cmd}`.");
    }

    // 2. Docstring
    if let Some(doc) = doc.map(str::trim).filter(|d| !d.is_empty()) {
        out.push('\n');
        for line in doc.lines() {
            let _ = writeln!(out, "{}", line.trim_end());
        }
    }

    // 3. Inputs, mandatory first
    out.push_str("\nInputs:\n");
    let (mandatory, optional): (Vec<&FieldSpec>, Vec<&FieldSpec>) =
        inputs.iter().partition(|f| f.mandatory);
    if !mandatory.is_empty() {
        out.push_str("\n  [Mandatory]\n");
        for field in mandatory {
            write_field(&mut out, field);
        }
    }
    if !optional.is_empty() {
        out.push_str("\n  [Optional]\n");
        for field in optional {
            write_field(&mut out, field);
        }
    }
    if inputs.is_empty() {
        out.push_str("\n  None\n");
    }

    // 4. Outputs
    out.push_str("\nOutputs:\n\n");
    if outputs.is_empty() {
        out.push_str("  None\n");
    }
    for field in outputs.iter() {
        write_field(&mut out, field);
    }

    out
}

/// One field entry: type line, description, argument and relations.
fn write_field(out: &mut String, field: &FieldSpec) {
    let default = field
        .default
        .as_ref()
        .map(|d| format!(", default value: {d}"))
        .unwrap_or_default();
    let _ = writeln!(out, "  {}: ({}{default})", field.name, field.kind);

    if let Some(desc) = &field.desc {
        for line in desc.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let _ = writeln!(out, "      {line}");
        }
    }
    if let Some(argstr) = &field.argstr {
        match field.position {
            Some(pos) => {
                let _ = writeln!(out, "      argument: `{argstr}`, position: {pos}");
            }
            None => {
                let _ = writeln!(out, "      argument: `{argstr}`");
            }
        }
    }
    let partners: Vec<&str> = field.xor_partners().collect();
    if !partners.is_empty() {
        let _ = writeln!(out, "      mutually_exclusive: {}", partners.join(", "));
    }
    if !field.requires.is_empty() {
        let _ = writeln!(out, "      requires: {}", field.requires.join(", "));
    }
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
