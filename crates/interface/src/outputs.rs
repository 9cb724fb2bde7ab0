// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collecting predicted outputs and checking them against the output fields.

use crate::error::{InterfaceError, OutputError};
use crate::interface::Interface;
use indexmap::IndexMap;
use nw_core::{check_version_requirements, Strictness, Value};
use std::path::Path;

/// Validate the interface's predicted outputs.
///
/// Every output must be declared, available in the tool version and of the
/// declared kind; outputs marked `exists` must point at existing paths.
pub fn aggregate_outputs(iface: &dyn Interface) -> Result<IndexMap<String, Value>, InterfaceError> {
    let predicted = iface.list_outputs()?;
    if predicted.is_empty() {
        return Ok(predicted);
    }
    let interface = iface.name();
    let spec = iface.output_spec();

    if let Some(field) = predicted.keys().find(|k| !spec.contains(k)) {
        return Err(OutputError::Unknown {
            interface: interface.to_string(),
            field: field.clone(),
        }
        .into());
    }

    let unavailable = check_version_requirements(
        interface,
        spec,
        |_| false,
        iface.version(),
        Strictness::Permissive,
        false,
    )?;
    let fields: Vec<String> =
        predicted.keys().filter(|k| unavailable.contains(*k)).cloned().collect();
    if !fields.is_empty() {
        return Err(OutputError::Unavailable {
            interface: interface.to_string(),
            fields,
            version: iface.version().unwrap_or_default().to_string(),
        }
        .into());
    }

    let mut outputs = IndexMap::new();
    for (name, value) in predicted {
        let Some(field) = spec.get(&name) else { continue };
        let value = field.kind.coerce(value.clone()).ok_or_else(|| OutputError::TypeMismatch {
            interface: interface.to_string(),
            field: name.clone(),
            expected: field.kind.to_string(),
            value: value.to_string(),
        })?;
        if field.exists {
            check_exists(interface, &name, &value)?;
        }
        outputs.insert(name, value);
    }
    tracing::debug!(interface, count = outputs.len(), "collected outputs");
    Ok(outputs)
}

fn check_exists(interface: &str, field: &str, value: &Value) -> Result<(), OutputError> {
    match value {
        Value::Str(path) if !Path::new(path).exists() => Err(OutputError::MissingFile {
            interface: interface.to_string(),
            field: field.to_string(),
            path: path.into(),
        }),
        Value::List(items) => items.iter().try_for_each(|item| check_exists(interface, field, item)),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "outputs_tests.rs"]
mod tests;
