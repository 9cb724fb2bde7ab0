// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering one field value through its argstr.

use crate::argstr::{has_placeholder, interpolate};
use crate::error::{ArgstrError, FormatError};
use nw_core::{FieldKind, FieldSpec, Value};

/// Marker at the end of an argstr that repeats the flag for every element.
const REPEAT_MARKER: &str = "...";

/// Render `value` through the field's argstr.
///
/// Returns `Ok(None)` for a false flag and for fields without an argstr.
pub fn format_arg(field: &FieldSpec, value: &Value) -> Result<Option<String>, FormatError> {
    let Some(argstr) = field.argstr.as_deref() else {
        return Ok(None);
    };
    let wrap = |source: ArgstrError| FormatError::Argument {
        field: field.name.clone(),
        value: value.to_string(),
        source,
    };

    if field.kind == FieldKind::Bool && !has_placeholder(argstr) {
        return Ok(value.is_truthy().then(|| argstr.to_string()));
    }

    let is_tuple = matches!(field.kind, FieldKind::Tuple(_));
    // Lists, and list values of compound kinds, join their elements
    let items = match value {
        Value::List(items) if !is_tuple => Some(items.as_slice()),
        _ => None,
    };

    if let Some(items) = items {
        let sep = field.sep.as_deref().unwrap_or(" ");
        if let Some(single) = argstr.strip_suffix(REPEAT_MARKER) {
            let tuple_items = match &field.kind {
                FieldKind::List(inner) => matches!(**inner, FieldKind::Tuple(_)),
                _ => false,
            };
            let parts = items
                .iter()
                .map(|item| match item {
                    // each tuple element fills its own placeholder
                    Value::List(elements) if tuple_items => {
                        interpolate(single, &elements.iter().collect::<Vec<_>>())
                    }
                    _ => interpolate(single, &[item]),
                })
                .collect::<Result<Vec<_>, _>>()
                .map_err(wrap)?;
            return Ok(Some(parts.join(sep)));
        }
        let joined =
            Value::Str(items.iter().map(Value::to_string).collect::<Vec<_>>().join(sep));
        return interpolate(argstr, &[&joined]).map(Some).map_err(wrap);
    }

    if is_tuple {
        if let Value::List(items) = value {
            let refs: Vec<&Value> = items.iter().collect();
            return interpolate(argstr, &refs).map(Some).map_err(wrap);
        }
    }

    tracing::trace!(field = %field.name, %value, "formatting argument");
    interpolate(argstr, &[value]).map(Some).map_err(wrap)
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
