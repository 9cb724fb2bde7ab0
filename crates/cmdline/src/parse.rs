// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Turning an input set into ordered command-line arguments.

use crate::derive::filename_from_source;
use crate::error::FormatError;
use crate::policy::ArgPolicy;
use nw_core::{Inputs, Value};
use std::collections::BTreeMap;

/// A formatted token and the position it was placed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub token: String,
    /// `None` for unordered arguments.
    pub position: Option<i32>,
}

/// Format every field that has an argstr, skipping names in `skip`.
///
/// Arguments with a non-negative position come first in ascending order,
/// then unordered arguments by field name, then negative positions in
/// ascending order. A later field replaces an earlier one at the same
/// position.
pub fn build_arguments(
    inputs: &Inputs,
    policy: &dyn ArgPolicy,
    skip: &[&str],
) -> Result<Vec<Argument>, FormatError> {
    let mut leading: BTreeMap<i32, String> = BTreeMap::new();
    let mut trailing: BTreeMap<i32, String> = BTreeMap::new();
    let mut unordered = Vec::new();

    for field in inputs.spec().sorted() {
        if field.argstr.is_none() || skip.contains(&field.name.as_str()) {
            continue;
        }

        let value = if !field.name_source.is_empty() {
            filename_from_source(inputs, &field.name, policy)?.map(Value::Str)
        } else if field.genfile && !inputs.is_defined(&field.name) {
            policy.gen_filename(&field.name, inputs).map(Value::Str)
        } else {
            inputs.get(&field.name).cloned()
        };
        let Some(value) = value else { continue };

        let Some(token) = policy.format_arg(field, &value, inputs)? else {
            continue;
        };
        tracing::debug!(field = %field.name, position = ?field.position, %token, "argument");

        match field.position {
            Some(pos) if pos >= 0 => {
                leading.insert(pos, token);
            }
            Some(pos) => {
                trailing.insert(pos, token);
            }
            None => unordered.push(token),
        }
    }

    let leading = leading.into_iter().map(|(p, token)| Argument { token, position: Some(p) });
    let unordered = unordered.into_iter().map(|token| Argument { token, position: None });
    let trailing = trailing.into_iter().map(|(p, token)| Argument { token, position: Some(p) });
    Ok(leading.chain(unordered).chain(trailing).collect())
}

/// Tokens of `arguments` joined by single spaces.
pub fn join_arguments(arguments: &[Argument]) -> String {
    arguments.iter().map(|a| a.token.as_str()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
