// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deriving output file names from other input fields.

use crate::argstr::interpolate;
use crate::error::DeriveError;
use crate::filename::split_filename;
use crate::policy::ArgPolicy;
use nw_core::{Inputs, Value};

/// Template used when a derived field declares none.
pub const DEFAULT_NAME_TEMPLATE: &str = "%s_generated";

/// Resolve the value of a name-sourced field.
///
/// A defined value without `%s` is returned as-is; so is the current value
/// when the field has no source, an exclusive partner is defined, or a
/// required companion is missing. Otherwise the template is applied to the
/// base name of the first source field, recursing through undefined sources.
pub fn filename_from_source(
    inputs: &Inputs,
    name: &str,
    policy: &dyn ArgPolicy,
) -> Result<Option<String>, DeriveError> {
    derive(inputs, name, policy, &mut Vec::new())
}

fn derive(
    inputs: &Inputs,
    name: &str,
    policy: &dyn ArgPolicy,
    chain: &mut Vec<String>,
) -> Result<Option<String>, DeriveError> {
    let current = inputs.get(name).map(Value::to_string);
    let templated = match inputs.get(name) {
        None => None,
        Some(Value::Str(s)) if s.contains("%s") => Some(s.clone()),
        Some(_) => return Ok(current),
    };
    let Some(field) = inputs.spec().get(name) else {
        return Ok(current);
    };
    let Some(source_name) = field.name_source.first() else {
        return Ok(current);
    };
    if field.xor_partners().any(|x| inputs.is_defined(x)) {
        return Ok(current);
    }
    if field.requires.iter().any(|r| !inputs.is_defined(r)) {
        return Ok(current);
    }
    if field.name_source.len() > 1 {
        tracing::warn!(
            field = name,
            used = %source_name,
            ignored = ?&field.name_source[1..],
            "only one name_source per field is used"
        );
    }

    let template = templated
        .or_else(|| field.name_template.clone())
        .unwrap_or_else(|| DEFAULT_NAME_TEMPLATE.to_string());

    let (base, source_ext) = match inputs.get(source_name) {
        Some(source) => {
            let invalid = || DeriveError::InvalidNameSource {
                field: name.to_string(),
                source_field: source_name.clone(),
            };
            match source.first_scalar().ok_or_else(invalid)? {
                Value::Str(path) => {
                    let (_, base, ext) = split_filename(path);
                    (base, ext)
                }
                Value::Dict(_) => return Err(invalid()),
                other => (other.to_string(), String::new()),
            }
        }
        None => {
            if chain.iter().any(|seen| seen == name) {
                chain.push(name.to_string());
                return Err(DeriveError::CyclicNameSource { chain: std::mem::take(chain) });
            }
            chain.push(name.to_string());
            let Some(base) = derive(inputs, source_name, policy, chain)? else {
                return Ok(current);
            };
            let (_, _, ext) = split_filename(&base);
            (base, ext)
        }
    };

    let derived = interpolate(&template, &[&Value::Str(base)])
        .map_err(|source| DeriveError::Template { field: name.to_string(), source })?;
    let (_, _, ext) = split_filename(&derived);

    let derived = if field.keep_extension && !(ext.is_empty() && source_ext.is_empty()) {
        if ext.is_empty() {
            format!("{derived}{source_ext}")
        } else {
            derived
        }
    } else {
        policy.overload_extension(derived, name, inputs)
    };
    tracing::debug!(field = name, source = %source_name, value = %derived, "derived file name");
    Ok(Some(derived))
}

#[cfg(test)]
#[path = "derive_tests.rs"]
mod tests;
