// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-tool hooks consulted while building a command line.

use crate::error::FormatError;
use crate::format::format_arg;
use nw_core::{FieldSpec, Inputs, Value};

/// Tool-specific overrides for formatting and name generation.
///
/// Every method has a default, so a tool only implements what it changes.
pub trait ArgPolicy {
    /// Render one field. Returning `Ok(None)` omits it.
    fn format_arg(
        &self,
        field: &FieldSpec,
        value: &Value,
        _inputs: &Inputs,
    ) -> Result<Option<String>, FormatError> {
        format_arg(field, value)
    }

    /// Value for an undefined `genfile` field.
    fn gen_filename(&self, _field: &str, _inputs: &Inputs) -> Option<String> {
        None
    }

    /// Adjust the extension of a derived name that does not keep its source extension.
    fn overload_extension(&self, value: String, _field: &str, _inputs: &Inputs) -> String {
        value
    }
}

/// Policy with no overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPolicy;

impl ArgPolicy for DefaultPolicy {}
