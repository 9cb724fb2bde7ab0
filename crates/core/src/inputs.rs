// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field values bound to a field table.

use crate::error::{InputsFileError, ValidationError};
use crate::field::FieldSpec;
use crate::spec::Spec;
use crate::value::Value;
use crate::version::LooseVersion;
use indexmap::IndexMap;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Package version that deprecation deadlines are compared against.
pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Values for the fields of one [`Spec`].
///
/// A field missing from the map is undefined. Fields with a default start
/// defined; values set through [`Inputs::set`] are tracked as explicit so
/// that an explicit choice can displace a partner's default but never
/// another explicit choice.
#[derive(Debug, Clone)]
pub struct Inputs {
    spec: Arc<Spec>,
    values: IndexMap<String, Value>,
    explicit: HashSet<String>,
}

impl Inputs {
    pub fn new(spec: Arc<Spec>) -> Self {
        let values = spec
            .iter()
            .filter_map(|f| f.default.clone().map(|v| (f.name.clone(), v)))
            .collect();
        Self { spec, values, explicit: HashSet::new() }
    }

    pub fn spec(&self) -> &Spec {
        &self.spec
    }

    pub fn shared_spec(&self) -> Arc<Spec> {
        Arc::clone(&self.spec)
    }

    fn field(&self, name: &str) -> Result<&FieldSpec, ValidationError> {
        self.spec
            .get(name)
            .ok_or_else(|| ValidationError::UnknownField { field: name.to_string() })
    }

    /// Set a field, coercing the value to the field's kind.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), ValidationError> {
        let field = self.field(name)?.clone();
        let raw = value.into();
        let value = field.kind.coerce(raw.clone()).ok_or_else(|| ValidationError::TypeMismatch {
            field: name.to_string(),
            expected: field.kind.to_string(),
            value: raw.to_string(),
        })?;

        if field.exists && field.kind.holds_paths() {
            check_paths_exist(name, &value)?;
        }

        if let Some(deadline) = &field.deprecated {
            let mut message = format!(
                "Input {} is deprecated. Will be removed or raise an error as of release {}.",
                name, deadline
            );
            if let Some(new_name) = &field.new_name {
                message.push_str(&format!(" It has been replaced by {}.", new_name));
            }
            let expired = LooseVersion::parse(deadline)
                .try_cmp(&LooseVersion::parse(PACKAGE_VERSION))
                .is_some_and(|ord| ord == Ordering::Less);
            if expired {
                return Err(ValidationError::Deprecated { field: name.to_string(), message });
            }
            tracing::warn!(field = name, "{}", message);
            if let Some(new_name) = &field.new_name {
                self.values.shift_remove(name);
                self.explicit.remove(name);
                return self.set(new_name, value);
            }
        }

        for partner in field.xor_partners() {
            if self.explicit.contains(partner) {
                return Err(ValidationError::MutuallyExclusive {
                    field: name.to_string(),
                    other: partner.to_string(),
                });
            }
        }
        for partner in field.xor_partners() {
            if self.values.shift_remove(partner).is_some() {
                tracing::debug!(field = name, partner, "clearing default of mutually exclusive input");
            }
        }

        self.values.insert(name.to_string(), value);
        self.explicit.insert(name.to_string());
        Ok(())
    }

    /// Reset a field to undefined.
    pub fn unset(&mut self, name: &str) -> Result<(), ValidationError> {
        self.field(name)?;
        self.values.shift_remove(name);
        self.explicit.remove(name);
        Ok(())
    }

    /// Current value, `None` when undefined.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn is_explicit(&self, name: &str) -> bool {
        self.explicit.contains(name)
    }

    /// Names set through [`Inputs::set`], in field declaration order.
    pub fn explicit(&self) -> impl Iterator<Item = &str> {
        self.spec.iter().map(|f| f.name.as_str()).filter(|n| self.explicit.contains(*n))
    }

    /// Defined values in field declaration order.
    pub fn defined(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.spec
            .iter()
            .filter_map(|f| self.values.get(&f.name).map(|v| (f.name.as_str(), v)))
    }

    /// Snapshot of all defined values.
    pub fn to_map(&self) -> IndexMap<String, Value> {
        self.defined().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    /// Defined values that differ from the field default.
    pub fn non_default(&self) -> IndexMap<String, Value> {
        self.spec
            .iter()
            .filter_map(|f| {
                let value = self.values.get(&f.name)?;
                (f.default.as_ref() != Some(value)).then(|| (f.name.clone(), value.clone()))
            })
            .collect()
    }

    /// Verify mandatory, mutually exclusive and required-together fields.
    pub fn check_mandatory(&self, interface: &str) -> Result<(), ValidationError> {
        for field in self.spec.iter().filter(|f| f.mandatory) {
            let defined = self.is_defined(&field.name);
            if !field.xor.is_empty() {
                let any_partner = field.xor_partners().any(|p| self.is_defined(p));
                if !defined && !any_partner {
                    return Err(ValidationError::MandatoryXor {
                        interface: interface.to_string(),
                        fields: field.xor.clone(),
                    });
                }
            } else if !defined {
                return Err(ValidationError::MandatoryInput {
                    interface: interface.to_string(),
                    field: field.name.clone(),
                });
            }
        }

        for field in self.spec.iter() {
            if !self.is_defined(&field.name) {
                continue;
            }
            if let Some(other) = field.xor_partners().find(|p| self.is_defined(p)) {
                return Err(ValidationError::MutuallyExclusive {
                    field: field.name.clone(),
                    other: other.to_string(),
                });
            }
            if field.requires.iter().any(|r| !self.is_defined(r)) {
                return Err(ValidationError::MissingRequires {
                    interface: interface.to_string(),
                    field: field.name.clone(),
                    requires: field.requires.clone(),
                });
            }
        }
        Ok(())
    }

    /// Pre-populate from a JSON object of field values.
    ///
    /// Unknown keys and `null` values are skipped. Without `overwrite`,
    /// fields that are already defined keep their value.
    pub fn load_json(&mut self, path: &Path, overwrite: bool) -> Result<(), InputsFileError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| InputsFileError::Io { path: path.to_path_buf(), source })?;
        let parsed: serde_json::Value = serde_json::from_str(&content)
            .map_err(|source| InputsFileError::Json { path: path.to_path_buf(), source })?;
        let serde_json::Value::Object(object) = parsed else {
            return Err(InputsFileError::NotAnObject { path: path.to_path_buf() });
        };

        for (key, raw) in object {
            if !self.spec.contains(&key) {
                tracing::debug!(field = %key, path = %path.display(), "ignoring unknown input");
                continue;
            }
            if raw.is_null() || (!overwrite && self.is_defined(&key)) {
                continue;
            }
            let value: Value = serde_json::from_value(raw)
                .map_err(|source| InputsFileError::Json { path: path.to_path_buf(), source })?;
            self.set(&key, value)?;
        }
        Ok(())
    }

    /// Write non-default defined values as a JSON object indented by four spaces.
    pub fn save_json(&self, path: &Path) -> Result<(), InputsFileError> {
        let inputs = self.non_default();
        tracing::debug!(path = %path.display(), count = inputs.len(), "saving inputs");
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        inputs
            .serialize(&mut ser)
            .map_err(|source| InputsFileError::Json { path: path.to_path_buf(), source })?;
        std::fs::write(path, buf)
            .map_err(|source| InputsFileError::Io { path: path.to_path_buf(), source })
    }
}

fn check_paths_exist(field: &str, value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::Str(path) if !Path::new(path).exists() => Err(ValidationError::FileNotFound {
            field: field.to_string(),
            path: PathBuf::from(path),
        }),
        Value::List(items) => items.iter().try_for_each(|item| check_paths_exist(field, item)),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "inputs_tests.rs"]
mod tests;
