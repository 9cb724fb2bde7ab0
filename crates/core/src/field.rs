// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field descriptors: the static metadata tables interfaces are built from.

use crate::value::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Value type accepted by a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Bool,
    Int,
    Float,
    Str,
    File,
    Directory,
    /// One of a fixed set of values.
    Enum(Vec<Value>),
    List(Box<FieldKind>),
    /// Fixed-arity sequence; each element fills its own placeholder when formatted.
    Tuple(Vec<FieldKind>),
    /// String-to-string mapping (e.g. environment overrides).
    Dict,
}

impl FieldKind {
    pub fn list_of(inner: FieldKind) -> Self {
        FieldKind::List(Box::new(inner))
    }

    pub fn is_path(&self) -> bool {
        matches!(self, FieldKind::File | FieldKind::Directory)
    }

    /// A path kind, or a list of paths.
    pub fn holds_paths(&self) -> bool {
        match self {
            FieldKind::List(inner) => inner.is_path(),
            kind => kind.is_path(),
        }
    }

    /// Coerce a value to this kind, or `None` if it is not acceptable.
    ///
    /// Integers widen to floats, and a scalar is wrapped into a one-element
    /// list for list kinds.
    pub fn coerce(&self, value: Value) -> Option<Value> {
        match (self, value) {
            (FieldKind::Bool, v @ Value::Bool(_)) => Some(v),
            (FieldKind::Int, v @ Value::Int(_)) => Some(v),
            (FieldKind::Float, Value::Int(i)) => Some(Value::Float(i as f64)),
            (FieldKind::Float, v @ Value::Float(_)) => Some(v),
            (FieldKind::Str | FieldKind::File | FieldKind::Directory, v @ Value::Str(_)) => Some(v),
            (FieldKind::Enum(allowed), v) => {
                let float_enum = matches!(allowed.first(), Some(Value::Float(_)));
                let v = match v {
                    Value::Int(i) if float_enum => Value::Float(i as f64),
                    other => other,
                };
                allowed.contains(&v).then_some(v)
            }
            (FieldKind::List(inner), Value::List(items)) => items
                .into_iter()
                .map(|item| inner.coerce(item))
                .collect::<Option<Vec<_>>>()
                .map(Value::List),
            (FieldKind::List(inner), scalar) => inner.coerce(scalar).map(|v| Value::List(vec![v])),
            (FieldKind::Tuple(kinds), Value::List(items)) if items.len() == kinds.len() => kinds
                .iter()
                .zip(items)
                .map(|(kind, item)| kind.coerce(item))
                .collect::<Option<Vec<_>>>()
                .map(Value::List),
            (FieldKind::Dict, Value::Dict(map)) => map
                .into_iter()
                .map(|(k, v)| match v {
                    Value::Str(s) => Some((k, Value::Str(s))),
                    _ => None,
                })
                .collect::<Option<BTreeMap<_, _>>>()
                .map(Value::Dict),
            _ => None,
        }
    }

    /// Parse a command-line string into a value of this kind.
    ///
    /// Lists and tuples accept a JSON array or comma-separated items; dicts
    /// accept a JSON object or comma-separated `KEY=VALUE` pairs.
    pub fn parse_str(&self, raw: &str) -> Option<Value> {
        let raw = raw.trim();
        match self {
            FieldKind::Bool => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Some(Value::Bool(true)),
                "false" | "0" | "no" | "off" => Some(Value::Bool(false)),
                _ => None,
            },
            FieldKind::Int => raw.parse::<i64>().ok().map(Value::Int),
            FieldKind::Float => raw.parse::<f64>().ok().map(Value::Float),
            FieldKind::Str | FieldKind::File | FieldKind::Directory => {
                Some(Value::Str(raw.to_string()))
            }
            FieldKind::Enum(allowed) => allowed.iter().find(|v| v.to_string() == raw).cloned(),
            FieldKind::List(inner) => {
                if raw.starts_with('[') {
                    let parsed: Value = serde_json::from_str(raw).ok()?;
                    return self.coerce(parsed);
                }
                raw.split(',')
                    .filter(|s| !s.trim().is_empty())
                    .map(|item| inner.parse_str(item))
                    .collect::<Option<Vec<_>>>()
                    .map(Value::List)
            }
            FieldKind::Tuple(kinds) => {
                if raw.starts_with('[') {
                    let parsed: Value = serde_json::from_str(raw).ok()?;
                    return self.coerce(parsed);
                }
                let items: Vec<&str> = raw.split(',').collect();
                if items.len() != kinds.len() {
                    return None;
                }
                kinds
                    .iter()
                    .zip(items)
                    .map(|(kind, item)| kind.parse_str(item))
                    .collect::<Option<Vec<_>>>()
                    .map(Value::List)
            }
            FieldKind::Dict => {
                if raw.starts_with('{') {
                    let parsed: Value = serde_json::from_str(raw).ok()?;
                    return self.coerce(parsed);
                }
                raw.split(',')
                    .filter(|s| !s.trim().is_empty())
                    .map(|pair| {
                        let (k, v) = pair.split_once('=')?;
                        Some((k.trim().to_string(), Value::Str(v.trim().to_string())))
                    })
                    .collect::<Option<BTreeMap<_, _>>>()
                    .map(Value::Dict)
            }
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Bool => f.write_str("a boolean"),
            FieldKind::Int => f.write_str("an integer"),
            FieldKind::Float => f.write_str("a float"),
            FieldKind::Str => f.write_str("a string"),
            FieldKind::File => f.write_str("a pathlike object or string representing a file"),
            FieldKind::Directory => {
                f.write_str("a pathlike object or string representing a directory")
            }
            FieldKind::Enum(values) => {
                let shown: Vec<String> = values.iter().map(Value::to_string).collect();
                write!(f, "one of {}", shown.join(" or "))
            }
            FieldKind::List(inner) => write!(f, "a list of items which are {}", inner),
            FieldKind::Tuple(kinds) => {
                let shown: Vec<String> = kinds.iter().map(FieldKind::to_string).collect();
                write!(f, "a tuple of the form: ({})", shown.join(", "))
            }
            FieldKind::Dict => f.write_str("a dictionary with keys and values which are a string"),
        }
    }
}

/// Immutable descriptor of one input or output field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub desc: Option<String>,
    /// printf-style format string used to render the field on the command line.
    pub argstr: Option<String>,
    /// Ordering slot; negative positions sort into the trailing group.
    pub position: Option<i32>,
    pub mandatory: bool,
    /// Initial value (the field starts defined).
    pub default: Option<Value>,
    pub xor: Vec<String>,
    pub requires: Vec<String>,
    pub name_source: Vec<String>,
    pub name_template: Option<String>,
    pub keep_extension: bool,
    pub sep: Option<String>,
    pub genfile: bool,
    /// Path values must exist when set.
    pub exists: bool,
    pub nohash: bool,
    pub hash_files: bool,
    pub min_ver: Option<String>,
    pub max_ver: Option<String>,
    pub output_name: Option<String>,
    /// Package version at which this field stops being accepted.
    pub deprecated: Option<String>,
    pub new_name: Option<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            desc: None,
            argstr: None,
            position: None,
            mandatory: false,
            default: None,
            xor: Vec::new(),
            requires: Vec::new(),
            name_source: Vec::new(),
            name_template: None,
            keep_extension: false,
            sep: None,
            genfile: false,
            exists: false,
            nohash: false,
            hash_files: true,
            min_ver: None,
            max_ver: None,
            output_name: None,
            deprecated: None,
            new_name: None,
        }
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Bool)
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Int)
    }

    pub fn float(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Float)
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Str)
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::File)
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Directory)
    }

    pub fn dict(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Dict)
    }

    pub fn list_of(name: impl Into<String>, inner: FieldKind) -> Self {
        Self::new(name, FieldKind::list_of(inner))
    }

    pub fn one_of(name: impl Into<String>, values: impl IntoIterator<Item = Value>) -> Self {
        Self::new(name, FieldKind::Enum(values.into_iter().collect()))
    }

    pub fn tuple_of(name: impl Into<String>, kinds: impl IntoIterator<Item = FieldKind>) -> Self {
        Self::new(name, FieldKind::Tuple(kinds.into_iter().collect()))
    }

    crate::setters! {
        option {
            position: i32,
            desc: String,
            argstr: String,
            default: Value,
            name_template: String,
            sep: String,
            min_ver: String,
            max_ver: String,
            output_name: String,
        }
        flag { mandatory, keep_extension, genfile, exists, nohash }
    }

    pub fn xor<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.xor = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn requires<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn name_source<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.name_source = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn no_hash_files(mut self) -> Self {
        self.hash_files = false;
        self
    }

    pub fn deprecated(mut self, version: impl Into<String>, new_name: Option<&str>) -> Self {
        self.deprecated = Some(version.into());
        self.new_name = new_name.map(str::to_string);
        self
    }

    /// Fields listed in `xor`, excluding this field itself.
    pub fn xor_partners(&self) -> impl Iterator<Item = &str> {
        self.xor.iter().map(String::as_str).filter(move |n| *n != self.name)
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
