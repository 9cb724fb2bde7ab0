// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for field tables and input validation.

use std::path::PathBuf;
use thiserror::Error;

/// A field table that violates its own structural invariants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("field '{name}' is declared more than once")]
    DuplicateField { name: String },

    #[error("field '{field}' refers to unknown field '{target}' in its {relation} list")]
    UnknownReference {
        field: String,
        relation: &'static str,
        target: String,
    },

    /// A mandatory field without a default that excludes itself can never be satisfied.
    #[error("field '{field}' is mandatory without a default but lists itself as mutually exclusive")]
    SelfExclusiveMandatory { field: String },
}

/// Input values that do not satisfy the field table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("{interface} requires a value for input '{field}'. For a list of required inputs, see `nw help {interface}`")]
    MandatoryInput { interface: String, field: String },

    #[error("{interface} requires a value for one of the inputs '{}'. For a list of required inputs, see `nw help {interface}`", fields.join(", "))]
    MandatoryXor {
        interface: String,
        fields: Vec<String>,
    },

    #[error("{interface} requires {} {} because '{field}' is set. For a list of required inputs, see `nw help {interface}`",
        if requires.len() > 1 { "values for inputs" } else { "a value for input" },
        requires.iter().map(|r| format!("'{r}'")).collect::<Vec<_>>().join(", "))]
    MissingRequires {
        interface: String,
        field: String,
        requires: Vec<String>,
    },

    #[error("input \"{field}\" is mutually exclusive with input \"{other}\", which is already set")]
    MutuallyExclusive { field: String, other: String },

    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    #[error("field '{field}' expects {expected}, got {value}")]
    TypeMismatch {
        field: String,
        expected: String,
        value: String,
    },

    #[error("field '{field}' must point to an existing path: {}", path.display())]
    FileNotFound { field: String, path: PathBuf },

    #[error("{message}")]
    Deprecated { field: String, message: String },
}

impl ValidationError {
    /// The field the error is about.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MandatoryInput { field, .. }
            | Self::MissingRequires { field, .. }
            | Self::MutuallyExclusive { field, .. }
            | Self::UnknownField { field }
            | Self::TypeMismatch { field, .. }
            | Self::FileNotFound { field, .. }
            | Self::Deprecated { field, .. } => Some(field),
            Self::MandatoryXor { fields, .. } => fields.first().map(String::as_str),
        }
    }
}

/// A field that is not available in the active tool version.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("field {field} ({interface}) (version {version} {relation} required {required})")]
    Unavailable {
        interface: String,
        field: String,
        version: String,
        relation: &'static str,
        required: String,
    },

    #[error("cannot validate the package version {version:?} for {interface}: field {field} requires version {requirement}")]
    Unparseable {
        interface: String,
        field: String,
        version: String,
        requirement: String,
    },
}

/// Failure to load or save an inputs JSON file.
#[derive(Debug, Error)]
pub enum InputsFileError {
    #[error("failed to access inputs file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid inputs file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("inputs file {} must contain a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
