// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for argument formatting and name derivation.

use thiserror::Error;

/// Errors from printf-style argstr interpolation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgstrError {
    /// Conversion character that is not supported.
    #[error("unsupported conversion '%{conversion}' in {argstr:?}")]
    UnsupportedConversion {
        /// The conversion character.
        conversion: char,
        /// The format string.
        argstr: String,
    },

    /// A `%` at the end of the format string.
    #[error("incomplete format in {argstr:?}")]
    Incomplete {
        /// The format string.
        argstr: String,
    },

    /// Number of placeholders and values differ.
    #[error("{argstr:?} has {expected} placeholder(s) but {found} value(s) were given")]
    ArgumentCount {
        /// The format string.
        argstr: String,
        /// Placeholders in the format string.
        expected: usize,
        /// Values supplied.
        found: usize,
    },

    /// A value that the conversion cannot render.
    #[error("%{conversion} format: a number is required, not {value_type}")]
    Type {
        /// The conversion character.
        conversion: char,
        /// Type name of the offending value.
        value_type: &'static str,
    },
}

/// Errors from deriving a file name from another field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeriveError {
    /// Fields whose name sources point back at each other.
    #[error("mutually pointing name sources: {}", chain.join(" -> "))]
    CyclicNameSource {
        /// Fields visited, ending with the one that repeats.
        chain: Vec<String>,
    },

    /// A name source whose value cannot provide a base name.
    #[error("name_source '{source_field}' of '{field}' has no usable value")]
    InvalidNameSource {
        /// The derived field.
        field: String,
        /// The source field.
        source_field: String,
    },

    /// The name template failed to interpolate.
    #[error("invalid name template for '{field}': {source}")]
    Template {
        /// The derived field.
        field: String,
        /// Underlying interpolation error.
        source: ArgstrError,
    },
}

/// Errors from building command-line arguments.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormatError {
    #[error("error formatting command line argument '{field}' with value '{value}': {source}")]
    Argument {
        field: String,
        value: String,
        source: ArgstrError,
    },

    /// A value a tool-specific formatter refuses.
    #[error("invalid value for '{field}': {message}")]
    Invalid { field: String, message: String },

    #[error(transparent)]
    Derive(#[from] DeriveError),
}

impl FormatError {
    /// The field the error is about.
    pub fn field(&self) -> &str {
        match self {
            Self::Argument { field, .. } | Self::Invalid { field, .. } => field,
            Self::Derive(DeriveError::CyclicNameSource { chain }) => {
                chain.first().map(String::as_str).unwrap_or_default()
            }
            Self::Derive(DeriveError::InvalidNameSource { field, .. })
            | Self::Derive(DeriveError::Template { field, .. }) => field,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
