// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for running interfaces.

use crate::runtime::Runtime;
use nw_cmdline::{DeriveError, FormatError};
use nw_core::{InputsFileError, SpecError, ValidationError, VersionError};
use std::path::PathBuf;
use thiserror::Error;

/// Broad category of an [`InterfaceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Field tables and input values.
    Configuration,
    /// Host environment: executables, files, directories.
    Environment,
    /// Rendering the command line.
    Formatting,
    /// Tool version gating.
    Version,
    /// Failures while the interface ran.
    Run,
    /// Collected outputs that do not match the output fields.
    Output,
}

nw_core::simple_display! {
    ErrorKind {
        Configuration => "ConfigurationError",
        Environment => "EnvironmentError",
        Formatting => "FormattingError",
        Version => "VersionError",
        Run => "RunError",
        Output => "OutputError",
    }
}

/// Outputs that cannot be collected.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("{interface} produced unknown output '{field}'")]
    Unknown { interface: String, field: String },

    #[error("Output field(s) {} not available in version {version} of interface {interface}.", fields.join(", "))]
    Unavailable {
        interface: String,
        fields: Vec<String>,
        version: String,
    },

    #[error("No such file or directory '{}' for output '{field}' of a {interface} interface", path.display())]
    MissingFile {
        interface: String,
        field: String,
        path: PathBuf,
    },

    #[error("output '{field}' of {interface} expects {expected}, got {value}")]
    TypeMismatch {
        interface: String,
        field: String,
        expected: String,
        value: String,
    },
}

#[derive(Debug, Error)]
pub enum InterfaceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Derive(#[from] DeriveError),

    #[error(transparent)]
    InputsFile(#[from] InputsFileError),

    #[error("No command \"{command}\" found on host {host}. Please check that the corresponding package is installed.")]
    ExecutableNotFound { command: String, host: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Output(#[from] OutputError),

    /// The command ran but exited outside its success codes.
    #[error("Command:\n{cmdline}\nStandard output:\n{stdout}\nStandard error:\n{stderr}\nReturn code: {code}")]
    NonZeroExit {
        cmdline: String,
        stdout: String,
        stderr: String,
        code: i32,
    },

    /// Failure raised by an in-process interface.
    #[error("{message}")]
    Custom { message: String },

    /// An error raised inside the timed part of a run.
    #[error("interface {interface} failed: {source}")]
    Run {
        interface: String,
        runtime: Box<Runtime>,
        source: Box<InterfaceError>,
    },
}

impl InterfaceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::Spec(_) | Self::Derive(_) | Self::InputsFile(_) => {
                ErrorKind::Configuration
            }
            Self::ExecutableNotFound { .. } | Self::Io { .. } => ErrorKind::Environment,
            Self::Format(_) => ErrorKind::Formatting,
            Self::Version(_) => ErrorKind::Version,
            Self::Output(_) => ErrorKind::Output,
            Self::NonZeroExit { .. } | Self::Custom { .. } | Self::Run { .. } => ErrorKind::Run,
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Runtime captured with a [`InterfaceError::Run`] failure.
    pub fn runtime(&self) -> Option<&Runtime> {
        match self {
            Self::Run { runtime, .. } => Some(runtime),
            _ => None,
        }
    }

    /// The error underneath any [`InterfaceError::Run`] wrapping.
    pub fn root(&self) -> &InterfaceError {
        match self {
            Self::Run { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
