// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nw-core: field tables, input values and validation for niwrap interfaces

pub mod macros;

pub mod config;
pub mod error;
pub mod field;
pub mod hash;
pub mod help;
pub mod inputs;
pub mod spec;
pub mod value;
pub mod version;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::{ConfigError, ExecutionConfig, HashMethod, TerminalOutput};
pub use error::{InputsFileError, SpecError, ValidationError, VersionError};
pub use field::{FieldKind, FieldSpec};
pub use hash::{hash_file, InputsHash};
pub use help::format_help;
pub use inputs::{Inputs, PACKAGE_VERSION};
pub use spec::Spec;
pub use value::Value;
pub use version::{check_version_requirements, LooseVersion, Strictness};
