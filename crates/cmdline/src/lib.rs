// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nw-cmdline: command-line formatting and output-name derivation

pub mod argstr;
pub mod derive;
pub mod error;
pub mod filename;
pub mod format;
pub mod parse;
pub mod policy;

pub use argstr::{has_placeholder, interpolate};
pub use derive::{filename_from_source, DEFAULT_NAME_TEMPLATE};
pub use error::{ArgstrError, DeriveError, FormatError};
pub use filename::{fname_presuffix, split_filename};
pub use format::format_arg;
pub use parse::{build_arguments, join_arguments, Argument};
pub use policy::{ArgPolicy, DefaultPolicy};
