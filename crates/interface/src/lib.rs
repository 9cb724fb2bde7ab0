// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nw-interface: running interfaces and collecting their results

pub mod command;
pub mod context;
pub mod env;
pub mod error;
pub mod interface;
pub mod outputs;
pub mod package;
pub mod runtime;
pub mod simple;
pub mod subprocess;

pub use command::{common_fields, mpi_fields, stdout_fields, CommandLine, CommandPolicy, PlainCommand};
pub use context::CwdGuard;
pub use error::{ErrorKind, InterfaceError, OutputError};
pub use interface::{run, Interface, RunOptions};
pub use outputs::aggregate_outputs;
pub use package::{PackageInfo, VersionCache, VersionSource};
pub use runtime::{InterfaceResult, Runtime, SKIPPED_DEPENDENCIES};
pub use simple::{RunFn, SimpleInterface};
pub use subprocess::run_command;
