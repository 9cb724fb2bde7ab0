// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Behavioral specs for the `nw` binary.

#[path = "specs/prelude.rs"]
mod prelude;

#[path = "specs/cli/cmdline.rs"]
mod cli_cmdline;
#[path = "specs/cli/help.rs"]
mod cli_help;
#[path = "specs/cli/list.rs"]
mod cli_list;
#[path = "specs/cli/run.rs"]
mod cli_run;
