// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! nw-tools: concrete interfaces for neuroimaging command-line tools

pub mod ants;
pub mod fsl;
pub mod registry;
pub mod util;

pub use registry::{entries, lookup, names, Constructor, Entry};
