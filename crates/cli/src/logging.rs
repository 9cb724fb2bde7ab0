// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Log subscriber for the `nw` binary.

use tracing_subscriber::EnvFilter;

/// Variable holding the log filter, e.g. `NW_LOG=nw_interface=debug`.
pub const LOG_ENV: &str = "NW_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Filter from `NW_LOG`, or `warn` when unset or invalid.
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the stderr subscriber. A second call is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
