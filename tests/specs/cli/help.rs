// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nw help` and clap usage specs

use crate::prelude::*;

#[test]
fn nw_help_shows_usage() {
    cli().args(["--help"]).passes().stdout_has("Usage:").stdout_has("cmdline");
}

#[test]
fn nw_version_shows_version() {
    cli().args(["--version"]).passes().stdout_has("0.2");
}

#[test]
fn nw_without_subcommand_fails_with_usage() {
    cli().fails().stderr_has("Usage:");
}

#[test]
fn help_describes_command_interface() {
    cli()
        .args(["help", "BET"])
        .passes()
        .stdout_has("Wraps the executable command `bet`.")
        .stdout_has("Inputs:")
        .stdout_has("in_file: (a pathlike object or string representing a file)")
        .stdout_has("Outputs:")
        .stdout_has("mask_file");
}

#[test]
fn help_lookup_ignores_case() {
    cli().args(["help", "rename"]).passes().stdout_has("Rename").stdout_lacks("Wraps the executable");
}

#[test]
fn help_for_unknown_interface_suggests_list() {
    cli().args(["help", "Flirt"]).fails().stderr_has("unknown interface 'Flirt'").stderr_has("nw list");
}
