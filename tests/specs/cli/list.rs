// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nw list` specs

use crate::prelude::*;

#[test]
fn list_shows_every_interface_sorted() {
    let out = cli().args(["list"]).passes();
    let names: Vec<&str> = out.stdout.lines().filter_map(|l| l.split_whitespace().next()).collect();
    assert_eq!(names, ["BET", "Rename", "WarpImageMultiTransform"]);
}

#[test]
fn list_json_includes_summaries() {
    let json = cli().args(["-o", "json", "list"]).passes().json();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["name"], "BET");
    assert_eq!(entries[0]["summary"], "FSL brain extraction");
}
