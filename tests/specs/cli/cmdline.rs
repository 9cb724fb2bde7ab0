// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nw cmdline` specs

use crate::prelude::*;

#[test]
fn cmdline_formats_bet_with_derived_output() {
    let project = Project::empty();
    project.file("scan.nii", "");
    project
        .nw()
        .args(["cmdline", "BET", "--set", "in_file=scan.nii", "--set", "frac=0.4", "--set", "mask=true"])
        .passes()
        .stdout_eq("bet scan.nii scan_brain.nii.gz -f 0.40 -m\n");
}

#[test]
fn output_type_changes_derived_extension() {
    let project = Project::empty();
    project.file("scan.nii", "");
    project
        .nw()
        .args(["cmdline", "BET", "--set", "in_file=scan.nii", "--set", "output_type=NIFTI"])
        .passes()
        .stdout_has("scan_brain.nii\n");
}

#[test]
fn inputs_file_is_applied_before_set() {
    let project = Project::empty();
    project.file("scan.nii", "");
    project.file("inputs.json", r#"{"in_file": "scan.nii", "frac": 0.3, "out_file": "brain.nii.gz"}"#);
    project
        .nw()
        .args(["cmdline", "BET", "--inputs", "inputs.json", "--set", "frac=0.7"])
        .passes()
        .stdout_eq("bet scan.nii brain.nii.gz -f 0.70\n");
}

#[test]
fn missing_mandatory_input_is_reported() {
    cli()
        .args(["cmdline", "BET"])
        .fails()
        .stderr_has("BET requires a value for input 'in_file'");
}

#[test]
fn missing_input_file_is_rejected() {
    let project = Project::empty();
    project
        .nw()
        .args(["cmdline", "BET", "--set", "in_file=absent.nii"])
        .fails()
        .stderr_has("must point to an existing path");
}

#[test]
fn mutually_exclusive_inputs_are_rejected() {
    let project = Project::empty();
    project.file("scan.nii", "");
    project
        .nw()
        .args(["cmdline", "BET", "--set", "in_file=scan.nii", "--set", "robust=true", "--set", "functional=true"])
        .fails()
        .stderr_has("mutually exclusive");
}

#[test]
fn malformed_assignment_is_rejected() {
    cli().args(["cmdline", "BET", "--set", "frac"]).fails().stderr_has("expected NAME=VALUE");
}

#[test]
fn value_of_wrong_kind_is_rejected() {
    cli()
        .args(["cmdline", "BET", "--set", "frac=most"])
        .fails()
        .stderr_has("invalid value 'most' for input 'frac'");
}

#[test]
fn in_process_interface_has_no_cmdline() {
    let project = Project::empty();
    project.file("notes.txt", "hello");
    project
        .nw()
        .args(["cmdline", "Rename", "--set", "in_file=notes.txt", "--set", "format_string=copy"])
        .fails()
        .stderr_has("Rename runs in-process");
}
