// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nw run` specs

use crate::prelude::*;

#[test]
fn rename_copies_into_the_run_directory() {
    let project = Project::empty();
    project.file("notes.txt", "hello");
    project
        .nw()
        .args([
            "run", "Rename",
            "--set", "in_file=notes.txt",
            "--set", "format_string=renamed",
            "--set", "keep_ext=true",
        ])
        .passes()
        .stdout_has("Rename")
        .stdout_has("Outputs:")
        .stdout_has("renamed.txt");
    assert_eq!(project.read("renamed.txt"), "hello");
}

#[test]
fn run_json_reports_outputs_and_runtime() {
    let project = Project::empty();
    project.file("notes.txt", "hello");
    std::fs::create_dir(project.path().join("work")).unwrap();
    let out = project
        .nw()
        .args([
            "-o", "json", "run", "Rename",
            "--cwd", "work",
            "--set", "in_file=notes.txt",
            "--set", "format_string=copy.txt",
        ])
        .passes();
    let json = out.json();
    assert_eq!(json["interface"], "Rename");
    let out_file = json["outputs"]["out_file"].as_str().unwrap();
    assert!(out_file.ends_with("work/copy.txt"), "{out_file}");
    assert!(json["runtime"]["duration"].is_number());
    assert_eq!(project.read("work/copy.txt"), "hello");
}

#[test]
fn save_inputs_writes_non_default_values() {
    let project = Project::empty();
    project.file("notes.txt", "hello");
    project
        .nw()
        .args([
            "run", "Rename",
            "--set", "in_file=notes.txt",
            "--set", "format_string=copy",
            "--save-inputs", "saved.json",
        ])
        .passes();
    let saved: serde_json::Value = serde_json::from_str(&project.read("saved.json")).unwrap();
    assert_eq!(saved["format_string"], "copy");
    assert!(saved.get("keep_ext").is_none());
}

#[test]
fn missing_executable_names_the_command() {
    let project = Project::empty();
    project.file("scan.nii", "");
    project
        .nw()
        .env("PATH", project.path())
        .args(["run", "BET", "--set", "in_file=scan.nii"])
        .fails()
        .stderr_has("No command \"bet\" found");
}

#[test]
fn missing_run_directory_fails() {
    let project = Project::empty();
    project.file("notes.txt", "hello");
    project
        .nw()
        .args([
            "run", "Rename",
            "--cwd", "nowhere",
            "--set", "in_file=notes.txt",
            "--set", "format_string=copy",
        ])
        .fails();
}

#[test]
fn ignored_failure_is_reported_with_nonzero_exit() {
    let project = Project::empty();
    project.file("notes.txt", "hello");
    project
        .nw()
        .args([
            "run", "Rename",
            "--cwd", "nowhere",
            "--ignore-exception",
            "--set", "in_file=notes.txt",
            "--set", "format_string=copy",
        ])
        .fails()
        .stdout_has("No outputs collected.")
        .stderr_has("Rename failed");
}

#[test]
fn hash_method_from_environment_changes_inputs_hash() {
    let project = Project::empty();
    project.file("notes.txt", "hello");
    let args = [
        "-o", "json", "run", "Rename",
        "--set", "in_file=notes.txt",
        "--set", "format_string=copy",
    ];
    let by_time = project.nw().args(args).passes().json();
    let by_content = project.nw().env("NW_HASH_METHOD", "content").args(args).passes().json();

    let digest = by_time["inputs_hash"].as_str().unwrap();
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(by_content["inputs_hash"], by_time["inputs_hash"]);
}
