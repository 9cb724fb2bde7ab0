// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use nw_core::ValidationError;
use nw_interface::{run, RunOptions};
use serial_test::serial;
use yare::parameterized;

fn warp() -> CommandLine {
    warp_image_multi_transform(&ExecutionConfig::default(), &VersionCache::new()).unwrap()
}

/// Transform files on disk, in the given order.
fn transforms(dir: &Path, names: &[&str]) -> Vec<String> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            std::fs::write(&path, b"").unwrap();
            path.display().to_string()
        })
        .collect()
}

fn series(paths: &[String]) -> Value {
    Value::List(paths.iter().map(|p| Value::from(p.as_str())).collect())
}

#[test]
fn input_metadata() {
    let cmd = warp();
    let spec = cmd.inputs().spec();

    let dimension = spec.get("dimension").unwrap();
    assert_eq!(dimension.argstr.as_deref(), Some("%d"));
    assert_eq!(dimension.position, Some(1));
    assert_eq!(dimension.default, Some(Value::Int(3)));

    let input = spec.get("input_image").unwrap();
    assert!(input.mandatory);
    assert_eq!(input.position, Some(2));

    let output = spec.get("output_image").unwrap();
    assert!(output.genfile && !output.hash_files);
    assert_eq!(output.position, Some(3));
    assert_eq!(output.xor, ["out_postfix"]);

    let postfix = spec.get("out_postfix").unwrap();
    assert_eq!(postfix.default, Some(Value::from("_wimt")));
    assert_eq!(postfix.xor, ["output_image"]);

    assert_eq!(spec.get("reference_image").unwrap().xor, ["tightest_box"]);
    assert_eq!(spec.get("tightest_box").unwrap().xor, ["reference_image"]);
    assert_eq!(spec.get("transformation_series").unwrap().position, Some(-1));
    assert!(spec.get("num_threads").unwrap().nohash);
    assert!(spec.get("environ").unwrap().nohash);

    let outputs = cmd.output_spec();
    assert_eq!(outputs.names().collect::<Vec<_>>(), ["output_image"]);
}

#[test]
fn missing_inputs_name_input_image() {
    let mut cmd = warp();
    let err = run(&mut cmd, RunOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        InterfaceError::Validation(ValidationError::MandatoryInput { ref field, ref interface })
            if field == "input_image" && interface == "WarpImageMultiTransform"
    ));
}

#[test]
#[serial]
fn cmdline_orders_positions_and_generates_output() {
    let dir = tempfile::tempdir().unwrap();
    let paths = transforms(dir.path(), &["ants_Affine.txt", "ants_Warp.nii"]);
    let mut cmd = warp();
    cmd.inputs_mut().set("input_image", "moving.nii").unwrap();
    cmd.inputs_mut().set("tightest_box", true).unwrap();
    cmd.inputs_mut().set("transformation_series", series(&paths)).unwrap();

    assert_eq!(
        cmd.cmdline().unwrap().unwrap(),
        format!(
            "WarpImageMultiTransform 3 moving.nii moving_wimt.nii --tightest-bounding-box {} {}",
            paths[0], paths[1]
        )
    );
}

#[test]
#[serial]
fn explicit_output_displaces_postfix() {
    let dir = tempfile::tempdir().unwrap();
    let paths = transforms(dir.path(), &["ants_Warp.nii"]);
    let mut cmd = warp();
    cmd.inputs_mut().set("input_image", "moving.nii").unwrap();
    cmd.inputs_mut().set("output_image", "warped.nii.gz").unwrap();
    cmd.inputs_mut().set("transformation_series", series(&paths)).unwrap();

    assert!(!cmd.inputs().is_defined("out_postfix"));
    let line = cmd.cmdline().unwrap().unwrap();
    assert!(line.starts_with("WarpImageMultiTransform 3 moving.nii warped.nii.gz "));

    let outputs = cmd.list_outputs().unwrap();
    let expected = std::env::current_dir().unwrap().join("warped.nii.gz");
    assert_eq!(outputs["output_image"], Value::Str(expected.display().to_string()));
}

#[test]
#[serial]
fn inverted_affines_get_flag() {
    let dir = tempfile::tempdir().unwrap();
    let paths = transforms(dir.path(), &["a_Affine.txt", "b_Warp.nii", "c_Affine.txt"]);
    let mut cmd = warp();
    cmd.inputs_mut().set("input_image", "moving.nii").unwrap();
    cmd.inputs_mut().set("transformation_series", series(&paths)).unwrap();
    cmd.inputs_mut().set("invert_affine", Value::List(vec![Value::Int(2)])).unwrap();

    let line = cmd.cmdline().unwrap().unwrap();
    assert!(line.ends_with(&format!("{} {} -i {}", paths[0], paths[1], paths[2])));
}

#[test]
#[serial]
fn unused_invert_index_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let paths = transforms(dir.path(), &["a_Affine.txt"]);
    let mut cmd = warp();
    cmd.inputs_mut().set("input_image", "moving.nii").unwrap();
    cmd.inputs_mut().set("transformation_series", series(&paths)).unwrap();
    cmd.inputs_mut().set("invert_affine", Value::List(vec![Value::Int(1), Value::Int(3)])).unwrap();

    let err = cmd.cmdline().unwrap_err();
    assert!(matches!(
        err,
        InterfaceError::Format(FormatError::Invalid { ref field, .. }) if field == "invert_affine"
    ));
}

#[test]
fn missing_transform_file_is_rejected() {
    let mut cmd = warp();
    let err = cmd
        .inputs_mut()
        .set("transformation_series", Value::from("/nonexistent/Affine.txt"))
        .unwrap_err();
    assert!(matches!(err, ValidationError::FileNotFound { .. }));
}

#[test]
fn threads_reach_the_environment() {
    let mut cmd = warp();
    assert_eq!(cmd.environ().get(THREADS_VAR).map(String::as_str), Some("1"));

    cmd.inputs_mut().set("num_threads", 8).unwrap();
    assert_eq!(cmd.environ().get(THREADS_VAR).map(String::as_str), Some("8"));

    cmd.inputs_mut().set("num_threads", -1).unwrap();
    assert!(!cmd.environ().contains_key(THREADS_VAR));
}

#[parameterized(
    release = { "ANTs Version: 2.4.3\nCompiled: Jan 1 2023", Some("2.4.3") },
    githash = { "ANTs Version: 2.1.0.post783-g6d3b9\n", Some("2.1.0") },
    leading_v = { "ANTs Version: v2.5.0-gabc", Some("2.5.0") },
    missing = { "antsRegistration: command not found", None },
)]
fn version_parsing(raw: &str, expected: Option<&str>) {
    assert_eq!(parse_version(raw).as_deref(), expected);
}
