// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ANTs image registration tools.

use indexmap::IndexMap;
use nw_cmdline::filename::absolute;
use nw_cmdline::{format_arg, split_filename, ArgPolicy, FormatError};
use nw_core::{ExecutionConfig, FieldKind, FieldSpec, Inputs, Spec, SpecError, Value};
use nw_interface::{
    CommandLine, CommandPolicy, Interface, InterfaceError, PackageInfo, VersionCache, VersionSource,
};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Environment variable ITK reads its thread count from.
pub const THREADS_VAR: &str = "ITK_GLOBAL_DEFAULT_NUMBER_OF_THREADS";

/// Thread count used when the caller does not choose one.
const DEFAULT_THREADS: i64 = 1;

/// ANTs package, probed through `antsRegistration --version`.
pub fn package() -> PackageInfo {
    PackageInfo {
        name: "ants",
        source: VersionSource::Command("antsRegistration --version".to_string()),
        parse: parse_version,
    }
}

/// Extract `X.Y.Z` from the `ANTs Version:` line, dropping any git suffix.
pub fn parse_version(raw: &str) -> Option<String> {
    let line = raw.lines().find_map(|l| l.trim().strip_prefix("ANTs Version:"))?;
    let version = line.split_whitespace().next()?;
    let version = version.split('-').next()?.trim_start_matches('v');
    let parts: Vec<&str> = version.split('.').take(3).collect();
    (!parts.is_empty() && !parts[0].is_empty()).then(|| parts.join("."))
}

/// Threads field shared by every ANTs tool.
fn thread_field() -> FieldSpec {
    FieldSpec::integer("num_threads")
        .desc("Number of ITK threads to use")
        .default(Value::Int(DEFAULT_THREADS))
        .nohash()
}

fn ants_environ(inputs: &Inputs) -> BTreeMap<String, String> {
    match inputs.get("num_threads").and_then(Value::as_int) {
        Some(n) if n != -1 => BTreeMap::from([(THREADS_VAR.to_string(), n.to_string())]),
        _ => BTreeMap::new(),
    }
}

/// Formatting and naming rules of `WarpImageMultiTransform`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WarpPolicy;

impl WarpPolicy {
    fn output_image(&self, inputs: &Inputs) -> Option<String> {
        match inputs.get_str("output_image") {
            Some(explicit) => Some(explicit.to_string()),
            None => self.gen_filename("output_image", inputs),
        }
    }

    /// Transformation series with `-i` before each inverted affine.
    fn transformation_series(&self, value: &Value, inputs: &Inputs) -> Result<String, FormatError> {
        let invert: Option<Vec<i64>> = inputs
            .get("invert_affine")
            .and_then(Value::as_list)
            .map(|items| items.iter().filter_map(Value::as_int).collect());

        let transforms = value.as_list().unwrap_or(std::slice::from_ref(value));
        let mut series = Vec::new();
        let mut affine_counter = 0;
        let mut inverted = Vec::new();
        for transform in transforms {
            let transform = transform.to_string();
            if let Some(invert) = &invert {
                if transform.contains("Affine") {
                    affine_counter += 1;
                    if invert.contains(&affine_counter) {
                        series.push("-i".to_string());
                        inverted.push(affine_counter);
                    }
                }
            }
            series.push(transform);
        }

        if let Some(invert) = &invert {
            let unused: Vec<String> =
                invert.iter().filter(|i| !inverted.contains(i)).map(i64::to_string).collect();
            if !unused.is_empty() {
                return Err(FormatError::Invalid {
                    field: "invert_affine".to_string(),
                    message: format!(
                        "indexes {} match no affine transformation in transformation_series",
                        unused.join(", ")
                    ),
                });
            }
        }
        Ok(series.join(" "))
    }
}

impl ArgPolicy for WarpPolicy {
    fn format_arg(
        &self,
        field: &FieldSpec,
        value: &Value,
        inputs: &Inputs,
    ) -> Result<Option<String>, FormatError> {
        if field.name == "transformation_series" {
            return self.transformation_series(value, inputs).map(Some);
        }
        format_arg(field, value)
    }

    fn gen_filename(&self, field: &str, inputs: &Inputs) -> Option<String> {
        if field != "output_image" {
            return None;
        }
        let input = absolute(Path::new(inputs.get_str("input_image")?));
        let (_, base, ext) = split_filename(&input.display().to_string());
        let postfix = inputs.get_str("out_postfix").unwrap_or_default();
        Some(format!("{base}{postfix}{ext}"))
    }
}

impl CommandPolicy for WarpPolicy {
    fn environ(&self, inputs: &Inputs) -> BTreeMap<String, String> {
        ants_environ(inputs)
    }

    fn list_outputs(&self, cmd: &CommandLine) -> Result<IndexMap<String, Value>, InterfaceError> {
        let mut outputs = IndexMap::new();
        if let Some(image) = self.output_image(cmd.inputs()) {
            let image = absolute(Path::new(&image)).display().to_string();
            outputs.insert("output_image".to_string(), Value::Str(image));
        }
        Ok(outputs)
    }
}

fn warp_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::one_of("dimension", [Value::Int(3), Value::Int(2)])
            .argstr("%d")
            .position(1)
            .default(Value::Int(3))
            .desc("image dimension (2 or 3)"),
        FieldSpec::file("input_image")
            .argstr("%s")
            .mandatory()
            .position(2)
            .desc("image to apply transformation to (generally a coregistered functional)"),
        FieldSpec::file("output_image")
            .argstr("%s")
            .genfile()
            .no_hash_files()
            .position(3)
            .xor(["out_postfix"])
            .desc("name of the output warped image"),
        FieldSpec::file("out_postfix")
            .default(Value::from("_wimt"))
            .no_hash_files()
            .xor(["output_image"])
            .desc("Postfix that is prepended to all output files (default = _wimt)"),
        FieldSpec::file("reference_image")
            .argstr("-R %s")
            .xor(["tightest_box"])
            .desc("reference image space that you wish to warp INTO"),
        FieldSpec::boolean("tightest_box")
            .argstr("--tightest-bounding-box")
            .xor(["reference_image"])
            .desc("computes tightest bounding box (overridden by reference_image if given)"),
        FieldSpec::boolean("reslice_by_header").argstr("--reslice-by-header").desc(
            "Uses orientation matrix and origin encoded in reference image file header. \
             Not typically used with additional transforms",
        ),
        FieldSpec::boolean("use_nearest")
            .argstr("--use-NN")
            .desc("Use nearest neighbor interpolation"),
        FieldSpec::boolean("use_bspline")
            .argstr("--use-BSpline")
            .desc("Use 3rd order B-Spline interpolation"),
        FieldSpec::list_of("transformation_series", FieldKind::File)
            .argstr("%s")
            .mandatory()
            .exists()
            .position(-1)
            .desc("transformation file(s) to be applied"),
        FieldSpec::list_of("invert_affine", FieldKind::Int).desc(
            "List of Affine transformations to invert. E.g.: [1,4,5] inverts the 1st, 4th, \
             and 5th Affines found in transformation_series. Indexing starts with 1 and does \
             not include warp fields. Affine transformations are recognized by the word \
             \"Affine\" in their file names.",
        ),
        thread_field(),
    ]
}

/// `WarpImageMultiTransform`: apply a series of transforms to one image.
pub fn warp_image_multi_transform(
    config: &ExecutionConfig,
    versions: &VersionCache,
) -> Result<CommandLine, SpecError> {
    let outputs = Spec::shared([FieldSpec::file("output_image").desc("Warped image")])?;
    let cmd = CommandLine::new(
        "WarpImageMultiTransform",
        "WarpImageMultiTransform",
        warp_fields(),
        outputs,
        Arc::new(WarpPolicy),
    )?
    .with_doc(
        "Warps an image from one space to another.\n\n\
         Transformations are applied in the order given; affine files listed in\n\
         invert_affine are inverted with -i.",
    )
    .with_config(config)
    .with_version(versions.version(&package()));
    Ok(cmd)
}

#[cfg(test)]
#[path = "ants_tests.rs"]
mod tests;
