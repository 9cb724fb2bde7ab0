// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! FSL tools.

use indexmap::IndexMap;
use nw_cmdline::filename::absolute;
use nw_cmdline::{filename_from_source, fname_presuffix, ArgPolicy};
use nw_core::{ExecutionConfig, FieldKind, FieldSpec, Inputs, Spec, SpecError, Value};
use nw_interface::env::process_environ;
use nw_interface::{
    CommandLine, CommandPolicy, Interface, InterfaceError, PackageInfo, VersionCache, VersionSource,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Environment variable FSL tools read their output format from.
pub const OUTPUT_TYPE_VAR: &str = "FSLOUTPUTTYPE";

/// Image formats FSL can write, with their file extensions.
pub const OUTPUT_TYPES: &[(&str, &str)] = &[
    ("NIFTI", ".nii"),
    ("NIFTI_PAIR", ".img"),
    ("NIFTI_GZ", ".nii.gz"),
    ("NIFTI_PAIR_GZ", ".img.gz"),
];

const DEFAULT_OUTPUT_TYPE: &str = "NIFTI_GZ";

/// Extension written for `output_type`.
pub fn output_type_to_ext(output_type: &str) -> Option<&'static str> {
    OUTPUT_TYPES.iter().find(|(name, _)| *name == output_type).map(|(_, ext)| *ext)
}

/// Output type from the environment, falling back to `NIFTI_GZ`.
pub fn default_output_type() -> String {
    match process_environ().get(OUTPUT_TYPE_VAR) {
        Some(value) if output_type_to_ext(value).is_some() => value.clone(),
        Some(value) => {
            tracing::warn!(value = %value, "unknown {OUTPUT_TYPE_VAR}, using {DEFAULT_OUTPUT_TYPE}");
            DEFAULT_OUTPUT_TYPE.to_string()
        }
        None => DEFAULT_OUTPUT_TYPE.to_string(),
    }
}

/// FSL package, read from `$FSLDIR/etc/fslversion`.
pub fn package() -> PackageInfo {
    let fsldir = process_environ().get("FSLDIR").cloned().unwrap_or_default();
    PackageInfo {
        name: "fsl",
        source: VersionSource::File(PathBuf::from(fsldir).join("etc").join("fslversion")),
        parse: parse_version,
    }
}

/// Version before any `:` build suffix on the first line.
pub fn parse_version(raw: &str) -> Option<String> {
    let first = raw.lines().next()?.split(':').next()?.trim();
    (!first.is_empty()).then(|| first.to_string())
}

fn output_type_field() -> FieldSpec {
    FieldSpec::one_of("output_type", OUTPUT_TYPES.iter().map(|(name, _)| Value::from(*name)))
        .default(Value::from(default_output_type()))
        .desc("FSL output type")
}

/// Extension of the inputs' current output type.
fn output_ext(inputs: &Inputs) -> &'static str {
    inputs
        .get_str("output_type")
        .and_then(output_type_to_ext)
        .unwrap_or(".nii.gz")
}

/// Naming and environment rules shared by FSL tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct FslPolicy;

impl ArgPolicy for FslPolicy {
    fn overload_extension(&self, value: String, _field: &str, inputs: &Inputs) -> String {
        format!("{value}{}", output_ext(inputs))
    }
}

impl CommandPolicy for FslPolicy {
    fn environ(&self, inputs: &Inputs) -> BTreeMap<String, String> {
        inputs
            .get_str("output_type")
            .map(|t| BTreeMap::from([(OUTPUT_TYPE_VAR.to_string(), t.to_string())]))
            .unwrap_or_default()
    }
}

/// Fields that select mutually exclusive `bet` variants.
const BET_VARIANTS: [&str; 7] =
    ["functional", "reduce_bias", "robust", "padding", "remove_eyes", "surfaces", "t2_guided"];

/// `bet` outputs beyond the brain image, with their suffixes and triggers.
const BET_EXTRA_OUTPUTS: &[(&str, &str, &[&str])] = &[
    ("mask_file", "_mask", &["mask"]),
    ("outline_file", "_overlay", &["outline", "surfaces"]),
    ("skull_file", "_skull", &["skull", "surfaces"]),
];

/// Rules of `bet`: FSL naming plus the outputs its flags switch on.
#[derive(Debug, Clone, Copy, Default)]
pub struct BetPolicy;

impl ArgPolicy for BetPolicy {
    fn overload_extension(&self, value: String, field: &str, inputs: &Inputs) -> String {
        FslPolicy.overload_extension(value, field, inputs)
    }
}

impl CommandPolicy for BetPolicy {
    fn environ(&self, inputs: &Inputs) -> BTreeMap<String, String> {
        FslPolicy.environ(inputs)
    }

    fn list_outputs(&self, cmd: &CommandLine) -> Result<IndexMap<String, Value>, InterfaceError> {
        let inputs = cmd.inputs();
        let mut outputs = IndexMap::new();
        let Some(out_file) = filename_from_source(inputs, "out_file", self)? else {
            return Ok(outputs);
        };
        let out_file = absolute(Path::new(&out_file)).display().to_string();
        let flag = |name: &str| inputs.get(name).is_some_and(Value::is_truthy);
        let ext = output_ext(inputs);

        for (output, suffix, triggers) in BET_EXTRA_OUTPUTS {
            if triggers.iter().any(|t| flag(t)) {
                let path = format!("{}{ext}", fname_presuffix(&out_file, "", suffix, None, false));
                outputs.insert(output.to_string(), Value::Str(path));
            }
        }
        if flag("mesh") || flag("surfaces") {
            let path = fname_presuffix(&out_file, "", "_mesh.vtk", None, false);
            outputs.insert("meshfile".to_string(), Value::Str(path));
        }
        if !flag("no_output") {
            outputs.insert("out_file".to_string(), Value::Str(out_file));
        }
        Ok(outputs)
    }
}

fn bet_fields() -> Vec<FieldSpec> {
    let variant = |field: FieldSpec| field.xor(BET_VARIANTS);
    vec![
        FieldSpec::file("in_file")
            .argstr("%s")
            .position(0)
            .mandatory()
            .exists()
            .desc("input file to skull strip"),
        FieldSpec::file("out_file")
            .argstr("%s")
            .position(1)
            .name_source(["in_file"])
            .name_template("%s_brain")
            .no_hash_files()
            .desc("name of output skull stripped image"),
        FieldSpec::boolean("outline").argstr("-o").desc("create surface outline image"),
        FieldSpec::boolean("mask").argstr("-m").desc("create binary mask image"),
        FieldSpec::boolean("skull").argstr("-s").desc("create skull image"),
        FieldSpec::boolean("no_output").argstr("-n").desc("Don't generate segmented output"),
        FieldSpec::float("frac")
            .argstr("-f %.2f")
            .desc("fractional intensity threshold"),
        FieldSpec::float("vertical_gradient")
            .argstr("-g %.2f")
            .desc("vertical gradient in fractional intensity threshold (-1, 1)"),
        FieldSpec::integer("radius").argstr("-r %d").desc("head radius"),
        FieldSpec::list_of("center", FieldKind::Int)
            .argstr("-c %s")
            .desc("center of gravity in voxels"),
        FieldSpec::boolean("threshold")
            .argstr("-t")
            .desc("apply thresholding to segmented brain image and mask"),
        FieldSpec::boolean("mesh").argstr("-e").desc("generate a vtk mesh brain surface"),
        variant(FieldSpec::boolean("robust").argstr("-R"))
            .desc("robust brain centre estimation (iterates BET several times)"),
        variant(FieldSpec::boolean("padding").argstr("-Z"))
            .desc("improve BET if FOV is very small in Z (by temporarily padding end slices)"),
        variant(FieldSpec::boolean("remove_eyes").argstr("-S"))
            .desc("eye & optic nerve cleanup (can be useful in SIENA)"),
        variant(FieldSpec::boolean("surfaces").argstr("-A")).desc(
            "run bet2 and then betsurf to get additional skull and scalp surfaces \
             (includes registrations)",
        ),
        variant(FieldSpec::file("t2_guided").argstr("-A2 %s"))
            .desc("as with creating surfaces, when also feeding in non-brain-extracted T2 (includes registrations)"),
        variant(FieldSpec::boolean("functional").argstr("-F")).desc("apply to 4D fMRI data"),
        variant(FieldSpec::boolean("reduce_bias").argstr("-B"))
            .desc("bias field and neck cleanup"),
        output_type_field(),
    ]
}

fn bet_outputs() -> Result<Arc<Spec>, SpecError> {
    Spec::shared([
        FieldSpec::file("out_file").desc("path/name of skullstripped file (if generated)"),
        FieldSpec::file("mask_file").desc("path/name of binary brain mask (if generated)"),
        FieldSpec::file("outline_file").desc("path/name of outline file (if generated)"),
        FieldSpec::file("meshfile").desc("path/name of vtk mesh file (if generated)"),
        FieldSpec::file("skull_file").desc("path/name of skull file (if generated)"),
    ])
}

/// `bet`: delete non-brain tissue from an image of the whole head.
pub fn bet(config: &ExecutionConfig, versions: &VersionCache) -> Result<CommandLine, SpecError> {
    let cmd = CommandLine::new("BET", "bet", bet_fields(), bet_outputs()?, Arc::new(BetPolicy))?
        .with_doc("FSL BET wrapper for skull stripping.")
        .with_config(config)
        .with_version(versions.version(&package()));
    Ok(cmd)
}

#[cfg(test)]
#[path = "fsl_tests.rs"]
mod tests;
