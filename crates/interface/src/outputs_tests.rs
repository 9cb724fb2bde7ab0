// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::runtime::Runtime;
use nw_core::{FieldKind, FieldSpec, Inputs, Spec};
use std::sync::Arc;

struct Fixed {
    inputs: Inputs,
    outputs: Spec,
    version: Option<&'static str>,
    predicted: IndexMap<String, Value>,
}

impl Fixed {
    fn new(predicted: &[(&str, Value)]) -> Self {
        let outputs = Spec::new([
            FieldSpec::file("out_file").exists(),
            FieldSpec::integer("count"),
            FieldSpec::list_of("parts", FieldKind::File).exists(),
            FieldSpec::file("new_thing").min_ver("6.0"),
        ])
        .unwrap();
        Self {
            inputs: Inputs::new(Arc::new(Spec::default())),
            outputs,
            version: None,
            predicted: predicted.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
        }
    }
}

impl Interface for Fixed {
    fn name(&self) -> &str {
        "Fixed"
    }

    fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    fn inputs_mut(&mut self) -> &mut Inputs {
        &mut self.inputs
    }

    fn output_spec(&self) -> &Spec {
        &self.outputs
    }

    fn version(&self) -> Option<&str> {
        self.version
    }

    fn run_interface(&mut self, _runtime: &mut Runtime) -> Result<(), InterfaceError> {
        Ok(())
    }

    fn list_outputs(&self) -> Result<IndexMap<String, Value>, InterfaceError> {
        Ok(self.predicted.clone())
    }
}

#[test]
fn empty_prediction_is_accepted() {
    assert!(aggregate_outputs(&Fixed::new(&[])).unwrap().is_empty());
}

#[test]
fn existing_files_and_coerced_values_pass() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("brain.nii");
    std::fs::write(&file, b"").unwrap();
    let path = file.display().to_string();

    let iface = Fixed::new(&[
        ("out_file", Value::from(path.as_str())),
        ("count", Value::Int(3)),
        ("parts", Value::from(path.as_str())),
    ]);
    let outputs = aggregate_outputs(&iface).unwrap();

    assert_eq!(outputs["out_file"], Value::from(path.as_str()));
    assert_eq!(outputs["count"], Value::Int(3));
    assert_eq!(outputs["parts"], Value::List(vec![Value::from(path.as_str())]));
}

#[test]
fn unknown_output_is_rejected() {
    let err = aggregate_outputs(&Fixed::new(&[("bogus", Value::Int(1))])).unwrap_err();
    assert!(matches!(
        err,
        InterfaceError::Output(OutputError::Unknown { ref field, .. }) if field == "bogus"
    ));
}

#[test]
fn missing_file_is_rejected() {
    let iface = Fixed::new(&[("out_file", Value::from("/nonexistent/brain.nii"))]);
    let err = aggregate_outputs(&iface).unwrap_err();
    assert_eq!(
        err.to_string(),
        "No such file or directory '/nonexistent/brain.nii' for output 'out_file' of a Fixed interface"
    );
}

#[test]
fn wrong_kind_is_rejected() {
    let err = aggregate_outputs(&Fixed::new(&[("count", Value::from("three"))])).unwrap_err();
    assert!(matches!(err, InterfaceError::Output(OutputError::TypeMismatch { .. })));
}

#[test]
fn output_unavailable_in_version_is_rejected() {
    let mut iface = Fixed::new(&[("new_thing", Value::from("x.nii"))]);
    iface.version = Some("5.0");
    let err = aggregate_outputs(&iface).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Output field(s) new_thing not available in version 5.0 of interface Fixed."
    );

    iface.version = Some("6.1");
    assert!(aggregate_outputs(&iface).is_ok());
}
