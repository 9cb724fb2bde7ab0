// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    bool_true     = { Value::Bool(true),            "true" },
    int           = { Value::Int(-3),               "-3" },
    whole_float   = { Value::Float(2.0),            "2.0" },
    frac_float    = { Value::Float(0.25),           "0.25" },
    string        = { Value::from("scan.nii"),      "scan.nii" },
    list          = { Value::from(vec![1, 2, 3]),   "[1, 2, 3]" },
)]
fn display(value: Value, expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[yare::parameterized(
    false_bool   = { Value::Bool(false),         false },
    zero         = { Value::Int(0),              false },
    empty_str    = { Value::from(""),            false },
    empty_list   = { Value::List(vec![]),        false },
    true_bool    = { Value::Bool(true),          true },
    some_str     = { Value::from("x"),           true },
    nonzero      = { Value::Float(0.5),          true },
)]
fn truthiness(value: Value, expected: bool) {
    assert_eq!(value.is_truthy(), expected);
}

#[test]
fn first_scalar_descends_nested_lists() {
    let v = Value::List(vec![Value::List(vec![Value::from("a.nii"), Value::from("b.nii")])]);
    assert_eq!(v.first_scalar(), Some(&Value::from("a.nii")));
    assert_eq!(Value::List(vec![]).first_scalar(), None);
}

#[test]
fn json_roundtrip_is_untagged() {
    let v: Value = serde_json::from_str(r#"[1, 2.5, "x", true, {"K": "v"}]"#).unwrap();
    let items = v.as_list().unwrap();
    assert_eq!(items[0], Value::Int(1));
    assert_eq!(items[1], Value::Float(2.5));
    assert_eq!(items[2], Value::from("x"));
    assert_eq!(items[3], Value::Bool(true));
    assert_eq!(items[4].as_dict().unwrap()["K"], Value::from("v"));
    assert_eq!(serde_json::to_string(&Value::from(vec![1, 2])).unwrap(), "[1,2]");
}

#[test]
fn int_widens_to_float() {
    assert_eq!(Value::Int(4).as_float(), Some(4.0));
    assert_eq!(Value::from("4").as_float(), None);
}
