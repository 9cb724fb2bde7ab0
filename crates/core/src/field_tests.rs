// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    int_to_float        = { FieldKind::Float,                         Value::Int(2),         Some(Value::Float(2.0)) },
    str_to_file         = { FieldKind::File,                          Value::from("a.nii"),  Some(Value::from("a.nii")) },
    bool_rejects_str    = { FieldKind::Bool,                          Value::from("true"),   None },
    int_rejects_float   = { FieldKind::Int,                           Value::Float(1.5),     None },
    scalar_wraps_list   = { FieldKind::list_of(FieldKind::Int),       Value::Int(3),         Some(Value::from(vec![3])) },
    list_elementwise    = { FieldKind::list_of(FieldKind::Float),     Value::from(vec![1, 2]), Some(Value::from(vec![1.0, 2.0])) },
    list_bad_element    = { FieldKind::list_of(FieldKind::Int),       Value::List(vec![Value::Int(1), Value::from("x")]), None },
    enum_member         = { FieldKind::Enum(vec![Value::Int(3), Value::Int(2)]), Value::Int(2), Some(Value::Int(2)) },
    enum_non_member     = { FieldKind::Enum(vec![Value::Int(3), Value::Int(2)]), Value::Int(4), None },
    tuple_wrong_arity   = { FieldKind::Tuple(vec![FieldKind::Int, FieldKind::Int]), Value::from(vec![1]), None },
)]
fn coerce(kind: FieldKind, value: Value, expected: Option<Value>) {
    assert_eq!(kind.coerce(value), expected);
}

#[yare::parameterized(
    bool_yes        = { FieldKind::Bool,                       "yes",          Some(Value::Bool(true)) },
    bool_junk       = { FieldKind::Bool,                       "maybe",        None },
    int             = { FieldKind::Int,                        " 42 ",         Some(Value::Int(42)) },
    float           = { FieldKind::Float,                      "0.5",          Some(Value::Float(0.5)) },
    comma_list      = { FieldKind::list_of(FieldKind::Int),    "1,2,3",        Some(Value::from(vec![1, 2, 3])) },
    json_list       = { FieldKind::list_of(FieldKind::Str),    r#"["a","b"]"#, Some(Value::from(vec!["a", "b"])) },
    enum_by_display = { FieldKind::Enum(vec![Value::Int(3), Value::Int(2)]), "2", Some(Value::Int(2)) },
    tuple           = { FieldKind::Tuple(vec![FieldKind::Int, FieldKind::Float]), "1,2", Some(Value::List(vec![Value::Int(1), Value::Float(2.0)])) },
)]
fn parse_str(kind: FieldKind, raw: &str, expected: Option<Value>) {
    assert_eq!(kind.parse_str(raw), expected);
}

#[test]
fn parse_dict_pairs() {
    let v = FieldKind::Dict.parse_str("A=1, B=two").unwrap();
    let map = v.as_dict().unwrap();
    assert_eq!(map["A"], Value::from("1"));
    assert_eq!(map["B"], Value::from("two"));
}

#[test]
fn builder_sets_metadata() {
    let spec = FieldSpec::file("out_file")
        .argstr("%s")
        .position(1)
        .name_source(["in_file"])
        .name_template("%s_brain")
        .keep_extension()
        .xor(["out_file", "no_output"])
        .desc("output file");
    assert_eq!(spec.argstr.as_deref(), Some("%s"));
    assert_eq!(spec.position, Some(1));
    assert_eq!(spec.name_source, vec!["in_file"]);
    assert!(spec.keep_extension);
    assert!(!spec.mandatory);
    assert!(spec.hash_files);
    assert_eq!(spec.xor_partners().collect::<Vec<_>>(), vec!["no_output"]);
}

#[test]
fn kind_display_describes_nested_types() {
    let kind = FieldKind::list_of(FieldKind::Enum(vec![Value::Int(3), Value::Int(2)]));
    assert_eq!(kind.to_string(), "a list of items which are one of 3 or 2");
}
