// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    string          = { "-i %s",        Value::from("in.nii"), "-i in.nii" },
    integer         = { "-d %d",        Value::Int(3),         "-d 3" },
    int_alias       = { "%i",           Value::Int(-7),        "-7" },
    float_trunc_d   = { "%d",           Value::Float(2.7),     "2" },
    bool_as_digit   = { "--flag=%d",    Value::Bool(true),     "--flag=1" },
    fixed_default   = { "%f",           Value::Float(0.5),     "0.500000" },
    fixed_two       = { "-f %.2f",      Value::Float(0.5),     "-f 0.50" },
    fixed_from_int  = { "%.1f",         Value::Int(2),         "2.0" },
    exponent        = { "%e",           Value::Float(150.0),   "1.500000e+02" },
    exponent_small  = { "%.2e",         Value::Float(0.00123), "1.23e-03" },
    general         = { "%g",           Value::Float(0.5),     "0.5" },
    general_large   = { "%g",           Value::Float(1234567.0), "1.23457e+06" },
    general_small   = { "%g",           Value::Float(0.00001), "1e-05" },
    general_whole   = { "%g",           Value::Float(100.0),   "100" },
    zero_pad        = { "%03d",         Value::Int(7),         "007" },
    left_align      = { "[%-4s]",       Value::from("ab"),     "[ab  ]" },
    percent_literal = { "%d%%",         Value::Int(50),        "50%" },
    float_as_string = { "%s",           Value::Float(1.0),     "1.0" },
)]
fn single_value(argstr: &str, value: Value, expected: &str) {
    assert_eq!(interpolate(argstr, &[&value]).unwrap(), expected);
}

#[test]
fn tuple_fills_each_placeholder() {
    let values = [Value::Float(1.0), Value::Float(2.5), Value::Int(3)];
    let refs: Vec<&Value> = values.iter().collect();
    assert_eq!(interpolate("--vox %g %g %g", &refs).unwrap(), "--vox 1 2.5 3");
}

#[test]
fn literal_only_has_no_placeholders() {
    assert_eq!(interpolate("--robust", &[]).unwrap(), "--robust");
    assert_eq!(interpolate("100%% sure", &[]).unwrap(), "100% sure");
    assert!(!has_placeholder("--robust"));
    assert!(has_placeholder("-f %.2f"));
}

#[test]
fn count_mismatch() {
    let v = Value::Int(1);
    assert_eq!(
        interpolate("%d %d", &[&v]),
        Err(ArgstrError::ArgumentCount { argstr: "%d %d".to_string(), expected: 2, found: 1 })
    );
    assert!(matches!(
        interpolate("--flag", &[&v]),
        Err(ArgstrError::ArgumentCount { expected: 0, found: 1, .. })
    ));
}

#[test]
fn number_conversion_rejects_strings() {
    let v = Value::from("abc");
    assert_eq!(
        interpolate("%d", &[&v]),
        Err(ArgstrError::Type { conversion: 'd', value_type: "string" })
    );
    assert!(matches!(interpolate("%.2f", &[&v]), Err(ArgstrError::Type { conversion: 'f', .. })));
}

#[test]
fn malformed_directives() {
    let v = Value::Int(1);
    assert!(matches!(
        interpolate("%q", &[&v]),
        Err(ArgstrError::UnsupportedConversion { conversion: 'q', .. })
    ));
    assert!(matches!(interpolate("-x %", &[]), Err(ArgstrError::Incomplete { .. })));
}
