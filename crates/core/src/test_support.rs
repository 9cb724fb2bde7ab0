// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::field::{FieldKind, FieldSpec};
use crate::spec::Spec;
use std::sync::Arc;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for values and field names.
pub mod strategies {
    use crate::value::Value;
    use proptest::prelude::*;

    /// Lowercase identifier usable as a field name.
    pub fn arb_field_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,11}"
    }

    /// Path-like token without whitespace or `%`.
    pub fn arb_path_token() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_/.-]{1,24}"
    }

    pub fn arb_scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            any::<bool>().prop_map(Value::Bool),
            any::<i32>().prop_map(|i| Value::Int(i64::from(i))),
            (-1.0e6f64..1.0e6).prop_map(Value::Float),
            arb_path_token().prop_map(Value::Str),
        ]
    }

    pub fn arb_value() -> impl Strategy<Value = Value> {
        arb_scalar().prop_recursive(2, 16, 4, |inner| {
            prop::collection::vec(inner, 0..4).prop_map(Value::List)
        })
    }
}

// ── Spec fixtures ───────────────────────────────────────────────────────

/// Source file plus a derived output that keeps its extension.
pub fn derived_output_spec() -> Arc<Spec> {
    fixture([
        FieldSpec::file("in_file").argstr("%s").position(0).mandatory(),
        FieldSpec::file("out_file")
            .argstr("-o %s")
            .name_source(["in_file"])
            .name_template("%s_generated")
            .keep_extension(),
    ])
}

/// Two fields deriving their names from each other.
pub fn cyclic_spec() -> Arc<Spec> {
    fixture([
        FieldSpec::file("a").argstr("%s").name_source(["b"]),
        FieldSpec::file("b").argstr("%s").name_source(["a"]),
    ])
}

/// A little of everything the formatter handles.
pub fn formatting_spec() -> Arc<Spec> {
    fixture([
        FieldSpec::boolean("verbose").argstr("-v"),
        FieldSpec::float("frac").argstr("-f %.2f"),
        FieldSpec::list_of("labels", FieldKind::Int).argstr("-l %d...").sep(" "),
        FieldSpec::list_of("center", FieldKind::Int).argstr("-c %s"),
        FieldSpec::tuple_of("voxel", [FieldKind::Float, FieldKind::Float, FieldKind::Float])
            .argstr("--vox %g %g %g"),
        FieldSpec::file("in_file").argstr("%s").position(0),
        FieldSpec::file("out_file").argstr("%s").position(-1),
    ])
}

#[allow(clippy::expect_used)]
fn fixture(fields: impl IntoIterator<Item = FieldSpec>) -> Arc<Spec> {
    Spec::shared(fields).expect("fixture field table is valid")
}
