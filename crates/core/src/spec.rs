// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validated field tables.

use crate::error::SpecError;
use crate::field::FieldSpec;
use indexmap::IndexMap;
use std::sync::Arc;

/// An ordered, validated table of field descriptors.
///
/// Declaration order is preserved; mandatory checks walk fields in that
/// order while command-line assembly walks them by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spec {
    fields: IndexMap<String, FieldSpec>,
}

impl Spec {
    /// Build a table and check its invariants.
    pub fn new(fields: impl IntoIterator<Item = FieldSpec>) -> Result<Self, SpecError> {
        let mut table = IndexMap::new();
        for field in fields {
            if table.contains_key(&field.name) {
                return Err(SpecError::DuplicateField { name: field.name });
            }
            table.insert(field.name.clone(), field);
        }
        let spec = Self { fields: table };
        spec.validate()?;
        Ok(spec)
    }

    /// Build a table and wrap it for sharing between interface instances.
    pub fn shared(fields: impl IntoIterator<Item = FieldSpec>) -> Result<Arc<Self>, SpecError> {
        Self::new(fields).map(Arc::new)
    }

    fn validate(&self) -> Result<(), SpecError> {
        for field in self.fields.values() {
            let relations: [(&'static str, &[String]); 3] = [
                ("xor", &field.xor),
                ("requires", &field.requires),
                ("name_source", &field.name_source),
            ];
            for (relation, targets) in relations {
                for target in targets {
                    if !self.fields.contains_key(target) {
                        return Err(SpecError::UnknownReference {
                            field: field.name.clone(),
                            relation,
                            target: target.clone(),
                        });
                    }
                }
            }
            if let Some(new_name) = &field.new_name {
                if !self.fields.contains_key(new_name) {
                    return Err(SpecError::UnknownReference {
                        field: field.name.clone(),
                        relation: "new_name",
                        target: new_name.clone(),
                    });
                }
            }
            if field.mandatory && field.default.is_none() && field.xor.contains(&field.name) {
                return Err(SpecError::SelfExclusiveMandatory { field: field.name.clone() });
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.values()
    }

    /// Fields sorted by name.
    pub fn sorted(&self) -> Vec<&FieldSpec> {
        let mut fields: Vec<&FieldSpec> = self.fields.values().collect();
        fields.sort_by(|a, b| a.name.cmp(&b.name));
        fields
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
