// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interfaces implemented by an in-process function.

use crate::error::InterfaceError;
use crate::interface::Interface;
use crate::runtime::Runtime;
use indexmap::IndexMap;
use nw_core::{FieldSpec, Inputs, Spec, SpecError, Value};
use std::sync::Arc;

/// Body of a [`SimpleInterface`]; returns the outputs it produced.
pub type RunFn =
    Box<dyn Fn(&Inputs, &mut Runtime) -> Result<IndexMap<String, Value>, InterfaceError> + Send + Sync>;

/// An interface whose work is a Rust closure instead of a command.
pub struct SimpleInterface {
    name: String,
    doc: Option<String>,
    inputs: Inputs,
    outputs: Arc<Spec>,
    body: RunFn,
    produced: IndexMap<String, Value>,
}

impl SimpleInterface {
    pub fn new(
        name: impl Into<String>,
        inputs: impl IntoIterator<Item = FieldSpec>,
        outputs: impl IntoIterator<Item = FieldSpec>,
        body: RunFn,
    ) -> Result<Self, SpecError> {
        Ok(Self {
            name: name.into(),
            doc: None,
            inputs: Inputs::new(Spec::shared(inputs)?),
            outputs: Spec::shared(outputs)?,
            body,
            produced: IndexMap::new(),
        })
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

impl Interface for SimpleInterface {
    fn name(&self) -> &str {
        &self.name
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

    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    fn run_interface(&mut self, runtime: &mut Runtime) -> Result<(), InterfaceError> {
        self.produced = (self.body)(&self.inputs, runtime)?;
        Ok(())
    }

    fn list_outputs(&self) -> Result<IndexMap<String, Value>, InterfaceError> {
        Ok(self.produced.clone())
    }
}

#[cfg(test)]
#[path = "simple_tests.rs"]
mod tests;
