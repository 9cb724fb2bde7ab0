// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The interface contract and the run lifecycle shared by every interface.

use crate::context::CwdGuard;
use crate::error::InterfaceError;
use crate::outputs::aggregate_outputs;
use crate::runtime::{InterfaceResult, Runtime};
use indexmap::IndexMap;
use nw_core::{
    check_version_requirements, format_help, HashMethod, Inputs, Spec, Strictness, Value,
};
use std::path::PathBuf;

/// A unit of work with typed inputs and outputs.
pub trait Interface {
    fn name(&self) -> &str;

    fn inputs(&self) -> &Inputs;

    fn inputs_mut(&mut self) -> &mut Inputs;

    fn output_spec(&self) -> &Spec;

    /// Version of the wrapped tool, when known.
    fn version(&self) -> Option<&str> {
        None
    }

    /// Executable this interface wraps, if any.
    fn command(&self) -> Option<&str> {
        None
    }

    fn doc(&self) -> Option<&str> {
        None
    }

    /// Full command line, for interfaces that run one.
    fn cmdline(&self) -> Result<Option<String>, InterfaceError> {
        Ok(None)
    }

    fn help(&self) -> String {
        format_help(self.name(), self.command(), self.doc(), self.inputs().spec(), self.output_spec())
    }

    /// Setup that must succeed before any timing is recorded.
    fn preflight(&mut self, _runtime: &mut Runtime) -> Result<(), InterfaceError> {
        Ok(())
    }

    fn pre_run_hook(&mut self, _runtime: &mut Runtime) -> Result<(), InterfaceError> {
        Ok(())
    }

    fn run_interface(&mut self, runtime: &mut Runtime) -> Result<(), InterfaceError>;

    fn post_run_hook(&mut self, _runtime: &mut Runtime) -> Result<(), InterfaceError> {
        Ok(())
    }

    /// Predicted outputs, keyed by output field name.
    fn list_outputs(&self) -> Result<IndexMap<String, Value>, InterfaceError>;
}

/// Options for one call to [`run`].
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Directory to run in; the current directory when `None`.
    pub cwd: Option<PathBuf>,
    /// Record failures on the result instead of returning them.
    pub ignore_exception: bool,
    /// Input overrides applied before validation.
    pub inputs: Vec<(String, Value)>,
    pub stop_on_unknown_version: bool,
    /// How file inputs are hashed for [`InterfaceResult::inputs_hash`].
    pub hash_method: HashMethod,
}

impl RunOptions {
    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn ignore_exception(mut self) -> Self {
        self.ignore_exception = true;
        self
    }

    pub fn input(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inputs.push((name.into(), value.into()));
        self
    }
}

/// Validate, execute and collect the outputs of `iface`.
///
/// Validation, version and pre-flight failures are returned before any
/// timing is recorded. Failures inside the timed scope are returned as
/// [`InterfaceError::Run`] carrying the runtime, or recorded on the result
/// when `ignore_exception` is set. A command exiting outside its success
/// codes is only annotated; see [`InterfaceResult::raise_for_status`].
pub fn run(iface: &mut dyn Interface, opts: RunOptions) -> Result<InterfaceResult, InterfaceError> {
    let name = iface.name().to_string();
    for (field, value) in opts.inputs {
        iface.inputs_mut().set(&field, value)?;
    }
    iface.inputs().check_mandatory(&name)?;
    check_version_requirements(
        &name,
        iface.inputs().spec(),
        |field| iface.inputs().is_defined(field),
        iface.version(),
        Strictness::Strict,
        opts.stop_on_unknown_version,
    )?;

    let inputs_hash = iface.inputs().hash_value(opts.hash_method)?.digest;

    let prevcwd = std::env::current_dir()
        .map_err(|e| InterfaceError::io("failed to read current directory", e))?;
    let cwd = opts.cwd.map_or_else(|| prevcwd.clone(), |dir| prevcwd.join(dir));
    let mut runtime = Runtime::new(&name, cwd, prevcwd);
    iface.preflight(&mut runtime)?;

    let inputs = iface.inputs().to_map();
    runtime.start();
    let outcome = run_scoped(iface, &mut runtime);
    runtime.finish();

    match outcome {
        Ok(outputs) => {
            runtime.check_return_code();
            if let Some(traceback) = &runtime.traceback {
                tracing::warn!(interface = %name, %traceback, "command failed");
            }
            Ok(InterfaceResult {
                interface: name,
                runtime,
                inputs,
                inputs_hash,
                outputs: Some(outputs),
            })
        }
        Err(err) => {
            runtime.record_error(&err);
            if opts.ignore_exception {
                tracing::warn!(interface = %name, error = %err, "ignoring interface error");
                return Ok(InterfaceResult {
                    interface: name,
                    runtime,
                    inputs,
                    inputs_hash,
                    outputs: None,
                });
            }
            Err(InterfaceError::Run {
                interface: name,
                runtime: Box::new(runtime),
                source: Box::new(err),
            })
        }
    }
}

fn run_scoped(
    iface: &mut dyn Interface,
    runtime: &mut Runtime,
) -> Result<IndexMap<String, Value>, InterfaceError> {
    let _guard = CwdGuard::enter(&runtime.cwd)?;
    iface.pre_run_hook(runtime)?;
    iface.run_interface(runtime)?;
    iface.post_run_hook(runtime)?;
    aggregate_outputs(&*iface)
}

#[cfg(test)]
#[path = "interface_tests.rs"]
mod tests;
