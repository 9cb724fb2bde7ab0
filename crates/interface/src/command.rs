// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interfaces that wrap an external executable.

use crate::env::{self, canonicalize_env};
use crate::error::InterfaceError;
use crate::interface::Interface;
use crate::runtime::{Runtime, SKIPPED_DEPENDENCIES};
use crate::subprocess::run_command;
use indexmap::IndexMap;
use nw_cmdline::filename::absolute;
use nw_cmdline::{build_arguments, filename_from_source, join_arguments, ArgPolicy};
use nw_core::{
    check_version_requirements, ExecutionConfig, FieldSpec, Inputs, Spec, SpecError,
    Strictness, TerminalOutput, Value,
};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Tool-specific behavior of a [`CommandLine`].
pub trait CommandPolicy: ArgPolicy + Send + Sync {
    /// Extra environment variables for the child process.
    fn environ(&self, _inputs: &Inputs) -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    /// Predicted outputs; defaults to the derived file names.
    fn list_outputs(&self, cmd: &CommandLine) -> Result<IndexMap<String, Value>, InterfaceError> {
        cmd.derived_outputs()
    }
}

/// Policy with no overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCommand;

impl ArgPolicy for PlainCommand {}
impl CommandPolicy for PlainCommand {}

/// Fields every command-line interface has.
pub fn common_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::string("args").argstr("%s").desc("Additional parameters to the command"),
        FieldSpec::dict("environ")
            .desc("Environment variables")
            .default(Value::Dict(BTreeMap::new()))
            .nohash(),
    ]
}

/// Field for tools that write their result to stdout.
pub fn stdout_fields() -> Vec<FieldSpec> {
    vec![FieldSpec::file("out_file").argstr("> %s").position(-1).genfile()]
}

/// Fields for tools launched through `mpiexec`.
pub fn mpi_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::boolean("use_mpi")
            .desc("Whether or not to run the command with mpiexec")
            .default(Value::Bool(false)),
        FieldSpec::integer("n_procs").desc(
            "Num processors to specify to mpiexec. Do not specify if this is managed externally",
        ),
    ]
}

/// An interface that runs one external command.
pub struct CommandLine {
    name: String,
    command: String,
    prefix: String,
    doc: Option<String>,
    inputs: Inputs,
    outputs: Arc<Spec>,
    policy: Arc<dyn CommandPolicy>,
    terminal_output: TerminalOutput,
    write_cmdline: bool,
    version: Option<String>,
    success_codes: Vec<i32>,
}

impl CommandLine {
    /// Build a command interface; [`common_fields`] are added to `fields`.
    pub fn new(
        name: impl Into<String>,
        command: impl Into<String>,
        fields: impl IntoIterator<Item = FieldSpec>,
        outputs: Arc<Spec>,
        policy: Arc<dyn CommandPolicy>,
    ) -> Result<Self, SpecError> {
        let spec = Spec::shared(common_fields().into_iter().chain(fields))?;
        Ok(Self {
            name: name.into(),
            command: command.into(),
            prefix: String::new(),
            doc: None,
            inputs: Inputs::new(spec),
            outputs,
            policy,
            terminal_output: TerminalOutput::default(),
            write_cmdline: false,
            version: None,
            success_codes: vec![0],
        })
    }

    /// A command with no tool-specific fields or outputs.
    pub fn plain(command: impl Into<String>) -> Result<Self, SpecError> {
        let command = command.into();
        Self::new("CommandLine", command, [], Arc::new(Spec::default()), Arc::new(PlainCommand))
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Text placed before the command, e.g. a launcher.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_success_codes(mut self, codes: impl IntoIterator<Item = i32>) -> Self {
        self.success_codes = codes.into_iter().collect();
        self
    }

    pub fn with_config(mut self, config: &ExecutionConfig) -> Self {
        self.terminal_output = config.terminal_output;
        self.write_cmdline = config.write_cmdline;
        self
    }

    pub fn with_terminal_output(mut self, output: TerminalOutput) -> Self {
        self.terminal_output = output;
        self
    }

    /// Set the tool version and unset defaults of fields it does not support.
    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version;
        let unavailable = match check_version_requirements(
            &self.name,
            self.inputs.spec(),
            |_| false,
            self.version.as_deref(),
            Strictness::Permissive,
            false,
        ) {
            Ok(fields) => fields,
            Err(e) => {
                tracing::warn!(interface = %self.name, error = %e, "skipping version gating");
                Vec::new()
            }
        };
        for field in unavailable {
            tracing::debug!(interface = %self.name, field = %field, "field unavailable in tool version");
            if let Err(e) = self.inputs.unset(&field) {
                tracing::warn!(interface = %self.name, field = %field, error = %e, "failed to unset field");
            }
        }
        self
    }

    pub fn policy(&self) -> &dyn CommandPolicy {
        self.policy.as_ref()
    }

    pub fn terminal_output(&self) -> TerminalOutput {
        self.terminal_output
    }

    /// The launcher prefix followed by the command.
    fn base_command(&self) -> String {
        let mut parts = Vec::new();
        if self.inputs.get("use_mpi").is_some_and(Value::is_truthy) {
            parts.push("mpiexec".to_string());
            if let Some(n) = self.inputs.get("n_procs").and_then(Value::as_int).filter(|n| *n != 0) {
                parts.push(format!("-n {n}"));
            }
        }
        parts.push(format!("{}{}", self.prefix, self.command));
        parts.join(" ")
    }

    /// First word of the prefixed command.
    pub fn executable(&self) -> &str {
        let full = if self.prefix.is_empty() { self.command.as_str() } else { self.prefix.as_str() };
        full.split_whitespace().next().unwrap_or_default()
    }

    /// Environment variables this run adds to the process environment.
    pub fn environ(&self) -> BTreeMap<String, String> {
        let mut env: BTreeMap<String, String> = self
            .inputs
            .get("environ")
            .and_then(Value::as_dict)
            .map(|map| {
                map.iter().filter_map(|(k, v)| Some((k.clone(), v.as_str()?.to_string()))).collect()
            })
            .unwrap_or_default();
        env.extend(self.policy.environ(&self.inputs));
        env
    }

    /// Outputs for name-sourced fields, as absolute paths.
    pub fn derived_outputs(&self) -> Result<IndexMap<String, Value>, InterfaceError> {
        let mut outputs = IndexMap::new();
        for field in self.inputs.spec().iter().filter(|f| !f.name_source.is_empty()) {
            let out_name = field.output_name.clone().unwrap_or_else(|| field.name.clone());
            if let Some(fname) = filename_from_source(&self.inputs, &field.name, self.policy.as_ref())? {
                outputs.insert(out_name, Value::Str(absolute(Path::new(&fname)).display().to_string()));
            }
        }
        Ok(outputs)
    }

    /// Run `<executable> <flag>` and return its stdout, or `None` when the
    /// executable is not installed.
    pub fn version_from_command(&self, flag: &str) -> Option<String> {
        let mut environ = env::process_environ();
        let cwd = std::env::current_dir().ok()?;
        env::which(self.executable(), &environ, &cwd)?;
        environ.extend(self.environ());
        let output = std::process::Command::new("sh")
            .arg("-c")
            .arg(format!("{} {flag}", self.executable()))
            .env_clear()
            .envs(canonicalize_env(&environ))
            .output()
            .ok()?;
        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Interface for CommandLine {
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

    fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn command(&self) -> Option<&str> {
        Some(&self.command)
    }

    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Validates mandatory inputs, then formats the arguments.
    fn cmdline(&self) -> Result<Option<String>, InterfaceError> {
        self.inputs.check_mandatory(&self.name)?;
        let args = build_arguments(&self.inputs, self.policy.as_ref(), &[])?;
        let mut line = self.base_command();
        if !args.is_empty() {
            line.push(' ');
            line.push_str(&join_arguments(&args));
        }
        Ok(Some(line))
    }

    fn preflight(&mut self, runtime: &mut Runtime) -> Result<(), InterfaceError> {
        let cmdline = self.cmdline()?;
        runtime.environ.extend(self.environ());
        runtime.environ = canonicalize_env(&runtime.environ);

        let executable = self.executable();
        let path = env::which(executable, &runtime.environ, &runtime.cwd).ok_or_else(|| {
            InterfaceError::ExecutableNotFound {
                command: executable.to_string(),
                host: runtime.hostname.clone(),
            }
        })?;
        tracing::debug!(interface = %self.name, path = %path.display(), "resolved executable");

        runtime.cmdline = cmdline;
        runtime.command_path = Some(path);
        runtime.success_codes = self.success_codes.clone();
        runtime.dependencies = SKIPPED_DEPENDENCIES.to_string();
        Ok(())
    }

    fn run_interface(&mut self, runtime: &mut Runtime) -> Result<(), InterfaceError> {
        run_command(runtime, self.terminal_output, self.write_cmdline)
    }

    fn list_outputs(&self) -> Result<IndexMap<String, Value>, InterfaceError> {
        self.policy.list_outputs(self)
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
