// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking execution of a command line through `sh -c`.

use crate::error::InterfaceError;
use crate::runtime::Runtime;
use nw_core::TerminalOutput;
use parking_lot::Mutex;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

/// File the command line is written to when requested.
pub const CMDLINE_FILE: &str = "command.txt";

/// Merged output file for [`TerminalOutput::File`].
pub const MERGED_FILE: &str = "output.nipype";
pub const STDOUT_FILE: &str = "stdout.nipype";
pub const STDERR_FILE: &str = "stderr.nipype";

/// Where one output stream of the child goes.
enum Sink {
    Capture,
    File(PathBuf),
    Discard,
}

/// Run `runtime.cmdline` in `runtime.cwd` with exactly `runtime.environ`.
///
/// Fills in the return code and captured output according to `output`.
pub fn run_command(
    runtime: &mut Runtime,
    output: TerminalOutput,
    write_cmdline: bool,
) -> Result<(), InterfaceError> {
    let Some(cmdline) = runtime.cmdline.clone() else {
        return Err(InterfaceError::Custom { message: "no command line to run".to_string() });
    };
    let cwd = runtime.cwd.clone();

    if write_cmdline {
        let path = cwd.join(CMDLINE_FILE);
        std::fs::write(&path, &cmdline)
            .map_err(|e| InterfaceError::io(format!("failed to write {}", path.display()), e))?;
    }

    let mut command = Command::new("sh");
    command.arg("-c").arg(&cmdline).current_dir(&cwd).env_clear().envs(&runtime.environ);
    command.stdin(Stdio::null());

    let (out_sink, err_sink) = sinks(output, &cwd);
    let merged_file = matches!(output, TerminalOutput::File);
    attach(&mut command, &out_sink, &err_sink, merged_file)?;

    tracing::debug!(cmdline = %cmdline, cwd = %cwd.display(), %output, "spawning command");
    let mut child = command
        .spawn()
        .map_err(|e| InterfaceError::io(format!("failed to spawn `{cmdline}`"), e))?;

    let (code, stdout, stderr, merged) = if output == TerminalOutput::Stream {
        stream(&mut child)?
    } else {
        let result = child
            .wait_with_output()
            .map_err(|e| InterfaceError::io(format!("failed to wait for `{cmdline}`"), e))?;
        let stdout = String::from_utf8_lossy(&result.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&result.stderr).into_owned();
        let merged = format!("{stdout}{stderr}");
        (result.status.code().unwrap_or(-1), stdout, stderr, merged)
    };
    runtime.returncode = Some(code);
    tracing::debug!(cmdline = %cmdline, code, "command exited");

    match output {
        TerminalOutput::Stream | TerminalOutput::Allatonce => {
            runtime.stdout = Some(stdout);
            runtime.stderr = Some(stderr);
            runtime.merged = Some(merged);
        }
        TerminalOutput::File => {
            runtime.stdout = Some(String::new());
            runtime.stderr = Some(String::new());
            runtime.merged = Some(read_back(&cwd.join(MERGED_FILE))?);
        }
        TerminalOutput::FileSplit => {
            runtime.stdout = Some(read_back(&cwd.join(STDOUT_FILE))?);
            runtime.stderr = Some(read_back(&cwd.join(STDERR_FILE))?);
        }
        TerminalOutput::FileStdout => {
            runtime.stdout = Some(read_back(&cwd.join(STDOUT_FILE))?);
            runtime.stderr = Some(stderr);
        }
        TerminalOutput::FileStderr => {
            runtime.stdout = Some(stdout);
            runtime.stderr = Some(read_back(&cwd.join(STDERR_FILE))?);
        }
        TerminalOutput::None => {}
    }
    Ok(())
}

fn sinks(output: TerminalOutput, cwd: &Path) -> (Sink, Sink) {
    match output {
        TerminalOutput::Stream | TerminalOutput::Allatonce => (Sink::Capture, Sink::Capture),
        TerminalOutput::File => (Sink::File(cwd.join(MERGED_FILE)), Sink::Discard),
        TerminalOutput::FileSplit => {
            (Sink::File(cwd.join(STDOUT_FILE)), Sink::File(cwd.join(STDERR_FILE)))
        }
        TerminalOutput::FileStdout => (Sink::File(cwd.join(STDOUT_FILE)), Sink::Capture),
        TerminalOutput::FileStderr => (Sink::Capture, Sink::File(cwd.join(STDERR_FILE))),
        TerminalOutput::None => (Sink::Discard, Sink::Discard),
    }
}

/// Wire the child's stdout and stderr; with `merged`, stderr shares the stdout file.
fn attach(command: &mut Command, out: &Sink, err: &Sink, merged: bool) -> Result<(), InterfaceError> {
    let create = |path: &PathBuf| {
        File::create(path)
            .map_err(|e| InterfaceError::io(format!("failed to create {}", path.display()), e))
    };

    match out {
        Sink::Capture => {
            command.stdout(Stdio::piped());
        }
        Sink::File(path) => {
            let file = create(path)?;
            if merged {
                let clone = file
                    .try_clone()
                    .map_err(|e| InterfaceError::io("failed to share output file", e))?;
                command.stderr(Stdio::from(clone));
            }
            command.stdout(Stdio::from(file));
        }
        Sink::Discard => {
            command.stdout(Stdio::null());
        }
    }
    if merged {
        return Ok(());
    }
    match err {
        Sink::Capture => {
            command.stderr(Stdio::piped());
        }
        Sink::File(path) => {
            command.stderr(Stdio::from(create(path)?));
        }
        Sink::Discard => {
            command.stderr(Stdio::null());
        }
    }
    Ok(())
}

/// Log each line at info as it arrives while capturing both streams.
fn stream(child: &mut Child) -> Result<(i32, String, String, String), InterfaceError> {
    let merged = Mutex::new(String::new());
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let (out, err) = std::thread::scope(|scope| {
        let merged = &merged;
        let out = scope.spawn(move || pump(stdout, "stdout", merged));
        let err = scope.spawn(move || pump(stderr, "stderr", merged));
        (out.join().unwrap_or_default(), err.join().unwrap_or_default())
    });

    let status = child.wait().map_err(|e| InterfaceError::io("failed to wait for command", e))?;
    Ok((status.code().unwrap_or(-1), out, err, merged.into_inner()))
}

fn pump(pipe: Option<impl Read>, stream: &'static str, merged: &Mutex<String>) -> String {
    let mut captured = String::new();
    let Some(pipe) = pipe else { return captured };
    for line in BufReader::new(pipe).lines() {
        let Ok(line) = line else { break };
        tracing::info!(stream, "{line}");
        captured.push_str(&line);
        captured.push('\n');
        let mut merged = merged.lock();
        merged.push_str(&line);
        merged.push('\n');
    }
    captured
}

fn read_back(path: &Path) -> Result<String, InterfaceError> {
    let bytes = std::fs::read(path)
        .map_err(|e| InterfaceError::io(format!("failed to read {}", path.display()), e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
