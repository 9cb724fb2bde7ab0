// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::BTreeMap;
use yare::parameterized;

const BOTH: &str = "echo out; echo err >&2";

fn runtime(dir: &Path, cmdline: &str) -> Runtime {
    let mut rt = Runtime::new("CommandLine", dir.to_path_buf(), dir.to_path_buf());
    rt.cmdline = Some(cmdline.to_string());
    rt
}

#[parameterized(
    stream = { TerminalOutput::Stream },
    allatonce = { TerminalOutput::Allatonce },
)]
fn captures_both_streams(mode: TerminalOutput) {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = runtime(dir.path(), BOTH);
    run_command(&mut rt, mode, false).unwrap();

    assert_eq!(rt.returncode, Some(0));
    assert_eq!(rt.stdout.as_deref(), Some("out\n"));
    assert_eq!(rt.stderr.as_deref(), Some("err\n"));
    let merged = rt.merged.unwrap();
    assert!(merged.contains("out\n") && merged.contains("err\n"));
}

#[test]
fn file_mode_merges_into_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = runtime(dir.path(), BOTH);
    run_command(&mut rt, TerminalOutput::File, false).unwrap();

    let on_disk = std::fs::read_to_string(dir.path().join(MERGED_FILE)).unwrap();
    assert!(on_disk.contains("out\n") && on_disk.contains("err\n"));
    assert_eq!(rt.merged.as_deref(), Some(on_disk.as_str()));
    assert_eq!(rt.stdout.as_deref(), Some(""));
}

#[test]
fn file_split_writes_two_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = runtime(dir.path(), BOTH);
    run_command(&mut rt, TerminalOutput::FileSplit, false).unwrap();

    assert_eq!(std::fs::read_to_string(dir.path().join(STDOUT_FILE)).unwrap(), "out\n");
    assert_eq!(std::fs::read_to_string(dir.path().join(STDERR_FILE)).unwrap(), "err\n");
    assert_eq!(rt.stdout.as_deref(), Some("out\n"));
    assert_eq!(rt.stderr.as_deref(), Some("err\n"));
}

#[parameterized(
    stdout_to_file = { TerminalOutput::FileStdout, STDOUT_FILE, STDERR_FILE },
    stderr_to_file = { TerminalOutput::FileStderr, STDERR_FILE, STDOUT_FILE },
)]
fn one_stream_to_file(mode: TerminalOutput, written: &str, absent: &str) {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = runtime(dir.path(), BOTH);
    run_command(&mut rt, mode, false).unwrap();

    assert!(dir.path().join(written).exists());
    assert!(!dir.path().join(absent).exists());
    assert_eq!(rt.stdout.as_deref(), Some("out\n"));
    assert_eq!(rt.stderr.as_deref(), Some("err\n"));
}

#[test]
fn none_mode_discards_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = runtime(dir.path(), BOTH);
    run_command(&mut rt, TerminalOutput::None, false).unwrap();
    assert_eq!(rt.returncode, Some(0));
    assert!(rt.stdout.is_none());
    assert!(rt.merged.is_none());
}

#[test]
fn records_nonzero_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = runtime(dir.path(), "exit 3");
    run_command(&mut rt, TerminalOutput::Allatonce, false).unwrap();
    assert_eq!(rt.returncode, Some(3));
}

#[test]
fn runs_in_cwd_with_exact_environment() {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = runtime(dir.path(), "pwd; echo \"$NW_PROBE\"; echo \"${NW_ABSENT-unset}\"");
    rt.environ = BTreeMap::from([
        ("PATH".to_string(), std::env::var("PATH").unwrap_or_default()),
        ("NW_PROBE".to_string(), "42".to_string()),
    ]);
    run_command(&mut rt, TerminalOutput::Allatonce, false).unwrap();

    let stdout = rt.stdout.unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        Path::new(lines[0]).canonicalize().unwrap(),
        dir.path().canonicalize().unwrap()
    );
    assert_eq!(&lines[1..], ["42", "unset"]);
}

#[test]
fn writes_cmdline_file_when_asked() {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = runtime(dir.path(), "true");
    run_command(&mut rt, TerminalOutput::None, true).unwrap();
    assert_eq!(std::fs::read_to_string(dir.path().join(CMDLINE_FILE)).unwrap(), "true");
}

#[test]
fn missing_cmdline_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = Runtime::new("CommandLine", dir.path().to_path_buf(), dir.path().to_path_buf());
    assert!(matches!(
        run_command(&mut rt, TerminalOutput::None, false),
        Err(InterfaceError::Custom { .. })
    ));
}
