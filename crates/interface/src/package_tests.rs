// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn first_line(raw: &str) -> Option<String> {
    raw.lines().next().map(str::trim).filter(|l| !l.is_empty()).map(str::to_string)
}

fn package(name: &'static str, source: VersionSource) -> PackageInfo {
    PackageInfo { name, source, parse: first_line }
}

#[test]
fn probe_reads_command_stdout() {
    let info = package("echoer", VersionSource::Command("echo 2.3.1".to_string()));
    assert_eq!(info.probe().as_deref(), Some("2.3.1"));
}

#[test]
fn probe_reads_version_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("etc_fslversion");
    std::fs::write(&path, "6.0.7.4\n").unwrap();
    assert_eq!(package("fsl", VersionSource::File(path)).probe().as_deref(), Some("6.0.7.4"));
}

#[test]
fn missing_sources_yield_none() {
    let command = package("ghost", VersionSource::Command("my_tool_nw_missing --version".into()));
    assert!(command.probe().is_none());
    let file = package("ghost", VersionSource::File("/nonexistent/version".into()));
    assert!(file.probe().is_none());
}

#[test]
fn cache_probes_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("version");
    std::fs::write(&path, "1.0\n").unwrap();
    let info = package("pkg", VersionSource::File(path.clone()));
    let cache = VersionCache::new();

    assert_eq!(cache.version(&info).as_deref(), Some("1.0"));
    std::fs::write(&path, "2.0\n").unwrap();
    assert_eq!(cache.version(&info).as_deref(), Some("1.0"));
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(cache.version(&info).as_deref(), Some("2.0"));
}
