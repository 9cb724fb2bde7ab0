// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalogue of the interfaces this crate ships.

use crate::{ants, fsl, util};
use nw_core::{ExecutionConfig, SpecError};
use nw_interface::{Interface, VersionCache};

/// Builds a fresh interface instance.
pub type Constructor = fn(&ExecutionConfig, &VersionCache) -> Result<Box<dyn Interface>, SpecError>;

/// One catalogue entry.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub name: &'static str,
    pub summary: &'static str,
    pub build: Constructor,
}

const ENTRIES: &[Entry] = &[
    Entry {
        name: "BET",
        summary: "FSL brain extraction",
        build: build_bet,
    },
    Entry {
        name: "Rename",
        summary: "Copy a file to a new name",
        build: build_rename,
    },
    Entry {
        name: "WarpImageMultiTransform",
        summary: "ANTs: apply a series of transforms to an image",
        build: build_warp,
    },
];

fn build_bet(config: &ExecutionConfig, versions: &VersionCache) -> Result<Box<dyn Interface>, SpecError> {
    Ok(Box::new(fsl::bet(config, versions)?))
}

fn build_rename(_: &ExecutionConfig, _: &VersionCache) -> Result<Box<dyn Interface>, SpecError> {
    Ok(Box::new(util::rename()?))
}

fn build_warp(config: &ExecutionConfig, versions: &VersionCache) -> Result<Box<dyn Interface>, SpecError> {
    Ok(Box::new(ants::warp_image_multi_transform(config, versions)?))
}

/// All entries, sorted by name.
pub fn entries() -> &'static [Entry] {
    ENTRIES
}

pub fn names() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|e| e.name)
}

/// Entry whose name matches case-insensitively.
pub fn lookup(name: &str) -> Option<&'static Entry> {
    ENTRIES.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
