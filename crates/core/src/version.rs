// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tool-version gating for fields with `min_ver` / `max_ver`.

use crate::error::VersionError;
use crate::spec::Spec;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static COMPONENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+|[a-zA-Z]+)").expect("constant regex pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
enum Component {
    Num(u64),
    Word(String),
}

/// Permissive dotted version: numeric runs compare numerically, alphabetic
/// runs compare lexically, separators are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LooseVersion {
    raw: String,
    components: Vec<Component>,
}

impl LooseVersion {
    pub fn parse(raw: &str) -> Self {
        let components = COMPONENT
            .find_iter(raw)
            .map(|m| match m.as_str().parse::<u64>() {
                Ok(n) => Component::Num(n),
                Err(_) => Component::Word(m.as_str().to_string()),
            })
            .collect();
        Self { raw: raw.to_string(), components }
    }

    /// Compare two versions; `None` when a numeric component meets an
    /// alphabetic one at the same index.
    pub fn try_cmp(&self, other: &Self) -> Option<Ordering> {
        for (a, b) in self.components.iter().zip(&other.components) {
            let ord = match (a, b) {
                (Component::Num(x), Component::Num(y)) => x.cmp(y),
                (Component::Word(x), Component::Word(y)) => x.cmp(y),
                _ => return None,
            };
            if ord != Ordering::Equal {
                return Some(ord);
            }
        }
        Some(self.components.len().cmp(&other.components.len()))
    }
}

impl fmt::Display for LooseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Whether version problems raise or are only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// Collect unavailable fields without failing (used at construction).
    Permissive,
    /// Fail on a defined field that the active version does not support.
    Strict,
}

/// Return the fields of `spec` that are unavailable in `version`.
///
/// Without a version nothing is checked. In strict mode a *defined*
/// unavailable field is an error; unparseable comparisons warn and only fail
/// when `stop_on_unknown_version` is set.
pub fn check_version_requirements(
    interface: &str,
    spec: &Spec,
    is_defined: impl Fn(&str) -> bool,
    version: Option<&str>,
    strictness: Strictness,
    stop_on_unknown_version: bool,
) -> Result<Vec<String>, VersionError> {
    let Some(version) = version else {
        return Ok(Vec::new());
    };
    let active = LooseVersion::parse(version);
    let mut unavailable = Vec::new();

    for field in spec.iter() {
        let bounds = [
            (field.min_ver.as_deref(), Ordering::Greater, ">=", "<"),
            (field.max_ver.as_deref(), Ordering::Less, "<=", ">"),
        ];
        for (bound, failing, requirement, relation) in bounds {
            let Some(bound) = bound else { continue };
            let required = LooseVersion::parse(bound);
            match required.try_cmp(&active) {
                Some(ord) if ord == failing => {
                    unavailable.push(field.name.clone());
                    if strictness == Strictness::Strict && is_defined(&field.name) {
                        return Err(VersionError::Unavailable {
                            interface: interface.to_string(),
                            field: field.name.clone(),
                            version: version.to_string(),
                            relation,
                            required: bound.to_string(),
                        });
                    }
                }
                Some(_) => {}
                None => {
                    if strictness == Strictness::Strict {
                        tracing::warn!(
                            interface,
                            field = %field.name,
                            version,
                            requirement = %format!("{requirement}{bound}"),
                            "cannot validate package version, please verify validity"
                        );
                    }
                    if stop_on_unknown_version {
                        return Err(VersionError::Unparseable {
                            interface: interface.to_string(),
                            field: field.name.clone(),
                            version: version.to_string(),
                            requirement: format!("{requirement}{bound}"),
                        });
                    }
                }
            }
        }
    }
    Ok(unavailable)
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
