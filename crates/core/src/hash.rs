// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stable hashing of input values, used to detect unchanged runs.

use crate::config::HashMethod;
use crate::error::InputsFileError;
use crate::inputs::Inputs;
use crate::value::Value;
use serde_json::Value as Json;
use sha2::{Digest, Sha256};
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Hashed view of a set of inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct InputsHash {
    /// Per-field entries sorted by name; hashed files appear as `[path, hash]`.
    pub entries: Vec<(String, Json)>,
    /// Hex SHA-256 over the entries with file paths replaced by their hash.
    pub digest: String,
}

impl Inputs {
    /// Hash the defined inputs.
    ///
    /// `nohash` fields are skipped. Existing files are hashed by `method`
    /// unless the field disables file hashing or is derived from another
    /// field; the digest only depends on file hashes, never file names.
    pub fn hash_value(&self, method: HashMethod) -> Result<InputsHash, InputsFileError> {
        let mut entries = Vec::new();
        let mut nameless = Vec::new();

        for field in self.spec().sorted() {
            let Some(value) = self.get(&field.name) else { continue };
            if field.nohash {
                continue;
            }
            let hash_files = field.hash_files && field.name_source.is_empty();
            entries.push((field.name.clone(), hashed(value, method, hash_files, true)?));
            nameless.push(Json::Array(vec![
                Json::String(field.name.clone()),
                hashed(value, method, hash_files, false)?,
            ]));
        }

        let canonical = Json::Array(nameless).to_string();
        let digest = format!("{:x}", Sha256::digest(canonical.as_bytes()));
        tracing::debug!(fields = entries.len(), %method, digest = %&digest[..12], "hashed inputs");
        Ok(InputsHash { entries, digest })
    }
}

fn hashed(
    value: &Value,
    method: HashMethod,
    hash_files: bool,
    with_path: bool,
) -> Result<Json, InputsFileError> {
    Ok(match value {
        Value::List(items) => Json::Array(
            items
                .iter()
                .map(|item| hashed(item, method, hash_files, with_path))
                .collect::<Result<_, _>>()?,
        ),
        Value::Dict(map) => Json::Object(
            map.iter()
                .map(|(k, v)| Ok((k.clone(), hashed(v, method, hash_files, with_path)?)))
                .collect::<Result<_, InputsFileError>>()?,
        ),
        Value::Str(s) if hash_files && Path::new(s).is_file() => {
            let hash = hash_file(Path::new(s), method)?;
            if with_path {
                Json::Array(vec![Json::String(s.clone()), Json::String(hash)])
            } else {
                Json::String(hash)
            }
        }
        Value::Float(f) => Json::String(format!("{f:.10}")),
        Value::Str(s) => Json::String(s.clone()),
        Value::Int(i) => Json::from(*i),
        Value::Bool(b) => Json::Bool(*b),
    })
}

/// Hash one file by modification time and size, or by content.
pub fn hash_file(path: &Path, method: HashMethod) -> Result<String, InputsFileError> {
    let io_err = |source| InputsFileError::Io { path: path.to_path_buf(), source };
    match method {
        HashMethod::Timestamp => {
            let meta = std::fs::metadata(path).map_err(io_err)?;
            let mtime = meta
                .modified()
                .map_err(io_err)?
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs_f64())
                .unwrap_or_default();
            let stamp = format!("{}:{mtime:.6}", meta.len());
            Ok(format!("{:x}", Sha256::digest(stamp.as_bytes())))
        }
        HashMethod::Content => {
            let bytes = std::fs::read(path).map_err(io_err)?;
            Ok(format!("{:x}", Sha256::digest(&bytes)))
        }
    }
}

#[cfg(test)]
#[path = "hash_tests.rs"]
mod tests;
