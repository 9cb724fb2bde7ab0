// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Path splitting that understands compound imaging extensions.

use std::path::Path;

/// Extensions treated as a single unit, matched case-insensitively.
const SPECIAL_EXTENSIONS: &[&str] = &[".nii.gz", ".tar.gz", ".niml.dset"];

/// Split a path into `(directory, base, extension)`.
///
/// The directory has no trailing separator (empty for a bare name). A
/// leading dot does not start an extension.
pub fn split_filename(path: &str) -> (String, String, String) {
    let (dir, name) = match path.rfind('/') {
        Some(idx) => {
            let head = &path[..=idx];
            let trimmed = head.trim_end_matches('/');
            let dir = if trimmed.is_empty() { head } else { trimmed };
            (dir, &path[idx + 1..])
        }
        None => ("", path),
    };

    let lower = name.to_ascii_lowercase();
    for special in SPECIAL_EXTENSIONS {
        if name.len() > special.len() && lower.ends_with(special) {
            let cut = name.len() - special.len();
            return (dir.to_string(), name[..cut].to_string(), name[cut..].to_string());
        }
    }

    let (base, ext) = split_extension(name);
    (dir.to_string(), base.to_string(), ext.to_string())
}

fn split_extension(name: &str) -> (&str, &str) {
    let Some(dot) = name.rfind('.') else { return (name, "") };
    // Leading dots belong to the name
    if name[..dot].chars().all(|c| c == '.') {
        return (name, "");
    }
    (&name[..dot], &name[dot..])
}

/// Build a file name from `path` with a prefix and suffix around its base.
///
/// `newpath` replaces the directory (made absolute); `use_ext` keeps the
/// original extension.
pub fn fname_presuffix(
    path: &str,
    prefix: &str,
    suffix: &str,
    newpath: Option<&Path>,
    use_ext: bool,
) -> String {
    let (dir, base, ext) = split_filename(path);
    let ext = if use_ext { ext } else { String::new() };
    let name = format!("{prefix}{base}{suffix}{ext}");
    match newpath {
        Some(newpath) => absolute(newpath).join(name).display().to_string(),
        None if dir.is_empty() => name,
        None => Path::new(&dir).join(name).display().to_string(),
    }
}

/// Absolute form of `path` relative to the current directory.
pub fn absolute(path: &Path) -> std::path::PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
#[path = "filename_tests.rs"]
mod tests;
