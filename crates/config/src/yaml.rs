// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use std::{fs, io::ErrorKind, path::Path};

/// Reads a YAML file and expands `$VAR` / `${VAR}` references from the environment.
///
/// A missing file yields an empty document unless `required` is set, in which case the
/// underlying `std::io::Error` is returned.
pub fn load_yaml_with_env(file_path: &Path, required: bool) -> Result<String> {
    let content = match fs::read_to_string(file_path) {
        Ok(val) => val,
        Err(err) if err.kind() == ErrorKind::NotFound && !required => String::new(),
        Err(err) => return Err(err.into()),
    };

    Ok(shellexpand::env(&content)?.to_string())
}
