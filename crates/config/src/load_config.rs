// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

use path_clean::clean;

pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

/// Nearest `filename` in `start` or one of its ancestors.
pub fn find_in_parent(start: &Path, filename: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.is_file())
}

/// How the configuration file was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed with `--config`. Must exist.
    Explicit(PathBuf),
    /// Found above the working directory.
    Discovered(PathBuf),
    /// The per-user location. May be absent.
    Default(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Explicit(path)
            | ConfigSource::Discovered(path)
            | ConfigSource::Default(path) => path,
        }
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, ConfigSource::Explicit(_))
    }
}

/// Inputs for locating the configuration file
pub struct ConfigLookup<'a> {
    pub cwd: &'a Path,
    pub default_dir: &'a Path,
    pub filename: &'a str,
}

impl ConfigLookup<'_> {
    /// An explicit path wins (relative ones are taken from `cwd`), then the nearest
    /// `filename` above `cwd`, then `filename` in `default_dir`.
    pub fn resolve(&self, explicit: Option<&Path>, find: FindInParent) -> ConfigSource {
        if let Some(path) = explicit {
            return ConfigSource::Explicit(clean(self.cwd.join(path)));
        }

        find(self.cwd, self.filename)
            .map(ConfigSource::Discovered)
            .unwrap_or_else(|| ConfigSource::Default(clean(self.default_dir.join(self.filename))))
    }
}
