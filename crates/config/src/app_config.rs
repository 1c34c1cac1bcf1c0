// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, ConfigLookup};
use crate::yaml::load_yaml_with_env;
use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "cyclic.config.yaml";
pub const ENV_PREFIX: &str = "CYCLIC_";

/// Code parameters that may be preset in the configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct CodeDefinition {
    /// Codeword length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<usize>,
    /// Message length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<usize>,
    /// Generator polynomial, eg. "x^3 + x + 1" or "1 0 1 1"
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "string_or_number"
    )]
    pub generator: Option<String>,
}

/// Unquoted coefficient strings such as `1011` arrive as numbers from YAML and env.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(u64),
    }

    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }),
    )
}

impl CodeDefinition {
    /// Returns `(n, k, generator)` or fails naming the first missing value.
    pub fn require(&self) -> Result<(usize, usize, &str)> {
        let Some(n) = self.n else {
            bail!("Missing codeword length. Pass `--n` or set `code.n` in {DEFAULT_CONFIG_NAME}.");
        };
        let Some(k) = self.k else {
            bail!("Missing message length. Pass `--k` or set `code.k` in {DEFAULT_CONFIG_NAME}.");
        };
        let Some(generator) = self.generator.as_deref() else {
            bail!("Missing generator polynomial. Pass `--generator` or set `code.generator` in {DEFAULT_CONFIG_NAME}.");
        };
        Ok((n, k, generator))
    }
}

/// Output preferences
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Emit JSON instead of text
    pub json: bool,
}

/// The config actually used throughout the app
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct CyclicConfig {
    /// Default code parameters
    pub code: CodeDefinition,
    /// Output preferences
    pub output: OutputConfig,
    /// Log level used when no `-v`/`-q` flag is given, eg. "info"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// The configuration file that was read, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

impl CyclicConfig {
    /// Get the config file path
    pub fn config_file(&self) -> Option<&PathBuf> {
        self.config_file.as_ref()
    }

    /// Parse the configured log level
    pub fn log_level(&self) -> Result<Option<tracing::Level>> {
        self.log_level
            .as_deref()
            .map(|level| {
                level
                    .parse::<tracing::Level>()
                    .with_context(|| format!("Invalid log_level '{level}'"))
            })
            .transpose()
    }
}

/// Overrides passed in from the command line. Unset values leave lower layers alone.
#[derive(Default, Serialize, Deserialize, Clone, Debug)]
pub struct CliOverrides {
    pub code: CodeDefinition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
}

#[derive(Serialize)]
struct OutputOverride {
    output: OutputConfig,
}

/// Load the config at the config_file or the default location if not provided.
///
/// Layers, lowest first: defaults, YAML file, `CYCLIC_*` environment variables (nested keys
/// separated by `__`, eg. `CYCLIC_CODE__N=7`), command line overrides.
pub fn load_config(config_file: Option<String>, overrides: CliOverrides) -> Result<CyclicConfig> {
    let cwd = env::current_dir()?;
    let default_dir = OsDirs::config_dir();
    let source = ConfigLookup {
        cwd: &cwd,
        default_dir: &default_dir,
        filename: DEFAULT_CONFIG_NAME,
    }
    .resolve(config_file.as_deref().map(Path::new), find_in_parent);

    let loaded_yaml = load_yaml_with_env(source.path(), source.is_explicit())
        .context("Configuration file not found")?;
    let found_config_file = (!loaded_yaml.is_empty()).then(|| source.path().to_path_buf());

    let mut figment = Figment::from(Serialized::defaults(CyclicConfig::default()))
        .merge(Yaml::string(&loaded_yaml))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(Serialized::defaults(&overrides.code).key("code"));

    if let Some(json) = overrides.json.filter(|json| *json) {
        figment = figment.merge(Serialized::defaults(OutputOverride {
            output: OutputConfig { json },
        }));
    }

    let mut config: CyclicConfig = figment
        .extract()
        .context("Could not parse configuration")?;
    config.config_file = found_config_file;

    debug!(config_file = ?config.config_file, "configuration loaded");
    Ok(config)
}

pub struct OsDirs;
impl OsDirs {
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cyclic")
    }
}
