// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::telemetry::setup_simple_tracing;
use crate::{encode, inspect, interactive};
use anyhow::Result;
use clap::{command, ArgAction, Args, Parser, Subcommand};
use cyclic_config::{load_config, CliOverrides, CodeDefinition, CyclicConfig};
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "cyclic")]
#[command(about = "Build binary cyclic codes over GF(2) and encode messages with them", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `cyclic -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    /// Flags win over the configured level, which wins over the WARN default.
    pub fn log_level(&self, configured: Option<Level>) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => configured.unwrap_or(Level::WARN),
            1 => Level::INFO,  // -v
            2 => Level::DEBUG, // -vv
            _ => Level::TRACE, // -vvv
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        let config = self.load_config()?;

        setup_simple_tracing(self.log_level(config.log_level()?));
        info!("Config loaded from: {:?}", config.config_file());

        match self.command {
            Commands::Inspect { .. } => inspect::execute(&config)?,
            Commands::Encode { message, .. } => encode::execute(&config, &message)?,
            Commands::Interactive => interactive::execute()?,
        }

        Ok(())
    }

    pub fn load_config(&self) -> Result<CyclicConfig> {
        load_config(self.config.clone(), self.command.overrides())
    }
}

/// Code parameters given on the command line. Missing values come from the configuration.
#[derive(Args, Debug, Default, Clone)]
pub struct CodeArgs {
    /// Codeword length n
    #[arg(short, long)]
    pub n: Option<usize>,

    /// Message length k, with 0 < k < n
    #[arg(short, long)]
    pub k: Option<usize>,

    /// Generator polynomial of degree n - k. Eg. "x^3 + x + 1" or "1 0 1 1"
    #[arg(short, long)]
    pub generator: Option<String>,
}

impl From<CodeArgs> for CodeDefinition {
    fn from(value: CodeArgs) -> Self {
        CodeDefinition {
            n: value.n,
            k: value.k,
            generator: value.generator,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print g(x), h(x) and the generator and parity-check matrices of a code
    Inspect {
        #[command(flatten)]
        code: CodeArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encode a message into a codeword
    Encode {
        #[command(flatten)]
        code: CodeArgs,

        /// Message bits. Eg. "1011" or "1 0 1 1". Bits beyond k are dropped
        #[arg(short, long)]
        message: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a code and encode messages by answering prompts
    Interactive,
}

impl Commands {
    fn overrides(&self) -> CliOverrides {
        match self {
            Commands::Inspect { code, json } | Commands::Encode { code, json, .. } => {
                CliOverrides {
                    code: code.clone().into(),
                    json: json.then_some(true),
                }
            }
            Commands::Interactive => CliOverrides::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_level() {
        let cli = Cli::parse_from(["cyclic", "interactive"]);
        assert_eq!(cli.log_level(None), Level::WARN);
        assert_eq!(cli.log_level(Some(Level::DEBUG)), Level::DEBUG);

        let cli = Cli::parse_from(["cyclic", "-vv", "interactive"]);
        assert_eq!(cli.log_level(Some(Level::ERROR)), Level::DEBUG);

        let cli = Cli::parse_from(["cyclic", "interactive", "-vvvv"]);
        assert_eq!(cli.log_level(None), Level::TRACE);

        let cli = Cli::parse_from(["cyclic", "-q", "interactive"]);
        assert_eq!(cli.log_level(Some(Level::INFO)), Level::ERROR);

        assert!(Cli::try_parse_from(["cyclic", "-q", "-v", "interactive"]).is_err());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "cyclic",
            "encode",
            "--n",
            "7",
            "-g",
            "x^3 + x + 1",
            "--message",
            "1011",
        ]);
        let overrides = cli.command.overrides();
        assert_eq!(
            overrides.code,
            CodeDefinition {
                n: Some(7),
                k: None,
                generator: Some("x^3 + x + 1".to_string()),
            }
        );
        assert_eq!(overrides.json, None);

        let cli = Cli::parse_from(["cyclic", "inspect", "--json"]);
        let overrides = cli.command.overrides();
        assert_eq!(overrides.code, CodeDefinition::default());
        assert_eq!(overrides.json, Some(true));
    }
}
