//! Command implementations behind the `tyname` binary.
//!
//! Each command renders to a `String` so output can be checked without a
//! process boundary.

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::{fmt::Write as _, path::PathBuf};
use thiserror::Error as ThisError;
use tyname_build::{Config, ConfigError};
use tyname_core::{ALL_PRIMITIVE_KINDS, builtins::builtin_hash, fnv1a_64_str};

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "tyname", version, about = "Canonical type names and FNV-1a hashes")]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, env = "TYNAME_FORMAT", global = true)]
    pub format: Format,

    /// Raise log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

///
/// Command
///

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the FNV-1a hash of each name
    Hash {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Print the built-in name table
    Builtins,

    /// Validate a tyname.toml and list its registrations
    Check { config: PathBuf },
}

///
/// Format
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

///
/// CliError
///

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

///
/// NameHash
///
/// One row of command output.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NameHash {
    pub name: String,
    pub hash: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Run one parsed command and return its rendered output.
pub fn run(cli: &Cli) -> Result<String, CliError> {
    let rows = match &cli.command {
        Command::Hash { names } => hash_rows(names),
        Command::Builtins => builtin_rows(),
        Command::Check { config } => {
            tracing::debug!(config = %config.display(), "checking config");
            check_rows(&Config::from_path(config)?)?
        }
    };

    render(&rows, cli.format)
}

#[must_use]
pub fn hash_rows(names: &[String]) -> Vec<NameHash> {
    names
        .iter()
        .map(|name| NameHash {
            name: name.clone(),
            hash: fnv1a_64_str(name),
            source: None,
        })
        .collect()
}

#[must_use]
pub fn builtin_rows() -> Vec<NameHash> {
    ALL_PRIMITIVE_KINDS
        .iter()
        .map(|kind| NameHash {
            name: kind.name().to_string(),
            hash: builtin_hash(*kind),
            source: Some(kind.rust_type().to_string()),
        })
        .collect()
}

pub fn check_rows(config: &Config) -> Result<Vec<NameHash>, ConfigError> {
    let rows = config
        .registrations()?
        .into_iter()
        .map(|reg| NameHash {
            name: reg.name,
            hash: reg.hash,
            source: Some(reg.path),
        })
        .collect::<Vec<_>>();
    tracing::info!(count = rows.len(), "config is valid");

    Ok(rows)
}

pub fn render(rows: &[NameHash], format: Format) -> Result<String, CliError> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(rows)?),
        Format::Text => {
            let mut out = String::new();
            for row in rows {
                let _ = write!(out, "{:#018x}  {:>20}  {}", row.hash, row.hash, row.name);
                if let Some(source) = &row.source {
                    let _ = write!(out, "  ({source})");
                }
                out.push('\n');
            }

            Ok(out)
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tyname").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn hash_command_prints_hex_and_decimal() {
        let out = run(&parse(&["hash", "uint"])).unwrap();

        assert_eq!(
            out,
            "0x394d16e46cd6fca1   4128981603702996129  uint\n"
        );
    }

    #[test]
    fn hash_command_requires_a_name() {
        assert!(Cli::try_parse_from(["tyname", "hash"]).is_err());
    }

    #[test]
    fn builtins_cover_the_table() {
        let rows = builtin_rows();

        assert_eq!(rows.len(), 11);
        assert!(rows.iter().any(|r| r.name == "string"));
        let uint_row = rows.iter().find(|r| r.name == "uint").unwrap();
        assert_eq!(uint_row.source.as_deref(), Some("u32"));
        let char_row = rows.iter().find(|r| r.name == "char").unwrap();
        assert_eq!(char_row.hash, fnv1a_64_str("char"));
    }

    #[test]
    fn json_output_is_an_array_of_rows() {
        let out = run(&parse(&["--format", "json", "hash", "Widget", "char"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["name"], "Widget");
        assert_eq!(value[0]["hash"], 12_554_852_512_778_427_141_u64);
        assert_eq!(value[1]["name"], "char");
        assert!(value[0].get("source").is_none());
    }

    #[test]
    fn check_reports_config_errors() {
        let config = Config::from_toml_str(
            "[[types]]\npath = \"crate::a::Widget\"\n[[types]]\npath = \"crate::b::Widget\"\n",
        )
        .unwrap();

        assert!(matches!(
            check_rows(&config),
            Err(ConfigError::DuplicateName { .. })
        ));
    }

    #[test]
    fn check_lists_paths_as_sources() {
        let config = Config::from_toml_str("[[types]]\npath = \"crate::Widget\"\n").unwrap();
        let out = render(&check_rows(&config).unwrap(), Format::Text).unwrap();

        assert!(out.ends_with("Widget  (crate::Widget)\n"), "{out}");
    }
}
