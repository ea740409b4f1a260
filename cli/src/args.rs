use clap::{Parser, Subcommand, ValueEnum};
use sieve_query::{OperatorId, PropertyRef};
use std::path::PathBuf;

pub const ENV_CATALOG: &str = "SIEVE_CATALOG";
pub const ENV_LOG: &str = "SIEVE_LOG";

#[derive(Parser)]
#[command(name = "sieve")]
#[command(version, about = "Filter a product catalog by a single property selection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the catalog JSON file
    #[arg(long, short = 'c', global = true, env = ENV_CATALOG, default_value = "data/catalog.json")]
    pub catalog: PathBuf,

    /// Log filter directive, e.g. `info` or `sieve_core=debug`
    #[arg(long, global = true, env = ENV_LOG, default_value = "info")]
    pub log: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the products matching a selection
    Filter {
        /// Property id or name
        #[arg(long, short = 'p', value_parser = parse_property)]
        property: Option<PropertyRef>,

        /// Operator id (`equals`, `greater_than`, ...). Unrecognized ids filter nothing out.
        #[arg(long, short = 'o')]
        operator: Option<String>,

        /// Value to compare against; comma-separated for `in`
        #[arg(long, short = 'v')]
        value: Option<String>,

        /// The whole selection as one expression, e.g. `weight > 10`
        #[arg(long = "where", short = 'w', conflicts_with_all = ["property", "operator", "value"])]
        expression: Option<String>,

        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List the operators offered for a property
    Operators {
        #[arg(value_parser = parse_property)]
        property: PropertyRef,
    },

    /// Show what kind of value a property and operator need
    Shape {
        #[arg(value_parser = parse_property)]
        property: PropertyRef,

        #[arg(value_parser = parse_operator)]
        operator: OperatorId,
    },

    /// List the catalog's properties
    Properties,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

fn parse_property(s: &str) -> Result<PropertyRef, String> { s.parse().map_err(|e| format!("{}", e)) }

// Typed at a prompt, so case and surrounding space are forgiven here
fn parse_operator(s: &str) -> Result<OperatorId, String> { s.trim().to_lowercase().parse().map_err(|e| format!("{}", e)) }
