mod args;
mod table;

use anyhow::{anyhow, Context, Result};
use args::{Cli, Commands, OutputFormat};
use clap::Parser;
use sieve_core::{offered_operators, Catalog, FilterEngine, Snapshot, ValueShape};
use sieve_query::{parse_selection, OperatorId, PropertyRef, RawValue, Selection};
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // initialize tracing; logs go to stderr so table and JSON output stay clean
    let env_filter = EnvFilter::try_new(&cli.log).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).with_writer(io::stderr).init();

    let stdout = io::stdout();
    run(cli, &mut stdout.lock())
}

/// Load the catalog and dispatch the subcommand, writing its output to `out`.
fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let catalog = Snapshot::open(&cli.catalog).with_context(|| format!("failed to load catalog {}", cli.catalog.display()))?;

    match cli.command {
        Commands::Filter { property, operator, value, expression, format } => {
            let selection = match expression {
                Some(text) => parse_selection(&text).with_context(|| format!("invalid selection `{}`", text))?,
                None => Selection { property, operator, value: value.map(RawValue::Text) },
            };
            filter(&catalog, &selection, format, out)
        }
        Commands::Operators { property } => operators(&catalog, &property, out),
        Commands::Shape { property, operator } => shape(&catalog, &property, operator, out),
        Commands::Properties => properties(&catalog, out),
    }
}

fn filter(catalog: &Snapshot, selection: &Selection, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    debug!("filtering with {:?}", selection);
    let engine = FilterEngine::from_catalog(catalog);
    let products = engine.apply(catalog.products(), selection);

    match format {
        OutputFormat::Table => write!(out, "{}", table::render_table(catalog.properties(), &products, catalog.products().len()))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&products)?)?,
    }
    Ok(())
}

fn operators(catalog: &Snapshot, reference: &PropertyRef, out: &mut impl Write) -> Result<()> {
    let engine = FilterEngine::from_catalog(catalog);
    let property = engine.resolve(reference).ok_or_else(|| anyhow!("no property {} in catalog", reference))?;
    for operator in offered_operators(catalog.operators(), property.property_type) {
        writeln!(out, "{:<14} {}", operator.id, operator.label)?;
    }
    Ok(())
}

fn shape(catalog: &Snapshot, reference: &PropertyRef, operator: OperatorId, out: &mut impl Write) -> Result<()> {
    let engine = FilterEngine::from_catalog(catalog);
    let shape = engine.shape_for(reference, operator).ok_or_else(|| anyhow!("no property {} in catalog", reference))?;
    match shape {
        ValueShape::EnumeratedChoice(values) => writeln!(out, "{}: {}", shape.name(), values.join(", "))?,
        _ => writeln!(out, "{}", shape.name())?,
    }
    Ok(())
}

fn properties(catalog: &Snapshot, out: &mut impl Write) -> Result<()> {
    for property in catalog.properties() {
        if property.values.is_empty() {
            writeln!(out, "{:<4} {:<16} {}", property.id, property.name, property.property_type)?;
        } else {
            writeln!(out, "{:<4} {:<16} {} ({})", property.id, property.name, property.property_type, property.values.join(", "))?;
        }
    }
    Ok(())
}
