use anyhow::Result;
use colored::Colorize;
use serde::Serializer as _;
use std::io::Write;

use shipyard_parts::{CatalogError, Category, LoadSummary, Ship};

/// Output format for generated ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Labeled text blocks, one per ship
    Console,
    /// Pretty-printed JSON array of ships
    Json,
}

pub fn announce_loaded(summary: &LoadSummary, verbose: bool) {
    let notice = format!("parts loaded from: {}", summary.origin.display());
    println!("{}", notice.green());
    if verbose {
        for category in Category::ALL {
            println!("  {category:9} {}", summary.count(category));
        }
        println!("  {:9} {}", "ignored", summary.dropped);
    }
}

pub fn announce_failed(err: &CatalogError) {
    println!("{}", err.to_string().yellow());
}

/// Write each ship as soon as `ships` yields it.
pub fn write_ships(
    out: &mut dyn Write,
    ships: impl IntoIterator<Item = Ship>,
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Console => {
            for ship in ships {
                write!(out, "{ship}")?;
            }
        }
        ReportFormat::Json => {
            let mut serializer = serde_json::Serializer::pretty(&mut *out);
            serializer.collect_seq(ships)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
