mod report;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use report::{ReportFormat, announce_failed, announce_loaded, write_ships};
use shipyard_parts::{PartCatalog, assemble_fleet};

const DEFAULT_PARTS_FILE: &str = "vehicle_parts_additional.txt";

#[derive(Debug, Parser)]
#[command(name = "shipyard", version)]
#[command(about = "Assemble random spaceships from a categorized parts list")]
struct Args {
    /// Parts file, one part per line
    #[arg(long, default_value = DEFAULT_PARTS_FILE)]
    parts: PathBuf,

    /// Number of ships to assemble
    #[arg(long, default_value_t = 4)]
    ships: usize,

    /// Seed for a reproducible run (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the ships to instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print per-category load counts
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let mut catalog = match args.seed {
        Some(seed) => PartCatalog::from_seed(seed),
        None => PartCatalog::from_entropy(),
    };

    match catalog.load(&args.parts) {
        Ok(summary) => announce_loaded(&summary, args.verbose),
        Err(err) => announce_failed(&err),
    }

    let mut output_target = OutputTarget::new(args.output.clone())?;
    let fleet = assemble_fleet(&mut catalog, args.ships);
    write_ships(&mut output_target, fleet, args.report)?;
    output_target.flush()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Self::Stdout(w) => w.write(buf),
            Self::File(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}
