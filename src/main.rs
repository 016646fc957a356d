use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use orbsample::{
    compare::compare_files,
    logging::{init_logging, parse_log_level},
    position_file::read_positions,
    time::format_timestamp,
    BoundingBox, LabelMode, OrbSampleError, OrbitCatalog, OrbitSampler, SamplerConfig,
};

/// Propagate Keplerian orbits and export daily positions as CSV.
///
/// Without a subcommand, exports the built-in verification orbits into the
/// current directory.
#[derive(Debug, Parser)]
#[command(name = "orbsample", version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sample orbits and write one CSV file per orbit.
    Export(ExportArgs),
    /// Compare two position files row by row.
    Diff(DiffArgs),
    /// Print the space/time bounding box of one or two position files.
    Bounds(BoundsArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Builtin {
    Verification,
    SolarSystem,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Label {
    DayIndex,
    Timestamp,
}

#[derive(Debug, Args)]
struct ExportArgs {
    /// YAML orbit catalog; overrides --builtin.
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Built-in orbit table to export when no catalog is given.
    #[arg(long, value_enum, default_value = "verification")]
    builtin: Builtin,

    /// Output directory.
    #[arg(long, short, default_value = ".")]
    out: PathBuf,

    /// Number of daily samples after the epoch.
    #[arg(long, default_value_t = orbsample::constants::DEFAULT_SAMPLE_COUNT)]
    samples: u32,

    /// Do not write the day-0 row.
    #[arg(long)]
    no_epoch_sample: bool,

    /// Second column of each row.
    #[arg(long, value_enum, default_value = "day-index")]
    label: Label,

    /// Log the classical elements to state vector conversion of each orbit.
    #[arg(long)]
    diagnostic: bool,
}

impl Default for ExportArgs {
    fn default() -> Self {
        ExportArgs {
            catalog: None,
            builtin: Builtin::Verification,
            out: PathBuf::from("."),
            samples: orbsample::constants::DEFAULT_SAMPLE_COUNT,
            no_epoch_sample: false,
            label: Label::DayIndex,
            diagnostic: false,
        }
    }
}

#[derive(Debug, Args)]
struct DiffArgs {
    /// First file to compare.
    a: PathBuf,
    /// Second file to compare.
    b: PathBuf,
}

#[derive(Debug, Args)]
struct BoundsArgs {
    /// Position file to bound.
    file: PathBuf,
    /// Optional second file, checked for overlap with the first.
    other: Option<PathBuf>,
}

fn run_export(args: &ExportArgs) -> Result<(), OrbSampleError> {
    let catalog = match (&args.catalog, args.builtin) {
        (Some(path), _) => OrbitCatalog::from_path(path)?,
        (None, Builtin::Verification) => OrbitCatalog::verification(),
        (None, Builtin::SolarSystem) => OrbitCatalog::solar_system(),
    };

    let config = SamplerConfig {
        sample_count: args.samples,
        include_epoch_sample: !args.no_epoch_sample,
        label_mode: match args.label {
            Label::DayIndex => LabelMode::DayIndex,
            Label::Timestamp => LabelMode::Timestamp,
        },
        emit_diagnostic: args.diagnostic,
    };

    info!(
        orbits = catalog.len(),
        out = %args.out.display(),
        "exporting orbit samples"
    );
    let files = OrbitSampler::new(config).export_catalog(&catalog, &args.out)?;
    info!(files = files.len(), "export complete");
    Ok(())
}

fn run_diff(args: &DiffArgs) -> Result<(), OrbSampleError> {
    let comparison = compare_files(&args.a, &args.b)?;
    for row in &comparison.rows {
        println!("{}: {}", row.index, row.difference);
    }
    info!(
        sum = comparison.sum,
        count = comparison.count,
        mean = comparison.mean,
        "difference summary"
    );
    Ok(())
}

fn bounds_of(path: &Path) -> Result<Option<BoundingBox>, OrbSampleError> {
    let samples = read_positions(path)?;
    let bbox = BoundingBox::from_samples(&samples);
    match &bbox {
        Some(bbox) => {
            let (center, mid_epoch) = bbox.center();
            println!("{}: {bbox}", path.display());
            match mid_epoch {
                Some(epoch) => println!(
                    "center: ({}, {}, {}) at {}",
                    center.x,
                    center.y,
                    center.z,
                    format_timestamp(&epoch)
                ),
                None => println!("center: ({}, {}, {})", center.x, center.y, center.z),
            }
        }
        None => println!("{}: no positions", path.display()),
    }
    Ok(bbox)
}

fn run_bounds(args: &BoundsArgs) -> Result<(), OrbSampleError> {
    let first = bounds_of(&args.file)?;
    if let Some(other) = &args.other {
        let second = bounds_of(other)?;
        if let (Some(a), Some(b)) = (first, second) {
            println!("overlap: {}", a.overlaps(&b));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(parse_log_level(&cli.log_level)) {
        eprintln!("{e}");
    }

    let result = match cli.command {
        Some(Command::Diff(args)) => run_diff(&args),
        Some(Command::Bounds(args)) => run_bounds(&args),
        Some(Command::Export(args)) => run_export(&args),
        None => run_export(&ExportArgs::default()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(category = ?e.category(), "{e}");
            ExitCode::FAILURE
        }
    }
}
