use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use laserscan::config::{AngleRange, CalcConfig, CalculationMode};
use laserscan::output::{Formatter, OutputFormat, RateOutput, RecordKind, create_formatter};
use laserscan::rate::{angle_exceeds_device_limit, estimate_scan_rate, sweep};
use laserscan::{ScannerCatalog, solve};

#[derive(Parser, Debug)]
#[command(name = "laserscan")]
#[command(about = "Laser projector scan geometry and scan rate estimation", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output format: text, json, csv
    #[arg(short = 'f', long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    /// Scanner catalog file (.toml or .json); defaults to the bundled catalog
    #[arg(short = 'c', long, global = true)]
    catalog: Option<PathBuf>,

    /// Increase output verbosity
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve for width, distance or angle from the other two
    Solve {
        /// Quantity to solve for
        #[arg(value_enum)]
        mode: CalculationMode,
        /// First known value (angle for width/distance, distance for angle)
        #[arg(allow_negative_numbers = true)]
        a: f64,
        /// Second known value (distance for width, width for distance/angle)
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Estimate the sustainable point rate of a scanner at a scan angle
    Rate {
        /// Scanner identifier from the catalog
        scanner: String,
        /// Full scan angle in degrees
        #[arg(allow_negative_numbers = true)]
        angle: f64,
    },
    /// Estimate the point rate across a range of scan angles
    Sweep {
        /// Scanner identifier from the catalog
        scanner: String,
        /// Angles: comma-separated (e.g., "8,20,40") or range (e.g., "0-90:5")
        #[arg(short, long)]
        angles: Option<AngleRange>,
    },
    /// List scanners in the catalog
    List,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = CalcConfig {
        format: args.format,
        verbose: args.verbose > 0,
        catalog_path: args.catalog,
        ..CalcConfig::default()
    };
    let formatter = create_formatter(config.format, config.verbose);

    match args.command {
        Command::Solve { mode, a, b } => {
            print_header(formatter.as_ref(), RecordKind::Solution);
            let solution = solve(mode, a, b);
            println!("{}", formatter.format_solution(&solution));
        }
        Command::Rate { scanner, angle } => {
            let catalog = load_catalog(&config)?;
            let model = catalog.require(&scanner)?;

            let exceeds_limit = angle_exceeds_device_limit(Some(model), angle);
            if exceeds_limit {
                log::warn!(
                    "{}° is beyond the device limit of {}",
                    angle,
                    model.name
                );
            }

            let estimate = estimate_scan_rate(Some(model), angle);
            print_header(formatter.as_ref(), RecordKind::Rate);
            println!(
                "{}",
                formatter.format_rate(&RateOutput {
                    scanner_id: &scanner,
                    scanner_name: &model.name,
                    angle,
                    exceeds_limit,
                    estimate: &estimate,
                })
            );
        }
        Command::Sweep { scanner, angles } => {
            let catalog = load_catalog(&config)?;
            let model = catalog.require(&scanner)?;
            let range = angles.unwrap_or_else(|| config.sweep_range.clone());
            log::info!("Sweeping {} over {}", model.name, range);

            let report = sweep(model, &range);
            print_header(formatter.as_ref(), RecordKind::Sweep);
            for row in &report.rows {
                println!("{}", formatter.format_sweep_row(&scanner, row));
            }
            if let Some(ref summary) = report.summary
                && let Some(line) = formatter.format_summary(&scanner, summary)
            {
                println!("{}", line);
            }
        }
        Command::List => {
            let catalog = load_catalog(&config)?;
            for (id, model) in catalog.iter() {
                let span = model
                    .angle_span()
                    .map_or("-".to_string(), |(lo, hi)| format!("{}°-{}°", lo, hi));
                let max_angle = model
                    .max_angle
                    .map_or("-".to_string(), |a| format!("{}°", a));
                let max_kpps = model
                    .max_kpps
                    .map_or("-".to_string(), |k| format!("{}K", k));
                println!(
                    "{:<16} {:<20} specs: {:>2} ({:<10}) max angle: {:<5} max kpps: {}",
                    id,
                    model.name,
                    model.specs.len(),
                    span,
                    max_angle,
                    max_kpps
                );
            }
        }
    }

    Ok(())
}

fn load_catalog(config: &CalcConfig) -> anyhow::Result<ScannerCatalog> {
    match config.catalog_path {
        Some(ref path) => ScannerCatalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => ScannerCatalog::bundled().context("Failed to parse bundled catalog"),
    }
}

fn print_header(formatter: &dyn Formatter, kind: RecordKind) {
    if let Some(header) = formatter.header(kind) {
        println!("{}", header);
    }
}
