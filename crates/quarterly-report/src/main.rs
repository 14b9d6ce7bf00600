//! Quarterly Income Report
//!
//! Synthesizes a year of department sales and prints a quarterly income
//! report: totals per quarter, a per-department breakdown and the
//! highest-profit orders of each quarter.

mod catalog;
mod config;
mod constants;
mod generator;
mod logging;
mod models;
mod render;
mod report;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

use config::{Config, FileConfig, Overrides};
use generator::SalesGenerator;
use render::ReportStyle;

#[derive(Parser, Debug)]
#[command(name = "quarterly-report")]
#[command(about = "Quarterly income report by department over synthetic sales data")]
struct Args {
    /// Optional TOML config file ([generator] and [report] sections)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed; the same seed reproduces the same report
    #[arg(long)]
    seed: Option<u64>,

    /// Number of sales records to generate (default: 1000)
    #[arg(long)]
    count: Option<usize>,

    /// Calendar year of the generated sales (default: 2023)
    #[arg(long)]
    year: Option<i32>,

    /// Highest-profit orders to list per quarter (default: 3)
    #[arg(long)]
    top: Option<usize>,

    /// Output layout
    #[arg(long, value_enum)]
    style: Option<ReportStyle>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            count: self.count,
            year: self.year,
            seed: self.seed,
            top_orders: self.top,
            style: self.style,
        }
    }
}

/// Use the configured seed, or draw a fresh one for this run
fn resolve_seed(configured: Option<u64>) -> u64 {
    configured.unwrap_or_else(|| rand::rng().random())
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(if args.verbose { "debug" } else { "info" });

    let file_config = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let config = Config::resolve(&file_config, args.overrides())?;

    let seed = resolve_seed(config.seed);
    tracing::info!(
        seed,
        count = config.record_count,
        year = config.sales_year,
        top_orders = config.top_orders,
        style = ?config.style,
        "Generating sales data"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let records = SalesGenerator::new(config.sales_year).generate(config.record_count, &mut rng)?;
    tracing::debug!("Generated {} sales records", records.len());

    let report = report::build_report(&records, config.top_orders);
    print!("{}", config.style.renderer().render(&report));

    Ok(())
}
