//! Main application entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::util::pretty::pretty_format_batches;
use clap::Parser;
use tracing::info;

use ce_core::EventBus;
use ce_data::Dataset;
use ce_views::Session;

mod config;
mod driver;

use config::AppConfig;
use driver::Driver;

/// Linked cluster views over a country indicator table.
///
/// Reads one interaction per stdin line as JSON and answers with the
/// recomputed views on stdout.
#[derive(Debug, Parser)]
#[command(name = "cluster-explorer", version)]
struct Args {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dataset path, overriding the configuration
    #[arg(long)]
    data: Option<PathBuf>,

    /// Print the regions and a preview of the table, then exit
    #[arg(long)]
    describe: bool,

    /// Rows shown by --describe
    #[arg(long, default_value_t = 10)]
    preview_rows: usize,
}

fn describe(dataset: &Dataset, preview_rows: usize) -> Result<()> {
    println!("{}: {} rows", dataset.source_name(), dataset.len());
    println!("Regions: {}", dataset.regions().join(", "));

    let batch = dataset.to_record_batch().context("Failed to export dataset")?;
    let preview = batch.slice(0, preview_rows.min(batch.num_rows()));
    println!("{}", pretty_format_batches(&[preview])?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref())?.with_data_path(args.data);

    let dataset = Dataset::load_with(&config.dataset)
        .with_context(|| format!("Failed to load {}", config.dataset.path.display()))?;
    info!("Loaded {} rows from {}", dataset.len(), dataset.source_name());

    if args.describe {
        return describe(&dataset, args.preview_rows);
    }

    let session = Session::new(Arc::new(dataset), Arc::new(EventBus::new()));
    let mut driver = Driver::new(session, config.default_feature);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let handled = driver.run(stdin.lock(), stdout.lock())?;
    info!("Handled {} interactions", handled);
    Ok(())
}
