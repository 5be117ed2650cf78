use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use wifimap_core::network::NetworkAggregator;
use wifimap_core::scan::ProcessScanner;

use super::load_config;
use crate::summary::print_scan_summary;

#[derive(Args)]
pub struct ScanArgs {
    /// Config file (TOML) with scanner settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the parsed records as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &ScanArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut scanner = ProcessScanner::new(config.scanner.clone());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message(format!("Scanning with {}", config.scanner.program));
    pb.enable_steady_tick(Duration::from_millis(100));

    let records = scanner.scan_blocking();
    pb.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    let networks = NetworkAggregator::aggregate(&records);
    print_scan_summary(&records, &networks);

    Ok(())
}
