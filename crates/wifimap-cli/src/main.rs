mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "wifimap", about = "Wi-Fi signal heatmaps over floor plans")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a meters-per-pixel scale from two reference points
    Calibrate(commands::calibrate::CalibrateArgs),
    /// Run the scanner once and list what it sees
    Scan(commands::scan::ScanArgs),
    /// List networks and sample counts in an exported CSV
    Networks(commands::networks::NetworksArgs),
    /// Render network heatmaps from a CSV onto a floor plan
    Heatmap(commands::heatmap::HeatmapArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Calibrate(args) => commands::calibrate::run(args),
        Commands::Scan(args) => commands::scan::run(args),
        Commands::Networks(args) => commands::networks::run(args),
        Commands::Heatmap(args) => commands::heatmap::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
