use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use wifimap_core::export::csv::load_csv;
use wifimap_core::network::NetworkAggregator;
use wifimap_core::store::SampleStore;

#[derive(Args)]
pub struct NetworksArgs {
    /// Observation CSV exported from a capture
    pub file: PathBuf,
}

pub fn run(args: &NetworksArgs) -> Result<()> {
    let observations = load_csv(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let networks = NetworkAggregator::aggregate_observations(&observations);
    let mut store = SampleStore::new();
    store.extend(observations);

    println!(
        "{} observations, {} networks in {}\n",
        store.len(),
        networks.len(),
        args.file.display()
    );
    println!("{:<40}  {:>6}  {:>8}", "Network", "Radios", "Samples");
    println!("{}", "-".repeat(58));

    for network in &networks {
        let radios: HashSet<&str> = network.members.iter().map(String::as_str).collect();
        let samples = store.filter_by_members(&network.members).len();
        println!("{:<40}  {:>6}  {:>8}", network.label, radios.len(), samples);
    }

    Ok(())
}
