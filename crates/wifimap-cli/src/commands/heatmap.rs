use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use wifimap_core::calibration::ScaleFactor;
use wifimap_core::error::WifiMapError;
use wifimap_core::export::csv::load_csv;
use wifimap_core::heatmap::interpolate;
use wifimap_core::io::image_io::{load_floor_plan, save_rgb};
use wifimap_core::network::{NetworkAggregator, NetworkIdentity};
use wifimap_core::render::{compose, render_overlay, Legend, OverlayRegistry};
use wifimap_core::store::SampleStore;

use super::load_config;
use crate::summary::print_heatmap_summary;

#[derive(Args)]
pub struct HeatmapArgs {
    /// Floor plan image
    pub image: PathBuf,

    /// Observation CSV exported from a capture
    pub csv: PathBuf,

    /// Scale in meters per pixel
    #[arg(long, conflicts_with_all = ["pixels", "meters"])]
    pub scale: Option<f64>,

    /// Length of a reference line in pixels (with --meters)
    #[arg(long, requires = "meters")]
    pub pixels: Option<f64>,

    /// Real length of the reference line in meters (with --pixels)
    #[arg(long, requires = "pixels")]
    pub meters: Option<f64>,

    /// Network label to render, e.g. "Office 5 GHz" (repeatable; default all)
    #[arg(short, long = "network")]
    pub networks: Vec<String>,

    /// Config file (TOML) with heatmap and display settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Leave the legend bar off the output
    #[arg(long)]
    pub no_legend: bool,

    /// Output file path
    #[arg(short, long, default_value = "heatmap.png")]
    pub output: PathBuf,
}

pub fn run(args: &HeatmapArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let scale = resolve_scale(args)?;

    let plan = load_floor_plan(&args.image)
        .with_context(|| format!("Failed to load floor plan {}", args.image.display()))?;
    let observations =
        load_csv(&args.csv).with_context(|| format!("Failed to read {}", args.csv.display()))?;

    let available = NetworkAggregator::aggregate_observations(&observations);
    let selected = select_networks(&available, &args.networks)?;

    let mut store = SampleStore::new();
    store.extend(observations);

    print_heatmap_summary(&args.image, &plan, scale, &selected, &config);

    let pb = ProgressBar::new(selected.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:30} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let display = &config.display;
    let mut registry = OverlayRegistry::new();
    let mut skipped = Vec::new();

    for network in &selected {
        pb.set_message(network.label.clone());
        let samples = store.filter_by_members(&network.members);
        match interpolate(samples, scale, plan.width(), plan.height(), &config.heatmap) {
            Ok(raster) => {
                let overlay = render_overlay(&raster, &network.label, display);
                registry.show(overlay, Legend::new(display.range(), display.colormap));
            }
            Err(WifiMapError::InsufficientData { found, required }) => {
                skipped.push(format!("{} ({found} of {required} samples)", network.label));
            }
            Err(e) => return Err(e.into()),
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done");

    for line in &skipped {
        println!("Not enough data to create heatmap for {line}");
    }
    if registry.is_empty() {
        bail!("No heatmap could be rendered");
    }

    let legend = if args.no_legend { None } else { registry.legend() };
    let composite = compose(&plan.image, registry.iter(), legend);
    save_rgb(&composite, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    println!("\nOutput saved to {}", args.output.display());

    Ok(())
}

fn resolve_scale(args: &HeatmapArgs) -> Result<ScaleFactor> {
    let scale = match (args.scale, args.pixels, args.meters) {
        (Some(s), _, _) => ScaleFactor::from_meters_per_pixel(s)?,
        (None, Some(px), Some(m)) => ScaleFactor::new(px, m)?,
        _ => bail!("Provide either --scale or both --pixels and --meters"),
    };
    Ok(scale)
}

fn select_networks(
    available: &[NetworkIdentity],
    wanted: &[String],
) -> Result<Vec<NetworkIdentity>> {
    if wanted.is_empty() {
        return Ok(available.to_vec());
    }
    wanted
        .iter()
        .map(|label| {
            available
                .iter()
                .find(|n| &n.label == label)
                .cloned()
                .with_context(|| format!("Network '{label}' not found in CSV"))
        })
        .collect()
}
