use anyhow::Result;
use clap::Args;
use wifimap_core::calibration::ScaleFactor;
use wifimap_core::observation::PixelPoint;

use super::parse_point;

#[derive(Args)]
pub struct CalibrateArgs {
    /// First reference point in image pixels, as X,Y
    #[arg(long, value_parser = parse_point)]
    pub from: PixelPoint,

    /// Second reference point in image pixels, as X,Y
    #[arg(long, value_parser = parse_point)]
    pub to: PixelPoint,

    /// Real-world distance between the points in meters
    #[arg(long)]
    pub meters: f64,
}

pub fn run(args: &CalibrateArgs) -> Result<()> {
    let pixels = args.from.distance_to(args.to);
    let scale = ScaleFactor::new(pixels, args.meters)?;

    println!("Pixel distance:  {:.2} px", pixels);
    println!("Real distance:   {:.2} m", args.meters);
    println!("Scale:           {:.6} m/px", scale.meters_per_pixel());
    println!("                 {:.2} px/m", 1.0 / scale.meters_per_pixel());

    Ok(())
}
