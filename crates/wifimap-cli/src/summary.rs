use std::path::Path;

use console::Style;
use wifimap_core::calibration::ScaleFactor;
use wifimap_core::config::WifiMapConfig;
use wifimap_core::floorplan::FloorPlan;
use wifimap_core::network::{record_label, NetworkIdentity};
use wifimap_core::observation::ScanRecord;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    strong: Style,
    weak: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            strong: Style::new().green(),
            weak: Style::new().yellow(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }

    /// Color an RSSI by how usable it is.
    fn rssi(&self, rssi: i32) -> &Style {
        if rssi >= -60 {
            &self.strong
        } else if rssi >= -75 {
            &self.weak
        } else {
            &self.disabled
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(title.chars().count())));
    println!();
}

pub fn print_scan_summary(records: &[ScanRecord], networks: &[NetworkIdentity]) {
    let s = Styles::new();

    print_title(&s, "Wi-Fi Scan");

    if records.is_empty() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Records"),
            s.disabled.apply_to("none (scanner failed or saw nothing)")
        );
        println!();
        return;
    }

    println!(
        "  {:<14}{}",
        s.label.apply_to("Records"),
        s.value.apply_to(records.len())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Networks"),
        s.value.apply_to(networks.len())
    );
    println!();

    println!("  {}", s.header.apply_to("Radios"));
    for record in records {
        let bssid = record.bssid.as_deref().unwrap_or("?");
        let rssi = match record.rssi {
            Some(r) => s.rssi(r).apply_to(format!("{r} dBm")).to_string(),
            None => s.disabled.apply_to("n/a").to_string(),
        };
        println!(
            "    {:<19}{:>10}  {}",
            s.label.apply_to(bssid),
            rssi,
            s.value.apply_to(record_label(record))
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Networks"));
    for (i, network) in networks.iter().enumerate() {
        println!(
            "    {}. {} {}",
            s.label.apply_to(i + 1),
            s.value.apply_to(&network.label),
            s.label.apply_to(format!("({} radios)", network.members.len()))
        );
    }
    println!();
}

pub fn print_heatmap_summary(
    image: &Path,
    plan: &FloorPlan,
    scale: ScaleFactor,
    networks: &[NetworkIdentity],
    config: &WifiMapConfig,
) {
    let s = Styles::new();

    print_title(&s, "Wi-Fi Heatmap");

    println!(
        "  {:<14}{}",
        s.label.apply_to("Floor plan"),
        s.path.apply_to(image.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!(
            "{}x{} px ({:.1} x {:.1} m)",
            plan.width(),
            plan.height(),
            scale.to_meters(plan.width() as f64),
            scale.to_meters(plan.height() as f64)
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{:.4} m/px", scale.meters_per_pixel()))
    );
    println!();

    let heatmap = &config.heatmap;
    println!("  {}", s.header.apply_to("Interpolation"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Grid"),
        s.value.apply_to(format!("{0}x{0}", heatmap.grid_resolution))
    );
    if heatmap.smoothing_sigma > 0.0 {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Smoothing"),
            s.value.apply_to(format!("sigma {}", heatmap.smoothing_sigma))
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Smoothing"),
            s.disabled.apply_to("disabled")
        );
    }
    println!();

    let display = &config.display;
    println!("  {}", s.header.apply_to("Display"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Range"),
        s.value.apply_to(format!("{} .. {} dBm", display.rssi_min, display.rssi_max))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Colormap"),
        s.strong.apply_to(display.colormap)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Opacity"),
        s.value.apply_to(format!("{:.0}%", display.opacity * 100.0))
    );
    println!();

    println!("  {}", s.header.apply_to("Networks"));
    for (i, network) in networks.iter().enumerate() {
        println!(
            "    {}. {}",
            s.label.apply_to(i + 1),
            s.value.apply_to(&network.label)
        );
    }
    println!();
}
