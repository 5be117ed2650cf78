use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::observation::{Observation, PixelPoint};

/// Column order of the observation export.
pub const CSV_HEADERS: [&str; 11] = [
    "x",
    "y",
    "timestamp",
    "interface_mac",
    "bssid",
    "channel_frequency",
    "channel_number",
    "channel_width",
    "phy_type",
    "rssi",
    "ssid",
];

/// Field order must match `CSV_HEADERS`.
#[derive(Serialize, Deserialize)]
struct CsvRow {
    x: f64,
    y: f64,
    timestamp: Option<String>,
    interface_mac: Option<String>,
    bssid: String,
    channel_frequency: Option<f64>,
    channel_number: Option<u32>,
    channel_width: Option<u32>,
    phy_type: Option<String>,
    rssi: i32,
    #[serde(default)]
    ssid: String,
}

impl From<&Observation> for CsvRow {
    fn from(o: &Observation) -> Self {
        Self {
            x: o.position.x,
            y: o.position.y,
            timestamp: o.timestamp.clone(),
            interface_mac: o.interface_mac.clone(),
            bssid: o.bssid.clone(),
            channel_frequency: o.channel_frequency,
            channel_number: o.channel_number,
            channel_width: o.channel_width,
            phy_type: o.phy_type.clone(),
            rssi: o.rssi,
            ssid: o.ssid.clone(),
        }
    }
}

impl From<CsvRow> for Observation {
    fn from(r: CsvRow) -> Self {
        Self {
            position: PixelPoint::new(r.x, r.y),
            timestamp: r.timestamp,
            interface_mac: r.interface_mac,
            bssid: r.bssid,
            ssid: r.ssid,
            channel_frequency: r.channel_frequency,
            channel_number: r.channel_number,
            channel_width: r.channel_width,
            phy_type: r.phy_type,
            rssi: r.rssi,
        }
    }
}

/// Write observations as CSV. The header row is always written, even for
/// an empty set.
pub fn write_csv<'a, W, I>(writer: W, observations: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Observation>,
{
    let mut wtr = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(CSV_HEADERS)?;
    let mut count = 0;
    for obs in observations {
        wtr.serialize(CsvRow::from(obs))?;
        count += 1;
    }
    wtr.flush()?;
    Ok(count)
}

pub fn save_csv<'a, I>(path: &Path, observations: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let file = std::fs::File::create(path)?;
    let count = write_csv(file, observations)?;
    info!(path = %path.display(), rows = count, "Exported observations");
    Ok(count)
}

/// Read observations written by `write_csv`.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Observation>> {
    let mut rdr = ::csv::Reader::from_reader(reader);
    let mut observations = Vec::new();
    for row in rdr.deserialize::<CsvRow>() {
        observations.push(row?.into());
    }
    Ok(observations)
}

pub fn load_csv(path: &Path) -> Result<Vec<Observation>> {
    let file = std::fs::File::open(path)?;
    let observations = read_csv(file)?;
    info!(path = %path.display(), rows = observations.len(), "Imported observations");
    Ok(observations)
}
