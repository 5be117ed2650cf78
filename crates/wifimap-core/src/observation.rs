use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::HIDDEN_NETWORK_NAME;

/// A position in image pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: PixelPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One entry of a scanner report, validated at the JSON boundary.
///
/// Every field is optional: anything missing or malformed is `None` rather
/// than an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ScanRecord {
    pub bssid: Option<String>,
    pub ssid: Option<String>,
    pub rssi: Option<i32>,
    pub channel_frequency: Option<f64>,
    pub channel_number: Option<u32>,
    pub channel_width: Option<u32>,
    pub phy_type: Option<String>,
    pub timestamp: Option<String>,
    pub interface_mac: Option<String>,
}

impl ScanRecord {
    /// Convert one element of `scan_data`. Non-objects yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            bssid: obj.get("bssid").and_then(text_field),
            ssid: obj.get("ssid").and_then(text_field),
            rssi: obj.get("rssi").and_then(int_field),
            channel_frequency: obj.get("channel_frequency").and_then(float_field),
            channel_number: obj.get("channel_number").and_then(uint_field),
            channel_width: obj.get("channel_width").and_then(uint_field),
            phy_type: obj.get("phy_type").and_then(text_field),
            timestamp: obj.get("timestamp").and_then(text_field),
            interface_mac: obj.get("interface_mac").and_then(text_field),
        })
    }

    /// Broadcast name, or `hidden` when empty or absent.
    pub fn network_name(&self) -> &str {
        display_name(self.ssid.as_deref())
    }
}

/// One signal-strength sample for one radio at one location.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub position: PixelPoint,
    pub timestamp: Option<String>,
    pub interface_mac: Option<String>,
    pub bssid: String,
    /// Raw broadcast name; may be empty.
    pub ssid: String,
    pub channel_frequency: Option<f64>,
    pub channel_number: Option<u32>,
    pub channel_width: Option<u32>,
    pub phy_type: Option<String>,
    pub rssi: i32,
}

impl Observation {
    /// Tag a scan record with the location it was captured at.
    ///
    /// Records without a BSSID or a signal strength cannot contribute to a
    /// heatmap and are rejected.
    pub fn from_record(record: &ScanRecord, position: PixelPoint) -> Option<Self> {
        let bssid = record.bssid.as_ref().filter(|b| !b.is_empty())?;
        let rssi = record.rssi?;
        Some(Self {
            position,
            timestamp: record.timestamp.clone(),
            interface_mac: record.interface_mac.clone(),
            bssid: bssid.clone(),
            ssid: record.ssid.clone().unwrap_or_default(),
            channel_frequency: record.channel_frequency,
            channel_number: record.channel_number,
            channel_width: record.channel_width,
            phy_type: record.phy_type.clone(),
            rssi,
        })
    }

    pub fn network_name(&self) -> &str {
        display_name(Some(self.ssid.as_str()))
    }
}

fn display_name(ssid: Option<&str>) -> &str {
    match ssid {
        Some(s) if !s.is_empty() => s,
        _ => HIDDEN_NETWORK_NAME,
    }
}

fn text_field(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn float_field(value: &Value) -> Option<f64> {
    let v = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    v.is_finite().then_some(v)
}

fn int_field(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

fn uint_field(value: &Value) -> Option<u32> {
    int_field(value).and_then(|v| u32::try_from(v).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_strings_are_accepted() {
        let rec = ScanRecord::from_value(&json!({
            "bssid": "aa:bb",
            "rssi": "-61",
            "channel_frequency": "5.18",
            "channel_number": 36,
        }))
        .unwrap();
        assert_eq!(rec.rssi, Some(-61));
        assert_eq!(rec.channel_frequency, Some(5.18));
        assert_eq!(rec.channel_number, Some(36));
    }

    #[test]
    fn test_malformed_fields_become_none() {
        let rec = ScanRecord::from_value(&json!({
            "bssid": null,
            "rssi": "strong",
            "channel_frequency": [1, 2],
            "channel_width": -20,
        }))
        .unwrap();
        assert_eq!(rec, ScanRecord::default());
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(ScanRecord::from_value(&json!("bssid")).is_none());
        assert!(ScanRecord::from_value(&json!(42)).is_none());
    }

    #[test]
    fn test_observation_requires_bssid_and_rssi() {
        let mut rec = ScanRecord {
            bssid: Some("aa".into()),
            rssi: Some(-50),
            ..Default::default()
        };
        assert!(Observation::from_record(&rec, PixelPoint::default()).is_some());
        rec.rssi = None;
        assert!(Observation::from_record(&rec, PixelPoint::default()).is_none());
        rec.rssi = Some(-50);
        rec.bssid = Some(String::new());
        assert!(Observation::from_record(&rec, PixelPoint::default()).is_none());
    }
}
