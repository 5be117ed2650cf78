#![allow(dead_code)]

use wifimap_core::config::WifiMapConfig;
use wifimap_core::floorplan::FloorPlan;
use wifimap_core::observation::{Observation, PixelPoint, ScanRecord};
use wifimap_core::session::{Session, SessionEvent};

/// Build a scan record with the fields the core cares about.
pub fn record(bssid: &str, ssid: &str, freq: f64, rssi: i32) -> ScanRecord {
    ScanRecord {
        bssid: Some(bssid.to_string()),
        ssid: Some(ssid.to_string()),
        rssi: Some(rssi),
        channel_frequency: Some(freq),
        channel_number: Some(1),
        channel_width: Some(20),
        phy_type: Some("ax".to_string()),
        timestamp: Some("1700000000".to_string()),
        interface_mac: Some("00:11:22:33:44:55".to_string()),
    }
}

/// Build an observation at pixel position (x, y).
pub fn observation(x: f64, y: f64, bssid: &str, rssi: i32) -> Observation {
    Observation::from_record(&record(bssid, "A", 2.412, rssi), PixelPoint::new(x, y))
        .expect("record has bssid and rssi")
}

/// A session with a blank `width` x `height` plan, calibrated so that
/// two markers 100 px apart are `meters` long.
pub fn calibrated_session(config: WifiMapConfig, width: u32, height: u32, meters: f64) -> Session {
    let mut session = Session::new(config);
    let plan = FloorPlan::blank(width, height).expect("non-zero plan");
    session.dispatch(SessionEvent::LoadImage(plan));
    session.dispatch(SessionEvent::Click(PixelPoint::new(100.0, 100.0)));
    session.dispatch(SessionEvent::Click(PixelPoint::new(200.0, 100.0)));
    session.dispatch(SessionEvent::SetRealLength(meters));
    session.dispatch(SessionEvent::ConfirmCalibration);
    session
}

/// Click at `point`, then deliver `batch` as a completed scan.
pub fn capture_at(session: &mut Session, point: PixelPoint, batch: Vec<ScanRecord>) {
    session.dispatch(SessionEvent::Click(point));
    session.dispatch(SessionEvent::ScanFinished(batch));
}
