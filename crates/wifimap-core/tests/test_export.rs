mod common;

use common::observation;
use wifimap_core::export::csv::{load_csv, read_csv, save_csv, write_csv, CSV_HEADERS};
use wifimap_core::observation::{Observation, PixelPoint, ScanRecord};

#[test]
fn test_header_order() {
    let mut buf = Vec::new();
    let obs = vec![observation(12.5, 40.0, "aa:bb", -61)];
    let rows = write_csv(&mut buf, &obs).unwrap();
    assert_eq!(rows, 1);

    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "x,y,timestamp,interface_mac,bssid,channel_frequency,channel_number,channel_width,phy_type,rssi,ssid"
    );
    let fields: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(fields.len(), CSV_HEADERS.len());
    assert_eq!(fields[0], "12.5");
    assert_eq!(fields[4], "aa:bb");
    assert_eq!(fields[9], "-61");
    assert_eq!(fields[10], "A");
}

#[test]
fn test_empty_store_writes_header_only() {
    let mut buf = Vec::new();
    let obs: Vec<Observation> = Vec::new();
    assert_eq!(write_csv(&mut buf, &obs).unwrap(), 0);
    assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
}

#[test]
fn test_missing_optional_fields_survive_reload() {
    let record = ScanRecord {
        bssid: Some("cc:dd".into()),
        rssi: Some(-80),
        ..ScanRecord::default()
    };
    let obs = vec![Observation::from_record(&record, PixelPoint::new(3.0, 4.0)).unwrap()];

    let mut buf = Vec::new();
    write_csv(&mut buf, &obs).unwrap();
    let back = read_csv(buf.as_slice()).unwrap();
    assert_eq!(back, obs);
    assert_eq!(back[0].network_name(), "hidden");
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.csv");
    let obs = vec![
        observation(1.0, 2.0, "a1", -40),
        observation(300.25, 120.0, "a2", -72),
    ];
    assert_eq!(save_csv(&path, &obs).unwrap(), 2);
    let loaded = load_csv(&path).unwrap();
    assert_eq!(loaded, obs);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_csv(&dir.path().join("absent.csv")).is_err());
}
