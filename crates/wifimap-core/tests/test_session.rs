mod common;

use approx::assert_relative_eq;

use common::{calibrated_session, capture_at, record};
use wifimap_core::config::{CapturePolicy, WifiMapConfig};
use wifimap_core::consts::{LEGEND_BAR_WIDTH, LEGEND_MARGIN, OUT_OF_BOUNDS_STATUS};
use wifimap_core::floorplan::FloorPlan;
use wifimap_core::observation::PixelPoint;
use wifimap_core::session::{Mode, Session, SessionEffect, SessionEvent};

const LABEL: &str = "A 2.4 GHz";

fn toggle(session: &mut Session, enabled: bool) {
    session.dispatch(SessionEvent::ToggleNetwork {
        label: LABEL.to_string(),
        enabled,
    });
}

fn capturing_session() -> Session {
    let mut session = calibrated_session(WifiMapConfig::default(), 1000, 800, 5.0);
    session.dispatch(SessionEvent::StartCapture);
    session
}

#[test]
fn test_end_to_end_survey() {
    let mut session = Session::new(WifiMapConfig::default());
    assert_eq!(session.mode(), Mode::Empty);

    session.dispatch(SessionEvent::LoadImage(FloorPlan::blank(1000, 800).unwrap()));
    assert_eq!(session.mode(), Mode::Calibrating);
    session.dispatch(SessionEvent::Click(PixelPoint::new(0.0, 0.0)));
    session.dispatch(SessionEvent::Click(PixelPoint::new(100.0, 0.0)));
    assert_relative_eq!(session.calibrator().unwrap().pixel_length, 100.0);
    session.dispatch(SessionEvent::SetRealLength(5.0));
    session.dispatch(SessionEvent::ConfirmCalibration);
    assert_eq!(session.mode(), Mode::Idle);
    assert_relative_eq!(session.scale().unwrap().meters_per_pixel(), 0.05);

    let effects = session.dispatch(SessionEvent::StartCapture);
    assert_eq!(effects, [SessionEffect::StartTimer, SessionEffect::LaunchScan]);
    assert_eq!(session.mode(), Mode::Capturing);
    assert!(session.banner().unwrap().starts_with("Click on your current location"));

    let points = [
        (100.0, 100.0),
        (800.0, 120.0),
        (500.0, 400.0),
        (150.0, 700.0),
        (900.0, 750.0),
    ];
    let rssi = [-40, -55, -60, -70, -50];
    for (&(x, y), &r) in points.iter().zip(rssi.iter()) {
        capture_at(
            &mut session,
            PixelPoint::new(x, y),
            vec![record("aa:bb:cc:dd:ee:01", "A", 2.412, r)],
        );
    }
    assert_eq!(session.store().len(), 5);
    assert_eq!(session.location_markers().len(), 5);
    assert_eq!(session.networks().labels().collect::<Vec<_>>(), [LABEL]);

    let effects = session.dispatch(SessionEvent::StopCapture);
    assert_eq!(effects, [SessionEffect::StopTimer, SessionEffect::CancelScan]);
    assert_eq!(session.mode(), Mode::Stopped);
    assert_eq!(session.store().len(), 5);

    toggle(&mut session, true);
    let overlay = session.overlays().get(LABEL).expect("overlay shown");
    assert_eq!(overlay.image.dimensions(), (200, 200));
    assert_eq!((overlay.image_width, overlay.image_height), (1000, 800));
    assert_eq!(overlay.sample_count, 5);
    assert!(session.overlays().legend().is_some());
    assert!(session.banner().is_none());
    assert!(session.location_markers().is_empty());

    toggle(&mut session, false);
    assert!(session.overlays().is_empty());
    assert!(session.overlays().legend().is_some());
    assert!(!session.networks().any_checked());
}

#[test]
fn test_toggle_again_replaces_overlay() {
    let mut session = capturing_session();
    for (i, r) in [-40, -60, -80].into_iter().enumerate() {
        let p = PixelPoint::new(100.0 + 200.0 * i as f64, 300.0);
        capture_at(&mut session, p, vec![record("a1", "A", 2.412, r)]);
    }
    toggle(&mut session, true);
    toggle(&mut session, true);
    assert_eq!(session.overlays().len(), 1);
    assert_eq!(session.overlays().get(LABEL).unwrap().revision, 2);
}

#[test]
fn test_insufficient_data_sets_banner() {
    let mut session = capturing_session();
    capture_at(&mut session, PixelPoint::new(10.0, 10.0), vec![record("a1", "A", 2.412, -50)]);
    capture_at(&mut session, PixelPoint::new(20.0, 10.0), vec![record("a1", "A", 2.412, -60)]);
    toggle(&mut session, true);
    assert!(session.overlays().is_empty());
    assert_eq!(
        session.banner(),
        Some("Not enough data to create heatmap for A 2.4 GHz network")
    );
    // Unchecking clears the banner.
    toggle(&mut session, false);
    assert!(session.banner().is_none());
}

#[test]
fn test_unknown_toggle_ignored() {
    let mut session = capturing_session();
    session.dispatch(SessionEvent::ToggleNetwork {
        label: "Ghost 5 GHz".into(),
        enabled: true,
    });
    assert!(session.overlays().is_empty());
    assert!(session.networks().is_empty());
}

#[test]
fn test_timer_does_not_overlap_scans() {
    let mut session = capturing_session();
    assert!(session.scan_in_flight());
    assert!(session.dispatch(SessionEvent::TimerTick).is_empty());

    session.dispatch(SessionEvent::ScanFinished(Vec::new()));
    assert!(!session.scan_in_flight());
    assert_eq!(
        session.dispatch(SessionEvent::TimerTick),
        [SessionEffect::LaunchScan]
    );
    assert!(session.dispatch(SessionEvent::TimerTick).is_empty());
}

#[test]
fn test_stop_discards_late_scan() {
    let mut session = capturing_session();
    capture_at(&mut session, PixelPoint::new(10.0, 10.0), vec![record("a1", "A", 2.412, -50)]);
    session.dispatch(SessionEvent::TimerTick);
    session.dispatch(SessionEvent::StopCapture);
    assert!(!session.scan_in_flight());

    session.dispatch(SessionEvent::ScanFinished(vec![record("a1", "A", 2.412, -90)]));
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.store().as_slice()[0].rssi, -50);
    assert!(session.dispatch(SessionEvent::TimerTick).is_empty());
}

#[test]
fn test_empty_scan_changes_nothing() {
    let mut session = capturing_session();
    capture_at(&mut session, PixelPoint::new(10.0, 10.0), vec![record("a1", "A", 2.412, -50)]);
    session.dispatch(SessionEvent::ScanFinished(Vec::new()));
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.networks().len(), 1);
    assert!(session.latest_scan().is_empty());
}

#[test]
fn test_records_without_rssi_are_not_stored() {
    let mut session = capturing_session();
    let mut partial = record("b1", "B", 5.2, -70);
    partial.rssi = None;
    capture_at(
        &mut session,
        PixelPoint::new(10.0, 10.0),
        vec![record("a1", "A", 2.412, -50), partial],
    );
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.networks().len(), 2);
}

#[test]
fn test_out_of_bounds_click_during_capture() {
    let mut session = capturing_session();
    session.dispatch(SessionEvent::Click(PixelPoint::new(1000.0, 10.0)));
    assert_eq!(session.scan_location(), None);
    assert_eq!(session.take_status().as_deref(), Some(OUT_OF_BOUNDS_STATUS));
    session.dispatch(SessionEvent::Click(PixelPoint::new(-1.0, 10.0)));
    assert_eq!(session.scan_location(), None);
}

#[test]
fn test_out_of_bounds_click_during_calibration() {
    let mut session = Session::new(WifiMapConfig::default());
    session.dispatch(SessionEvent::LoadImage(FloorPlan::blank(100, 100).unwrap()));
    session.dispatch(SessionEvent::Click(PixelPoint::new(50.0, 150.0)));
    assert!(session.calibrator().unwrap().markers().is_empty());
    assert_eq!(session.status(), Some(OUT_OF_BOUNDS_STATUS));
}

#[test]
fn test_on_click_policy_records_latest_scan_at_click() {
    let mut config = WifiMapConfig::default();
    config.capture.policy = CapturePolicy::OnClick;
    let mut session = calibrated_session(config, 500, 500, 5.0);
    session.dispatch(SessionEvent::StartCapture);

    // Clicking before any scan has nothing to record.
    session.dispatch(SessionEvent::Click(PixelPoint::new(10.0, 10.0)));
    assert!(session.store().is_empty());

    session.dispatch(SessionEvent::ScanFinished(vec![record("a1", "A", 2.412, -50)]));
    assert!(session.store().is_empty());

    session.dispatch(SessionEvent::Click(PixelPoint::new(200.0, 300.0)));
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.store().as_slice()[0].position, PixelPoint::new(200.0, 300.0));
}

#[test]
fn test_on_scan_policy_records_every_batch_at_location() {
    let mut session = capturing_session();
    session.dispatch(SessionEvent::ScanFinished(vec![record("a1", "A", 2.412, -50)]));
    assert!(session.store().is_empty());

    session.dispatch(SessionEvent::Click(PixelPoint::new(40.0, 40.0)));
    session.dispatch(SessionEvent::ScanFinished(vec![record("a1", "A", 2.412, -52)]));
    session.dispatch(SessionEvent::ScanFinished(vec![record("a1", "A", 2.412, -54)]));
    assert_eq!(session.store().len(), 2);
}

#[test]
fn test_capture_requires_calibration() {
    let mut session = Session::new(WifiMapConfig::default());
    assert!(session.dispatch(SessionEvent::StartCapture).is_empty());

    session.dispatch(SessionEvent::LoadImage(FloorPlan::blank(100, 100).unwrap()));
    session.dispatch(SessionEvent::CancelCalibration);
    assert_eq!(session.mode(), Mode::Idle);
    assert!(session.scale().is_none());
    assert!(!session.actions().capture);
    assert!(session.dispatch(SessionEvent::StartCapture).is_empty());
    assert_eq!(session.mode(), Mode::Idle);
}

#[test]
fn test_failed_confirm_stays_calibrating() {
    let mut session = Session::new(WifiMapConfig::default());
    session.dispatch(SessionEvent::LoadImage(FloorPlan::blank(100, 100).unwrap()));
    session.dispatch(SessionEvent::Click(PixelPoint::new(0.0, 0.0)));
    session.dispatch(SessionEvent::Click(PixelPoint::new(50.0, 0.0)));
    session.dispatch(SessionEvent::ConfirmCalibration);
    assert_eq!(session.mode(), Mode::Calibrating);
    assert!(session.scale().is_none());
    assert_eq!(session.calibrator().unwrap().markers().len(), 2);
}

#[test]
fn test_dragged_marker_updates_pixel_length() {
    let mut session = Session::new(WifiMapConfig::default());
    session.dispatch(SessionEvent::LoadImage(FloorPlan::blank(100, 100).unwrap()));
    session.dispatch(SessionEvent::Click(PixelPoint::new(0.0, 0.0)));
    session.dispatch(SessionEvent::Click(PixelPoint::new(50.0, 0.0)));
    session.dispatch(SessionEvent::MoveCalibrationMarker {
        index: 1,
        to: PixelPoint::new(80.0, 0.0),
    });
    session.dispatch(SessionEvent::SetRealLength(4.0));
    session.dispatch(SessionEvent::ConfirmCalibration);
    assert_relative_eq!(session.scale().unwrap().meters_per_pixel(), 0.05);
}

#[test]
fn test_load_image_during_capture_resets() {
    let mut session = capturing_session();
    capture_at(&mut session, PixelPoint::new(10.0, 10.0), vec![record("a1", "A", 2.412, -50)]);

    let effects = session.dispatch(SessionEvent::LoadImage(FloorPlan::blank(300, 200).unwrap()));
    assert_eq!(effects, [SessionEffect::StopTimer, SessionEffect::CancelScan]);
    assert_eq!(session.mode(), Mode::Calibrating);
    assert!(session.scale().is_none());
    assert!(session.store().is_empty());
    assert!(session.networks().is_empty());
    assert_eq!(session.plan().unwrap().width(), 300);
}

#[test]
fn test_restart_capture_clears_previous_data() {
    let mut session = capturing_session();
    capture_at(&mut session, PixelPoint::new(10.0, 10.0), vec![record("a1", "A", 2.412, -50)]);
    session.dispatch(SessionEvent::StopCapture);
    assert_eq!(session.store().len(), 1);

    session.dispatch(SessionEvent::StartCapture);
    assert!(session.store().is_empty());
    assert!(session.networks().is_empty());
    assert!(session.overlays().legend().is_none());
    assert_eq!(session.scan_location(), None);
}

#[test]
fn test_recalibration_keeps_stopped_data() {
    let mut session = capturing_session();
    capture_at(&mut session, PixelPoint::new(10.0, 10.0), vec![record("a1", "A", 2.412, -50)]);
    session.dispatch(SessionEvent::StopCapture);

    session.dispatch(SessionEvent::BeginCalibration);
    assert_eq!(session.mode(), Mode::Calibrating);
    session.dispatch(SessionEvent::Click(PixelPoint::new(0.0, 0.0)));
    session.dispatch(SessionEvent::Click(PixelPoint::new(200.0, 0.0)));
    session.dispatch(SessionEvent::SetRealLength(5.0));
    session.dispatch(SessionEvent::ConfirmCalibration);
    assert_eq!(session.mode(), Mode::Stopped);
    assert_eq!(session.store().len(), 1);
    assert_relative_eq!(session.scale().unwrap().meters_per_pixel(), 0.025);
}

#[test]
fn test_actions_follow_mode() {
    let mut session = Session::new(WifiMapConfig::default());
    let a = session.actions();
    assert!(a.new_image && !a.calibrate && !a.capture && !a.stop);

    session.dispatch(SessionEvent::LoadImage(FloorPlan::blank(500, 500).unwrap()));
    let a = session.actions();
    assert!(!a.calibrate && !a.capture);

    let mut session = capturing_session();
    let a = session.actions();
    assert!(a.stop && !a.capture && !a.calibrate && !a.export_csv && !a.export_screenshot);

    capture_at(&mut session, PixelPoint::new(10.0, 10.0), vec![record("a1", "A", 2.412, -50)]);
    session.dispatch(SessionEvent::StopCapture);
    let a = session.actions();
    assert!(a.capture && a.calibrate && !a.stop && a.export_csv && a.export_screenshot);
}

#[test]
fn test_screenshot_and_csv_export() {
    let mut session = capturing_session();
    for (i, r) in [-40, -60, -80].into_iter().enumerate() {
        let p = PixelPoint::new(100.0 + 300.0 * i as f64, 400.0);
        capture_at(&mut session, p, vec![record("a1", "A", 2.412, r)]);
    }
    session.dispatch(SessionEvent::StopCapture);
    toggle(&mut session, true);

    let plain = session.screenshot(false).unwrap();
    assert_eq!(plain.dimensions(), (1000, 800));
    let with_legend = session.screenshot(true).unwrap();
    assert_eq!(with_legend.width(), 1000 + LEGEND_BAR_WIDTH + 2 * LEGEND_MARGIN);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.csv");
    assert_eq!(session.export_csv(&path).unwrap(), 3);
}

#[test]
fn test_screenshot_without_plan_fails() {
    let session = Session::new(WifiMapConfig::default());
    assert!(session.screenshot(true).is_err());
}
