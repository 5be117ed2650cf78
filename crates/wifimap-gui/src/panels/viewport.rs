use wifimap_core::consts::LEGEND_TICK_STEP;
use wifimap_core::observation::PixelPoint;
use wifimap_core::session::{Mode, SessionEvent};

use crate::app::WifiMapApp;

const MIN_ZOOM: f32 = 0.1;
const MAX_ZOOM: f32 = 20.0;

/// Screen-space radius within which a press grabs a calibration marker.
const MARKER_GRAB_RADIUS: f32 = 10.0;
const MARKER_RADIUS: f32 = 5.0;

const CALIBRATION_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 40, 40);
const LOCATION_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 120, 255);

const LEGEND_WIDTH: f32 = 18.0;
const LEGEND_MARGIN: f32 = 12.0;

pub fn show(ctx: &egui::Context, app: &mut WifiMapApp) {
    let mut events = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let Some(texture_id) = app.textures.plan.as_ref().map(|t| t.id()) else {
            show_placeholder(ui);
            return;
        };
        let Some(plan) = app.session.plan() else {
            show_placeholder(ui);
            return;
        };
        let image_size = egui::vec2(plan.width() as f32, plan.height() as f32);

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        if app.viewport.fit_pending || response.double_clicked() {
            fit_to_rect(
                &mut app.viewport.zoom,
                &mut app.viewport.pan_offset,
                image_size,
                rect,
            );
            app.viewport.fit_pending = false;
        }

        handle_zoom(ui, &response, app, rect);
        handle_pan(ui, &response, app);

        let img_rect = compute_img_rect(rect, image_size, app);
        handle_markers(ui, &response, app, img_rect, image_size, &mut events);
        handle_click(ui, &response, app, img_rect, image_size, &mut events);

        draw_image(ui, texture_id, img_rect, egui::Color32::WHITE);
        for (_, texture) in app
            .session
            .overlays()
            .iter()
            .filter_map(|o| app.textures.overlays.get(&o.label))
        {
            draw_image(ui, texture.id(), img_rect, egui::Color32::WHITE);
        }

        draw_location_markers(ui, app, img_rect, image_size);
        draw_calibration_markers(ui, app, img_rect, image_size);
        draw_legend(ui, app, rect);
    });

    for event in events {
        app.dispatch(event);
    }
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut WifiMapApp, rect: egui::Rect) {
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll_delta == 0.0 || !response.hovered() {
        return;
    }

    let zoom_factor = (scroll_delta * 0.005).exp();
    let new_zoom = (app.viewport.zoom * zoom_factor).clamp(MIN_ZOOM, MAX_ZOOM);

    // Zoom toward mouse cursor
    if let Some(mouse_pos) = ui.input(|i| i.pointer.hover_pos()) {
        let center = rect.center().to_vec2() + app.viewport.pan_offset;
        let mouse_rel = mouse_pos.to_vec2() - center;
        let scale_change = new_zoom / app.viewport.zoom;
        app.viewport.pan_offset += mouse_rel * (1.0 - scale_change);
    }

    app.viewport.zoom = new_zoom;
}

fn handle_pan(ui: &egui::Ui, response: &egui::Response, app: &mut WifiMapApp) {
    if response.dragged_by(egui::PointerButton::Middle)
        || (response.dragged_by(egui::PointerButton::Primary) && ui.input(|i| i.modifiers.command))
    {
        app.viewport.pan_offset += response.drag_delta();
    }
}

/// Grab and drag calibration markers.
fn handle_markers(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut WifiMapApp,
    img_rect: egui::Rect,
    image_size: egui::Vec2,
    events: &mut Vec<SessionEvent>,
) {
    if app.session.mode() != Mode::Calibrating || ui.input(|i| i.modifiers.command) {
        app.viewport.dragging_marker = None;
        return;
    }
    let Some(cal) = app.session.calibrator() else {
        return;
    };

    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            app.viewport.dragging_marker = cal.markers().iter().position(|m| {
                image_to_screen(*m, img_rect, image_size).distance(pos) <= MARKER_GRAB_RADIUS
            });
        }
    }

    if let Some(index) = app.viewport.dragging_marker {
        if response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pos) = ui.input(|i| i.pointer.hover_pos()) {
                let p = screen_to_image(pos, img_rect, image_size);
                let to = PixelPoint::new(
                    p.x.clamp(0.0, image_size.x - 1.0) as f64,
                    p.y.clamp(0.0, image_size.y - 1.0) as f64,
                );
                events.push(SessionEvent::MoveCalibrationMarker { index, to });
            }
        }
        if response.drag_stopped_by(egui::PointerButton::Primary) {
            app.viewport.dragging_marker = None;
        }
    }
}

/// Primary click on the plan: calibration marker or scan location.
fn handle_click(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &WifiMapApp,
    img_rect: egui::Rect,
    image_size: egui::Vec2,
    events: &mut Vec<SessionEvent>,
) {
    if !response.clicked_by(egui::PointerButton::Primary)
        || ui.input(|i| i.modifiers.command)
        || app.viewport.dragging_marker.is_some()
    {
        return;
    }
    if let Some(pos) = response.interact_pointer_pos() {
        let p = screen_to_image(pos, img_rect, image_size);
        events.push(SessionEvent::Click(PixelPoint::new(p.x as f64, p.y as f64)));
    }
}

/// Convert screen coordinates to image pixel coordinates.
fn screen_to_image(pos: egui::Pos2, img_rect: egui::Rect, image_size: egui::Vec2) -> egui::Pos2 {
    egui::pos2(
        (pos.x - img_rect.left()) / img_rect.width() * image_size.x,
        (pos.y - img_rect.top()) / img_rect.height() * image_size.y,
    )
}

/// Convert image pixel coordinates to screen coordinates.
fn image_to_screen(p: PixelPoint, img_rect: egui::Rect, image_size: egui::Vec2) -> egui::Pos2 {
    egui::pos2(
        p.x as f32 / image_size.x * img_rect.width() + img_rect.left(),
        p.y as f32 / image_size.y * img_rect.height() + img_rect.top(),
    )
}

fn compute_img_rect(rect: egui::Rect, image_size: egui::Vec2, app: &WifiMapApp) -> egui::Rect {
    let scaled = image_size * app.viewport.zoom;
    let center = rect.center() + app.viewport.pan_offset;
    egui::Rect::from_center_size(center, scaled)
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect, tint: egui::Color32) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        tint,
    );
}

fn draw_location_markers(ui: &egui::Ui, app: &WifiMapApp, img_rect: egui::Rect, image_size: egui::Vec2) {
    let painter = ui.painter();
    for marker in app.session.location_markers() {
        let center = image_to_screen(*marker, img_rect, image_size);
        painter.circle_filled(center, MARKER_RADIUS, LOCATION_COLOR);
        painter.circle_stroke(center, MARKER_RADIUS, egui::Stroke::new(1.0, egui::Color32::WHITE));
    }
}

fn draw_calibration_markers(ui: &egui::Ui, app: &WifiMapApp, img_rect: egui::Rect, image_size: egui::Vec2) {
    if app.session.mode() != Mode::Calibrating {
        return;
    }
    let Some(cal) = app.session.calibrator() else {
        return;
    };
    let points: Vec<egui::Pos2> = cal
        .markers()
        .iter()
        .map(|m| image_to_screen(*m, img_rect, image_size))
        .collect();

    let painter = ui.painter();
    if let [a, b] = points.as_slice() {
        painter.line_segment([*a, *b], egui::Stroke::new(2.0, CALIBRATION_COLOR));
        painter.text(
            a.lerp(*b, 0.5) + egui::vec2(0.0, -10.0),
            egui::Align2::CENTER_BOTTOM,
            format!("{:.1} px", cal.pixel_length),
            egui::FontId::proportional(13.0),
            egui::Color32::WHITE,
        );
    }
    for p in &points {
        painter.circle_filled(*p, MARKER_RADIUS, CALIBRATION_COLOR);
        painter.circle_stroke(*p, MARKER_RADIUS + 2.0, egui::Stroke::new(1.0, egui::Color32::WHITE));
    }
}

/// Vertical color bar with dBm ticks along the right edge of the viewport.
fn draw_legend(ui: &egui::Ui, app: &WifiMapApp, rect: egui::Rect) {
    let (Some(legend), Some(texture)) = (app.session.overlays().legend(), app.textures.legend.as_ref())
    else {
        return;
    };

    let height = (rect.height() * 0.6).max(120.0);
    let bar = egui::Rect::from_min_size(
        egui::pos2(
            rect.right() - LEGEND_MARGIN - LEGEND_WIDTH - 44.0,
            rect.center().y - height / 2.0,
        ),
        egui::vec2(LEGEND_WIDTH, height),
    );

    let backdrop = egui::Rect::from_min_max(
        bar.left_top() - egui::vec2(6.0, 22.0),
        bar.right_bottom() + egui::vec2(44.0, 8.0),
    );
    let painter = ui.painter();
    painter.rect_filled(backdrop, 4.0, egui::Color32::from_black_alpha(140));
    draw_image(ui, texture.id(), bar, egui::Color32::WHITE);
    painter.rect_stroke(bar, 0.0, egui::Stroke::new(1.0, egui::Color32::WHITE), egui::StrokeKind::Outside);

    for value in legend.ticks(LEGEND_TICK_STEP) {
        let y = bar.top() + legend.position_of(value) as f32 * bar.height();
        painter.line_segment(
            [egui::pos2(bar.right(), y), egui::pos2(bar.right() + 4.0, y)],
            egui::Stroke::new(1.0, egui::Color32::WHITE),
        );
        painter.text(
            egui::pos2(bar.right() + 6.0, y),
            egui::Align2::LEFT_CENTER,
            format!("{value:.0}"),
            egui::FontId::proportional(12.0),
            egui::Color32::WHITE,
        );
    }
    painter.text(
        egui::pos2(bar.center().x, bar.top() - 6.0),
        egui::Align2::CENTER_BOTTOM,
        "dBm",
        egui::FontId::proportional(12.0),
        egui::Color32::WHITE,
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open a floor plan to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

fn fit_to_rect(zoom: &mut f32, pan: &mut egui::Vec2, image_size: egui::Vec2, rect: egui::Rect) {
    let available = rect.size();
    let fit_x = available.x / image_size.x;
    let fit_y = available.y / image_size.y;
    *zoom = fit_x.min(fit_y).clamp(MIN_ZOOM, MAX_ZOOM);
    *pan = egui::Vec2::ZERO;
}
