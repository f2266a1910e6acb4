use eframe::egui;
use crate::gui::frame::GridFrame;
use crate::gui::helpers::{label_color, to_color32};
use crate::models::GridLayout;

/// Paints every visible slot centered in its cell. The returned response
/// covers the whole grid area.
pub fn draw_grid(ui: &mut egui::Ui, frame: &GridFrame, layout: &GridLayout) -> egui::Response {
    let (width, height) = layout.total_size();
    let (rect, response) = ui.allocate_exact_size(egui::Vec2::new(width, height), egui::Sense::click_and_drag());
    let painter = ui.painter_at(rect);
    let pitch = layout.pitch();

    for (i, descriptor) in frame.descriptors().iter().enumerate() {
        if !descriptor.visible {
            continue;
        }

        let (x, y) = layout.cell_origin(i + 1);
        let center = rect.min + egui::Vec2::new(x + pitch / 2.0, y + pitch / 2.0);
        let side = layout.base_size * descriptor.scale;
        let square = egui::Rect::from_center_size(center, egui::Vec2::splat(side));

        painter.rect_filled(square, 0.0, to_color32(descriptor.fill, descriptor.alpha));

        if let Some(color) = descriptor.border.color() {
            painter.rect_stroke(
                square,
                0.0,
                egui::Stroke::new(descriptor.border.width(), to_color32(color, descriptor.alpha)),
                egui::StrokeKind::Outside,
            );
        }

        let font_size = (layout.base_size * 0.4).clamp(7.0, 12.0);
        painter.text(center, egui::Align2::CENTER_CENTER, &descriptor.label,
            egui::FontId::proportional(font_size), label_color(descriptor.fill, descriptor.alpha));
    }

    if frame.drag_enabled() {
        // Outline marks the grid as movable while the modifier is held.
        painter.rect_stroke(rect, 2.0, egui::Stroke::new(1.0, egui::Color32::GRAY), egui::StrokeKind::Inside);
    }

    response
}
