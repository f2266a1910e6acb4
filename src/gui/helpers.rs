use eframe::egui::Color32;
use crate::models::Rgb;

pub fn to_color32(color: Rgb, alpha: f32) -> Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(channel(color.r), channel(color.g), channel(color.b), channel(alpha))
}

/// Black text on light fills, white on dark ones.
pub fn label_color(fill: Rgb, alpha: f32) -> Color32 {
    let luminance = 0.299 * fill.r + 0.587 * fill.g + 0.114 * fill.b;
    if luminance > 0.6 {
        to_color32(Rgb::BLACK, alpha)
    } else {
        to_color32(Rgb::WHITE, alpha)
    }
}
