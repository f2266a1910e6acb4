use crate::models::visual::Rgb;

pub fn class_color(class_token: &str) -> Option<Rgb> {
    let color = match class_token.to_ascii_uppercase().as_str() {
        "WARRIOR" => Rgb::new(0.78, 0.61, 0.43),
        "PALADIN" => Rgb::new(0.96, 0.55, 0.73),
        "HUNTER" => Rgb::new(0.67, 0.83, 0.45),
        "ROGUE" => Rgb::new(1.0, 0.96, 0.41),
        "PRIEST" => Rgb::new(1.0, 1.0, 1.0),
        "DEATHKNIGHT" => Rgb::new(0.77, 0.12, 0.23),
        "SHAMAN" => Rgb::new(0.0, 0.44, 0.87),
        "MAGE" => Rgb::new(0.25, 0.78, 0.92),
        "WARLOCK" => Rgb::new(0.53, 0.53, 0.93),
        "MONK" => Rgb::new(0.0, 1.0, 0.60),
        "DRUID" => Rgb::new(1.0, 0.49, 0.04),
        "DEMONHUNTER" => Rgb::new(0.64, 0.19, 0.79),
        "EVOKER" => Rgb::new(0.20, 0.58, 0.50),
        _ => return None,
    };
    Some(color)
}

/// Class tokens known to [`class_color`], in table order.
pub const CLASS_TOKENS: [&str; 13] = [
    "WARRIOR", "PALADIN", "HUNTER", "ROGUE", "PRIEST", "DEATHKNIGHT", "SHAMAN",
    "MAGE", "WARLOCK", "MONK", "DRUID", "DEMONHUNTER", "EVOKER",
];
