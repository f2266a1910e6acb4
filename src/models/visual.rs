#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
}

/// Fill used for dead or ghost units.
pub const DEAD_COLOR: Rgb = Rgb::BLACK;
/// Fill used for units outside of range.
pub const OUT_OF_RANGE_COLOR: Rgb = Rgb::new(0.5, 0.5, 0.5);
/// Fill for units without a resolvable class.
pub const NEUTRAL_COLOR: Rgb = Rgb::new(0.0, 0.8, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    None,
    Thin,
    Damaged,
    Targeted,
}

impl BorderStyle {
    /// Stroke color, `None` when the border is transparent.
    pub fn color(&self) -> Option<Rgb> {
        match self {
            BorderStyle::None | BorderStyle::Thin => None,
            BorderStyle::Damaged => Some(Rgb::RED),
            BorderStyle::Targeted => Some(Rgb::WHITE),
        }
    }

    pub fn width(&self) -> f32 {
        match self {
            BorderStyle::None => 0.0,
            BorderStyle::Thin | BorderStyle::Damaged => 1.0,
            BorderStyle::Targeted => 2.0,
        }
    }
}

/// Everything the renderer needs to draw one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualDescriptor {
    pub scale: f32,
    pub fill: Rgb,
    pub border: BorderStyle,
    pub alpha: f32,
    pub label: String,
    pub visible: bool,
}

impl VisualDescriptor {
    /// Descriptor for an empty slot; only `visible` is meaningful.
    pub fn hidden(min_scale: f32) -> Self {
        Self {
            scale: min_scale,
            fill: Rgb::BLACK,
            border: BorderStyle::None,
            alpha: 0.0,
            label: String::new(),
            visible: false,
        }
    }
}
