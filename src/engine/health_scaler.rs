/// Maps a health fraction onto a render scale with a concave curve:
/// `min + (max - min) * (1 - (1 - f)^e)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthScaler {
    min_scale: f32,
    max_scale: f32,
    exponent: f64,
}

impl HealthScaler {
    /// Bounds are put in order and NaN bounds fall back to 0 and 1, so
    /// `scale` always has a valid range to clamp into.
    pub fn new(min_scale: f32, max_scale: f32, exponent: f64) -> Self {
        let min_scale = if min_scale.is_nan() { 0.0 } else { min_scale };
        let max_scale = if max_scale.is_nan() { 1.0 } else { max_scale };
        Self {
            min_scale: min_scale.min(max_scale),
            max_scale: min_scale.max(max_scale),
            exponent,
        }
    }

    pub fn min_scale(&self) -> f32 {
        self.min_scale
    }

    pub fn max_scale(&self) -> f32 {
        self.max_scale
    }

    pub fn scale(&self, fraction: f64) -> f32 {
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        let curve = 1.0 - (1.0 - fraction).powf(self.exponent);
        let scale = self.min_scale as f64 + (self.max_scale - self.min_scale) as f64 * curve;
        (scale as f32).clamp(self.min_scale, self.max_scale)
    }

    /// Health fraction in [0, 1]; a non-positive max counts as empty.
    pub fn health_fraction(health: f64, max_health: f64) -> f64 {
        if !(max_health > 0.0) {
            return 0.0;
        }
        let fraction = health / max_health;
        if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) }
    }
}
