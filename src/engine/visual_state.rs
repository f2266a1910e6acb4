use crate::engine::health_scaler::HealthScaler;
use crate::models::{
    class_color, BorderStyle, GridSettings, UnitSnapshot, VisualDescriptor,
    DEAD_COLOR, NEUTRAL_COLOR, OUT_OF_RANGE_COLOR,
};

const LABEL_CHARS: usize = 3;
const OUT_OF_RANGE_ALPHA: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct VisualStateComputer {
    scaler: HealthScaler,
    placeholder_label: String,
}

impl VisualStateComputer {
    pub fn new(scaler: HealthScaler, placeholder_label: impl Into<String>) -> Self {
        Self { scaler, placeholder_label: placeholder_label.into() }
    }

    pub fn from_settings(settings: &GridSettings) -> Self {
        Self::new(
            HealthScaler::new(settings.min_scale, settings.max_scale, settings.scale_exponent),
            settings.placeholder_label.clone(),
        )
    }

    pub fn scaler(&self) -> &HealthScaler {
        &self.scaler
    }

    pub fn hidden(&self) -> VisualDescriptor {
        VisualDescriptor::hidden(self.scaler.min_scale())
    }

    /// Builds the descriptor for one slot. `None` means the slot has no live
    /// unit and is hidden.
    pub fn compute(
        &self,
        snapshot: Option<&UnitSnapshot>,
        damaged_recently: bool,
        targeted: bool,
        range_ok: bool,
    ) -> VisualDescriptor {
        let Some(unit) = snapshot else {
            return self.hidden();
        };

        let label = self.label_for(unit.name.as_deref());

        let (mut fill, scale) = if unit.dead_or_ghost {
            (DEAD_COLOR, self.scaler.min_scale())
        } else {
            let fill = unit.class.as_deref()
                .filter(|_| unit.is_player)
                .and_then(class_color)
                .unwrap_or(NEUTRAL_COLOR);
            let fraction = HealthScaler::health_fraction(unit.health, unit.max_health);
            (fill, self.scaler.scale(fraction))
        };

        let in_range = range_ok || unit.is_local_player;
        let alpha = if in_range {
            1.0
        } else {
            fill = OUT_OF_RANGE_COLOR;
            OUT_OF_RANGE_ALPHA
        };

        // Damage outranks targeting: it is the shorter-lived signal.
        let border = if damaged_recently && in_range {
            BorderStyle::Damaged
        } else if targeted {
            BorderStyle::Targeted
        } else {
            BorderStyle::Thin
        };

        VisualDescriptor { scale, fill, border, alpha, label, visible: true }
    }

    fn label_for(&self, name: Option<&str>) -> String {
        match name.map(str::trim) {
            Some(name) if !name.is_empty() => name.chars().take(LABEL_CHARS).collect(),
            _ => self.placeholder_label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Rgb, UnitIdentity};

    fn computer() -> VisualStateComputer {
        VisualStateComputer::from_settings(&GridSettings::default())
    }

    fn priest(health: f64) -> UnitSnapshot {
        UnitSnapshot {
            identity: UnitIdentity::new("Player-1-0001"),
            name: Some("Anduin".to_string()),
            health,
            max_health: 100.0,
            dead_or_ghost: false,
            is_player: true,
            class: Some("PRIEST".to_string()),
            in_range: true,
            is_target: false,
            is_local_player: false,
        }
    }

    #[test]
    fn live_unit_uses_class_color_and_curve() {
        let unit = priest(50.0);
        let d = computer().compute(Some(&unit), false, false, true);
        assert!(d.visible);
        assert_eq!(d.label, "And");
        assert_eq!(d.fill, class_color("PRIEST").unwrap());
        assert_eq!(d.scale, computer().scaler().scale(0.5));
        assert_eq!(d.alpha, 1.0);
        assert_eq!(d.border, BorderStyle::Thin);
    }

    #[test]
    fn missing_snapshot_is_hidden() {
        assert!(!computer().compute(None, true, true, true).visible);
    }

    #[test]
    fn dead_unit_is_black_and_minimal() {
        let mut unit = priest(100.0);
        unit.dead_or_ghost = true;
        let d = computer().compute(Some(&unit), false, false, true);
        assert_eq!(d.fill, DEAD_COLOR);
        assert_eq!(d.scale, GridSettings::default().min_scale);
    }

    #[test]
    fn non_player_or_unknown_class_is_neutral() {
        let mut unit = priest(100.0);
        unit.is_player = false;
        assert_eq!(computer().compute(Some(&unit), false, false, true).fill, NEUTRAL_COLOR);

        let mut unit = priest(100.0);
        unit.class = Some("BARD".to_string());
        assert_eq!(computer().compute(Some(&unit), false, false, true).fill, NEUTRAL_COLOR);
    }

    #[test]
    fn out_of_range_is_grey_and_faded() {
        let unit = priest(30.0);
        let d = computer().compute(Some(&unit), true, true, false);
        assert_eq!(d.fill, OUT_OF_RANGE_COLOR);
        assert_eq!(d.alpha, 0.5);
        // damage border needs range, so the target border shows
        assert_eq!(d.border, BorderStyle::Targeted);
    }

    #[test]
    fn local_player_is_always_in_range() {
        let mut unit = priest(80.0);
        unit.is_local_player = true;
        let d = computer().compute(Some(&unit), false, false, false);
        assert_eq!(d.alpha, 1.0);
        assert_ne!(d.fill, OUT_OF_RANGE_COLOR);
    }

    #[test]
    fn damage_border_beats_target_border() {
        let unit = priest(90.0);
        let d = computer().compute(Some(&unit), true, true, true);
        assert_eq!(d.border, BorderStyle::Damaged);
        assert_eq!(d.border.color(), Some(Rgb::RED));

        let d = computer().compute(Some(&unit), false, true, true);
        assert_eq!(d.border, BorderStyle::Targeted);
    }

    #[test]
    fn short_and_missing_names() {
        let mut unit = priest(100.0);
        unit.name = Some("Bo".to_string());
        assert_eq!(computer().compute(Some(&unit), false, false, true).label, "Bo");
        unit.name = Some("Ærøskøbing".to_string());
        assert_eq!(computer().compute(Some(&unit), false, false, true).label, "Ærø");
        unit.name = None;
        assert_eq!(computer().compute(Some(&unit), false, false, true).label, "?");
    }

    #[test]
    fn zero_max_health_is_treated_as_empty() {
        let mut unit = priest(50.0);
        unit.max_health = 0.0;
        let d = computer().compute(Some(&unit), false, false, true);
        assert_eq!(d.scale, GridSettings::default().min_scale);
    }
}
