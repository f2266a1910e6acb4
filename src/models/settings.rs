use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::models::layout::GridLayout;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid setting: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Number of display slots (1-80)
    pub slot_count: usize,
    /// Grid columns; rows are derived
    pub columns: usize,
    /// Square side length at full scale, in points
    pub base_size: f32,
    /// Gap between cells, in points
    pub spacing: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// How long a damage event keeps the damaged border, in seconds
    pub damage_window_secs: f64,
    /// Periodic refresh interval, in seconds
    pub tick_interval_secs: f64,
    /// Health curve exponent, strictly between 0 and 1
    pub scale_exponent: f64,
    /// Label shown when a unit has no name
    pub placeholder_label: String,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            slot_count: 40,
            columns: 8,
            base_size: 24.0,
            spacing: 2.0,
            min_scale: 0.25,
            max_scale: 1.0,
            damage_window_secs: 3.0,
            tick_interval_secs: 0.25,
            scale_exponent: 0.3,
            placeholder_label: "?".to_string(),
        }
    }
}

impl GridSettings {
    /// Clamps slot count to valid range (1-80)
    pub fn set_slot_count(&mut self, count: usize) {
        self.slot_count = count.clamp(1, 80);
    }

    /// Clamps columns to valid range (1-40)
    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.clamp(1, 40);
    }

    /// Clamps the exponent into the open interval (0, 1)
    pub fn set_scale_exponent(&mut self, exponent: f64) {
        self.scale_exponent = exponent.clamp(0.01, 0.99);
    }

    pub fn layout(&self) -> GridLayout {
        GridLayout::new(self.slot_count, self.columns, self.base_size, self.spacing)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.slot_count == 0 {
            return Err(SettingsError::Invalid("slot_count must be at least 1".into()));
        }
        if self.columns == 0 {
            return Err(SettingsError::Invalid("columns must be at least 1".into()));
        }
        if !(self.scale_exponent > 0.0 && self.scale_exponent < 1.0) {
            return Err(SettingsError::Invalid(format!(
                "scale_exponent must be in (0, 1), got {}", self.scale_exponent
            )));
        }
        if !(self.min_scale >= 0.0 && self.min_scale <= self.max_scale) {
            return Err(SettingsError::Invalid(format!(
                "min_scale {} must be non-negative and not above max_scale {}",
                self.min_scale, self.max_scale
            )));
        }
        if !(self.tick_interval_secs > 0.0) {
            return Err(SettingsError::Invalid("tick_interval_secs must be positive".into()));
        }
        if !(self.damage_window_secs >= 0.0) {
            return Err(SettingsError::Invalid("damage_window_secs must not be negative".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = GridSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.slot_count, 40);
        assert_eq!(settings.columns, 8);
        assert_eq!(settings.layout().rows, 5);
    }

    #[test]
    fn rejects_convex_exponent() {
        let mut settings = GridSettings::default();
        settings.scale_exponent = 1.5;
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));
        settings.set_scale_exponent(1.5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_scale_bounds() {
        let mut settings = GridSettings::default();
        settings.min_scale = 2.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn setters_clamp_counts() {
        let mut settings = GridSettings::default();
        settings.set_slot_count(0);
        settings.set_columns(0);
        assert_eq!(settings.slot_count, 1);
        assert_eq!(settings.columns, 1);
        assert!(settings.validate().is_ok());

        settings.set_slot_count(200);
        settings.set_columns(100);
        assert_eq!(settings.slot_count, 80);
        assert_eq!(settings.columns, 40);
        assert_eq!(settings.layout().rows, 2);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings: GridSettings = serde_json::from_str(r#"{ "slot_count": 25, "columns": 5 }"#).unwrap();
        assert_eq!(settings.slot_count, 25);
        assert_eq!(settings.tick_interval_secs, 0.25);
        assert_eq!(settings.layout().rows, 5);
    }
}
