use std::fs;
use std::path::{Path, PathBuf};
use log::{error, info};
use crate::models::{GridSettings, SettingsError};

const SETTINGS_FILE: &str = "grid_settings.json";

pub fn get_settings_file_path() -> PathBuf {
    PathBuf::from(SETTINGS_FILE)
}

/// Reads and validates settings. A missing file yields the defaults.
pub fn try_load_grid_settings(file_path: &Path) -> Result<GridSettings, SettingsError> {
    if !file_path.exists() {
        return Ok(GridSettings::default());
    }

    let content = fs::read_to_string(file_path)?;
    let settings: GridSettings = serde_json::from_str(&content)?;
    settings.validate()?;
    Ok(settings)
}

/// Like [`try_load_grid_settings`], but falls back to defaults on any error.
pub fn load_grid_settings(file_path: &Path) -> GridSettings {
    if !file_path.exists() {
        info!("No settings file at {:?}, using defaults", file_path);
        return GridSettings::default();
    }

    match try_load_grid_settings(file_path) {
        Ok(settings) => {
            info!("Loaded settings: {} slots in {} columns, tick {}s, damage window {}s",
                  settings.slot_count, settings.columns,
                  settings.tick_interval_secs, settings.damage_window_secs);
            settings
        }
        Err(e) => {
            error!("{}. Using defaults.", e);
            GridSettings::default()
        }
    }
}
