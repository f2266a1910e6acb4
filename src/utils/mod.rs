pub mod settings_loader;

pub use settings_loader::{get_settings_file_path, load_grid_settings, try_load_grid_settings};
