pub mod unit;
pub mod visual;
pub mod class_colors;
pub mod layout;
pub mod settings;

pub use unit::{UnitIdentity, UnitRef, GroupMode, UnitSnapshot};
pub use visual::{Rgb, BorderStyle, VisualDescriptor, DEAD_COLOR, OUT_OF_RANGE_COLOR, NEUTRAL_COLOR};
pub use class_colors::class_color;
pub use layout::GridLayout;
pub use settings::{GridSettings, SettingsError};
