// Module declarations
pub mod models;
pub mod engine;
pub mod parsing;
pub mod provider;
pub mod gui;
pub mod utils;


// Re-exports for convenience
pub use models::{GridSettings, UnitIdentity, UnitRef, UnitSnapshot, GroupMode, VisualDescriptor, BorderStyle};
pub use engine::{RefreshPipeline, GridEvent, SlotRenderer};
pub use parsing::{CombatLogEvent, parse_combat_log_line};
pub use provider::{GameState, SimulatedRaid};
