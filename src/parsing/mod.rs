pub mod regex;
pub mod line_parser;

pub use line_parser::{CombatLogEvent, SubEventKind, parse_combat_log_line};
