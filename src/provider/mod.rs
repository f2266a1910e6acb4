pub mod simulated;

pub use simulated::SimulatedRaid;

use crate::models::{GroupMode, UnitRef, UnitSnapshot};

/// Read-only view of the host game state.
pub trait GameState {
    /// Monotonic clock, in seconds.
    fn now(&self) -> f64;
    fn group_mode(&self) -> GroupMode;
    /// Members in the current group, the local player included.
    fn group_size(&self) -> usize;
    /// While true, slot reassignment is forbidden.
    fn in_combat_lockdown(&self) -> bool;
    fn unit_exists(&self, unit: &UnitRef) -> bool;
    fn snapshot(&self, unit: &UnitRef) -> Option<UnitSnapshot>;
}
