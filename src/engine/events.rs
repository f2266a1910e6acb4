use crate::models::VisualDescriptor;
use crate::parsing::CombatLogEvent;

/// Everything that can drive a refresh, processed strictly in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    GroupRosterChanged,
    EnteredWorld,
    TargetChanged,
    CombatLog(CombatLogEvent),
    /// Frame delta in seconds; accumulated until the tick interval passes.
    Tick { elapsed: f64 },
    ModifierStateChanged { pressed: bool },
}

/// The rendering side. Receives descriptors by value and never reads engine state.
pub trait SlotRenderer {
    fn apply(&mut self, slot_index: usize, descriptor: VisualDescriptor);
    fn set_drag_enabled(&mut self, enabled: bool);
}
