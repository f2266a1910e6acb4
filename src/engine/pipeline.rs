use log::debug;
use crate::engine::damage_memory::DamageMemory;
use crate::engine::events::{GridEvent, SlotRenderer};
use crate::engine::slot_assigner::{Slot, SlotAssigner};
use crate::engine::visual_state::VisualStateComputer;
use crate::models::{GridSettings, VisualDescriptor};
use crate::parsing::CombatLogEvent;
use crate::provider::GameState;

pub struct RefreshPipeline {
    assigner: SlotAssigner,
    memory: DamageMemory,
    computer: VisualStateComputer,
    descriptors: Vec<VisualDescriptor>,
    damage_window: f64,
    tick_interval: f64,
    tick_accumulator: f64,
}

impl RefreshPipeline {
    pub fn new(settings: &GridSettings) -> Self {
        let computer = VisualStateComputer::from_settings(settings);
        Self {
            assigner: SlotAssigner::new(settings.slot_count),
            memory: DamageMemory::new(),
            descriptors: vec![computer.hidden(); settings.slot_count],
            computer,
            damage_window: settings.damage_window_secs,
            tick_interval: settings.tick_interval_secs,
            tick_accumulator: 0.0,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        self.assigner.slots()
    }

    pub fn damage_memory(&self) -> &DamageMemory {
        &self.memory
    }

    /// Last descriptor handed to the renderer for a 1-based slot.
    pub fn descriptor(&self, slot_index: usize) -> Option<&VisualDescriptor> {
        slot_index.checked_sub(1).and_then(|i| self.descriptors.get(i))
    }

    pub fn dispatch(&mut self, event: GridEvent, state: &dyn GameState, renderer: &mut dyn SlotRenderer) {
        match event {
            GridEvent::GroupRosterChanged | GridEvent::EnteredWorld => {
                self.reassign(state, renderer);
            }
            GridEvent::TargetChanged => {
                self.refresh_all(state, renderer);
            }
            GridEvent::CombatLog(entry) => {
                // Recorded only; the next tick surfaces the border.
                self.record_combat_log(&entry, state.now());
            }
            GridEvent::Tick { elapsed } => {
                self.tick(elapsed, state, renderer);
            }
            GridEvent::ModifierStateChanged { pressed } => {
                renderer.set_drag_enabled(pressed);
            }
        }
    }

    fn reassign(&mut self, state: &dyn GameState, renderer: &mut dyn SlotRenderer) {
        match self.assigner.assign(state) {
            Ok(()) => {
                for slot in self.assigner.slots().iter().filter(|s| !s.active) {
                    let hidden = self.computer.hidden();
                    self.descriptors[slot.index - 1] = hidden.clone();
                    renderer.apply(slot.index, hidden);
                }
            }
            Err(e) => debug!("Roster change not applied: {}", e),
        }
        self.refresh_all(state, renderer);
    }

    fn record_combat_log(&mut self, entry: &CombatLogEvent, now: f64) {
        if let Some(target) = entry.damage_target() {
            debug!("Damage on {} at {:.2}", target, now);
            self.memory.record_damage(target.clone(), now);
        }
    }

    /// Returns true when the accumulated time crossed the interval and a
    /// refresh ran.
    fn tick(&mut self, elapsed: f64, state: &dyn GameState, renderer: &mut dyn SlotRenderer) -> bool {
        if elapsed.is_finite() && elapsed > 0.0 {
            self.tick_accumulator += elapsed;
        }
        if self.tick_accumulator < self.tick_interval {
            return false;
        }
        self.tick_accumulator = 0.0;
        self.refresh_all(state, renderer);
        true
    }

    /// Recomputes every slot that has a unit mapped to it.
    pub fn refresh_all(&mut self, state: &dyn GameState, renderer: &mut dyn SlotRenderer) {
        self.assigner.refresh_activity(state);
        let now = state.now();
        let mut shown = 0;

        for slot in self.assigner.slots() {
            if slot.unit.is_unresolved() {
                continue;
            }

            let snapshot = if slot.active { state.snapshot(&slot.unit) } else { None };
            let descriptor = match &snapshot {
                Some(unit) => self.computer.compute(
                    Some(unit),
                    self.memory.is_recently_damaged(&unit.identity, now, self.damage_window),
                    unit.is_target,
                    unit.in_range,
                ),
                None => self.computer.hidden(),
            };

            if descriptor.visible {
                shown += 1;
            }
            self.descriptors[slot.index - 1] = descriptor.clone();
            renderer.apply(slot.index, descriptor);
        }

        debug!("Refreshed slots at {:.2}: {} visible", now, shown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BorderStyle, GroupMode};
    use crate::parsing::{SubEventKind, parse_combat_log_line};
    use crate::provider::SimulatedRaid;

    #[derive(Default)]
    struct Recorder {
        applied: Vec<(usize, VisualDescriptor)>,
        drag_enabled: bool,
    }

    impl SlotRenderer for Recorder {
        fn apply(&mut self, slot_index: usize, descriptor: VisualDescriptor) {
            self.applied.push((slot_index, descriptor));
        }

        fn set_drag_enabled(&mut self, enabled: bool) {
            self.drag_enabled = enabled;
        }
    }

    fn damage_event(dest: &str) -> GridEvent {
        GridEvent::CombatLog(CombatLogEvent {
            timestamp: 0.0,
            kind: SubEventKind::SwingDamage,
            source: None,
            destination: Some(crate::models::UnitIdentity::new(dest)),
        })
    }

    #[test]
    fn tick_is_throttled_by_accumulated_time() {
        let mut raid = SimulatedRaid::new(GroupMode::Solo);
        raid.add_member("Solo", "MAGE", 100.0);
        let mut pipeline = RefreshPipeline::new(&GridSettings::default());
        let mut recorder = Recorder::default();

        assert!(!pipeline.tick(0.1, &raid, &mut recorder));
        assert!(!pipeline.tick(0.1, &raid, &mut recorder));
        assert!(recorder.applied.is_empty());
        assert!(pipeline.tick(0.1, &raid, &mut recorder));
        assert!(!pipeline.tick(0.1, &raid, &mut recorder));
    }

    #[test]
    fn damage_is_recorded_without_immediate_refresh() {
        let mut raid = SimulatedRaid::new(GroupMode::Party);
        let guid = raid.add_member("Tank", "WARRIOR", 100.0);
        let mut pipeline = RefreshPipeline::new(&GridSettings::default());
        let mut recorder = Recorder::default();
        pipeline.dispatch(GridEvent::GroupRosterChanged, &raid, &mut recorder);
        recorder.applied.clear();

        pipeline.dispatch(damage_event(guid.as_str()), &raid, &mut recorder);
        assert!(recorder.applied.is_empty());
        assert_eq!(pipeline.descriptor(1).map(|d| d.border), Some(BorderStyle::Thin));

        pipeline.dispatch(GridEvent::Tick { elapsed: 0.3 }, &raid, &mut recorder);
        assert_eq!(pipeline.descriptor(1).map(|d| d.border), Some(BorderStyle::Damaged));
    }

    #[test]
    fn non_damage_and_unresolved_entries_are_ignored() {
        let raid = SimulatedRaid::new(GroupMode::Solo);
        let mut pipeline = RefreshPipeline::new(&GridSettings::default());
        let mut recorder = Recorder::default();

        let heal = parse_combat_log_line(
            r#"4/12 21:05:34.000  SPELL_HEAL,Player-1-1,"Healer",0x511,0x0,Player-1-2,"Tank",0x511,0x0"#,
        ).unwrap();
        pipeline.dispatch(GridEvent::CombatLog(heal), &raid, &mut recorder);
        let nil = parse_combat_log_line(
            r#"4/12 21:05:35.500  SWING_DAMAGE,Creature-0-1,"Boar",0xa48,0x0,0000000000000000,nil,0x0,0x0"#,
        ).unwrap();
        pipeline.dispatch(GridEvent::CombatLog(nil), &raid, &mut recorder);

        assert!(pipeline.damage_memory().is_empty());
    }

    #[test]
    fn modifier_toggles_drag_handles() {
        let raid = SimulatedRaid::new(GroupMode::Solo);
        let mut pipeline = RefreshPipeline::new(&GridSettings::default());
        let mut recorder = Recorder::default();

        pipeline.dispatch(GridEvent::ModifierStateChanged { pressed: true }, &raid, &mut recorder);
        assert!(recorder.drag_enabled);
        pipeline.dispatch(GridEvent::ModifierStateChanged { pressed: false }, &raid, &mut recorder);
        assert!(!recorder.drag_enabled);
        assert!(recorder.applied.is_empty());
    }
}
