use log::{debug, info, warn};
use thiserror::Error;
use crate::models::{GroupMode, UnitRef};
use crate::provider::GameState;

/// Largest group that uses party-style slots.
pub const PARTY_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    #[error("slot reassignment deferred: combat lockdown is active")]
    CombatLockdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// 1-based display position
    pub index: usize,
    pub unit: UnitRef,
    /// The unit reference resolved to an existing unit at last check
    pub active: bool,
}

impl Slot {
    fn empty(index: usize) -> Self {
        Self { index, unit: UnitRef::Unresolved, active: false }
    }
}

/// Slot-to-unit mapping for a group mode, ignoring unit existence.
pub fn plan_assignment(mode: GroupMode, group_size: usize, slot_count: usize) -> Vec<UnitRef> {
    (1..=slot_count)
        .map(|index| match mode {
            GroupMode::Raid if index <= group_size => UnitRef::RaidMember(index),
            GroupMode::Raid => UnitRef::Unresolved,
            GroupMode::Party if index == 1 => UnitRef::PlayerSelf,
            GroupMode::Party if index <= PARTY_SIZE => UnitRef::PartyMember(index - 1),
            GroupMode::Party => UnitRef::Unresolved,
            GroupMode::Solo if index == 1 => UnitRef::PlayerSelf,
            GroupMode::Solo => UnitRef::Unresolved,
        })
        .collect()
}

#[derive(Debug)]
pub struct SlotAssigner {
    slots: Vec<Slot>,
}

impl SlotAssigner {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: (1..=slot_count).map(Slot::empty).collect(),
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Remaps every slot from the current roster. During combat lockdown the
    /// previous mapping is left untouched and `CombatLockdown` is returned.
    pub fn assign(&mut self, state: &dyn GameState) -> Result<(), AssignError> {
        if state.in_combat_lockdown() {
            warn!("Skipping slot reassignment during combat lockdown");
            return Err(AssignError::CombatLockdown);
        }

        let mode = state.group_mode();
        let plan = plan_assignment(mode, state.group_size(), self.slots.len());
        for (slot, unit) in self.slots.iter_mut().zip(plan) {
            slot.unit = unit;
            slot.active = !unit.is_unresolved() && state.unit_exists(&unit);
        }

        info!("Assigned {} of {} slots ({:?} mode)",
              self.slots.iter().filter(|s| s.active).count(), self.slots.len(), mode);
        Ok(())
    }

    /// Re-checks unit existence without remapping. Allowed during lockdown.
    pub fn refresh_activity(&mut self, state: &dyn GameState) {
        for slot in &mut self.slots {
            let active = !slot.unit.is_unresolved() && state.unit_exists(&slot.unit);
            if slot.active && !active {
                if let Some(token) = slot.unit.token() {
                    debug!("Slot {} lost its unit ({})", slot.index, token);
                }
            }
            slot.active = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::SimulatedRaid;

    fn raid_of(size: usize) -> SimulatedRaid {
        let mut raid = SimulatedRaid::new(GroupMode::Raid);
        for i in 0..size {
            raid.add_member(&format!("Member{}", i), "WARRIOR", 1000.0);
        }
        raid
    }

    #[test]
    fn solo_maps_only_the_player() {
        for size in [0, 3, 25] {
            let plan = plan_assignment(GroupMode::Solo, size, 40);
            assert_eq!(plan[0], UnitRef::PlayerSelf);
            assert!(plan[1..].iter().all(|u| u.is_unresolved()));
        }
    }

    #[test]
    fn party_maps_player_then_four_members() {
        let plan = plan_assignment(GroupMode::Party, 5, 40);
        assert_eq!(plan[0], UnitRef::PlayerSelf);
        assert_eq!(&plan[1..5], &[
            UnitRef::PartyMember(1),
            UnitRef::PartyMember(2),
            UnitRef::PartyMember(3),
            UnitRef::PartyMember(4),
        ]);
        assert!(plan[5..].iter().all(|u| u.is_unresolved()));
    }

    #[test]
    fn raid_maps_slot_to_raid_index() {
        let plan = plan_assignment(GroupMode::Raid, 40, 40);
        for (i, unit) in plan.iter().enumerate() {
            assert_eq!(*unit, UnitRef::RaidMember(i + 1));
        }

        let plan = plan_assignment(GroupMode::Raid, 12, 40);
        assert_eq!(plan[11], UnitRef::RaidMember(12));
        assert!(plan[12..].iter().all(|u| u.is_unresolved()));
    }

    #[test]
    fn raid_beyond_capacity_is_cut_off() {
        let plan = plan_assignment(GroupMode::Raid, 40, 25);
        assert_eq!(plan.len(), 25);
        assert_eq!(plan[24], UnitRef::RaidMember(25));
    }

    #[test]
    fn assign_marks_missing_units_inactive() {
        let mut raid = raid_of(10);
        let mut assigner = SlotAssigner::new(40);
        assigner.assign(&raid).unwrap();
        assert_eq!(assigner.slots().iter().filter(|s| s.active).count(), 10);

        let third = raid.member_identity(3).unwrap();
        raid.set_loading(&third, true);
        assigner.refresh_activity(&raid);
        assert!(!assigner.slots()[2].active);
        assert_eq!(assigner.slots()[2].unit, UnitRef::RaidMember(3));
    }

    #[test]
    fn lockdown_keeps_previous_assignment() {
        let mut raid = raid_of(6);
        let mut assigner = SlotAssigner::new(40);
        assigner.assign(&raid).unwrap();
        let before = assigner.slots().to_vec();

        raid.add_member("Latecomer", "MAGE", 800.0);
        raid.set_lockdown(true);
        assert_eq!(assigner.assign(&raid), Err(AssignError::CombatLockdown));
        assert_eq!(assigner.slots(), before.as_slice());

        raid.set_lockdown(false);
        assigner.assign(&raid).unwrap();
        assert!(assigner.slots()[6].active);
    }
}
