use std::collections::HashMap;
use crate::models::UnitIdentity;

/// Last incoming-damage time per unit. Entries are never evicted; staleness
/// is decided at read time against the window.
#[derive(Debug, Default)]
pub struct DamageMemory {
    last_damage: HashMap<UnitIdentity, f64>,
}

impl DamageMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `timestamp` as the unit's last damage time. A timestamp older
    /// than the stored one is ignored, so the stored time never goes back.
    pub fn record_damage(&mut self, identity: UnitIdentity, timestamp: f64) {
        let entry = self.last_damage.entry(identity).or_insert(timestamp);
        if timestamp > *entry {
            *entry = timestamp;
        }
    }

    pub fn is_recently_damaged(&self, identity: &UnitIdentity, now: f64, window: f64) -> bool {
        match self.last_damage.get(identity) {
            Some(&recorded) => now - recorded <= window,
            None => false,
        }
    }

    pub fn last_damage(&self, identity: &UnitIdentity) -> Option<f64> {
        self.last_damage.get(identity).copied()
    }

    pub fn len(&self) -> usize {
        self.last_damage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_damage.is_empty()
    }
}
