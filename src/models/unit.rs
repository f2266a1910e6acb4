use std::fmt;
use serde::{Deserialize, Serialize};

/// Stable identifier (GUID) of a creature or player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitIdentity(pub String);

impl UnitIdentity {
    pub fn new(guid: impl Into<String>) -> Self {
        Self(guid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which unit a slot points at. Party and raid indices are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitRef {
    PlayerSelf,
    PartyMember(usize),
    RaidMember(usize),
    #[default]
    Unresolved,
}

impl UnitRef {
    /// Host unit token ("player", "party2", "raid17"), if any.
    pub fn token(&self) -> Option<String> {
        match self {
            UnitRef::PlayerSelf => Some("player".to_string()),
            UnitRef::PartyMember(index) => Some(format!("party{}", index)),
            UnitRef::RaidMember(index) => Some(format!("raid{}", index)),
            UnitRef::Unresolved => None,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, UnitRef::Unresolved)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupMode {
    #[default]
    Solo,
    Party,
    Raid,
}

/// Facts about one unit for a single refresh. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSnapshot {
    pub identity: UnitIdentity,
    pub name: Option<String>,
    pub health: f64,
    pub max_health: f64,
    pub dead_or_ghost: bool,
    pub is_player: bool,
    pub class: Option<String>,
    pub in_range: bool,
    pub is_target: bool,
    pub is_local_player: bool,
}
