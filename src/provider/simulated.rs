use rand::Rng;
use rand::seq::SliceRandom;
use crate::engine::GridEvent;
use crate::engine::slot_assigner::PARTY_SIZE;
use crate::models::class_colors::CLASS_TOKENS;
use crate::models::{GroupMode, UnitIdentity, UnitRef, UnitSnapshot};
use crate::provider::GameState;

const ENEMY_GUID: &str = "Creature-0-3019-2522-1-31146-0000";
const ENEMY_NAME: &str = "Raider's Training Dummy";
const DAMAGE_KINDS: [&str; 4] = ["SWING_DAMAGE", "RANGE_DAMAGE", "SPELL_DAMAGE", "SPELL_PERIODIC_DAMAGE"];
const MAX_RAID_SIZE: usize = 40;
const REVIVE_AFTER_SECS: f64 = 8.0;

#[derive(Debug, Clone)]
pub struct SimulatedUnit {
    pub identity: UnitIdentity,
    pub name: String,
    pub class: String,
    pub health: f64,
    pub max_health: f64,
    pub dead_since: Option<f64>,
    pub in_range: bool,
    /// Present in the roster but not yet resolvable (zoning, loading)
    pub loading: bool,
}

/// What one simulation step produced: raw combat-log text plus host events.
#[derive(Debug, Default)]
pub struct SimulationStep {
    pub combat_log: Vec<String>,
    pub events: Vec<GridEvent>,
}

/// In-process game state. The first member is always the local player.
#[derive(Debug)]
pub struct SimulatedRaid {
    mode: GroupMode,
    members: Vec<SimulatedUnit>,
    target: Option<UnitIdentity>,
    lockdown: bool,
    clock: f64,
    next_guid: u32,
}

impl SimulatedRaid {
    pub fn new(mode: GroupMode) -> Self {
        Self {
            mode,
            members: Vec::new(),
            target: None,
            lockdown: false,
            clock: 0.0,
            next_guid: 1,
        }
    }

    /// A raid of `size` members with rotating classes, for the demo window.
    pub fn demo(size: usize) -> Self {
        let mode = match size {
            0..=1 => GroupMode::Solo,
            2..=PARTY_SIZE => GroupMode::Party,
            _ => GroupMode::Raid,
        };
        let mut raid = Self::new(mode);
        for i in 0..size.max(1) {
            let class = CLASS_TOKENS[i % CLASS_TOKENS.len()];
            raid.add_member(&format!("{}{}", demo_name(i), i + 1), class, 80_000.0 + (i as f64) * 1_500.0);
        }
        raid
    }

    pub fn add_member(&mut self, name: &str, class: &str, max_health: f64) -> UnitIdentity {
        let identity = UnitIdentity::new(format!("Player-1084-{:08X}", self.next_guid));
        self.next_guid += 1;
        self.members.push(SimulatedUnit {
            identity: identity.clone(),
            name: name.to_string(),
            class: class.to_string(),
            health: max_health,
            max_health,
            dead_since: None,
            in_range: true,
            loading: false,
        });
        identity
    }

    pub fn remove_member(&mut self, identity: &UnitIdentity) -> bool {
        let before = self.members.len();
        // Local player never leaves their own group.
        let local = self.members.first().map(|m| m.identity.clone());
        self.members.retain(|m| &m.identity != identity || Some(identity) == local.as_ref());
        if self.target.as_ref() == Some(identity) && self.members.len() != before {
            self.target = None;
        }
        self.members.len() != before
    }

    /// Identity of the n-th roster member (1-based).
    pub fn member_identity(&self, position: usize) -> Option<UnitIdentity> {
        position.checked_sub(1)
            .and_then(|i| self.members.get(i))
            .map(|m| m.identity.clone())
    }

    pub fn members(&self) -> &[SimulatedUnit] {
        &self.members
    }

    pub fn set_mode(&mut self, mode: GroupMode) {
        self.mode = mode;
    }

    pub fn set_health(&mut self, identity: &UnitIdentity, health: f64) {
        if let Some(member) = self.member_mut(identity) {
            member.health = health;
        }
    }

    pub fn set_max_health(&mut self, identity: &UnitIdentity, max_health: f64) {
        if let Some(member) = self.member_mut(identity) {
            member.max_health = max_health;
        }
    }

    pub fn set_dead(&mut self, identity: &UnitIdentity, dead: bool) {
        let now = self.clock;
        if let Some(member) = self.member_mut(identity) {
            member.dead_since = if dead { Some(now) } else { None };
        }
    }

    pub fn set_in_range(&mut self, identity: &UnitIdentity, in_range: bool) {
        if let Some(member) = self.member_mut(identity) {
            member.in_range = in_range;
        }
    }

    pub fn set_loading(&mut self, identity: &UnitIdentity, loading: bool) {
        if let Some(member) = self.member_mut(identity) {
            member.loading = loading;
        }
    }

    pub fn set_target(&mut self, identity: Option<&UnitIdentity>) {
        self.target = identity.cloned();
    }

    pub fn set_lockdown(&mut self, lockdown: bool) {
        self.lockdown = lockdown;
    }

    pub fn set_clock(&mut self, now: f64) {
        self.clock = now;
    }

    pub fn advance_clock(&mut self, elapsed: f64) {
        self.clock += elapsed;
    }

    /// Runs the demo fight forward. Probabilities scale with `elapsed` so the
    /// pace does not depend on frame rate.
    pub fn advance(&mut self, elapsed: f64, rng: &mut impl Rng) -> SimulationStep {
        let mut step = SimulationStep::default();
        self.clock += elapsed;
        let now = self.clock;

        let mut lines = Vec::new();
        for member in &mut self.members {
            if let Some(since) = member.dead_since {
                if now - since >= REVIVE_AFTER_SECS {
                    member.dead_since = None;
                    member.health = member.max_health;
                }
                continue;
            }

            if rng.gen_bool((elapsed * 0.6).clamp(0.0, 1.0)) {
                let amount = (member.max_health * rng.gen_range(0.03..0.2)).round();
                member.health -= amount;
                if member.health <= 0.0 {
                    member.health = 0.0;
                    member.dead_since = Some(now);
                }
                let kind = DAMAGE_KINDS.choose(rng).copied().unwrap_or(DAMAGE_KINDS[0]);
                lines.push(format_damage_line(now, kind, &member.identity, &member.name, amount));
            } else {
                member.health = (member.health + member.max_health * 0.04 * elapsed).min(member.max_health);
            }
        }
        step.combat_log = lines;

        if self.members.len() > 1 && rng.gen_bool((elapsed * 0.1).clamp(0.0, 1.0)) {
            let i = rng.gen_range(1..self.members.len());
            self.members[i].in_range = !self.members[i].in_range;
        }

        if rng.gen_bool((elapsed * 0.2).clamp(0.0, 1.0)) {
            self.target = self.members.choose(rng).map(|m| m.identity.clone());
            step.events.push(GridEvent::TargetChanged);
        }

        if rng.gen_bool((elapsed * 0.02).clamp(0.0, 1.0)) {
            self.lockdown = !self.lockdown;
        }

        if self.mode == GroupMode::Raid && rng.gen_bool((elapsed * 0.02).clamp(0.0, 1.0)) {
            if self.members.len() < MAX_RAID_SIZE && rng.gen_bool(0.5) {
                let class = CLASS_TOKENS.choose(rng).copied().unwrap_or("WARRIOR");
                let n = self.members.len();
                self.add_member(&format!("{}{}", demo_name(n), n + 1), class, 90_000.0);
            } else if let Some(leaver) = self.member_identity(self.members.len()) {
                self.remove_member(&leaver);
            }
            step.events.push(GridEvent::GroupRosterChanged);
        }

        step
    }

    fn member_mut(&mut self, identity: &UnitIdentity) -> Option<&mut SimulatedUnit> {
        self.members.iter_mut().find(|m| &m.identity == identity)
    }

    fn resolve(&self, unit: &UnitRef) -> Option<(usize, &SimulatedUnit)> {
        let index = match (unit, self.mode) {
            (UnitRef::PlayerSelf, _) => 0,
            (UnitRef::PartyMember(k), GroupMode::Party) if *k >= 1 && *k < PARTY_SIZE => *k,
            (UnitRef::RaidMember(i), GroupMode::Raid) if *i >= 1 => *i - 1,
            _ => return None,
        };
        self.members.get(index).map(|m| (index, m))
    }
}

impl GameState for SimulatedRaid {
    fn now(&self) -> f64 {
        self.clock
    }

    fn group_mode(&self) -> GroupMode {
        self.mode
    }

    fn group_size(&self) -> usize {
        match self.mode {
            GroupMode::Solo => self.members.len().min(1),
            GroupMode::Party => self.members.len().min(PARTY_SIZE),
            GroupMode::Raid => self.members.len(),
        }
    }

    fn in_combat_lockdown(&self) -> bool {
        self.lockdown
    }

    fn unit_exists(&self, unit: &UnitRef) -> bool {
        self.resolve(unit).is_some_and(|(_, m)| !m.loading)
    }

    fn snapshot(&self, unit: &UnitRef) -> Option<UnitSnapshot> {
        let (index, member) = self.resolve(unit).filter(|(_, m)| !m.loading)?;
        Some(UnitSnapshot {
            identity: member.identity.clone(),
            name: Some(member.name.clone()),
            health: member.health,
            max_health: member.max_health,
            dead_or_ghost: member.dead_since.is_some(),
            is_player: true,
            class: Some(member.class.clone()),
            in_range: member.in_range,
            is_target: self.target.as_ref() == Some(&member.identity),
            is_local_player: index == 0,
        })
    }
}

fn demo_name(i: usize) -> &'static str {
    const NAMES: [&str; 8] = ["Varian", "Jaina", "Thrall", "Sylvanas", "Anduin", "Tyrande", "Malfurion", "Velen"];
    NAMES[i % NAMES.len()]
}

fn format_damage_line(now: f64, kind: &str, dest: &UnitIdentity, dest_name: &str, amount: f64) -> String {
    let day_secs = now.rem_euclid(86_400.0);
    let hours = (day_secs / 3600.0).floor();
    let minutes = ((day_secs - hours * 3600.0) / 60.0).floor();
    let seconds = day_secs - hours * 3600.0 - minutes * 60.0;
    format!(
        "4/12 {:02}:{:02}:{:06.3}  {},{},\"{}\",0xa48,0x0,{},\"{}\",0x511,0x0,{}",
        hours as u32, minutes as u32, seconds, kind, ENEMY_GUID, ENEMY_NAME, dest, dest_name, amount as i64
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use crate::parsing::parse_combat_log_line;

    #[test]
    fn party_members_resolve_by_position() {
        let mut raid = SimulatedRaid::new(GroupMode::Party);
        let me = raid.add_member("Me", "MAGE", 100.0);
        let friend = raid.add_member("Friend", "PRIEST", 100.0);

        assert_eq!(raid.snapshot(&UnitRef::PlayerSelf).map(|s| s.identity), Some(me));
        assert_eq!(raid.snapshot(&UnitRef::PartyMember(1)).map(|s| s.identity), Some(friend));
        assert!(!raid.unit_exists(&UnitRef::PartyMember(2)));
        assert!(!raid.unit_exists(&UnitRef::RaidMember(1)));
    }

    #[test]
    fn only_the_first_member_is_local() {
        let raid = SimulatedRaid::demo(10);
        assert!(raid.snapshot(&UnitRef::RaidMember(1)).unwrap().is_local_player);
        assert!(!raid.snapshot(&UnitRef::RaidMember(2)).unwrap().is_local_player);
        assert_eq!(raid.group_size(), 10);
    }

    #[test]
    fn local_player_cannot_be_removed() {
        let mut raid = SimulatedRaid::demo(3);
        let me = raid.member_identity(1).unwrap();
        assert!(!raid.remove_member(&me));
        let other = raid.member_identity(3).unwrap();
        assert!(raid.remove_member(&other));
        assert_eq!(raid.members().len(), 2);
    }

    #[test]
    fn generated_lines_parse_back_to_damage_events() {
        let mut raid = SimulatedRaid::demo(20);
        let mut rng = StdRng::seed_from_u64(7);
        let mut lines = Vec::new();
        for _ in 0..50 {
            lines.extend(raid.advance(0.5, &mut rng).combat_log);
        }
        assert!(!lines.is_empty());
        for line in &lines {
            let event = parse_combat_log_line(line).expect("generated line should parse");
            assert!(event.kind.is_damage());
            assert!(event.destination.is_some());
        }
    }
}
