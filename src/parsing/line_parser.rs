use crate::models::UnitIdentity;
use crate::parsing::regex::*;

const SOURCE_GUID_FIELD: usize = 0;
const DEST_GUID_FIELD: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubEventKind {
    SwingDamage,
    RangeDamage,
    SpellDamage,
    SpellPeriodicDamage,
    Other(String),
}

impl SubEventKind {
    pub fn from_token(token: &str) -> Self {
        match token {
            "SWING_DAMAGE" => SubEventKind::SwingDamage,
            "RANGE_DAMAGE" => SubEventKind::RangeDamage,
            "SPELL_DAMAGE" => SubEventKind::SpellDamage,
            "SPELL_PERIODIC_DAMAGE" => SubEventKind::SpellPeriodicDamage,
            other => SubEventKind::Other(other.to_string()),
        }
    }

    /// Melee, ranged, direct spell and periodic spell damage.
    pub fn is_damage(&self) -> bool {
        !matches!(self, SubEventKind::Other(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CombatLogEvent {
    /// Seconds since the start of the log's day
    pub timestamp: f64,
    pub kind: SubEventKind,
    pub source: Option<UnitIdentity>,
    pub destination: Option<UnitIdentity>,
}

impl CombatLogEvent {
    pub fn damage_target(&self) -> Option<&UnitIdentity> {
        if self.kind.is_damage() { self.destination.as_ref() } else { None }
    }
}

pub fn parse_combat_log_line(line: &str) -> Option<CombatLogEvent> {
    let caps = RE_COMBAT_LOG_LINE.captures(line.trim())?;

    let hours: f64 = caps["hour"].parse().ok()?;
    let minutes: f64 = caps["minute"].parse().ok()?;
    let seconds: f64 = caps["second"].parse().ok()?;

    let fields = split_fields(&caps["fields"]);

    Some(CombatLogEvent {
        timestamp: hours * 3600.0 + minutes * 60.0 + seconds,
        kind: SubEventKind::from_token(&caps["event"]),
        source: fields.get(SOURCE_GUID_FIELD).and_then(|f| resolve_guid(f)),
        destination: fields.get(DEST_GUID_FIELD).and_then(|f| resolve_guid(f)),
    })
}

fn resolve_guid(field: &str) -> Option<UnitIdentity> {
    let guid = field.trim().trim_matches('"');
    if guid.is_empty() || RE_NIL_GUID.is_match(guid) {
        None
    } else {
        Some(UnitIdentity::new(guid))
    }
}

/// Splits on commas outside of double quotes.
fn split_fields(input: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(&input[start..]);
    fields
}
