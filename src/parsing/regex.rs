use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "4/12 21:05:33.123  SPELL_DAMAGE,Player-1-0001,\"Jaina\",0x511,0x0,Creature-0-..."
    pub static ref RE_COMBAT_LOG_LINE: Regex = Regex::new(r"^(?P<month>\d{1,2})/(?P<day>\d{1,2})(?:/\d{2,4})? (?P<hour>\d{1,2}):(?P<minute>\d{2}):(?P<second>\d{2}(?:\.\d+)?)(?:[-+]\d+)?\s{2}(?P<event>[A-Z_]+),(?P<fields>.*)$").unwrap();

    // Nil GUIDs the host writes when an event has no destination.
    pub static ref RE_NIL_GUID: Regex = Regex::new(r"^(?:0x)?0+$|^nil$").unwrap();
}
