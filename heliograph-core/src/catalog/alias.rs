//! Function-name normalization
//!
//! Catalog files spell the same button many ways (`VOLUME_UP`, `VOL+`,
//! `KEY_VOLUMEUP`, ...). This table maps the known spellings onto the
//! fixed internal vocabulary the zone dispatcher looks commands up by.

/// Known vendor spellings and their canonical names.
///
/// Matching is case-insensitive, so the table only lists distinct
/// spellings, not case variants.
const ALIASES: &[(&str, &str)] = &[
    ("POWER", "power"),
    ("KEY_POWER", "power"),
    ("VOLUME+", "volUp"),
    ("VOLUME_UP", "volUp"),
    ("VOL+", "volUp"),
    ("KEY_VOLUMEUP", "volUp"),
    ("VOLUME-", "volDown"),
    ("VOLUME_DOWN", "volDown"),
    ("VOL-", "volDown"),
    ("KEY_VOLUMEDOWN", "volDown"),
    ("CHANNEL+", "chUp"),
    ("CHANNEL_UP", "chUp"),
    ("CH+", "chUp"),
    ("KEY_CHANNELUP", "chUp"),
    ("CHANNEL-", "chDown"),
    ("CHANNEL_DOWN", "chDown"),
    ("CH-", "chDown"),
    ("KEY_CHANNELDOWN", "chDown"),
    ("MUTE", "mute"),
    ("KEY_MUTE", "mute"),
    ("INPUT", "input"),
    ("SOURCE", "input"),
    ("KEY_INPUT", "input"),
    ("PLAY", "play"),
    ("KEY_PLAY", "play"),
    ("STOP", "stop"),
    ("KEY_STOP", "stop"),
    ("PAUSE", "pause"),
    ("KEY_PAUSE", "pause"),
    ("REWIND", "rewind"),
    ("REW", "rewind"),
    ("KEY_REWIND", "rewind"),
    ("FAST_FORWARD", "forward"),
    ("FF", "forward"),
    ("KEY_FORWARD", "forward"),
    ("RECORD", "record"),
    ("REC", "record"),
    ("KEY_RECORD", "record"),
    ("MENU", "menu"),
    ("KEY_MENU", "menu"),
    ("OK", "ok"),
    ("ENTER", "ok"),
    ("SELECT", "ok"),
    ("KEY_OK", "ok"),
];

/// Digit buttons map to themselves.
const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Canonical internal name for a catalog function spelling.
///
/// Returns `None` for spellings the firmware has no use for; the loader
/// drops those records.
pub fn canonical_name(raw: &str) -> Option<&'static str> {
    for (spelling, canonical) in ALIASES {
        if raw.eq_ignore_ascii_case(spelling) {
            return Some(canonical);
        }
    }

    let mut chars = raw.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_digit() {
            return Some(DIGITS[(c as u8 - b'0') as usize]);
        }
    }

    None
}
