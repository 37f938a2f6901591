//! Cell addressing
//!
//! A cell is one (string, pitch) intersection. Cells are keyed by string id
//! and absolute pitch, so annotations stay put when the fret window moves,
//! strings are added or removed at either end, or the board is mirrored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::fret_window::FretWindow;
use super::pitch::Pitch;
use super::strings::StringId;

/// Stable key of a cell, written `"{pitch}-{stringId}"`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey {
    pub pitch: Pitch,
    pub string_id: StringId,
}

impl CellKey {
    pub fn new(pitch: Pitch, string_id: StringId) -> Self {
        Self { pitch, string_id }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.pitch.value(), self.string_id)
    }
}

impl FromStr for CellKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // String ids may be negative ("64--1"), so split at the first '-'
        // after a non-empty pitch
        let split = s
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(i, _)| i)
            .ok_or_else(|| format!("Invalid cell key: '{}'", s))?;
        let (pitch, string_id) = (&s[..split], &s[split + 1..]);
        let pitch: i32 = pitch
            .parse()
            .map_err(|_| format!("Invalid pitch in cell key: '{}'", s))?;
        let string_id: StringId = string_id
            .parse()
            .map_err(|_| format!("Invalid string id in cell key: '{}'", s))?;
        Ok(CellKey::new(Pitch(pitch), string_id))
    }
}

impl Serialize for CellKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CellKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Pitches visible on a string with open pitch `base`, in screen order.
///
/// The range is `[base + first, base + last)`, reversed in lefty mode so
/// index 0 is always the leftmost cell on screen. For any playable open
/// pitch the length equals the window's visible fret count; pitches above
/// the audible ceiling are kept here and filtered by the renderer. The
/// range clamps at `i32::MAX` instead of overflowing.
pub fn visible_pitches_for_string(base: Pitch, window: &FretWindow, lefty: bool) -> Vec<Pitch> {
    let low = base.value().saturating_add(window.first() as i32);
    let high = base.value().saturating_add(window.last() as i32);
    let pitches = (low..high).map(Pitch);
    if lefty {
        pitches.rev().collect()
    } else {
        pitches.collect()
    }
}
