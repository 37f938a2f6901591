//! Annotation store
//!
//! Maps cell keys to colors. An absent entry means the cell is uncolored.
//! Entries for removed strings are simply never looked up again.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::cell::CellKey;
use super::palette::{Color, ColorSelection};
use super::pitch::{Pitch, HIGHEST_PITCH};
use super::strings::StringId;

/// Outcome of a click on a cell
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToggleOutcome {
    Painted,
    Cleared,
    Unchanged,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct AnnotationMap {
    entries: BTreeMap<CellKey, Color>,
}

impl AnnotationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CellKey) -> Option<&Color> {
        self.entries.get(key)
    }

    pub fn color_of(&self, pitch: Pitch, string_id: StringId) -> Option<&Color> {
        self.get(&CellKey::new(pitch, string_id))
    }

    pub fn set(&mut self, key: CellKey, color: Color) {
        self.entries.insert(key, color);
    }

    pub fn remove(&mut self, key: &CellKey) -> Option<Color> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CellKey, &Color)> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Apply a click with `active` selected.
    ///
    /// Same color as the cell clears it; any other color overwrites; "none"
    /// never writes. Pitches above the audible ceiling are ignored.
    pub fn toggle(&mut self, pitch: Pitch, string_id: StringId, active: &ColorSelection) -> ToggleOutcome {
        if pitch.value() > HIGHEST_PITCH {
            return ToggleOutcome::Unchanged;
        }
        let key = CellKey::new(pitch, string_id);
        let current = self.entries.get(&key);

        match active {
            ColorSelection::Color(color) if current == Some(color) => {
                self.entries.remove(&key);
                ToggleOutcome::Cleared
            }
            ColorSelection::Color(color) => {
                self.entries.insert(key, color.clone());
                ToggleOutcome::Painted
            }
            ColorSelection::None => ToggleOutcome::Unchanged,
        }
    }
}

impl FromIterator<(CellKey, Color)> for AnnotationMap {
    fn from_iter<I: IntoIterator<Item = (CellKey, Color)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
