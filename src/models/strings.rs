//! Ordered set of instrument strings
//!
//! Strings are kept highest first. Each carries an id that is stable across
//! additions and removals at either end: a string added above the highest
//! gets `min id - 1`, one added below the lowest gets `max id + 1`. Ids are
//! what annotations and the tuning editor key on, never positions.

use serde::{Deserialize, Serialize};

use super::pitch::Pitch;
use super::tuning::{classify, PresetTuning, TuningName};

/// Stable identity of a string
pub type StringId = i32;

/// Maximum number of strings reachable by adding strings
pub const MAX_STRINGS: usize = 12;

/// Pitch of a string added above the highest (E4)
pub const ADDED_HIGH_PITCH: Pitch = Pitch(64);

/// Pitch of a string added below the lowest (E2)
pub const ADDED_LOW_PITCH: Pitch = Pitch(40);

/// One tuned course on the instrument
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstrumentString {
    pub id: StringId,
    pub pitch: Pitch,
}

impl InstrumentString {
    pub fn new(id: StringId, pitch: Pitch) -> Self {
        Self { id, pitch }
    }
}

/// The ordered string collection (never empty)
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct StringSet {
    strings: Vec<InstrumentString>,
}

impl Default for StringSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl StringSet {
    /// Six-string standard tuning, ids 0..5 high to low
    pub fn standard() -> Self {
        let strings = PresetTuning::Standard
            .pitches()
            .iter()
            .enumerate()
            .map(|(i, &value)| InstrumentString::new(i as StringId, Pitch(value)))
            .collect();
        Self { strings }
    }

    /// Build a set with ids `0..n` in order. An empty slice yields standard
    /// tuning so the set is never empty.
    pub fn from_pitches(pitches: &[Pitch]) -> Self {
        if pitches.is_empty() {
            return Self::standard();
        }
        let strings = pitches
            .iter()
            .enumerate()
            .map(|(i, &pitch)| InstrumentString::new(i as StringId, pitch))
            .collect();
        Self { strings }
    }

    pub fn strings(&self) -> &[InstrumentString] {
        &self.strings
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn get(&self, id: StringId) -> Option<&InstrumentString> {
        self.strings.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: StringId) -> bool {
        self.get(id).is_some()
    }

    /// Open-string pitches in order (the tuning view)
    pub fn pitches(&self) -> Vec<Pitch> {
        self.strings.iter().map(|s| s.pitch).collect()
    }

    /// Catalog name of the current tuning
    pub fn tuning_name(&self) -> TuningName {
        classify(&self.pitches())
    }

    fn min_id(&self) -> StringId {
        self.strings.iter().map(|s| s.id).min().unwrap_or(0)
    }

    fn max_id(&self) -> StringId {
        self.strings.iter().map(|s| s.id).max().unwrap_or(0)
    }

    pub fn can_grow(&self) -> bool {
        self.strings.len() < MAX_STRINGS
    }

    pub fn can_shrink(&self) -> bool {
        self.strings.len() > 1
    }

    /// Add an E4 string above the highest. Returns false when refused.
    pub fn grow_high(&mut self) -> bool {
        if !self.can_grow() {
            return false;
        }
        let id = self.min_id() - 1;
        self.strings.insert(0, InstrumentString::new(id, ADDED_HIGH_PITCH));
        true
    }

    /// Remove the highest string. Returns false when refused.
    pub fn shrink_high(&mut self) -> bool {
        if !self.can_shrink() {
            return false;
        }
        self.strings.remove(0);
        true
    }

    /// Add an E2 string below the lowest. Returns false when refused.
    pub fn grow_low(&mut self) -> bool {
        if !self.can_grow() {
            return false;
        }
        let id = self.max_id() + 1;
        self.strings.push(InstrumentString::new(id, ADDED_LOW_PITCH));
        true
    }

    /// Remove the lowest string. Returns false when refused.
    pub fn shrink_low(&mut self) -> bool {
        if !self.can_shrink() {
            return false;
        }
        self.strings.pop();
        true
    }

    /// Change the pitch of the string with `id`. Unknown ids are a no-op.
    pub fn retune(&mut self, id: StringId, pitch: Pitch) -> bool {
        match self.strings.iter_mut().find(|s| s.id == id) {
            Some(string) => {
                string.pitch = pitch;
                true
            }
            None => false,
        }
    }

    /// Replace every string with the given preset, ids `0..n`
    pub fn apply_tuning(&mut self, name: TuningName) -> bool {
        match name.apply() {
            Some(pitches) => {
                *self = Self::from_pitches(&pitches);
                true
            }
            None => false,
        }
    }

    pub fn reset_to_standard(&mut self) {
        *self = Self::standard();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(set: &StringSet) -> Vec<StringId> {
        set.strings().iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_standard_ids_high_to_low() {
        let set = StringSet::standard();
        assert_eq!(ids(&set), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(set.strings()[0].pitch, Pitch(64));
        assert_eq!(set.strings()[5].pitch, Pitch(40));
    }

    #[test]
    fn test_grow_high_prepends_lower_id() {
        let mut set = StringSet::standard();
        assert!(set.grow_high());
        assert_eq!(set.strings()[0], InstrumentString::new(-1, Pitch(64)));
        assert!(set.grow_high());
        assert_eq!(set.strings()[0].id, -2);
    }

    #[test]
    fn test_grow_low_appends_higher_id() {
        let mut set = StringSet::standard();
        assert!(set.grow_low());
        assert_eq!(set.strings()[6], InstrumentString::new(6, Pitch(40)));
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut set = StringSet::standard();
        set.grow_low();
        set.shrink_high();
        set.grow_low();
        assert_eq!(ids(&set), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_grow_refused_at_max() {
        let mut set = StringSet::standard();
        while set.grow_low() {}
        assert_eq!(set.len(), MAX_STRINGS);
        let before = set.clone();
        assert!(!set.grow_high());
        assert!(!set.grow_low());
        assert_eq!(set, before);
    }

    #[test]
    fn test_shrink_refused_at_one() {
        let mut set = StringSet::standard();
        while set.shrink_low() {}
        assert_eq!(set.len(), 1);
        assert!(!set.shrink_high());
        assert!(!set.shrink_low());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_retune_by_id() {
        let mut set = StringSet::standard();
        assert!(set.retune(5, Pitch(38)));
        assert_eq!(set.get(5).map(|s| s.pitch), Some(Pitch(38)));
        assert_eq!(set.tuning_name().as_str(), "drop-d");
    }

    #[test]
    fn test_retune_unknown_id_is_noop() {
        let mut set = StringSet::standard();
        assert!(!set.retune(42, Pitch(30)));
        assert_eq!(set, StringSet::standard());
    }

    #[test]
    fn test_apply_tuning_and_custom() {
        let mut set = StringSet::standard();
        assert!(set.apply_tuning(TuningName::Preset(PresetTuning::BassStandard)));
        assert_eq!(set.len(), 4);
        assert_eq!(ids(&set), vec![0, 1, 2, 3]);
        assert!(!set.apply_tuning(TuningName::Custom));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_from_empty_pitches_is_standard() {
        assert_eq!(StringSet::from_pitches(&[]), StringSet::standard());
    }
}
