//! Scale generator
//!
//! Paints every occurrence of a diatonic scale across all strings: the root
//! pitch class gets the active color, the other degrees its light pair.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::palette::light_variant;
use crate::models::{AnnotationMap, CellKey, Color, Pitch, StringSet, HIGHEST_PITCH, LOWEST_PITCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "Major (Ionian)")]
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    #[serde(rename = "Minor (Aeolian)")]
    Aeolian,
    Locrian,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Ionian,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
        Mode::Locrian,
    ];

    /// Menu label
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Ionian => "Major (Ionian)",
            Mode::Dorian => "Dorian",
            Mode::Phrygian => "Phrygian",
            Mode::Lydian => "Lydian",
            Mode::Mixolydian => "Mixolydian",
            Mode::Aeolian => "Minor (Aeolian)",
            Mode::Locrian => "Locrian",
        }
    }

    /// Semitone offsets from the root, ascending, starting at 0
    pub fn offsets(&self) -> [i32; 7] {
        match self {
            Mode::Ionian => [0, 2, 4, 5, 7, 9, 11],
            Mode::Dorian => [0, 2, 3, 5, 7, 9, 10],
            Mode::Phrygian => [0, 1, 3, 5, 7, 8, 10],
            Mode::Lydian => [0, 2, 4, 6, 7, 9, 11],
            Mode::Mixolydian => [0, 2, 4, 5, 7, 9, 10],
            Mode::Aeolian => [0, 2, 3, 5, 7, 8, 10],
            Mode::Locrian => [0, 1, 3, 5, 6, 8, 10],
        }
    }

    /// Whether `pitch_class` belongs to this mode built on `root`
    pub fn contains(&self, root: u8, pitch_class: u8) -> bool {
        let interval = (pitch_class as i32 - root as i32).rem_euclid(12);
        self.offsets().contains(&interval)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "major (ionian)" | "major" | "ionian" => Ok(Mode::Ionian),
            "dorian" => Ok(Mode::Dorian),
            "phrygian" => Ok(Mode::Phrygian),
            "lydian" => Ok(Mode::Lydian),
            "mixolydian" => Ok(Mode::Mixolydian),
            "minor (aeolian)" | "minor" | "aeolian" => Ok(Mode::Aeolian),
            "locrian" => Ok(Mode::Locrian),
            _ => Err(format!("Invalid mode: '{}'", s)),
        }
    }
}

/// Build the annotations for `mode` on `root` (pitch class 0..12).
///
/// For every string and every root pitch in `[LOWEST_PITCH, HIGHEST_PITCH]`
/// the root cell gets `primary`; each other degree `root + offset` gets the
/// light pair, when it is still within range. The result replaces whatever
/// annotations existed.
pub fn generate_scale(strings: &StringSet, root: u8, mode: Mode, primary: &Color) -> AnnotationMap {
    let light = light_variant(primary);
    let root = root % 12;
    let mut annotations = AnnotationMap::new();

    for string in strings.strings() {
        for value in LOWEST_PITCH..=HIGHEST_PITCH {
            let root_pitch = Pitch(value);
            if root_pitch.pitch_class() != root {
                continue;
            }
            annotations.set(CellKey::new(root_pitch, string.id), primary.clone());

            for &offset in mode.offsets().iter().skip(1) {
                let degree = root_pitch.transpose(offset);
                if degree.value() <= HIGHEST_PITCH {
                    annotations.set(CellKey::new(degree, string.id), light.clone());
                }
            }
        }
    }

    log::debug!(
        "Generated {} {} across {} strings ({} cells)",
        root,
        mode,
        strings.len(),
        annotations.len()
    );
    annotations
}
