//! Pitch representation and conversion logic
//!
//! A pitch is a semitone-quantized integer (MIDI numbering, 60 = C4).
//! This module converts pitches to letter/accidental/octave names and parses
//! scientific pitch notation typed by the user back into pitches.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::PitchError;

/// Lowest pitch the instrument range accepts (A0)
pub const LOWEST_PITCH: i32 = 21;

/// Highest audible/displayable pitch (C8); cells above it are left blank
pub const HIGHEST_PITCH: i32 = 108;

static NOTE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Ga-g][#b]?)(\d+)$").expect("note pattern is a valid regex")
});

/// One semitone-quantized note value
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Pitch(pub i32);

impl Pitch {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// Pitch class 0..12 (0 = C)
    pub fn pitch_class(self) -> u8 {
        self.0.rem_euclid(12) as u8
    }

    /// Scientific octave number (C4 = 60)
    pub fn octave(self) -> i32 {
        self.0.div_euclid(12) - 1
    }

    /// Pitch `semitones` above (or below, if negative) this one
    pub fn transpose(self, semitones: i32) -> Pitch {
        Pitch(self.0 + semitones)
    }

    /// Whether the pitch is rendered and clickable
    pub fn is_audible(self) -> bool {
        self.0 <= HIGHEST_PITCH
    }

    /// Whether the tuning editor would accept this pitch
    pub fn is_valid(self) -> bool {
        in_instrument_range(self.pitch_class(), self.0.div_euclid(12))
    }

    /// Letter name in the requested spelling
    pub fn name(self, use_sharps: bool) -> NoteName {
        name_of(self, use_sharps)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Pitch {
    fn from(value: i32) -> Self {
        Pitch(value)
    }
}

/// Accidental attached to a note letter
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Accidental {
    Sharp,
    Flat,
}

impl Accidental {
    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }
}

/// Letter, accidental and octave of a pitch, e.g. `A#4`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteName {
    pub letter: char,
    pub accidental: Option<Accidental>,
    pub octave: i32,
}

impl NoteName {
    /// Name without the octave, e.g. `Bb`
    pub fn pitch_class_label(&self) -> String {
        match self.accidental {
            Some(acc) => format!("{}{}", self.letter, acc.symbol()),
            None => self.letter.to_string(),
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class_label(), self.octave)
    }
}

const SHARP_NAMES: [(char, Option<Accidental>); 12] = [
    ('C', None),
    ('C', Some(Accidental::Sharp)),
    ('D', None),
    ('D', Some(Accidental::Sharp)),
    ('E', None),
    ('F', None),
    ('F', Some(Accidental::Sharp)),
    ('G', None),
    ('G', Some(Accidental::Sharp)),
    ('A', None),
    ('A', Some(Accidental::Sharp)),
    ('B', None),
];

const FLAT_NAMES: [(char, Option<Accidental>); 12] = [
    ('C', None),
    ('D', Some(Accidental::Flat)),
    ('D', None),
    ('E', Some(Accidental::Flat)),
    ('E', None),
    ('F', None),
    ('G', Some(Accidental::Flat)),
    ('G', None),
    ('A', Some(Accidental::Flat)),
    ('A', None),
    ('B', Some(Accidental::Flat)),
    ('B', None),
];

/// Pitch-class labels for root selection menus
pub fn pitch_class_labels(use_sharps: bool) -> Vec<String> {
    (0..12)
        .map(|pc| name_of(Pitch(pc), use_sharps).pitch_class_label())
        .collect()
}

/// Convert a pitch to its letter name and octave
pub fn name_of(pitch: Pitch, use_sharps: bool) -> NoteName {
    let table = if use_sharps { &SHARP_NAMES } else { &FLAT_NAMES };
    let (letter, accidental) = table[pitch.pitch_class() as usize];
    NoteName {
        letter,
        accidental,
        octave: pitch.octave(),
    }
}

/// Semitone offset from C for an uppercased note token
fn note_offset(token: &str) -> Option<i32> {
    match token {
        "C" => Some(0),
        "C#" | "DB" => Some(1),
        "D" => Some(2),
        "D#" | "EB" => Some(3),
        "E" => Some(4),
        "F" => Some(5),
        "F#" | "GB" => Some(6),
        "G" => Some(7),
        "G#" | "AB" => Some(8),
        "A" => Some(9),
        "A#" | "BB" => Some(10),
        "B" => Some(11),
        _ => None,
    }
}

/// A0..C8, with only A/A#/Bb allowed in octave 0 and only C in octave 8.
/// `internal_octave` is the scientific octave plus one.
fn in_instrument_range(pitch_class: u8, internal_octave: i32) -> bool {
    if internal_octave > 9 || internal_octave < 1 {
        return false;
    }
    if internal_octave <= 1 && !matches!(pitch_class, 9 | 10) {
        return false;
    }
    if internal_octave == 9 && pitch_class != 0 {
        return false;
    }
    true
}

/// Parse scientific pitch notation (`E2`, `A#4`, `Bb2`) into a pitch.
///
/// Both sharp and flat spellings are accepted whatever the display
/// preference. The note letter is case-insensitive.
pub fn parse_pitch(text: &str) -> Result<Pitch, PitchError> {
    let text = text.trim();
    let captures = NOTE_PATTERN
        .captures(text)
        .ok_or_else(|| PitchError::InvalidFormat(text.to_string()))?;

    let token = captures[1].to_uppercase();
    let offset = note_offset(&token).ok_or_else(|| PitchError::InvalidFormat(text.to_string()))?;

    let octave_input: i32 = captures[2]
        .parse()
        .map_err(|_| PitchError::OutOfRange(text.to_string()))?;
    let internal_octave = octave_input
        .checked_add(1)
        .ok_or_else(|| PitchError::OutOfRange(text.to_string()))?;

    if !in_instrument_range(offset as u8, internal_octave) {
        return Err(PitchError::OutOfRange(text.to_string()));
    }

    Ok(Pitch(internal_octave * 12 + offset))
}

/// Parse a root name without octave (`C`, `F#`, `Bb`) into a pitch class
pub fn parse_pitch_class(text: &str) -> Result<u8, PitchError> {
    let token = text.trim().to_uppercase();
    note_offset(&token)
        .map(|offset| offset as u8)
        .ok_or_else(|| PitchError::InvalidFormat(text.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_of_standard_strings() {
        assert_eq!(name_of(Pitch(64), true).to_string(), "E4");
        assert_eq!(name_of(Pitch(40), true).to_string(), "E2");
        assert_eq!(name_of(Pitch(60), true).to_string(), "C4");
    }

    #[test]
    fn test_name_of_spelling() {
        assert_eq!(name_of(Pitch(70), true).to_string(), "A#4");
        assert_eq!(name_of(Pitch(70), false).to_string(), "Bb4");
        assert_eq!(name_of(Pitch(61), false).pitch_class_label(), "Db");
    }

    #[test]
    fn test_parse_examples() {
        assert_eq!(parse_pitch("E2"), Ok(Pitch(40)));
        assert_eq!(parse_pitch("A#4"), Ok(Pitch(70)));
        assert_eq!(parse_pitch("Bb2"), Ok(Pitch(46)));
        assert_eq!(parse_pitch("A0"), Ok(Pitch(21)));
        assert_eq!(parse_pitch("C8"), Ok(Pitch(108)));
    }

    #[test]
    fn test_parse_case_insensitive_letter() {
        assert_eq!(parse_pitch("e2"), Ok(Pitch(40)));
        assert_eq!(parse_pitch("bb2"), Ok(Pitch(46)));
        assert_eq!(parse_pitch("f#3"), Ok(Pitch(54)));
    }

    #[test]
    fn test_parse_invalid_format() {
        for text in ["", "H2", "E", "2E", "E#x", "C##4", "E-1", "Fb3", "E#3"] {
            assert!(
                matches!(parse_pitch(text), Err(PitchError::InvalidFormat(_))),
                "expected InvalidFormat for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_parse_out_of_range() {
        for text in ["G#0", "B0", "C#8", "D8", "C9", "E99999999999"] {
            assert!(
                matches!(parse_pitch(text), Err(PitchError::OutOfRange(_))),
                "expected OutOfRange for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_roundtrip_all_valid_pitches() {
        for value in 0..=127 {
            let pitch = Pitch(value);
            if !pitch.is_valid() {
                continue;
            }
            for use_sharps in [true, false] {
                let name = name_of(pitch, use_sharps).to_string();
                assert_eq!(parse_pitch(&name), Ok(pitch), "roundtrip of {}", name);
            }
        }
    }

    #[test]
    fn test_valid_range_edges() {
        assert!(Pitch(21).is_valid());
        assert!(Pitch(22).is_valid());
        assert!(Pitch(24).is_valid());
        assert!(Pitch(108).is_valid());
        assert!(!Pitch(20).is_valid());
        assert!(!Pitch(109).is_valid());
    }

    #[test]
    fn test_pitch_class_labels() {
        let sharps = pitch_class_labels(true);
        assert_eq!(sharps.len(), 12);
        assert_eq!(sharps[1], "C#");
        assert_eq!(pitch_class_labels(false)[10], "Bb");
    }

    #[test]
    fn test_parse_pitch_class() {
        assert_eq!(parse_pitch_class("C"), Ok(0));
        assert_eq!(parse_pitch_class("f#"), Ok(6));
        assert_eq!(parse_pitch_class("Bb"), Ok(10));
        assert!(matches!(parse_pitch_class("H"), Err(PitchError::InvalidFormat(_))));
        assert!(parse_pitch_class("C4").is_err());
    }
}
