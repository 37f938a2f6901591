//! Catalog of named preset tunings
//!
//! Presets are listed highest string first, in the order the dropdown shows
//! them. Classification walks the catalog in declaration order and returns
//! the first exact match, so the order here is part of the contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::pitch::Pitch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetTuning {
    Standard,
    DropD,
    HalfStepDown,
    FullStepDown,
    DropC,
    OpenD,
    OpenG,
    OpenC,
    Dadgad,
    DoubleDropD,
    AllFourths,
    AllFourthsExtended,
    BassStandard,
}

impl PresetTuning {
    /// Every preset in classification order
    pub const ALL: [PresetTuning; 13] = [
        PresetTuning::Standard,
        PresetTuning::DropD,
        PresetTuning::HalfStepDown,
        PresetTuning::FullStepDown,
        PresetTuning::DropC,
        PresetTuning::OpenD,
        PresetTuning::OpenG,
        PresetTuning::OpenC,
        PresetTuning::Dadgad,
        PresetTuning::DoubleDropD,
        PresetTuning::AllFourths,
        PresetTuning::AllFourthsExtended,
        PresetTuning::BassStandard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PresetTuning::Standard => "standard",
            PresetTuning::DropD => "drop-d",
            PresetTuning::HalfStepDown => "half-step-down",
            PresetTuning::FullStepDown => "full-step-down",
            PresetTuning::DropC => "drop-c",
            PresetTuning::OpenD => "open-d",
            PresetTuning::OpenG => "open-g",
            PresetTuning::OpenC => "open-c",
            PresetTuning::Dadgad => "dadgad",
            PresetTuning::DoubleDropD => "double-drop-d",
            PresetTuning::AllFourths => "all-fourths",
            PresetTuning::AllFourthsExtended => "all-fourths-extended",
            PresetTuning::BassStandard => "bass-standard",
        }
    }

    /// Open-string pitches, highest string first
    pub fn pitches(&self) -> &'static [i32] {
        match self {
            PresetTuning::Standard => &[64, 59, 55, 50, 45, 40],
            PresetTuning::DropD => &[64, 59, 55, 50, 45, 38],
            PresetTuning::HalfStepDown => &[63, 58, 54, 49, 44, 39],
            PresetTuning::FullStepDown => &[62, 57, 53, 48, 43, 38],
            PresetTuning::DropC => &[62, 57, 53, 48, 43, 36],
            PresetTuning::OpenD => &[62, 57, 54, 50, 45, 38],
            PresetTuning::OpenG => &[62, 59, 55, 50, 43, 38],
            PresetTuning::OpenC => &[64, 60, 55, 48, 43, 36],
            PresetTuning::Dadgad => &[62, 57, 55, 50, 45, 38],
            PresetTuning::DoubleDropD => &[62, 59, 55, 50, 45, 38],
            PresetTuning::AllFourths => &[65, 60, 55, 50, 45, 40],
            PresetTuning::AllFourthsExtended => {
                &[88, 83, 78, 73, 68, 63, 58, 53, 48, 43, 38, 33, 28]
            }
            PresetTuning::BassStandard => &[43, 38, 33, 28],
        }
    }

    /// Whether the preset is offered in the tuning menu
    pub fn is_listed(&self) -> bool {
        !matches!(self, PresetTuning::AllFourthsExtended)
    }

    /// Presets offered in the tuning menu, in menu order
    pub fn listed() -> impl Iterator<Item = PresetTuning> {
        Self::ALL.into_iter().filter(|p| p.is_listed())
    }
}

impl fmt::Display for PresetTuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of classifying a pitch sequence against the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TuningName {
    Preset(PresetTuning),
    Custom,
}

impl TuningName {
    pub fn as_str(&self) -> &'static str {
        match self {
            TuningName::Preset(preset) => preset.as_str(),
            TuningName::Custom => "custom",
        }
    }

    /// Pitches to apply for this name; `None` for custom, which never
    /// changes the current tuning
    pub fn apply(&self) -> Option<Vec<Pitch>> {
        match self {
            TuningName::Preset(preset) => {
                Some(preset.pitches().iter().copied().map(Pitch).collect())
            }
            TuningName::Custom => None,
        }
    }
}

impl fmt::Display for TuningName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TuningName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "custom" {
            return Ok(TuningName::Custom);
        }
        PresetTuning::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .map(TuningName::Preset)
            .ok_or_else(|| format!("Unknown tuning: '{}'", s))
    }
}

impl From<TuningName> for String {
    fn from(name: TuningName) -> Self {
        name.as_str().to_string()
    }
}

impl TryFrom<String> for TuningName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Name of the first preset whose pitches equal `pitches` element by
/// element, or `Custom` when none does
pub fn classify(pitches: &[Pitch]) -> TuningName {
    PresetTuning::ALL
        .into_iter()
        .find(|preset| {
            let expected = preset.pitches();
            expected.len() == pitches.len()
                && expected.iter().zip(pitches).all(|(a, b)| *a == b.value())
        })
        .map(TuningName::Preset)
        .unwrap_or(TuningName::Custom)
}
