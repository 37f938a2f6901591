//! Models module for the Fretboard Diagram Maker
//!
//! This module contains the note/fret/string coordinate model: pitches,
//! preset tunings, the string set, the visible fret window, cell keys and
//! the color annotations attached to them.

pub mod pitch;
pub mod tuning;
pub mod strings;
pub mod fret_window;
pub mod cell;
pub mod palette;
pub mod annotations;

// Re-export commonly used types
pub use pitch::{name_of, parse_pitch, parse_pitch_class, pitch_class_labels, NoteName, Pitch, HIGHEST_PITCH, LOWEST_PITCH};
pub use tuning::{classify, PresetTuning, TuningName};
pub use strings::{InstrumentString, StringId, StringSet, MAX_STRINGS};
pub use fret_window::{FretWindow, ScreenSide, MIN_VISIBLE_FRETS};
pub use cell::{visible_pitches_for_string, CellKey};
pub use palette::{Color, ColorSelection};
pub use annotations::{AnnotationMap, ToggleOutcome};
