//! Fretboard Layout Engine
//!
//! This module computes horizontal placement for fret dividers, notes and
//! labels, and assembles a DisplayList for JavaScript to render.

pub mod positions;
pub mod display_list;
pub mod engine;

pub use positions::{fret_marker_positions, is_zeroth_fret, note_positions};
pub use display_list::{DisplayList, RenderFretLabel, RenderFretMarker, RenderNote, RenderString};
pub use engine::LayoutEngine;
