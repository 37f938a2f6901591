//! Display List for Fretboard Rendering
//!
//! The DisplayList carries every position, label and color JavaScript needs
//! to draw the fretboard (and to export it as an image) without doing any
//! layout of its own.

use serde::{Deserialize, Serialize};

/// Top-level display list
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayList {
    /// Catalog name of the current tuning ("custom" if none matches)
    pub tuning_name: String,

    pub first_visible_fret: u32,
    pub last_visible_fret: u32,
    pub visible_fret_count: u32,

    /// Minimum board width so the side controls never overflow
    pub min_width_px: u32,

    /// Minimum width of the string container
    pub strings_min_width_px: u32,

    pub lefty: bool,
    pub dark_mode: bool,

    /// Divider lines, final divider already suppressed
    pub fret_markers: Vec<RenderFretMarker>,

    /// Fret numbers in screen order
    pub fret_labels: Vec<RenderFretLabel>,

    /// Strings, highest first
    pub strings: Vec<RenderString>,

    /// Enabled state of the increase/decrease controls per screen side
    pub controls: RenderControls,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderFretMarker {
    /// Percent from the left edge
    pub left: f64,

    /// Nut divider (drawn heavier)
    pub is_nut: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderFretLabel {
    pub fret: u32,
    pub left: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderString {
    pub id: i32,
    pub open_pitch: i32,

    /// Open-string name, e.g. "E2"
    pub label: String,

    /// Audible notes only; inaudible cells are skipped but keep their slot
    pub notes: Vec<RenderNote>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderNote {
    /// Cell key, "{pitch}-{stringId}"
    pub key: String,
    pub pitch: i32,
    pub string_id: i32,

    /// Note name with octave
    pub label: String,

    /// Percent from the left edge
    pub left: f64,

    pub color: Option<String>,

    /// Uncolored note while "hide notes" is on
    pub hidden: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SideControls {
    pub can_increase: bool,
    pub can_decrease: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderControls {
    pub left: SideControls,
    pub right: SideControls,
}
