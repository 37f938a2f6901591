//! Note colors
//!
//! Eight saturated colors, each paired with exactly one light variant, plus
//! the "none" selection that never paints a cell.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A CSS color value as stored in annotations (e.g. `#ff5c5c`)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Saturated palette, in keyboard/menu order
pub const PALETTE: [&str; 8] = [
    "#ff5c5c", // red
    "#ffbf5c", // orange
    "#fff85c", // yellow
    "#9cff5c", // green
    "#5cf0ff", // light blue
    "#5c67ff", // blue
    "#b25cff", // purple
    "#ff5cfd", // magenta
];

/// Light variants, index-paired with `PALETTE`
pub const PALETTE_LIGHT: [&str; 8] = [
    "#ffbebe", "#ffe5be", "#fffcbe", "#d7ffbe", "#bef9ff", "#c1beff", "#e0beff", "#ffbefe",
];

/// Number of color pairs
pub const PALETTE_SIZE: usize = PALETTE.len();

/// Saturated color at `index`
pub fn palette_color(index: usize) -> Option<Color> {
    PALETTE.get(index).map(|c| Color::new(*c))
}

/// Light color at `index`
pub fn palette_light_color(index: usize) -> Option<Color> {
    PALETTE_LIGHT.get(index).map(|c| Color::new(*c))
}

/// Light pair of a saturated color. Light and unknown colors map to
/// themselves.
pub fn light_variant(color: &Color) -> Color {
    PALETTE
        .iter()
        .position(|c| *c == color.as_str())
        .and_then(palette_light_color)
        .unwrap_or_else(|| color.clone())
}

/// The active color selection
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(into = "String", from = "String")]
pub enum ColorSelection {
    /// Clicking never paints; only an exact-match click could clear
    None,
    Color(Color),
}

impl Default for ColorSelection {
    fn default() -> Self {
        ColorSelection::Color(Color::new(PALETTE[0]))
    }
}

impl ColorSelection {
    pub fn color(&self) -> Option<&Color> {
        match self {
            ColorSelection::None => None,
            ColorSelection::Color(c) => Some(c),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ColorSelection::None => "none",
            ColorSelection::Color(c) => c.as_str(),
        }
    }
}

impl From<ColorSelection> for String {
    fn from(selection: ColorSelection) -> Self {
        selection.as_str().to_string()
    }
}

impl From<String> for ColorSelection {
    fn from(value: String) -> Self {
        if value == "none" {
            ColorSelection::None
        } else {
            ColorSelection::Color(Color(value))
        }
    }
}

impl From<&str> for ColorSelection {
    fn from(value: &str) -> Self {
        ColorSelection::from(value.to_string())
    }
}
