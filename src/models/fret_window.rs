//! Visible fret window
//!
//! The window is the half-open fret range `[first, last)`. Fret 0 is the
//! open string. Shrinking is refused once three or fewer frets are visible;
//! growing past the high end is unbounded.
//!
//! Controls are defined in screen terms (left/right). In lefty mode the
//! fretboard is mirrored, so screen-left drives the logical high end.

use serde::{Deserialize, Serialize};

/// Shrinking is refused at or below this many visible frets
pub const MIN_VISIBLE_FRETS: u32 = 3;

/// Default window shown on load
pub const DEFAULT_FIRST_FRET: u32 = 0;
pub const DEFAULT_LAST_FRET: u32 = 16;

/// Side of the screen a control sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenSide {
    Left,
    Right,
}

/// Contiguous fret range currently rendered
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FretWindow {
    #[serde(rename = "firstVisibleFretIndex")]
    first: u32,
    #[serde(rename = "lastVisibleFretIndex")]
    last: u32,
}

impl Default for FretWindow {
    fn default() -> Self {
        Self {
            first: DEFAULT_FIRST_FRET,
            last: DEFAULT_LAST_FRET,
        }
    }
}

impl FretWindow {
    /// Create a window. Returns `None` unless `last > first`.
    pub fn new(first: u32, last: u32) -> Option<Self> {
        if last > first {
            Some(Self { first, last })
        } else {
            None
        }
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    /// Number of visible frets (`last - first`, always at least 1)
    pub fn visible_count(&self) -> u32 {
        self.last - self.first
    }

    /// Whether the open string (fret 0) is inside the window
    pub fn includes_open_fret(&self) -> bool {
        self.first == 0
    }

    fn can_shrink(&self) -> bool {
        self.visible_count() > MIN_VISIBLE_FRETS
    }

    /// Reveal one more fret toward the nut
    pub fn increase_first(&mut self) -> bool {
        if self.first == 0 {
            return false;
        }
        self.first -= 1;
        true
    }

    /// Hide the fret nearest the nut
    pub fn decrease_first(&mut self) -> bool {
        if !self.can_shrink() {
            return false;
        }
        self.first += 1;
        true
    }

    /// Reveal one more fret toward the body
    pub fn increase_last(&mut self) -> bool {
        self.last += 1;
        true
    }

    /// Hide the fret farthest from the nut
    pub fn decrease_last(&mut self) -> bool {
        if !self.can_shrink() {
            return false;
        }
        self.last -= 1;
        true
    }

    /// Whether `side` acts on the logical low (`first`) end
    fn drives_first(side: ScreenSide, lefty: bool) -> bool {
        matches!(
            (side, lefty),
            (ScreenSide::Left, false) | (ScreenSide::Right, true)
        )
    }

    /// Grow the window from a screen side
    pub fn increase(&mut self, side: ScreenSide, lefty: bool) -> bool {
        if Self::drives_first(side, lefty) {
            self.increase_first()
        } else {
            self.increase_last()
        }
    }

    /// Shrink the window from a screen side
    pub fn decrease(&mut self, side: ScreenSide, lefty: bool) -> bool {
        if Self::drives_first(side, lefty) {
            self.decrease_first()
        } else {
            self.decrease_last()
        }
    }

    /// Whether the increase control on `side` is enabled
    pub fn can_increase(&self, side: ScreenSide, lefty: bool) -> bool {
        if Self::drives_first(side, lefty) {
            self.first > 0
        } else {
            true
        }
    }

    /// Whether the decrease control on `side` is enabled
    pub fn can_decrease(&self, _side: ScreenSide, _lefty: bool) -> bool {
        self.can_shrink()
    }

    /// Fret numbers in screen order, left to right
    pub fn fret_labels(&self, lefty: bool) -> Vec<u32> {
        let labels = self.first..self.last;
        if lefty {
            labels.rev().collect()
        } else {
            labels.collect()
        }
    }
}
