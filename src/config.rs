//! Editor configuration
//!
//! Passed from JavaScript as a plain object; every field is optional and
//! falls back to the defaults the page loads with.

use serde::{Deserialize, Serialize};

use crate::models::fret_window::{DEFAULT_FIRST_FRET, DEFAULT_LAST_FRET};
use crate::models::FretWindow;

/// Display and input toggles shared by every board slot
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Toggles {
    /// Hide notes that have no color
    pub hide_notes: bool,
    /// Play the clicked note
    pub play_audio: bool,
    /// Spell accidentals as sharps (otherwise flats)
    pub use_sharps: bool,
    /// Mirror the fretboard for left-handed players
    pub lefty: bool,
    pub dark_mode: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            hide_notes: false,
            play_audio: true,
            use_sharps: true,
            lefty: false,
            dark_mode: false,
        }
    }
}

/// Options passed to the instrument on every click
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct PlaybackConfig {
    pub gain: f64,
    /// Seconds
    pub duration: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            gain: 1.0,
            duration: 1.5,
        }
    }
}

/// Top-level editor configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FretboardConfig {
    pub first_visible_fret: u32,
    pub last_visible_fret: u32,
    pub toggles: Toggles,
    pub playback: PlaybackConfig,
    /// Pixel width reserved per visible fret
    pub fret_width_px: u32,
}

impl Default for FretboardConfig {
    fn default() -> Self {
        Self {
            first_visible_fret: DEFAULT_FIRST_FRET,
            last_visible_fret: DEFAULT_LAST_FRET,
            toggles: Toggles::default(),
            playback: PlaybackConfig::default(),
            fret_width_px: 75,
        }
    }
}

impl FretboardConfig {
    /// Initial fret window; an empty or inverted range falls back to the
    /// default window
    pub fn window(&self) -> FretWindow {
        FretWindow::new(self.first_visible_fret, self.last_visible_fret).unwrap_or_else(|| {
            log::warn!(
                "Ignoring invalid fret window {}..{}",
                self.first_visible_fret,
                self.last_visible_fret
            );
            FretWindow::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FretboardConfig::default();
        assert_eq!(config.window(), FretWindow::default());
        assert!(config.toggles.play_audio);
        assert!(config.toggles.use_sharps);
        assert!(!config.toggles.lefty);
        assert_eq!(config.fret_width_px, 75);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FretboardConfig =
            serde_json::from_str(r#"{"lastVisibleFret": 12, "toggles": {"lefty": true}}"#).unwrap();
        assert_eq!(config.window(), FretWindow::new(0, 12).unwrap());
        assert!(config.toggles.lefty);
        assert!(config.toggles.play_audio);
        assert_eq!(config.playback, PlaybackConfig::default());
    }

    #[test]
    fn test_invalid_window_falls_back() {
        let config = FretboardConfig {
            first_visible_fret: 9,
            last_visible_fret: 4,
            ..Default::default()
        };
        assert_eq!(config.window(), FretWindow::default());
    }
}
