//! Fretboard layout computation
//!
//! Combines the string set, the annotations, the fret window and the
//! display toggles into a DisplayList.

use crate::config::Toggles;
use crate::models::{
    name_of, visible_pitches_for_string, AnnotationMap, CellKey, FretWindow, ScreenSide, StringSet,
};

use super::display_list::*;
use super::positions::{fret_marker_positions, is_zeroth_fret, note_positions};

/// Main layout engine for computing display lists
pub struct LayoutEngine {
    fret_width_px: u32,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(75)
    }
}

impl LayoutEngine {
    pub fn new(fret_width_px: u32) -> Self {
        Self { fret_width_px }
    }

    /// Compute the complete display list for one board
    pub fn compute_layout(
        &self,
        strings: &StringSet,
        annotations: &AnnotationMap,
        window: &FretWindow,
        toggles: &Toggles,
    ) -> DisplayList {
        let lefty = toggles.lefty;
        let n = window.visible_count();
        let tuning_name = strings.tuning_name().to_string();
        let positions = note_positions(n, window.first(), lefty);

        // Last divider sits on the board edge and is not drawn
        let fret_markers = fret_marker_positions(n)
            .into_iter()
            .enumerate()
            .filter(|&(i, _)| i as u32 != n - 1)
            .map(|(i, left)| RenderFretMarker {
                left,
                is_nut: is_zeroth_fret(i as u32, window, lefty),
            })
            .collect();

        let fret_labels = window
            .fret_labels(lefty)
            .into_iter()
            .zip(positions.iter())
            .map(|(fret, &left)| RenderFretLabel { fret, left })
            .collect();

        let render_strings = strings
            .strings()
            .iter()
            .map(|string| {
                let notes = visible_pitches_for_string(string.pitch, window, lefty)
                    .into_iter()
                    .zip(positions.iter())
                    .filter(|(pitch, _)| pitch.is_audible())
                    .map(|(pitch, &left)| {
                        let key = CellKey::new(pitch, string.id);
                        let color = annotations.get(&key).map(|c| c.to_string());
                        RenderNote {
                            key: key.to_string(),
                            pitch: pitch.value(),
                            string_id: string.id,
                            label: name_of(pitch, toggles.use_sharps).to_string(),
                            left,
                            hidden: toggles.hide_notes && color.is_none(),
                            color,
                        }
                    })
                    .collect();

                RenderString {
                    id: string.id,
                    open_pitch: string.pitch.value(),
                    label: name_of(string.pitch, toggles.use_sharps).to_string(),
                    notes,
                }
            })
            .collect();

        let side = |side: ScreenSide| SideControls {
            can_increase: window.can_increase(side, lefty),
            can_decrease: window.can_decrease(side, lefty),
        };

        DisplayList {
            tuning_name,
            first_visible_fret: window.first(),
            last_visible_fret: window.last(),
            visible_fret_count: n,
            min_width_px: (n + 1) * self.fret_width_px,
            strings_min_width_px: n * self.fret_width_px,
            lefty,
            dark_mode: toggles.dark_mode,
            fret_markers,
            fret_labels,
            strings: render_strings,
            controls: RenderControls {
                left: side(ScreenSide::Left),
                right: side(ScreenSide::Right),
            },
        }
    }
}
