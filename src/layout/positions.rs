//! Horizontal placement of fret dividers, notes and labels
//!
//! All positions are percentages of the fretboard width. They depend only on
//! the number of visible frets, whether the open fret is visible, and
//! handedness; never on pitch content.

use crate::models::FretWindow;

/// Divider positions `100/n * i` for `i` in `1..=n`. The caller suppresses
/// the final divider (it sits on the board's right edge).
pub fn fret_marker_positions(n: u32) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let fret_width = 100.0 / n as f64;
    (1..=n).map(|i| fret_width * i as f64).collect()
}

/// Note positions for `n` visible frets, one per cell in screen order.
///
/// Notes sit at cell midpoints. When the open fret is visible, the open
/// note is nudged toward the nut: right-handed it is the first cell at
/// `w - w/3`, left-handed it is the last cell at `w*n - w/1.66`. The two
/// constants differ and both are intentional.
pub fn note_positions(n: u32, first_visible_fret: u32, lefty: bool) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let fret_width = 100.0 / n as f64;
    let midpoint = |i: u32| fret_width * i as f64 - fret_width / 2.0;
    let open_fret_visible = first_visible_fret == 0;

    let mut placements = Vec::with_capacity(n as usize);
    if lefty {
        placements.extend((1..n).map(midpoint));
        if open_fret_visible {
            placements.push(fret_width * n as f64 - fret_width / 1.66);
        } else {
            placements.push(midpoint(n));
        }
        return placements;
    }

    let start = if open_fret_visible {
        placements.push(fret_width - fret_width / 3.0);
        2
    } else {
        1
    };
    placements.extend((start..=n).map(midpoint));
    placements
}

/// Whether divider `marker_index` is the nut, i.e. the open fret is visible
/// and the divider is the one next to the open-string cell on screen
pub fn is_zeroth_fret(marker_index: u32, window: &FretWindow, lefty: bool) -> bool {
    if !window.includes_open_fret() {
        return false;
    }
    if lefty {
        marker_index as i64 == window.visible_count() as i64 - 2
    } else {
        marker_index == 0
    }
}
