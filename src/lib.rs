//! Fretboard Diagram Maker WASM Module
//!
//! Core of the fretboard diagram maker: the note/fret/string coordinate
//! model, the layout engine that turns it into a display list, the scale
//! generator, multi-board sessions and the share format.

pub mod errors;
pub mod models;
pub mod config;
pub mod layout;
pub mod scale;
pub mod audio;
pub mod share;
pub mod session;
pub mod api;

// Re-export commonly used types
pub use api::FretboardEditor;
pub use config::{FretboardConfig, Toggles};
pub use errors::{AudioError, PitchError, ShareError};
pub use layout::{DisplayList, LayoutEngine};
pub use models::*;
pub use scale::{generate_scale, Mode};
pub use session::{BoardState, KeyCommand, Session, SessionView, BOARD_SLOTS};
pub use share::{InMemoryShareStore, SharePayload, ShareLink, ShareStore};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        crate::wasm_warn!("Logger already initialized: {}", e);
    }

    log::info!("Fretboard WASM module initialized");
}
