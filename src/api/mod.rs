//! Fretboard WASM API
//!
//! This module provides the JavaScript-facing API for the fretboard editor.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `editor`: The `FretboardEditor` class owning one editing session

pub mod helpers;
pub mod editor;

pub use editor::{FretboardEditor, JsInstrument};
