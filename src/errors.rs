//! Error types for the fretboard core
//!
//! Validation errors are recovered at the point of input (the tuning editor
//! reverts its draft); resource errors are logged and degrade the feature.
//! Nothing here is fatal.

use thiserror::Error;

/// Errors raised while turning user text into a pitch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchError {
    /// Text is not `<letter><optional # or b><octave digits>`
    #[error("Invalid note format '{0}'. Use scientific pitch notation, e.g. E2, A#4, Bb2")]
    InvalidFormat(String),

    /// Parsed note lies outside A0..C8
    #[error("Note '{0}' is out of range. Valid range: [A0, C8]")]
    OutOfRange(String),
}

/// Errors raised by the share collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// Payload could not be decoded (bad JSON, bad tuning string, bad cell key)
    #[error("Malformed share payload: {0}")]
    Malformed(String),

    /// No board stored under the requested id
    #[error("Shared board not found: {0}")]
    NotFound(String),

    /// The store refused or failed to persist the board
    #[error("Failed to save shared board: {0}")]
    SaveFailed(String),
}

/// Errors raised by the audio collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    /// No instrument is loaded (still loading, or loading failed)
    #[error("Instrument not loaded")]
    Unavailable,

    /// The instrument rejected the play call
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}
