//! Note playback
//!
//! The sample-based instrument lives in JavaScript and loads asynchronously.
//! The player tolerates it being absent (still loading, or failed to load)
//! and never lets a playback failure affect the board.

use serde::{Deserialize, Serialize};

use crate::config::PlaybackConfig;
use crate::errors::AudioError;
use crate::models::Pitch;

/// Options forwarded to the instrument's `play` call
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PlayOptions {
    pub gain: f64,
    pub duration: f64,
}

impl From<PlaybackConfig> for PlayOptions {
    fn from(config: PlaybackConfig) -> Self {
        Self {
            gain: config.gain,
            duration: config.duration,
        }
    }
}

/// Silent, very short note played once after loading to prime the
/// audio pipeline
pub const WARM_UP_PITCH: Pitch = Pitch(60);
pub const WARM_UP_OPTIONS: PlayOptions = PlayOptions {
    gain: 0.0,
    duration: 0.01,
};

/// A loaded instrument handle
pub trait Instrument {
    fn play(&self, pitch: Pitch, start_offset: f64, options: PlayOptions) -> Result<(), AudioError>;
}

/// Load state of the instrument
pub enum InstrumentState {
    Loading,
    Ready(Box<dyn Instrument>),
    Failed(String),
}

pub struct AudioPlayer {
    state: InstrumentState,
    options: PlayOptions,
}

impl AudioPlayer {
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            state: InstrumentState::Loading,
            options: config.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, InstrumentState::Ready(_))
    }

    /// Why loading failed, if it did
    pub fn load_error(&self) -> Option<&str> {
        match &self.state {
            InstrumentState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Install a loaded instrument and warm it up
    pub fn attach(&mut self, instrument: Box<dyn Instrument>) {
        if let Err(e) = instrument.play(WARM_UP_PITCH, 0.0, WARM_UP_OPTIONS) {
            log::warn!("Instrument warm-up failed: {}", e);
        }
        self.state = InstrumentState::Ready(instrument);
        log::info!("Instrument loaded");
    }

    /// Record that loading failed; playback stays disabled
    pub fn load_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        log::warn!("Error loading instrument: {}", reason);
        self.state = InstrumentState::Failed(reason);
    }

    /// Play `pitch` with the configured options
    pub fn play(&self, pitch: Pitch) -> Result<(), AudioError> {
        match &self.state {
            InstrumentState::Ready(instrument) => instrument.play(pitch, 0.0, self.options),
            InstrumentState::Loading | InstrumentState::Failed(_) => Err(AudioError::Unavailable),
        }
    }

    /// Play if possible, logging instead of failing
    pub fn play_quietly(&self, pitch: Pitch) {
        match self.play(pitch) {
            Ok(()) => {}
            Err(AudioError::Unavailable) => log::debug!("No instrument, skipping playback of {}", pitch),
            Err(e) => log::warn!("{}", e),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every play call; fails when `fail` is set
    #[derive(Clone, Default)]
    pub struct RecordingInstrument {
        pub calls: Rc<RefCell<Vec<(Pitch, PlayOptions)>>>,
        pub fail: bool,
    }

    impl Instrument for RecordingInstrument {
        fn play(&self, pitch: Pitch, _start_offset: f64, options: PlayOptions) -> Result<(), AudioError> {
            self.calls.borrow_mut().push((pitch, options));
            if self.fail {
                Err(AudioError::PlaybackFailed("device busy".to_string()))
            } else {
                Ok(())
            }
        }
    }
}
