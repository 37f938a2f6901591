//! JavaScript-facing fretboard editor
//!
//! `FretboardEditor` owns one editing session. After any mutation the page
//! calls `render()` and draws the returned view. Validation failures are
//! thrown as strings for the page to show to the user.

use wasm_bindgen::prelude::*;

use crate::audio::{Instrument, PlayOptions};
use crate::config::{FretboardConfig, Toggles};
use crate::errors::AudioError;
use crate::models::palette::{PALETTE, PALETTE_LIGHT, PALETTE_SIZE};
use crate::models::{parse_pitch_class, pitch_class_labels, ColorSelection, Pitch, PresetTuning, TuningName};
use crate::scale::Mode;
use crate::session::Session;
use crate::share::ShareLink;
use crate::{wasm_info, wasm_log, wasm_warn};

use super::helpers::{
    deserialize_or_default, parse_side, serialize, validate_index, validate_slot, validation_error,
};

#[wasm_bindgen]
extern "C" {
    /// Loaded sample instrument (e.g. a soundfont player)
    pub type JsInstrument;

    #[wasm_bindgen(method, catch)]
    fn play(this: &JsInstrument, pitch: i32, start: f64, options: JsValue) -> Result<JsValue, JsValue>;
}

struct JsInstrumentHandle(JsInstrument);

impl Instrument for JsInstrumentHandle {
    fn play(&self, pitch: Pitch, start_offset: f64, options: PlayOptions) -> Result<(), AudioError> {
        let options = serde_wasm_bindgen::to_value(&options)
            .map_err(|e| AudioError::PlaybackFailed(e.to_string()))?;
        self.0
            .play(pitch.value(), start_offset, options)
            .map(|_| ())
            .map_err(|e| AudioError::PlaybackFailed(format!("{:?}", e)))
    }
}

#[wasm_bindgen]
pub struct FretboardEditor {
    session: Session,
}

#[wasm_bindgen]
impl FretboardEditor {
    /// Create an editor. `config` may be omitted; missing fields take their
    /// defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<FretboardEditor, JsValue> {
        let config: FretboardConfig = deserialize_or_default(config, "Invalid editor config")?;
        wasm_info!(
            "FretboardEditor created: frets {}..{}",
            config.first_visible_fret,
            config.last_visible_fret
        );
        Ok(Self {
            session: Session::new(&config),
        })
    }

    /// Current view: display list plus active board, color and editor state
    pub fn render(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session.view(), "Failed to serialize view")
    }

    #[wasm_bindgen(js_name = tuningName)]
    pub fn tuning_name(&self) -> String {
        self.session.tuning_name().to_string()
    }

    #[wasm_bindgen(js_name = activeBoard)]
    pub fn active_board(&self) -> usize {
        self.session.active_slot()
    }

    // ------------------------------------------------------------------
    // Notes and colors
    // ------------------------------------------------------------------

    /// Toggle a cell; returns "painted", "cleared" or "unchanged"
    #[wasm_bindgen(js_name = clickNote)]
    pub fn click_note(&mut self, pitch: i32, string_id: i32) -> String {
        let outcome = self.session.click_note(Pitch(pitch), string_id);
        wasm_log!("clickNote {}-{}: {:?}", pitch, string_id, outcome);
        format!("{:?}", outcome).to_lowercase()
    }

    /// Set the active color: a hex string or "none"
    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&mut self, color: String) {
        self.session.set_color(ColorSelection::from(color));
    }

    #[wasm_bindgen(js_name = selectPaletteColor)]
    pub fn select_palette_color(&mut self, index: usize, light: bool) -> Result<(), JsValue> {
        validate_index(index, PALETTE_SIZE, "Palette").map_err(validation_error)?;
        self.session.select_palette(index, light);
        Ok(())
    }

    #[wasm_bindgen(js_name = clearAnnotations)]
    pub fn clear_annotations(&mut self) {
        self.session.clear_annotations();
    }

    /// Replace the annotations with a scale, e.g. `("F#", "Dorian")`
    #[wasm_bindgen(js_name = generateScale)]
    pub fn generate_scale(&mut self, root: &str, mode: &str) -> Result<(), JsValue> {
        let root_class = parse_pitch_class(root).map_err(|e| validation_error(e.to_string()))?;
        let mode: Mode = mode.parse().map_err(validation_error)?;
        wasm_info!("generateScale: {} {}", root, mode);
        self.session.generate_scale(root_class, mode);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Strings and tuning
    // ------------------------------------------------------------------

    #[wasm_bindgen(js_name = growHigh)]
    pub fn grow_high(&mut self) -> bool {
        self.session.grow_high()
    }

    #[wasm_bindgen(js_name = shrinkHigh)]
    pub fn shrink_high(&mut self) -> bool {
        self.session.shrink_high()
    }

    #[wasm_bindgen(js_name = growLow)]
    pub fn grow_low(&mut self) -> bool {
        self.session.grow_low()
    }

    #[wasm_bindgen(js_name = shrinkLow)]
    pub fn shrink_low(&mut self) -> bool {
        self.session.shrink_low()
    }

    /// Apply a preset by name; "custom" changes nothing
    #[wasm_bindgen(js_name = applyTuning)]
    pub fn apply_tuning(&mut self, name: &str) -> Result<bool, JsValue> {
        let name: TuningName = name.parse().map_err(validation_error)?;
        Ok(self.session.apply_tuning(name))
    }

    #[wasm_bindgen(js_name = resetTuning)]
    pub fn reset_tuning(&mut self) {
        self.session.reset_tuning();
    }

    #[wasm_bindgen(js_name = beginTuningEdit)]
    pub fn begin_tuning_edit(&mut self, string_id: i32) -> bool {
        self.session.begin_tuning_edit(string_id)
    }

    #[wasm_bindgen(js_name = updateTuningDraft)]
    pub fn update_tuning_draft(&mut self, text: String) {
        self.session.update_tuning_draft(text);
    }

    /// Commit the open field. On invalid input the string keeps its pitch
    /// and the error message is thrown for the page to display.
    #[wasm_bindgen(js_name = commitTuningEdit)]
    pub fn commit_tuning_edit(&mut self) -> Result<bool, JsValue> {
        self.session
            .commit_tuning_edit()
            .map(|pitch| pitch.is_some())
            .map_err(|e| validation_error(e.to_string()))
    }

    #[wasm_bindgen(js_name = cancelTuningEdit)]
    pub fn cancel_tuning_edit(&mut self) {
        self.session.cancel_tuning_edit();
    }

    // ------------------------------------------------------------------
    // Fret window, toggles, boards, keyboard
    // ------------------------------------------------------------------

    /// Grow the window from a screen side ("left" or "right")
    #[wasm_bindgen(js_name = increaseFrets)]
    pub fn increase_frets(&mut self, side: &str) -> Result<bool, JsValue> {
        let side = parse_side(side).map_err(validation_error)?;
        Ok(self.session.increase_frets(side))
    }

    /// Shrink the window from a screen side ("left" or "right")
    #[wasm_bindgen(js_name = decreaseFrets)]
    pub fn decrease_frets(&mut self, side: &str) -> Result<bool, JsValue> {
        let side = parse_side(side).map_err(validation_error)?;
        Ok(self.session.decrease_frets(side))
    }

    #[wasm_bindgen(js_name = setToggles)]
    pub fn set_toggles(&mut self, toggles: JsValue) -> Result<(), JsValue> {
        let toggles: Toggles = deserialize_or_default(toggles, "Invalid toggles")?;
        self.session.set_toggles(toggles);
        Ok(())
    }

    #[wasm_bindgen(js_name = switchBoard)]
    pub fn switch_board(&mut self, slot: usize) -> Result<(), JsValue> {
        validate_slot(slot).map_err(validation_error)?;
        self.session.switch_board(slot);
        Ok(())
    }

    /// Handle a `keydown`; returns true when a shortcut ran
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str, in_text_input: bool) -> bool {
        self.session.handle_key(key, in_text_input)
    }

    // ------------------------------------------------------------------
    // Audio
    // ------------------------------------------------------------------

    #[wasm_bindgen(js_name = attachInstrument)]
    pub fn attach_instrument(&mut self, instrument: JsInstrument) {
        self.session
            .audio_mut()
            .attach(Box::new(JsInstrumentHandle(instrument)));
    }

    #[wasm_bindgen(js_name = instrumentLoadFailed)]
    pub fn instrument_load_failed(&mut self, reason: String) {
        wasm_warn!("Instrument failed to load: {}", reason);
        self.session.audio_mut().load_failed(reason);
    }

    // ------------------------------------------------------------------
    // Sharing
    // ------------------------------------------------------------------

    /// JSON body for `POST /api/fretboards`
    #[wasm_bindgen(js_name = sharePayload)]
    pub fn share_payload(&self) -> Result<String, JsValue> {
        self.session
            .share_payload()
            .to_json()
            .map_err(|e| validation_error(e.to_string()))
    }

    /// Feed the result of `GET /share/<id>`; returns false when the default
    /// board was restored instead
    #[wasm_bindgen(js_name = applyShareResponse)]
    pub fn apply_share_response(&mut self, status: u16, body: &str) -> bool {
        self.session.apply_share_response(status, body)
    }

    /// Extract the link from a `POST /api/fretboards` response body
    #[wasm_bindgen(js_name = shareLinkFromResponse)]
    pub fn share_link_from_response(body: &str) -> Result<String, JsValue> {
        let link: ShareLink = serde_json::from_str(body)
            .map_err(|e| validation_error(format!("Malformed share response: {}", e)))?;
        Ok(link.shareable_link)
    }

    // ------------------------------------------------------------------
    // Catalogs for menus
    // ------------------------------------------------------------------

    /// Preset tuning names offered in the menu, then "custom"
    #[wasm_bindgen(js_name = presetTunings)]
    pub fn preset_tunings() -> js_sys::Array {
        PresetTuning::listed()
            .map(|preset| preset.as_str())
            .chain(std::iter::once(TuningName::Custom.as_str()))
            .map(JsValue::from_str)
            .collect()
    }

    pub fn modes() -> js_sys::Array {
        Mode::ALL.iter().map(|mode| JsValue::from_str(mode.as_str())).collect()
    }

    #[wasm_bindgen(js_name = rootNames)]
    pub fn root_names(use_sharps: bool) -> js_sys::Array {
        pitch_class_labels(use_sharps)
            .into_iter()
            .map(JsValue::from)
            .collect()
    }

    pub fn palette(light: bool) -> js_sys::Array {
        let colors = if light { &PALETTE_LIGHT } else { &PALETTE };
        colors.iter().map(|&c| JsValue::from_str(c)).collect()
    }
}
