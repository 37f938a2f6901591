//! Editing session
//!
//! One session owns everything the page edits: nine independent board slots
//! (strings, active color and annotations each), the fret window and toggles
//! shared by all slots, the tuning editor, and the audio player. Switching
//! boards only moves the active index; every slot keeps its own state.

pub mod commands;
pub mod tuning_editor;

pub use commands::KeyCommand;
pub use tuning_editor::TuningEditor;

use serde::Serialize;

use crate::audio::AudioPlayer;
use crate::config::{FretboardConfig, Toggles};
use crate::errors::{PitchError, ShareError};
use crate::layout::{DisplayList, LayoutEngine};
use crate::models::palette::{palette_color, palette_light_color, PALETTE};
use crate::models::{
    AnnotationMap, Color, ColorSelection, FretWindow, Pitch, ScreenSide, StringId, StringSet,
    ToggleOutcome, TuningName,
};
use crate::scale::{generate_scale, Mode};
use crate::share::{SharePayload, ShareLink, ShareStore};

/// Number of board slots, addressed 1..=9
pub const BOARD_SLOTS: usize = 9;

/// Per-slot working set
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardState {
    pub strings: StringSet,
    pub color: ColorSelection,
    pub annotations: AnnotationMap,
}

/// Everything the page renders after an update
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    #[serde(flatten)]
    pub layout: DisplayList,

    /// 1-based
    pub active_board: usize,
    pub active_color: String,
    pub toggles: Toggles,
    pub editing_string_id: Option<StringId>,
    pub tuning_draft: String,
}

pub struct Session {
    boards: Vec<BoardState>,
    active: usize,
    window: FretWindow,
    toggles: Toggles,
    editor: TuningEditor,
    layout: LayoutEngine,
    audio: AudioPlayer,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&FretboardConfig::default())
    }
}

impl Session {
    pub fn new(config: &FretboardConfig) -> Self {
        Self {
            boards: vec![BoardState::default(); BOARD_SLOTS],
            active: 0,
            window: config.window(),
            toggles: config.toggles,
            editor: TuningEditor::new(),
            layout: LayoutEngine::new(config.fret_width_px),
            audio: AudioPlayer::new(config.playback),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn board(&self) -> &BoardState {
        &self.boards[self.active]
    }

    fn board_mut(&mut self) -> &mut BoardState {
        &mut self.boards[self.active]
    }

    /// State of slot `slot` (1-based)
    pub fn slot(&self, slot: usize) -> Option<&BoardState> {
        slot.checked_sub(1).and_then(|i| self.boards.get(i))
    }

    /// Active slot, 1-based
    pub fn active_slot(&self) -> usize {
        self.active + 1
    }

    pub fn strings(&self) -> &StringSet {
        &self.board().strings
    }

    pub fn annotations(&self) -> &AnnotationMap {
        &self.board().annotations
    }

    pub fn color(&self) -> &ColorSelection {
        &self.board().color
    }

    pub fn window(&self) -> &FretWindow {
        &self.window
    }

    pub fn toggles(&self) -> &Toggles {
        &self.toggles
    }

    pub fn tuning_editor(&self) -> &TuningEditor {
        &self.editor
    }

    pub fn tuning_name(&self) -> TuningName {
        self.strings().tuning_name()
    }

    pub fn audio(&self) -> &AudioPlayer {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AudioPlayer {
        &mut self.audio
    }

    // ------------------------------------------------------------------
    // Boards
    // ------------------------------------------------------------------

    /// Make slot `slot` (1-based) active. Out-of-range slots are refused.
    pub fn switch_board(&mut self, slot: usize) -> bool {
        if !(1..=BOARD_SLOTS).contains(&slot) {
            log::warn!("Ignoring switch to board {}", slot);
            return false;
        }
        if slot - 1 != self.active {
            self.editor.cancel();
            self.active = slot - 1;
            log::debug!("Switched to board {}", slot);
        }
        true
    }

    // ------------------------------------------------------------------
    // Annotations and color
    // ------------------------------------------------------------------

    /// Click on a note: toggle its annotation, then play it if enabled.
    /// Playback problems are logged and never affect the annotation.
    pub fn click_note(&mut self, pitch: Pitch, string_id: StringId) -> ToggleOutcome {
        let board = &mut self.boards[self.active];
        let outcome = board.annotations.toggle(pitch, string_id, &board.color);

        if self.toggles.play_audio && pitch.is_audible() {
            self.audio.play_quietly(pitch);
        }
        outcome
    }

    pub fn set_color(&mut self, color: ColorSelection) {
        self.board_mut().color = color;
    }

    /// Select palette entry `index`, or its light pair
    pub fn select_palette(&mut self, index: usize, light: bool) -> bool {
        let color = if light {
            palette_light_color(index)
        } else {
            palette_color(index)
        };
        match color {
            Some(color) => {
                self.set_color(ColorSelection::Color(color));
                true
            }
            None => false,
        }
    }

    pub fn clear_annotations(&mut self) {
        self.board_mut().annotations.clear();
    }

    /// Replace the annotations with `mode` on `root` (pitch class).
    ///
    /// Roots use the active color and the other degrees its light pair. With
    /// "none" selected the first palette color is used.
    pub fn generate_scale(&mut self, root: u8, mode: Mode) {
        let primary = self
            .color()
            .color()
            .cloned()
            .unwrap_or_else(|| Color::new(PALETTE[0]));
        let annotations = generate_scale(self.strings(), root, mode, &primary);
        self.board_mut().annotations = annotations;
    }

    // ------------------------------------------------------------------
    // Strings and tuning
    // ------------------------------------------------------------------

    fn after_strings_changed(&mut self) {
        let strings = &self.boards[self.active].strings;
        self.editor.forget_missing(strings);
        log::debug!("Tuning is now {}", strings.tuning_name());
    }

    pub fn grow_high(&mut self) -> bool {
        let changed = self.board_mut().strings.grow_high();
        self.after_strings_changed();
        changed
    }

    pub fn shrink_high(&mut self) -> bool {
        let changed = self.board_mut().strings.shrink_high();
        self.after_strings_changed();
        changed
    }

    pub fn grow_low(&mut self) -> bool {
        let changed = self.board_mut().strings.grow_low();
        self.after_strings_changed();
        changed
    }

    pub fn shrink_low(&mut self) -> bool {
        let changed = self.board_mut().strings.shrink_low();
        self.after_strings_changed();
        changed
    }

    pub fn retune(&mut self, id: StringId, pitch: Pitch) -> bool {
        let changed = self.board_mut().strings.retune(id, pitch);
        self.after_strings_changed();
        changed
    }

    /// Apply a preset; "custom" leaves the strings alone
    pub fn apply_tuning(&mut self, name: TuningName) -> bool {
        let changed = self.board_mut().strings.apply_tuning(name);
        self.after_strings_changed();
        changed
    }

    pub fn reset_tuning(&mut self) {
        self.board_mut().strings.reset_to_standard();
        self.after_strings_changed();
    }

    pub fn begin_tuning_edit(&mut self, id: StringId) -> bool {
        let use_sharps = self.toggles.use_sharps;
        let board = &self.boards[self.active];
        self.editor.begin_edit(&board.strings, id, use_sharps)
    }

    pub fn update_tuning_draft(&mut self, text: impl Into<String>) {
        self.editor.update_draft(text);
    }

    pub fn commit_tuning_edit(&mut self) -> Result<Option<Pitch>, PitchError> {
        let board = &mut self.boards[self.active];
        self.editor.commit(&mut board.strings)
    }

    pub fn cancel_tuning_edit(&mut self) {
        self.editor.cancel();
    }

    // ------------------------------------------------------------------
    // Fret window and toggles
    // ------------------------------------------------------------------

    pub fn increase_frets(&mut self, side: ScreenSide) -> bool {
        self.window.increase(side, self.toggles.lefty)
    }

    pub fn decrease_frets(&mut self, side: ScreenSide) -> bool {
        self.window.decrease(side, self.toggles.lefty)
    }

    pub fn set_toggles(&mut self, toggles: Toggles) {
        self.toggles = toggles;
    }

    // ------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------

    /// Run the shortcut bound to `key`. Keys typed into a text field are
    /// left alone.
    pub fn handle_key(&mut self, key: &str, in_text_input: bool) -> bool {
        if in_text_input {
            return false;
        }
        match KeyCommand::from_key(key) {
            Some(command) => self.execute(command),
            None => false,
        }
    }

    pub fn execute(&mut self, command: KeyCommand) -> bool {
        match command {
            KeyCommand::IncreaseFrets { side } => self.increase_frets(side),
            KeyCommand::DecreaseFrets { side } => self.decrease_frets(side),
            KeyCommand::SwitchBoard { slot } => self.switch_board(slot),
            KeyCommand::SelectColor { index, light } => self.select_palette(index, light),
            KeyCommand::SelectNone => {
                self.set_color(ColorSelection::None);
                true
            }
        }
    }

    // ------------------------------------------------------------------
    // Sharing
    // ------------------------------------------------------------------

    pub fn share_payload(&self) -> SharePayload {
        let board = self.board();
        SharePayload::from_board(&board.strings, &board.annotations)
    }

    /// Save the active board. A failure leaves the board untouched.
    pub fn save_share(&self, store: &mut dyn ShareStore) -> Result<ShareLink, ShareError> {
        store.save(&self.share_payload()).map_err(|e| {
            log::warn!("{}", e);
            e
        })
    }

    /// Put a shared board into slot 1 and make it active
    pub fn load_shared(&mut self, payload: SharePayload) -> Result<(), ShareError> {
        let (strings, annotations) = payload.into_board()?;
        self.boards[0] = BoardState {
            strings,
            color: ColorSelection::default(),
            annotations,
        };
        self.active = 0;
        self.editor.cancel();
        log::info!("Loaded shared board ({} annotations)", self.boards[0].annotations.len());
        Ok(())
    }

    /// Apply the response of `GET /share/<id>`. Any non-2xx status or
    /// unreadable body resets slot 1 to the default board.
    pub fn apply_share_response(&mut self, status: u16, body: &str) -> bool {
        let loaded = if (200..300).contains(&status) {
            SharePayload::from_json(body).and_then(|payload| self.load_shared(payload))
        } else {
            Err(ShareError::NotFound(format!("status {}", status)))
        };

        match loaded {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Could not load shared board: {}", e);
                self.boards[0] = BoardState::default();
                self.active = 0;
                self.editor.cancel();
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    pub fn display_list(&self) -> DisplayList {
        let board = self.board();
        self.layout
            .compute_layout(&board.strings, &board.annotations, &self.window, &self.toggles)
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            layout: self.display_list(),
            active_board: self.active_slot(),
            active_color: self.color().as_str().to_string(),
            toggles: self.toggles,
            editing_string_id: self.editor.editing(),
            tuning_draft: self.editor.draft().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::RecordingInstrument;
    use crate::share::InMemoryShareStore;

    const RED: &str = "#ff5c5c";

    #[test]
    fn test_new_session_defaults() {
        let session = Session::default();
        assert_eq!(session.active_slot(), 1);
        assert_eq!(session.tuning_name().as_str(), "standard");
        assert_eq!(session.color().as_str(), RED);
        assert_eq!(*session.window(), FretWindow::default());
    }

    #[test]
    fn test_boards_are_independent() {
        let mut session = Session::default();
        session.click_note(Pitch(40), 5);
        session.retune(5, Pitch(38));

        assert!(session.switch_board(2));
        assert!(session.annotations().is_empty());
        assert_eq!(session.tuning_name().as_str(), "standard");
        session.set_color(ColorSelection::None);

        assert!(session.switch_board(1));
        assert_eq!(session.annotations().len(), 1);
        assert_eq!(session.tuning_name().as_str(), "drop-d");
        assert_eq!(session.color().as_str(), RED);
        assert_eq!(session.slot(2).map(|b| b.color.clone()), Some(ColorSelection::None));
    }

    #[test]
    fn test_switch_board_bounds() {
        let mut session = Session::default();
        assert!(!session.switch_board(0));
        assert!(!session.switch_board(10));
        assert!(session.switch_board(9));
        assert_eq!(session.active_slot(), 9);
    }

    #[test]
    fn test_click_plays_when_enabled() {
        let instrument = RecordingInstrument::default();
        let calls = instrument.calls.clone();
        let mut session = Session::default();
        session.audio_mut().attach(Box::new(instrument));

        session.click_note(Pitch(45), 4);
        assert_eq!(calls.borrow().len(), 2);

        session.set_toggles(Toggles { play_audio: false, ..Toggles::default() });
        session.click_note(Pitch(45), 4);
        assert_eq!(calls.borrow().len(), 2);
        assert!(session.annotations().is_empty());
    }

    #[test]
    fn test_playback_failure_keeps_annotation() {
        let instrument = RecordingInstrument {
            fail: true,
            ..RecordingInstrument::default()
        };
        let mut session = Session::default();
        session.audio_mut().attach(Box::new(instrument));

        assert_eq!(session.click_note(Pitch(45), 4), ToggleOutcome::Painted);
        assert!(session.annotations().color_of(Pitch(45), 4).is_some());
    }

    #[test]
    fn test_click_without_instrument() {
        let mut session = Session::default();
        assert_eq!(session.click_note(Pitch(64), 0), ToggleOutcome::Painted);
    }

    #[test]
    fn test_generate_scale_with_none_uses_red() {
        let mut session = Session::default();
        session.set_color(ColorSelection::None);
        session.generate_scale(0, Mode::Ionian);
        assert_eq!(session.annotations().color_of(Pitch(60), 0).map(|c| c.as_str()), Some(RED));
        assert_eq!(
            session.annotations().color_of(Pitch(62), 0).map(|c| c.as_str()),
            Some("#ffbebe")
        );
    }

    #[test]
    fn test_lefty_swaps_sides() {
        let mut session = Session::default();
        assert!(!session.increase_frets(ScreenSide::Left));

        session.set_toggles(Toggles { lefty: true, ..Toggles::default() });
        assert!(session.increase_frets(ScreenSide::Left));
        assert_eq!(session.window().last(), 17);
    }

    #[test]
    fn test_handle_key() {
        let mut session = Session::default();
        assert!(session.handle_key("d", false));
        assert_eq!(session.window().last(), 17);

        assert!(!session.handle_key("a", true));
        assert_eq!(session.window().last(), 17);

        assert!(session.handle_key("G", false));
        assert_eq!(session.color().as_str(), "#d7ffbe");

        assert!(session.handle_key("Escape", false));
        assert_eq!(*session.color(), ColorSelection::None);

        assert!(session.handle_key("3", false));
        assert_eq!(session.active_slot(), 3);
        assert!(!session.handle_key("x", false));
    }

    #[test]
    fn test_removing_edited_string_closes_editor() {
        let mut session = Session::default();
        assert!(session.begin_tuning_edit(5));
        session.shrink_low();
        assert_eq!(session.tuning_editor().editing(), None);
    }

    #[test]
    fn test_share_roundtrip_through_store() {
        let mut store = InMemoryShareStore::new();
        let mut source = Session::default();
        source.apply_tuning("dadgad".parse().unwrap());
        source.click_note(Pitch(38), 5);
        let link = source.save_share(&mut store).unwrap();

        let mut target = Session::default();
        target.switch_board(4);
        target.set_color(ColorSelection::None);
        let payload = store.load(link.id()).unwrap();
        target.load_shared(payload).unwrap();

        assert_eq!(target.active_slot(), 1);
        assert_eq!(target.tuning_name().as_str(), "dadgad");
        assert_eq!(target.color().as_str(), RED);
        assert!(target.annotations().color_of(Pitch(38), 5).is_some());
    }

    #[test]
    fn test_bad_share_response_resets() {
        let mut session = Session::default();
        session.click_note(Pitch(64), 0);
        session.switch_board(2);

        assert!(!session.apply_share_response(404, ""));
        assert_eq!(session.active_slot(), 1);
        assert!(session.annotations().is_empty());

        assert!(!session.apply_share_response(200, "{not json"));
        assert_eq!(*session.board(), BoardState::default());

        let body = r##"{"tuning": "62_57_53_50_45_38", "notetocolor": {"38-5": "#5c67ff"}}"##;
        assert!(session.apply_share_response(200, body));
        assert_eq!(session.strings().pitches()[5], Pitch(38));
        assert_eq!(session.annotations().len(), 1);
    }

    #[test]
    fn test_view_carries_session_state() {
        let mut session = Session::default();
        session.begin_tuning_edit(2);
        let view = session.view();
        assert_eq!(view.active_board, 1);
        assert_eq!(view.editing_string_id, Some(2));
        assert_eq!(view.tuning_draft, "G3");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["tuningName"], "standard");
        assert_eq!(json["activeColor"], RED);
    }
}
