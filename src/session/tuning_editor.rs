//! Inline editor for a single string's open pitch
//!
//! The editor remembers which string is being edited by id, so adding or
//! removing other strings while the field is open cannot redirect the edit.

use crate::errors::PitchError;
use crate::models::{name_of, parse_pitch, Pitch, StringId, StringSet};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TuningEditor {
    editing: Option<StringId>,
    draft: String,
}

impl TuningEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the string whose field is open
    pub fn editing(&self) -> Option<StringId> {
        self.editing
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Open the field for `id`, seeding the draft with the current name
    pub fn begin_edit(&mut self, strings: &StringSet, id: StringId, use_sharps: bool) -> bool {
        match strings.get(id) {
            Some(string) => {
                self.editing = Some(id);
                self.draft = name_of(string.pitch, use_sharps).to_string();
                true
            }
            None => {
                log::debug!("No string with id {} to edit", id);
                false
            }
        }
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        if self.editing.is_some() {
            self.draft = text.into();
        }
    }

    /// Parse the draft and retune the edited string.
    ///
    /// The field closes whatever the outcome. On a parse error the string
    /// keeps its previous pitch and the error is returned for display.
    /// Returns `Ok(None)` when nothing was being edited or the string has
    /// since been removed.
    pub fn commit(&mut self, strings: &mut StringSet) -> Result<Option<Pitch>, PitchError> {
        let Some(id) = self.editing.take() else {
            return Ok(None);
        };
        let draft = std::mem::take(&mut self.draft);

        let pitch = parse_pitch(&draft).map_err(|e| {
            log::warn!("Rejected tuning for string {}: {}", id, e);
            e
        })?;

        if strings.retune(id, pitch) {
            log::info!("Retuned string {} to {}", id, pitch);
            Ok(Some(pitch))
        } else {
            Ok(None)
        }
    }

    /// Close the field without touching the string (blur)
    pub fn cancel(&mut self) {
        self.editing = None;
        self.draft.clear();
    }

    /// Close the field if it belongs to a string that no longer exists
    pub fn forget_missing(&mut self, strings: &StringSet) {
        if let Some(id) = self.editing {
            if !strings.contains(id) {
                self.cancel();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_edit_seeds_draft() {
        let strings = StringSet::standard();
        let mut editor = TuningEditor::new();
        assert!(editor.begin_edit(&strings, 5, true));
        assert_eq!(editor.editing(), Some(5));
        assert_eq!(editor.draft(), "E2");
        assert!(!editor.begin_edit(&strings, 42, true));
        assert_eq!(editor.editing(), Some(5));
    }

    #[test]
    fn test_commit_retunes() {
        let mut strings = StringSet::standard();
        let mut editor = TuningEditor::new();
        editor.begin_edit(&strings, 5, true);
        editor.update_draft("D2");

        assert_eq!(editor.commit(&mut strings), Ok(Some(Pitch(38))));
        assert_eq!(strings.get(5).map(|s| s.pitch), Some(Pitch(38)));
        assert_eq!(strings.tuning_name().as_str(), "drop-d");
        assert_eq!(editor.editing(), None);
    }

    #[test]
    fn test_commit_invalid_reverts() {
        let mut strings = StringSet::standard();
        let mut editor = TuningEditor::new();

        editor.begin_edit(&strings, 0, true);
        editor.update_draft("H2");
        assert!(matches!(editor.commit(&mut strings), Err(PitchError::InvalidFormat(_))));

        editor.begin_edit(&strings, 0, true);
        editor.update_draft("D9");
        assert!(matches!(editor.commit(&mut strings), Err(PitchError::OutOfRange(_))));

        assert_eq!(strings, StringSet::standard());
        assert_eq!(editor.editing(), None);
    }

    #[test]
    fn test_cancel_discards() {
        let mut strings = StringSet::standard();
        let mut editor = TuningEditor::new();
        editor.begin_edit(&strings, 1, false);
        editor.update_draft("C3");
        editor.cancel();
        assert_eq!(editor.commit(&mut strings), Ok(None));
        assert_eq!(strings, StringSet::standard());
    }

    #[test]
    fn test_edit_follows_id_not_position() {
        let mut strings = StringSet::standard();
        let mut editor = TuningEditor::new();
        editor.begin_edit(&strings, 0, true);
        strings.grow_high();
        editor.update_draft("F4");
        editor.commit(&mut strings).unwrap();

        assert_eq!(strings.get(-1).map(|s| s.pitch), Some(Pitch(64)));
        assert_eq!(strings.get(0).map(|s| s.pitch), Some(Pitch(65)));
    }

    #[test]
    fn test_forget_missing() {
        let mut strings = StringSet::standard();
        let mut editor = TuningEditor::new();
        editor.begin_edit(&strings, 5, true);
        strings.shrink_low();
        editor.forget_missing(&strings);
        assert_eq!(editor.editing(), None);
    }
}
