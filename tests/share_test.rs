// Share payloads through the store and onto a fresh session

use fretboard_wasm::models::{Pitch, ScreenSide};
use fretboard_wasm::share::{decode_tuning, encode_tuning};
use fretboard_wasm::{BoardState, InMemoryShareStore, Session, ShareError, ShareLink, SharePayload, ShareStore};

#[test]
fn test_wire_shape_matches_endpoints() {
    let mut session = Session::default();
    session.click_note(Pitch(45), 4);
    let body: serde_json::Value =
        serde_json::from_str(&session.share_payload().to_json().unwrap()).unwrap();

    assert_eq!(body["tuning"], "64_59_55_50_45_40");
    assert_eq!(body["notetocolor"]["45-4"], "#ff5c5c");
    assert_eq!(body.as_object().map(|o| o.len()), Some(2));
}

#[test]
fn test_save_and_load_across_sessions() {
    let mut store = InMemoryShareStore::new();
    let mut author = Session::default();
    author.grow_low();
    author.retune(6, Pitch(35));
    author.click_note(Pitch(35), 6);
    author.click_note(Pitch(47), 6);

    let link = author.save_share(&mut store).unwrap();
    assert!(link.shareable_link.starts_with('/'));

    let mut reader = Session::default();
    let payload = store.load(link.id()).unwrap();
    reader.load_shared(payload).unwrap();

    assert_eq!(reader.strings().pitches(), author.strings().pitches());
    assert_eq!(reader.annotations(), author.annotations());
}

#[test]
fn test_load_rekeys_ids_after_high_growth() {
    let mut store = InMemoryShareStore::new();
    let mut author = Session::default();
    author.grow_high();
    author.click_note(Pitch(64), -1);

    let link = author.save_share(&mut store).unwrap();
    let mut reader = Session::default();
    reader.load_shared(store.load(link.id()).unwrap()).unwrap();

    assert_eq!(reader.strings().len(), 7);
    assert!(reader.annotations().color_of(Pitch(64), 0).is_some());
    let list = reader.display_list();
    assert_eq!(list.strings[0].notes[0].color.as_deref(), Some("#ff5c5c"));
}

#[test]
fn test_load_keeps_window_and_other_boards() {
    let mut session = Session::default();
    session.switch_board(2);
    session.click_note(Pitch(50), 3);
    session.decrease_frets(ScreenSide::Right);

    let body = r##"{"tuning": "43_38_33_28", "notetocolor": {}}"##;
    assert!(session.apply_share_response(200, body));

    assert_eq!(session.active_slot(), 1);
    assert_eq!(session.tuning_name().as_str(), "bass-standard");
    assert_eq!(session.window().last(), 15);
    assert_eq!(session.slot(2).map(|b| b.annotations.len()), Some(1));
}

#[test]
fn test_not_found_and_garbage() {
    let store = InMemoryShareStore::new();
    assert!(matches!(store.load("nope"), Err(ShareError::NotFound(_))));

    let payload = SharePayload::from_json(r#"{"tuning": "", "notetocolor": {}}"#).unwrap();
    assert!(matches!(payload.into_board(), Err(ShareError::Malformed(_))));
    assert!(SharePayload::from_json("[]").is_err());

    let mut session = Session::default();
    assert!(!session.apply_share_response(500, "{}"));
    assert!(!session.apply_share_response(200, r#"{"tuning": "x_y", "notetocolor": {}}"#));
    assert_eq!(session.tuning_name().as_str(), "standard");
}

#[test]
fn test_out_of_range_tuning_resets_board() {
    for tuning in ["2147483647_59", "-500_9000", "64_20"] {
        let mut session = Session::default();
        session.click_note(Pitch(64), 0);
        let body = format!(r#"{{"tuning": "{}", "notetocolor": {{}}}}"#, tuning);

        assert!(!session.apply_share_response(200, &body));
        assert_eq!(*session.board(), BoardState::default());
        assert_eq!(session.display_list().strings.len(), 6);
    }
}

#[test]
fn test_extended_preset_loads_but_more_strings_do_not() {
    let extended = "88_83_78_73_68_63_58_53_48_43_38_33_28";
    let mut session = Session::default();
    assert!(session.apply_share_response(200, &format!(r#"{{"tuning": "{}", "notetocolor": {{}}}}"#, extended)));
    assert_eq!(session.strings().len(), 13);

    let body = format!(r#"{{"tuning": "{}_40", "notetocolor": {{}}}}"#, extended);
    assert!(!session.apply_share_response(200, &body));
    assert_eq!(session.strings().len(), 6);
}

#[test]
fn test_tuning_string_codec() {
    let pitches = [62, 57, 55, 50, 45, 38].map(Pitch).to_vec();
    assert_eq!(encode_tuning(&pitches), "62_57_55_50_45_38");
    assert_eq!(decode_tuning("62_57_55_50_45_38"), Ok(pitches));
}

/// Store that always refuses to save
struct FullStore;

impl ShareStore for FullStore {
    fn save(&mut self, _payload: &SharePayload) -> Result<ShareLink, ShareError> {
        Err(ShareError::SaveFailed("quota exceeded".to_string()))
    }

    fn load(&self, id: &str) -> Result<SharePayload, ShareError> {
        Err(ShareError::NotFound(id.to_string()))
    }
}

#[test]
fn test_failed_save_leaves_board() {
    let mut session = Session::default();
    session.click_note(Pitch(64), 0);
    let before = session.board().clone();

    assert!(matches!(session.save_share(&mut FullStore), Err(ShareError::SaveFailed(_))));
    assert_eq!(*session.board(), before);
}
