use chrono::NaiveDate;
use greensquares_core::{
    ContributionRecord, EditorSession, GridStore, JsonFileStore, Level, LoadOutcome, StoreError,
};
use std::fs;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn saved_grid_round_trips_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("contributions.json"));
    let record = ContributionRecord::new(day(2024, 1, 1), Level::new(2).unwrap());

    store.save(&[record]).unwrap();
    assert_eq!(store.load().unwrap(), vec![record]);
}

#[test]
fn document_is_pretty_printed_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contributions.json");
    let store = JsonFileStore::new(&path);

    store
        .save(&[ContributionRecord::new(day(2024, 1, 1), Level::new(2).unwrap())])
        .unwrap();

    let body = fs::read_to_string(&path).unwrap();
    assert_eq!(
        body,
        "[\n  {\n    \"date\": \"2024-01-01\",\n    \"level\": 2\n  }\n]\n"
    );
    assert!(!dir.path().join("contributions.json.tmp").exists());
}

#[test]
fn session_save_then_reopen_keeps_only_non_zero_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("public").join("contributions.json");

    let mut session = EditorSession::open(JsonFileStore::new(&path), 2024);
    assert_eq!(session.load_outcome(), LoadOutcome::StartedEmpty);
    session.click_cell(day(2024, 1, 1));
    session.click_cell(day(2024, 1, 1));
    for _ in 0..5 {
        session.click_cell(day(2024, 1, 9));
    }
    assert_eq!(session.save().unwrap(), 1);

    let reopened = EditorSession::open(JsonFileStore::new(&path), 2024);
    assert_eq!(reopened.load_outcome(), LoadOutcome::Loaded { records: 1 });
    assert_eq!(
        reopened.grid().records(),
        vec![ContributionRecord::new(day(2024, 1, 1), Level::new(2).unwrap())]
    );
}

#[test]
fn missing_file_is_a_not_found_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("absent.json"));
    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
    assert!(err.is_not_found());
}

#[test]
fn invalid_documents_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contributions.json");
    let store = JsonFileStore::new(&path);

    for body in [
        "not json",
        r#"{"data": []}"#,
        r#"[{"date": "2024-01-01", "level": 7}]"#,
        r#"[{"date": "2024-1-1", "level": 1}]"#,
        r#"[{"date": "2023-02-29", "level": 1}]"#,
    ] {
        fs::write(&path, body).unwrap();
        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Json(_)), "accepted {body}");
        assert!(!err.is_not_found());
    }
}

#[test]
fn corrupt_document_opens_an_empty_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contributions.json");
    fs::write(&path, "[{\"date\": ").unwrap();

    let session = EditorSession::open(JsonFileStore::new(&path), 2024);
    assert!(session.grid().is_empty());
    assert_eq!(session.load_outcome(), LoadOutcome::StartedEmpty);
}

#[test]
fn duplicate_dates_resolve_to_the_last_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contributions.json");
    fs::write(
        &path,
        r#"[{"date": "2024-02-02", "level": 1}, {"date": "2024-02-02", "level": 3}]"#,
    )
    .unwrap();

    let session = EditorSession::open(JsonFileStore::new(&path), 2024);
    assert_eq!(session.grid().len(), 1);
    assert_eq!(session.grid().get(day(2024, 2, 2)), Level::new(3).ok());
}

#[test]
fn failed_save_leaves_previous_document_intact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contributions.json");
    let store = JsonFileStore::new(&path);
    let original = ContributionRecord::new(day(2024, 4, 4), Level::MAX);
    store.save(&[original]).unwrap();

    // A directory squatting on the temp path makes the write fail.
    fs::create_dir(dir.path().join("contributions.json.tmp")).unwrap();
    let replacement = ContributionRecord::new(day(2024, 5, 5), Level::LOW);
    assert!(matches!(store.save(&[replacement]), Err(StoreError::Io(_))));

    assert_eq!(store.load().unwrap(), vec![original]);
}
