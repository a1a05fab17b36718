use oceannotes_core::{
    CreateNoteInput, JsonFileStore, ManualClock, Note, NoteStore, NotesRepository, RepoConfig,
    StoreError, DEFAULT_SLOT_FILE,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn roundtrip_preserves_all_fields() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::in_dir(dir.path());

    let notes = vec![
        Note::new("Groceries", "Milk and eggs", 1_000),
        Note::new("", "", 2_000),
    ];
    store.write_all(&notes);

    let loaded = store.read_all();
    assert_eq!(loaded, notes);
}

#[test]
fn absent_slot_reads_as_empty_without_error() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::in_dir(dir.path());

    assert!(store.try_read_all().unwrap().is_empty());
    assert!(store.read_all().is_empty());
}

#[test]
fn corrupted_slot_recovers_to_empty() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::in_dir(dir.path());
    fs::write(store.path(), "definitely not json {{{").unwrap();

    match store.try_read_all() {
        Err(StoreError::Serde(_)) => {}
        other => panic!("expected a decode error, got {other:?}"),
    }
    assert!(store.read_all().is_empty());
}

#[test]
fn non_array_slot_recovers_to_empty() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::in_dir(dir.path());
    fs::write(store.path(), r#"{"hello": 1}"#).unwrap();

    assert!(store.try_read_all().is_err());
    assert!(store.read_all().is_empty());
}

#[test]
fn slot_tolerates_unknown_and_missing_fields() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::in_dir(dir.path());
    fs::write(
        store.path(),
        r#"[{"id":"abc","title":"Kept","createdAt":5,"updatedAt":9,"color":"blue"}]"#,
    )
    .unwrap();

    let loaded = store.read_all();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "abc");
    assert_eq!(loaded[0].title, "Kept");
    assert_eq!(loaded[0].content, "");
    assert_eq!(loaded[0].created_at, 5);
    assert_eq!(loaded[0].updated_at, 9);
}

#[test]
fn slot_uses_camel_case_wire_fields() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::in_dir(dir.path());
    store.write_all(&[Note::new("t", "c", 42)]);

    let raw = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &value.as_array().unwrap()[0];

    assert!(record.get("createdAt").is_some());
    assert!(record.get("updatedAt").is_some());
    assert!(record.get("created_at").is_none());
    assert_eq!(record.get("createdAt").unwrap().as_i64(), Some(42));
}

#[test]
fn write_creates_missing_parent_directories() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("deep").join("down");
    let store = JsonFileStore::in_dir(&nested);
    store.write_all(&[Note::new("nested", "", 7)]);

    assert!(nested.join(DEFAULT_SLOT_FILE).exists());
    assert_eq!(store.read_all().len(), 1);
}

#[test]
fn write_failure_is_swallowed() {
    let dir = tempdir().unwrap();
    // The slot's parent is a regular file, so the write cannot land.
    let blocker = dir.path().join("blocker.txt");
    fs::write(&blocker, "in the way").unwrap();
    let store = JsonFileStore::new(blocker.join("slot.json"));

    match store.try_write_all(&[Note::new("lost", "", 1)]) {
        Err(StoreError::Io(_)) => {}
        other => panic!("expected an io error, got {other:?}"),
    }
    // The recovering surface neither panics nor reports anything.
    store.write_all(&[Note::new("lost", "", 1)]);
    assert!(store.read_all().is_empty());
}

#[test]
fn repository_over_broken_slot_degrades_to_empty() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker.txt");
    fs::write(&blocker, "in the way").unwrap();
    let store = JsonFileStore::new(blocker.join("slot.json"));
    let repo = NotesRepository::new(store, ManualClock::new(1_000), RepoConfig::local());

    // Create still hands back the new note even though persisting failed.
    let created = repo.create(CreateNoteInput {
        title: Some("ephemeral".to_string()),
        content: None,
    });
    assert_eq!(created.title, "ephemeral");

    // The next read recovers to the empty collection.
    assert!(repo.list(None).is_empty());
    assert!(repo.get(&created.id).is_none());
}

#[test]
fn two_stores_over_one_slot_see_each_others_writes() {
    let dir = tempdir().unwrap();
    let writer = JsonFileStore::in_dir(dir.path());
    let reader = JsonFileStore::in_dir(dir.path());

    writer.write_all(&[Note::new("shared", "", 3)]);
    let seen = reader.read_all();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].title, "shared");
}
