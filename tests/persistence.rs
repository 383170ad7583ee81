mod support;

use shopping_lists::{
    FileStorage, InMemoryStorage, KeyValueStorage, ListRepository, ListStore, ShoppingList,
    STORAGE_KEY,
};

fn populate<S: KeyValueStorage>(
    store: &ListStore<S>,
    lists: usize,
    items: usize,
) -> Vec<ShoppingList> {
    (0..lists)
        .map(|n| {
            let texts: Vec<String> = (0..items).map(|i| format!("item {}-{}", n, i)).collect();
            let list = store.create(&format!("list {}", n), &texts).unwrap();
            if let Some(first) = list.items.first() {
                return store.toggle_item(&list.id, &first.id).unwrap();
            }
            list
        })
        .collect()
}

#[test]
fn in_memory_restart_round_trip() {
    support::init_tracing();
    for (lists, items) in [(0, 0), (1, 0), (1, 1), (3, 4)] {
        let storage = InMemoryStorage::new();
        let before = {
            let store = ListStore::new(storage.clone());
            populate(&store, lists, items);
            store.get_all()
        };

        // a fresh store over the same storage stands in for a restarted app
        let reloaded = ListStore::new(storage).get_all();
        assert_eq!(reloaded, before, "{} lists x {} items", lists, items);
        assert_eq!(reloaded.len(), lists);
    }
}

#[test]
fn file_restart_round_trip() {
    support::init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let before = {
        let store = ListStore::new(FileStorage::new(dir.path()));
        populate(&store, 3, 2)
    };

    let reloaded = ListStore::new(FileStorage::new(dir.path())).get_all();
    assert_eq!(reloaded, before);
    assert!(dir.path().join("shopping_lists.json").exists());
}

#[test]
fn persisted_blob_matches_external_layout() {
    support::init_tracing();
    let storage = InMemoryStorage::new();
    let (repo, _clock) = support::repository(storage.clone());
    repo.create("Groceries", &["milk"]).unwrap();

    let raw = storage.get_item(STORAGE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "id": "list-1",
            "name": "Groceries",
            "items": [{ "id": "item-1", "text": "milk", "completed": false }],
            "createdAt": support::START_MILLIS,
        }])
    );
}

#[test]
fn reads_blob_written_by_another_client() {
    let storage = InMemoryStorage::new();
    storage
        .set_item(
            STORAGE_KEY,
            r#"[{"id":"1700000000000","name":"Old","items":[{"id":"k3j9x2a","text":"tea","completed":true}],"createdAt":1700000000000}]"#,
        )
        .unwrap();

    let repo = ListRepository::new(storage);
    let list = repo.get_by_id("1700000000000").unwrap().unwrap();
    assert_eq!(list.name, "Old");
    assert!(list.item("k3j9x2a").unwrap().completed);
}

#[test]
fn absent_key_is_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    let repo = ListRepository::new(FileStorage::new(dir.path().join("fresh")));
    assert!(repo.get_all().unwrap().is_empty());
}

#[test]
fn restart_with_fresh_id_sequence_keeps_ids_unique() {
    let storage = InMemoryStorage::new();
    let (before_restart, _clock) = support::repository(storage.clone());
    let kept = before_restart.create("kept", &["a", "b"]).unwrap();

    let (after_restart, _clock) = support::repository(storage.clone());
    let added = after_restart.create("added", &["c"]).unwrap();
    assert_ne!(kept.id, added.id);

    assert!(after_restart.delete(&added.id).unwrap());
    assert_eq!(after_restart.get_all().unwrap(), vec![kept]);
}
