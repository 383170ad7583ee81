#![allow(dead_code)]

pub mod flaky_storage;

use std::sync::Arc;

use shopping_lists::{
    InMemoryStorage, ListRepository, ListStore, ManualClock, SequentialIdGenerator,
};

pub type TestRepository = ListRepository<InMemoryStorage, SequentialIdGenerator, Arc<ManualClock>>;
pub type TestStore = ListStore<InMemoryStorage, SequentialIdGenerator, Arc<ManualClock>>;

pub const START_MILLIS: i64 = 1_700_000_000_000;

/// Install a test subscriber once; `RUST_LOG` controls the output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Repository over `storage` with deterministic ids and a manual clock.
pub fn repository(storage: InMemoryStorage) -> (TestRepository, Arc<ManualClock>) {
    init_tracing();
    let clock = Arc::new(ManualClock::new(START_MILLIS));
    let repo = ListRepository::with_parts(storage, SequentialIdGenerator::new(), clock.clone());
    (repo, clock)
}

pub fn store(storage: InMemoryStorage) -> (TestStore, Arc<ManualClock>) {
    let (repo, clock) = repository(storage);
    (ListStore::from(repo), clock)
}
