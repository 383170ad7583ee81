//! Id and timestamp sources.
//!
//! The repository never reaches for an ambient clock or random source; both
//! are injected so tests can pin ids and creation times.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use chrono::Utc;
use uuid::Uuid;

/// Generates ids for new lists and items.
pub trait IdGenerator: Send + Sync {
    /// Id for a new list. Must not collide with any list already stored.
    fn list_id(&self) -> String;

    /// Id for a new item. Only needs to be unique within its list.
    fn item_id(&self) -> String;
}

/// Random v4 UUIDs.
///
/// Item ids use the first 8 hex digits, which is plenty within a single list.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn list_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn item_id(&self) -> String {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(8);
        id
    }
}

/// Deterministic ids: `list-1`, `list-2`, ... and `item-1`, `item-2`, ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next_list: AtomicU64,
    next_item: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        SequentialIdGenerator {
            next_list: AtomicU64::new(1),
            next_item: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn list_id(&self) -> String {
        format!("list-{}", self.next_list.fetch_add(1, Ordering::Relaxed))
    }

    fn item_id(&self) -> String {
        format!("item-{}", self.next_item.fetch_add(1, Ordering::Relaxed))
    }
}

/// Source of creation timestamps, in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(start_millis: i64) -> Self {
        ManualClock {
            now: AtomicI64::new(start_millis),
        }
    }

    pub fn set(&self, millis: i64) {
        self.now.store(millis, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: i64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

impl<T: IdGenerator + ?Sized> IdGenerator for std::sync::Arc<T> {
    fn list_id(&self) -> String {
        (**self).list_id()
    }

    fn item_id(&self) -> String {
        (**self).item_id()
    }
}

impl<T: Clock + ?Sized> Clock for std::sync::Arc<T> {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}
