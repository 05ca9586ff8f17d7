//! The byte store: the opaque key→bytes map the cache adapter serializes
//! stored responses into. This is the sole shared mutable resource in the
//! system; the core never reads or writes it directly, only through
//! [`crate::adapter`].

/// An opaque key→bytes map. Implementations must support safe concurrent
/// `get`/`set`/`delete` on distinct keys without external locking; the
/// core does not coordinate operations on the same key across concurrent
/// requests (no request collapsing).
pub trait ByteStore: Send + Sync {
    /// Reads the bytes stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Vec<u8>>;
    /// Stores `value` under `key`, replacing any existing entry.
    fn set(&self, key: &str, value: Vec<u8>);
    /// Removes any entry under `key`.
    fn delete(&self, key: &str);
}

/// An in-memory [`ByteStore`] backed by [`dashmap::DashMap`], so distinct
/// keys can be read and written concurrently without the core taking out
/// any lock of its own. Cache-size bounding and eviction are the caller's
/// responsibility — this store never evicts.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: dashmap::DashMap<String, Vec<u8>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store currently holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ByteStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: Vec<u8>) {
        self.entries.insert(key.to_string(), value);
    }

    fn delete(&self, key: &str) {
        self.entries.remove(key);
    }
}
