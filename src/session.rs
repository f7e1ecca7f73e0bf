//! Process-wide volatile cache of unlocked master passwords.
//!
//! A derived key is bound to a single record's salt, so caching one key
//! cannot serve a whole vault; the cache therefore holds the master
//! password itself and every operation derives per record.  Entries
//! live only in memory: the type has no serde impls, and both explicit
//! locking and drop wipe the stored passwords.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use zeroize::Zeroizing;

/// Volatile map from session identifier to master password.
///
/// Populated when the user supplies the master password at the start of
/// a vault session, cleared on [`lock`](SessionKeyCache::lock) /
/// [`lock_all`](SessionKeyCache::lock_all), and never written to
/// durable storage.
pub struct SessionKeyCache {
    inner: Mutex<HashMap<String, Zeroizing<String>>>,
}

impl SessionKeyCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// The process-wide cache instance.
    pub fn global() -> &'static SessionKeyCache {
        static GLOBAL: OnceLock<SessionKeyCache> = OnceLock::new();
        GLOBAL.get_or_init(SessionKeyCache::new)
    }

    /// Store the master password for `session_id`, replacing (and
    /// wiping) any previous entry for that session.
    pub fn unlock(&self, session_id: &str, master_password: &str) {
        let mut map = self.lock_map();
        map.insert(
            session_id.to_string(),
            Zeroizing::new(master_password.to_string()),
        );
    }

    /// Run `f` with the cached master password for `session_id`.
    ///
    /// The password is borrowed for the duration of the closure and
    /// never cloned out of the cache.  Returns `None` when the session
    /// is not unlocked.
    pub fn with_password<R>(&self, session_id: &str, f: impl FnOnce(&str) -> R) -> Option<R> {
        let map = self.lock_map();
        map.get(session_id).map(|pw| f(pw))
    }

    /// `true` if a master password is cached for `session_id`.
    pub fn is_unlocked(&self, session_id: &str) -> bool {
        self.lock_map().contains_key(session_id)
    }

    /// Drop (and wipe) the entry for `session_id`.
    pub fn lock(&self, session_id: &str) {
        self.lock_map().remove(session_id);
    }

    /// Drop (and wipe) every entry.  Teardown hook for sign-out and
    /// process shutdown paths.
    pub fn lock_all(&self) {
        self.lock_map().clear();
    }

    /// Acquire the map, recovering from a poisoned mutex.  A panic in
    /// some other thread must not leave the vault permanently locked.
    fn lock_map(&self) -> std::sync::MutexGuard<'_, HashMap<String, Zeroizing<String>>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for SessionKeyCache {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlock_then_read_back() {
        let cache = SessionKeyCache::new();
        cache.unlock("tab-1", "hunter2");

        let len = cache.with_password("tab-1", |pw| pw.len());
        assert_eq!(len, Some(7));
        assert!(cache.is_unlocked("tab-1"));
    }

    #[test]
    fn missing_session_yields_none() {
        let cache = SessionKeyCache::new();
        assert_eq!(cache.with_password("nope", |pw| pw.len()), None);
        assert!(!cache.is_unlocked("nope"));
    }

    #[test]
    fn unlock_replaces_previous_entry() {
        let cache = SessionKeyCache::new();
        cache.unlock("tab-1", "first");
        cache.unlock("tab-1", "second");

        let pw = cache.with_password("tab-1", |pw| pw.to_string());
        assert_eq!(pw.as_deref(), Some("second"));
    }

    #[test]
    fn lock_removes_only_that_session() {
        let cache = SessionKeyCache::new();
        cache.unlock("tab-1", "pw-one");
        cache.unlock("tab-2", "pw-two");

        cache.lock("tab-1");

        assert!(!cache.is_unlocked("tab-1"));
        assert!(cache.is_unlocked("tab-2"));
    }

    #[test]
    fn lock_all_clears_everything() {
        let cache = SessionKeyCache::new();
        cache.unlock("tab-1", "pw-one");
        cache.unlock("tab-2", "pw-two");

        cache.lock_all();

        assert!(!cache.is_unlocked("tab-1"));
        assert!(!cache.is_unlocked("tab-2"));
    }
}
