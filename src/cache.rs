//! Time-bounded cache for the current-user lookup.
//!
//! Only `/api/users/info` is cached. Entries are keyed by the authentication
//! token and expire after a fixed time-to-live; expiry is the only eviction
//! mechanism. The map sits behind a `Mutex` so a client shared across threads
//! stays sound, but the check-then-fetch sequence is not serialized: two
//! threads racing on a cold cache may both hit the network. That matches the
//! semantics of the surrounding layer (the second fetch simply overwrites).

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::types::UserInfo;

struct CacheEntry {
    user: UserInfo,
    expires_at: Instant,
}

#[derive(Default)]
pub(crate) struct UserInfoCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl UserInfoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the live entry for `key`, dropping it if it has expired.
    pub fn get(&self, key: &str) -> Option<UserInfo> {
        let mut entries = self.lock();
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.user.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn insert(&self, key: String, user: UserInfo, ttl: Duration) {
        self.lock().insert(
            key,
            CacheEntry {
                user,
                expires_at: Instant::now() + ttl,
            },
        );
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(userid: i64) -> UserInfo {
        UserInfo {
            userid,
            ..Default::default()
        }
    }

    #[test]
    fn live_entry_is_returned() {
        let cache = UserInfoCache::new();
        cache.insert("k".into(), user(5), Duration::from_secs(60));
        assert_eq!(cache.get("k").map(|u| u.userid), Some(5));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn expired_entry_is_evicted_on_read() {
        let cache = UserInfoCache::new();
        cache.insert("k".into(), user(5), Duration::from_millis(0));
        std::thread::sleep(Duration::from_millis(5));
        assert!(cache.get("k").is_none());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn clear_removes_everything() {
        let cache = UserInfoCache::new();
        cache.insert("a".into(), user(1), Duration::from_secs(60));
        cache.insert("b".into(), user(2), Duration::from_secs(60));
        cache.clear();
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn keys_are_independent() {
        let cache = UserInfoCache::new();
        cache.insert("a".into(), user(1), Duration::from_secs(60));
        assert!(cache.get("b").is_none());
        assert_eq!(cache.get("a").map(|u| u.userid), Some(1));
    }
}
