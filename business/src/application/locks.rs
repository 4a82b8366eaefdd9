use std::collections::HashSet;
use std::hash::Hash;
use std::sync::{Mutex, PoisonError};

/// Set of resource keys with an operation in flight.
///
/// At most one guard exists per key. A second `try_acquire` for a held key
/// fails instead of waiting, so callers can report the conflict immediately.
pub struct OperationLocks<K: Eq + Hash> {
    held: Mutex<HashSet<K>>,
}

impl<K: Eq + Hash + Clone> OperationLocks<K> {
    pub fn new() -> Self {
        Self {
            held: Mutex::new(HashSet::new()),
        }
    }

    pub fn try_acquire(&self, key: K) -> Option<OperationGuard<'_, K>> {
        let mut held = self.held.lock().unwrap_or_else(PoisonError::into_inner);
        if !held.insert(key.clone()) {
            return None;
        }
        Some(OperationGuard { locks: self, key })
    }

    pub fn is_held(&self, key: &K) -> bool {
        self.held
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(key)
    }
}

impl<K: Eq + Hash + Clone> Default for OperationLocks<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Releases its key on drop, including when the operation fails.
pub struct OperationGuard<'a, K: Eq + Hash> {
    locks: &'a OperationLocks<K>,
    key: K,
}

impl<K: Eq + Hash> Drop for OperationGuard<'_, K> {
    fn drop(&mut self) {
        self.locks
            .held
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_second_acquire_for_same_key() {
        let locks = OperationLocks::new();
        let _guard = locks.try_acquire("p1");

        assert!(locks.try_acquire("p1").is_none());
        assert!(locks.is_held(&"p1"));
    }

    #[test]
    fn should_allow_independent_keys() {
        let locks = OperationLocks::new();
        let first = locks.try_acquire("p1");
        let second = locks.try_acquire("p2");

        assert!(first.is_some());
        assert!(second.is_some());
    }

    #[test]
    fn should_release_key_when_guard_dropped() {
        let locks = OperationLocks::new();
        {
            let _guard = locks.try_acquire("p1");
        }
        assert!(!locks.is_held(&"p1"));
        assert!(locks.try_acquire("p1").is_some());
    }
}
