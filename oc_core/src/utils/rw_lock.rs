use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::warn;

/// Lock helpers that log and recover from poisoning.
///
/// Only for data that every writer leaves consistent after each single
/// mutation, so a panicking holder cannot leave a half-applied update behind.
pub trait RwLockExt<T> {
    fn read_lock(&self, context: &str) -> RwLockReadGuard<'_, T>;
    fn write_lock(&self, context: &str) -> RwLockWriteGuard<'_, T>;
}

impl<T> RwLockExt<T> for RwLock<T> {
    fn read_lock(&self, context: &str) -> RwLockReadGuard<'_, T> {
        self.read().unwrap_or_else(|e| {
            warn!("[{}] recovering poisoned lock", context);
            PoisonError::into_inner(e)
        })
    }

    fn write_lock(&self, context: &str) -> RwLockWriteGuard<'_, T> {
        self.write().unwrap_or_else(|e| {
            warn!("[{}] recovering poisoned lock", context);
            PoisonError::into_inner(e)
        })
    }
}
