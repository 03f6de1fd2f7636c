#[cfg(feature = "std")]
use std::collections::HashMap;
#[cfg(feature = "std")]
use std::sync::{Mutex, MutexGuard, PoisonError};

pub use visibility_tracker::TrackingKey;

#[cfg(feature = "std")]
pub(crate) type KeyMap<K, V> = HashMap<K, V>;

/// Locks `mutex`, recovering the data if a collaborator panicked while holding it.
#[cfg(feature = "std")]
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
