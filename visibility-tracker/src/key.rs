#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::TrackingItem;

/// Identity-keyed cache of tracking records.
#[cfg(feature = "std")]
pub(crate) type ItemCache<K> = HashMap<K, TrackingItem<K>>;
#[cfg(not(feature = "std"))]
pub(crate) type ItemCache<K> = BTreeMap<K, TrackingItem<K>>;

/// Bound for item identities.
///
/// With `std` this is `Hash + Eq + Clone` (hash map cache); without it the cache falls back to a
/// `BTreeMap` and the bound becomes `Ord + Clone`.
#[cfg(feature = "std")]
pub trait TrackingKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> TrackingKey for K {}

#[cfg(not(feature = "std"))]
pub trait TrackingKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> TrackingKey for K {}
