use alloc::vec::Vec;
use std::sync::Mutex;

use visibility_tracker::{Tracker, TrackerDelegate, TrackingItem};

use crate::key::lock;

/// A begin/end notification captured by [`EventRecorder`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackingEvent<K> {
    /// The item reached its objective ratio. Carries the item as it was before being marked.
    Began(TrackingItem<K>),
    /// The item left the item set.
    Ended(TrackingItem<K>),
}

impl<K> TrackingEvent<K> {
    pub fn item(&self) -> &TrackingItem<K> {
        match self {
            Self::Began(item) | Self::Ended(item) => item,
        }
    }

    pub fn key(&self) -> &K {
        &self.item().key
    }

    pub fn is_begin(&self) -> bool {
        matches!(self, Self::Began(_))
    }
}

/// A [`TrackerDelegate`] that queues notifications in arrival order.
///
/// Typical use: attach it to the tracker, then drain it after each pass and hand the events to an
/// impression logger in one batch. Draining from another thread than the one running the tracker
/// is fine.
#[derive(Debug)]
pub struct EventRecorder<K> {
    events: Mutex<Vec<TrackingEvent<K>>>,
}

impl<K> Default for EventRecorder<K> {
    fn default() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

impl<K> EventRecorder<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        lock(&self.events).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.events).is_empty()
    }

    /// Takes all queued events.
    pub fn drain(&self) -> Vec<TrackingEvent<K>> {
        core::mem::take(&mut *lock(&self.events))
    }
}

impl<K: Clone + Send> TrackerDelegate<K> for EventRecorder<K> {
    fn will_begin_tracking(&self, _: &Tracker<K>, item: &TrackingItem<K>) {
        lock(&self.events).push(TrackingEvent::Began(item.clone()));
    }

    fn did_end_tracking(&self, _: &Tracker<K>, item: &TrackingItem<K>) {
        lock(&self.events).push(TrackingEvent::Ended(item.clone()));
    }
}
