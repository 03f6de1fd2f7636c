use std::sync::Mutex;

use visibility_tracker::{Rect, Tracker, TrackerDataSource, TrackingItem};

use crate::key::{KeyMap, TrackingKey, lock};

/// A [`TrackerDataSource`] backed by plain values.
///
/// The tracking rect is usually the scroll container's visible bounds minus any overlays (sticky
/// headers, tab bars); update it with [`StaticDataSource::set_tracking_rect`] when those change.
/// Per-key objective ratios override the tracker's default.
pub struct StaticDataSource<K> {
    tracking_rect: Mutex<Rect>,
    objectives: Mutex<KeyMap<K, f32>>,
}

impl<K: TrackingKey> StaticDataSource<K> {
    pub fn new(tracking_rect: Rect) -> Self {
        Self {
            tracking_rect: Mutex::new(tracking_rect),
            objectives: Mutex::new(KeyMap::new()),
        }
    }

    pub fn tracking_rect(&self) -> Rect {
        *lock(&self.tracking_rect)
    }

    pub fn set_tracking_rect(&self, tracking_rect: Rect) {
        *lock(&self.tracking_rect) = tracking_rect;
    }

    /// Sets the objective visible ratio for `key`. Values are clamped to `[0, 1]`.
    pub fn set_objective(&self, key: K, ratio: f32) {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        lock(&self.objectives).insert(key, ratio);
    }

    /// Removes the override for `key`, returning it.
    pub fn clear_objective(&self, key: &K) -> Option<f32> {
        lock(&self.objectives).remove(key)
    }

    pub fn objective(&self, key: &K) -> Option<f32> {
        lock(&self.objectives).get(key).copied()
    }
}

impl<K: TrackingKey + Send> TrackerDataSource<K> for StaticDataSource<K> {
    fn visible_ratio_for_item(&self, _: &Tracker<K>, item: &TrackingItem<K>) -> Option<f32> {
        self.objective(&item.key)
    }

    fn tracking_rect(&self, _: &Tracker<K>) -> Rect {
        StaticDataSource::tracking_rect(self)
    }
}

impl<K> core::fmt::Debug for StaticDataSource<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StaticDataSource")
            .field("tracking_rect", &*lock(&self.tracking_rect))
            .field("objectives", &lock(&self.objectives).len())
            .finish()
    }
}
