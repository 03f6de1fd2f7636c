//! Capabilities the tracker depends on or calls.
//!
//! The tracker holds the scroll host, data source and delegate as weak references, so a dropped
//! collaborator simply stops answering. The debug observer is held strongly once registered.
//!
//! All collaborators are `Send + Sync`, so a tracker can be moved between threads or kept behind a
//! lock; interior state belongs in atomics or a `Mutex`.

use crate::{Rect, ScrollDirection, Tracker, TrackingItem, Velocity};

/// The scrolling container hosting the tracked items.
pub trait ScrollHost: Send + Sync {
    /// Instantaneous pan velocity.
    fn velocity(&self) -> Velocity;
}

/// Supplies the tracking rectangle and per-item thresholds.
pub trait TrackerDataSource<K>: Send + Sync {
    /// Objective visible ratio for `item`; `None` uses the tracker's default.
    fn visible_ratio_for_item(&self, tracker: &Tracker<K>, item: &TrackingItem<K>) -> Option<f32> {
        let _ = (tracker, item);
        None
    }

    /// The viewport region item frames are intersected with.
    fn tracking_rect(&self, tracker: &Tracker<K>) -> Rect;
}

/// Receives begin/end notifications.
pub trait TrackerDelegate<K>: Send + Sync {
    /// Called once per tracking episode, with the item as it was before it was marked tracked.
    fn will_begin_tracking(&self, tracker: &Tracker<K>, item: &TrackingItem<K>);

    /// Called once when an item leaves the item set.
    fn did_end_tracking(&self, tracker: &Tracker<K>, item: &TrackingItem<K>);
}

/// Receives the full cache after every pass.
///
/// `scroll_direction` is the direction resolved during the pass, or `None` while it was
/// unresolvable (diagonal scrolling).
pub trait TrackerDebugObserver<K>: Send + Sync {
    fn update(&self, items: &[TrackingItem<K>], scroll_direction: Option<ScrollDirection>);
}
