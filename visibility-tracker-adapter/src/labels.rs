use alloc::string::String;
use std::sync::Mutex;

use visibility_tracker::{ScrollDirection, TrackerDebugObserver, TrackingItem};

use crate::key::{KeyMap, TrackingKey, lock};

/// A per-item overlay label produced by [`DebugLabels`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugLabel {
    /// `"<current>%\nObjective: <objective>%"`.
    pub text: String,
    pub is_tracked: bool,
}

/// A [`TrackerDebugObserver`] that keeps the latest overlay label for every cached item.
///
/// Register it with `Tracker::register_debug_observer` and read the labels when drawing a debug
/// overlay over each item.
pub struct DebugLabels<K> {
    state: Mutex<LabelState<K>>,
}

struct LabelState<K> {
    labels: KeyMap<K, DebugLabel>,
    scroll_direction: Option<ScrollDirection>,
    updates: u64,
}

impl<K: TrackingKey> Default for DebugLabels<K> {
    fn default() -> Self {
        Self {
            state: Mutex::new(LabelState {
                labels: KeyMap::new(),
                scroll_direction: None,
                updates: 0,
            }),
        }
    }
}

impl<K: TrackingKey> DebugLabels<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(&self, key: &K) -> Option<DebugLabel> {
        lock(&self.state).labels.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        lock(&self.state).labels.len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.state).labels.is_empty()
    }

    /// Direction reported with the last update; `None` while scrolling diagonally.
    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        lock(&self.state).scroll_direction
    }

    /// Number of passes observed so far.
    pub fn update_count(&self) -> u64 {
        lock(&self.state).updates
    }
}

impl<K: TrackingKey + Send> TrackerDebugObserver<K> for DebugLabels<K> {
    fn update(&self, items: &[TrackingItem<K>], scroll_direction: Option<ScrollDirection>) {
        let mut state = lock(&self.state);
        state.labels.clear();
        for item in items {
            state.labels.insert(
                item.key.clone(),
                DebugLabel {
                    text: item.debug_description(),
                    is_tracked: item.is_tracked,
                },
            );
        }
        state.scroll_direction = scroll_direction;
        state.updates = state.updates.saturating_add(1);
    }
}

impl<K> core::fmt::Debug for DebugLabels<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = lock(&self.state);
        f.debug_struct("DebugLabels")
            .field("labels", &state.labels.len())
            .field("scroll_direction", &state.scroll_direction)
            .field("updates", &state.updates)
            .finish()
    }
}
