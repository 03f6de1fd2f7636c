use alloc::sync::{Arc, Weak};
use alloc::vec::Vec;
use core::mem;

use crate::geometry::{resolve_scroll_direction, shrink_tracking_rect, visible_ratio};
use crate::key::{ItemCache, TrackingKey};
use crate::options::clamp_ratio;
use crate::{
    Rect, ScrollDirection, ScrollHost, TrackerDataSource, TrackerDebugObserver, TrackerDelegate,
    TrackerError, TrackerOptions, TrackingItem,
};

/// Outcome of the threshold check for one cached item.
struct Evaluation<K> {
    key: K,
    begin: bool,
    current_visible_ratio: f32,
    objective_visible_ratio: f32,
}

/// A headless impression tracker.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; the scroll host, data source and delegate are weakly held
///   trait objects.
/// - Your adapter drives it by calling [`Tracker::recalculate`] once per layout/scroll tick with
///   the current candidate items and their frames.
///
/// Each identity goes through at most one tracking episode per continuous membership in the item
/// set: `will_begin_tracking` fires the first time its visible ratio reaches its objective, and
/// `did_end_tracking` fires once when it is dropped from the input.
///
/// For ready-made collaborators (velocity sampling, event queues, debug labels), see the
/// `visibility-tracker-adapter` crate.
pub struct Tracker<K> {
    options: TrackerOptions,
    scroll_host: Option<Weak<dyn ScrollHost>>,
    data_source: Option<Weak<dyn TrackerDataSource<K>>>,
    delegate: Option<Weak<dyn TrackerDelegate<K>>>,
    debug_observer: Option<Arc<dyn TrackerDebugObserver<K>>>,
    previous_direction: Option<ScrollDirection>,
    items: ItemCache<K>,
}

impl<K: TrackingKey> Tracker<K> {
    pub fn new(options: TrackerOptions) -> Self {
        tdebug!(
            default_visible_ratio = options.default_visible_ratio,
            default_scroll_direction = ?options.default_scroll_direction,
            "Tracker::new"
        );
        Self {
            options: TrackerOptions {
                default_visible_ratio: clamp_ratio(options.default_visible_ratio),
                ..options
            },
            scroll_host: None,
            data_source: None,
            delegate: None,
            debug_observer: None,
            previous_direction: None,
            items: ItemCache::new(),
        }
    }

    pub fn with_scroll_host<H: ScrollHost + 'static>(
        options: TrackerOptions,
        host: &Arc<H>,
    ) -> Self {
        let mut tracker = Self::new(options);
        tracker.set_scroll_host(host);
        tracker
    }

    pub fn with_collaborators<H, D, G>(
        options: TrackerOptions,
        host: &Arc<H>,
        data_source: &Arc<D>,
        delegate: &Arc<G>,
    ) -> Self
    where
        H: ScrollHost + 'static,
        D: TrackerDataSource<K> + 'static,
        G: TrackerDelegate<K> + 'static,
    {
        let mut tracker = Self::with_scroll_host(options, host);
        tracker.set_data_source(data_source);
        tracker.set_delegate(delegate);
        tracker
    }

    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    /// Copies the current options, applies `f`, then stores the (clamped) result.
    pub fn update_options(&mut self, f: impl FnOnce(&mut TrackerOptions)) {
        let mut next = self.options;
        f(&mut next);
        next.default_visible_ratio = clamp_ratio(next.default_visible_ratio);
        self.options = next;
    }

    pub fn set_default_visible_ratio(&mut self, ratio: f32) {
        self.options.default_visible_ratio = clamp_ratio(ratio);
    }

    pub fn set_default_scroll_direction(&mut self, direction: ScrollDirection) {
        self.options.default_scroll_direction = direction;
    }

    /// Attaches the scroll host (weakly held).
    pub fn set_scroll_host<H: ScrollHost + 'static>(&mut self, host: &Arc<H>) {
        let host = Arc::downgrade(host) as Weak<dyn ScrollHost>;
        self.scroll_host = Some(host);
    }

    /// Attaches the data source (weakly held).
    pub fn set_data_source<D: TrackerDataSource<K> + 'static>(&mut self, data_source: &Arc<D>) {
        let data_source = Arc::downgrade(data_source) as Weak<dyn TrackerDataSource<K>>;
        self.data_source = Some(data_source);
    }

    /// Attaches the delegate (weakly held).
    pub fn set_delegate<G: TrackerDelegate<K> + 'static>(&mut self, delegate: &Arc<G>) {
        let delegate = Arc::downgrade(delegate) as Weak<dyn TrackerDelegate<K>>;
        self.delegate = Some(delegate);
    }

    /// Registers a debug observer.
    ///
    /// While an observer is registered, every pass computes and stores the current and objective
    /// ratios of all cached items, and the observer receives the full cache afterwards.
    pub fn register_debug_observer<O: TrackerDebugObserver<K> + 'static>(
        &mut self,
        observer: Arc<O>,
    ) {
        self.debug_observer = Some(observer);
    }

    pub fn unregister_debug_observer(&mut self) {
        self.debug_observer = None;
    }

    pub fn has_debug_observer(&self) -> bool {
        self.debug_observer.is_some()
    }

    fn scroll_host(&self) -> Option<Arc<dyn ScrollHost>> {
        self.scroll_host.as_ref().and_then(Weak::upgrade)
    }

    fn data_source(&self) -> Option<Arc<dyn TrackerDataSource<K>>> {
        self.data_source.as_ref().and_then(Weak::upgrade)
    }

    fn delegate(&self) -> Option<Arc<dyn TrackerDelegate<K>>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, key: &K) -> Option<&TrackingItem<K>> {
        self.items.get(key)
    }

    pub fn is_tracked(&self, key: &K) -> bool {
        self.items.get(key).is_some_and(|item| item.is_tracked)
    }

    /// Iterates the cached items in unspecified order.
    pub fn items(&self) -> impl Iterator<Item = &TrackingItem<K>> + '_ {
        self.items.values()
    }

    pub fn tracked_keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.items
            .values()
            .filter(|item| item.is_tracked)
            .map(|item| &item.key)
    }

    /// The last concrete direction resolved by [`Tracker::recalculate`].
    pub fn previous_direction(&self) -> Option<ScrollDirection> {
        self.previous_direction
    }

    /// Resolves the scroll direction from the host's current velocity.
    ///
    /// `Ok(None)` means the direction is unresolvable (diagonal movement).
    pub fn scroll_direction(&self) -> Result<Option<ScrollDirection>, TrackerError> {
        let Some(host) = self.scroll_host() else {
            twarn!("Tracker: scroll host is missing; direction is unresolved");
            return Err(TrackerError::MissingScrollHost);
        };
        Ok(resolve_scroll_direction(
            host.velocity(),
            self.previous_direction,
            self.options.default_scroll_direction,
        ))
    }

    /// Objective visible ratio for `item`: the data source override, or the configured default.
    pub fn objective_visible_ratio(&self, item: &TrackingItem<K>) -> f32 {
        self.data_source()
            .and_then(|data_source| data_source.visible_ratio_for_item(self, item))
            .unwrap_or(self.options.default_visible_ratio)
    }

    /// The tracking rect shrunk for the cached item `key` under the current scroll direction.
    ///
    /// This is the region the item's leading edge must lie in to satisfy its objective ratio.
    /// Returns `Ok(None)` when the key is not cached or the direction is unresolved.
    pub fn calculated_tracking_rect(&self, key: &K) -> Result<Option<Rect>, TrackerError> {
        let Some(item) = self.items.get(key) else {
            return Ok(None);
        };
        let Some(data_source) = self.data_source() else {
            twarn!("Tracker: data source is missing; tracking rect is unavailable");
            return Err(TrackerError::MissingTrackingRect);
        };
        let tracking_rect = data_source.tracking_rect(self);
        let Some(direction) = self.scroll_direction()? else {
            return Ok(None);
        };
        let objective = self.objective_visible_ratio(item);
        Ok(Some(shrink_tracking_rect(
            direction,
            &tracking_rect,
            &item.frame,
            objective,
        )))
    }

    /// Reconciles the cache with the current item set and fires notifications.
    ///
    /// In order, a pass:
    /// 1. merges `items` into the cache (known keys only get their frame updated; new keys start
    ///    untracked),
    /// 2. drops cached keys missing from `items`,
    /// 3. evaluates the visible ratio of items that still need it and calls
    ///    `will_begin_tracking` for those reaching their objective,
    /// 4. calls `did_end_tracking` for every dropped key,
    /// 5. hands the cache to the debug observer, if any,
    /// 6. remembers the resolved scroll direction for later zero-velocity passes.
    ///
    /// Duplicate keys in `items` collapse to the last frame. Flags and ratios on incoming items are
    /// ignored.
    ///
    /// A missing scroll host or data source is reported as an error only after the pass has
    /// finished; the membership update and end notifications still happen, while the threshold
    /// check is skipped. An unresolvable (diagonal) direction is not an error: the threshold check
    /// is skipped for that pass.
    pub fn recalculate<I>(&mut self, items: I) -> Result<(), TrackerError>
    where
        I: IntoIterator<Item = TrackingItem<K>>,
    {
        let mut error = None;
        let direction = self.scroll_direction().unwrap_or_else(|err| {
            error = Some(err);
            None
        });

        let ended = self.merge(items);

        let evaluations = match direction {
            Some(direction) => self.evaluate(direction).unwrap_or_else(|err| {
                error.get_or_insert(err);
                Vec::new()
            }),
            None => Vec::new(),
        };
        self.apply(evaluations);

        if let Some(delegate) = self.delegate() {
            for item in &ended {
                delegate.did_end_tracking(self, item);
            }
        }

        if let Some(observer) = &self.debug_observer {
            let snapshot: Vec<TrackingItem<K>> = self.items.values().cloned().collect();
            observer.update(&snapshot, direction);
        }

        if direction.is_some() {
            self.previous_direction = direction;
        }

        ttrace!(
            cached = self.items.len(),
            ended = ended.len(),
            direction = ?direction,
            "Tracker::recalculate"
        );

        match error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Rebuilds the cache from `items`, carrying over cached state by key.
    ///
    /// Returns the entries whose keys are absent from `items`.
    fn merge<I>(&mut self, items: I) -> Vec<TrackingItem<K>>
    where
        I: IntoIterator<Item = TrackingItem<K>>,
    {
        let mut previous = mem::take(&mut self.items);
        for incoming in items {
            if let Some(entry) = self.items.get_mut(&incoming.key) {
                entry.frame = incoming.frame;
                continue;
            }
            let entry = match previous.remove(&incoming.key) {
                Some(mut cached) => {
                    cached.frame = incoming.frame;
                    cached
                }
                None => TrackingItem::new(incoming.key, incoming.frame),
            };
            self.items.insert(entry.key.clone(), entry);
        }
        previous.into_values().collect()
    }

    /// Computes ratios for the cached items that need them.
    ///
    /// Already-tracked items only need ratios for the debug observer, so they are skipped when
    /// none is registered.
    fn evaluate(&self, direction: ScrollDirection) -> Result<Vec<Evaluation<K>>, TrackerError> {
        let observing = self.debug_observer.is_some();
        let needs_ratio = |item: &&TrackingItem<K>| observing || !item.is_tracked;

        if !self.items.values().any(|item| needs_ratio(&item)) {
            return Ok(Vec::new());
        }

        let Some(data_source) = self.data_source() else {
            twarn!("Tracker: data source is missing; threshold check skipped");
            return Err(TrackerError::MissingTrackingRect);
        };
        let tracking_rect = data_source.tracking_rect(self);

        let mut evaluations = Vec::new();
        for item in self.items.values().filter(needs_ratio) {
            let current = visible_ratio(direction, &tracking_rect, &item.frame);
            let objective = data_source
                .visible_ratio_for_item(self, item)
                .unwrap_or(self.options.default_visible_ratio);
            let begin = !item.is_tracked && current >= objective;
            if begin || observing {
                evaluations.push(Evaluation {
                    key: item.key.clone(),
                    begin,
                    current_visible_ratio: current,
                    objective_visible_ratio: objective,
                });
            }
        }
        Ok(evaluations)
    }

    fn apply(&mut self, evaluations: Vec<Evaluation<K>>) {
        let observing = self.debug_observer.is_some();
        let delegate = self.delegate();

        for evaluation in evaluations {
            if evaluation.begin {
                // The delegate sees the entry before it is marked tracked.
                if let (Some(delegate), Some(item)) = (&delegate, self.items.get(&evaluation.key)) {
                    delegate.will_begin_tracking(self, item);
                }
            }

            let Some(entry) = self.items.get_mut(&evaluation.key) else {
                continue;
            };
            if evaluation.begin {
                entry.is_tracked = true;
            }
            if observing {
                entry.current_visible_ratio = evaluation.current_visible_ratio;
                entry.objective_visible_ratio = evaluation.objective_visible_ratio;
            }
        }
    }
}

impl<K> core::fmt::Debug for Tracker<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracker")
            .field("options", &self.options)
            .field("cached", &self.items.len())
            .field("previous_direction", &self.previous_direction)
            .field("has_debug_observer", &self.debug_observer.is_some())
            .finish_non_exhaustive()
    }
}
