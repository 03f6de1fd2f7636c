use alloc::sync::Arc;

use visibility_tracker::{
    Rect, Tracker, TrackerDelegate, TrackerError, TrackerOptions, TrackingItem,
};

use crate::{StaticDataSource, TrackingKey, VelocitySampler};

/// A framework-neutral controller that wraps a `visibility_tracker::Tracker` together with a
/// [`VelocitySampler`] scroll host and a [`StaticDataSource`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` / `on_scroll_end` when UI scroll events occur
/// - `tick(now_ms)` each frame/timer tick (so the sampled velocity settles to zero)
/// - `on_layout(items)` after layout, with the current item frames
///
/// The delegate stays owned by the caller; attach it with [`Controller::set_delegate`].
pub struct Controller<K> {
    tracker: Tracker<K>,
    sampler: Arc<VelocitySampler>,
    data_source: Arc<StaticDataSource<K>>,
}

impl<K: TrackingKey + Send + 'static> Controller<K> {
    pub fn new(options: TrackerOptions, tracking_rect: Rect) -> Self {
        Self::with_sampler(options, tracking_rect, VelocitySampler::new())
    }

    pub fn with_sampler(
        options: TrackerOptions,
        tracking_rect: Rect,
        sampler: VelocitySampler,
    ) -> Self {
        let sampler = Arc::new(sampler);
        let data_source = Arc::new(StaticDataSource::new(tracking_rect));
        let mut tracker = Tracker::with_scroll_host(options, &sampler);
        tracker.set_data_source(&data_source);
        ctrace!(
            idle_reset_ms = sampler.idle_reset_ms(),
            dead_zone = sampler.dead_zone(),
            "Controller::new"
        );
        Self {
            tracker,
            sampler,
            data_source,
        }
    }

    pub fn tracker(&self) -> &Tracker<K> {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut Tracker<K> {
        &mut self.tracker
    }

    pub fn sampler(&self) -> &VelocitySampler {
        &self.sampler
    }

    pub fn data_source(&self) -> &StaticDataSource<K> {
        &self.data_source
    }

    /// Attaches the delegate. The tracker holds it weakly; keep your `Arc` alive.
    pub fn set_delegate<G: TrackerDelegate<K> + 'static>(&mut self, delegate: &Arc<G>) {
        self.tracker.set_delegate(delegate);
    }

    pub fn set_tracking_rect(&self, tracking_rect: Rect) {
        self.data_source.set_tracking_rect(tracking_rect);
    }

    /// Call this when the UI reports a content-offset change (e.g. user wheel/drag).
    pub fn on_scroll(&self, offset_x: f32, offset_y: f32, now_ms: u64) {
        self.sampler.on_scroll(offset_x, offset_y, now_ms);
    }

    pub fn on_scroll_end(&self) {
        self.sampler.on_scroll_end();
    }

    /// Advances idle detection for the sampled velocity.
    pub fn tick(&self, now_ms: u64) {
        self.sampler.tick(now_ms);
    }

    /// Runs a tracking pass over the current item frames.
    pub fn on_layout<I>(&mut self, items: I) -> Result<(), TrackerError>
    where
        I: IntoIterator<Item = TrackingItem<K>>,
    {
        let result = self.tracker.recalculate(items);
        if let Err(_err) = &result {
            cwarn!(error = %_err, "Controller::on_layout");
        }
        result
    }

    /// Convenience for hosts that have `(key, frame)` pairs at hand.
    pub fn on_layout_frames<I>(&mut self, frames: I) -> Result<(), TrackerError>
    where
        I: IntoIterator<Item = (K, Rect)>,
    {
        self.on_layout(
            frames
                .into_iter()
                .map(|(key, frame)| TrackingItem::new(key, frame)),
        )
    }
}

impl<K> core::fmt::Debug for Controller<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("tracker", &self.tracker)
            .field("sampler", &self.sampler)
            .field("data_source", &self.data_source)
            .finish()
    }
}
