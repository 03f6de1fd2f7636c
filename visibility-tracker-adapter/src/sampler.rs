use core::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};

use visibility_tracker::{ScrollHost, Velocity};

/// A [`ScrollHost`] that derives pan velocity from content-offset events.
///
/// Hosts without a native pan velocity feed it scroll offsets with timestamps:
/// - `on_scroll(offset_x, offset_y, now_ms)` for every scroll event
/// - `tick(now_ms)` each frame, so the velocity drops to zero once scrolling goes idle
/// - `on_scroll_end()` when the host knows scrolling stopped
///
/// The reported velocity follows the pan-gesture convention: content moving towards larger
/// offsets (the finger dragging up/left) produces negative components. Units are points per
/// second.
///
/// State lives in atomics so the sampler can be shared with a tracker through an `Arc` and still
/// be updated by the adapter, from any thread. Scroll events are expected to arrive from one
/// thread at a time.
#[derive(Debug)]
pub struct VelocitySampler {
    scrolling: AtomicBool,
    last_x: AtomicF32,
    last_y: AtomicF32,
    last_at_ms: AtomicU64,
    velocity_x: AtomicF32,
    velocity_y: AtomicF32,
    dead_zone: f32,
    idle_reset_ms: u64,
}

/// `f32` stored as its bit pattern.
#[derive(Debug, Default)]
struct AtomicF32(AtomicU32);

impl AtomicF32 {
    fn load(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    fn store(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl Default for VelocitySampler {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocitySampler {
    pub fn new() -> Self {
        Self {
            scrolling: AtomicBool::new(false),
            last_x: AtomicF32::default(),
            last_y: AtomicF32::default(),
            last_at_ms: AtomicU64::new(0),
            velocity_x: AtomicF32::default(),
            velocity_y: AtomicF32::default(),
            dead_zone: 0.0,
            idle_reset_ms: 150,
        }
    }

    /// Components whose magnitude is below `dead_zone` are reported as zero.
    ///
    /// Useful to keep small cross-axis jitter from turning a vertical drag into a diagonal one,
    /// which the tracker cannot resolve.
    pub fn with_dead_zone(mut self, dead_zone: f32) -> Self {
        self.dead_zone = dead_zone.max(0.0);
        self
    }

    /// How long after the last scroll event `tick` resets the velocity to zero.
    pub fn with_idle_reset_ms(mut self, idle_reset_ms: u64) -> Self {
        self.idle_reset_ms = idle_reset_ms;
        self
    }

    pub fn dead_zone(&self) -> f32 {
        self.dead_zone
    }

    pub fn idle_reset_ms(&self) -> u64 {
        self.idle_reset_ms
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling.load(Ordering::Acquire)
    }

    /// Records a content offset. The first event after idle only establishes a baseline.
    pub fn on_scroll(&self, offset_x: f32, offset_y: f32, now_ms: u64) {
        if self.is_scrolling() {
            let at_ms = self.last_at_ms.load(Ordering::Relaxed);
            let elapsed_ms = now_ms.saturating_sub(at_ms).max(1) as f32;
            let per_second = 1000.0 / elapsed_ms;
            self.set_velocity(Velocity::new(
                -(offset_x - self.last_x.load()) * per_second,
                -(offset_y - self.last_y.load()) * per_second,
            ));
        }
        self.last_x.store(offset_x);
        self.last_y.store(offset_y);
        self.last_at_ms.store(now_ms, Ordering::Relaxed);
        self.scrolling.store(true, Ordering::Release);
    }

    /// Resets the velocity once no scroll event arrived for `idle_reset_ms`.
    pub fn tick(&self, now_ms: u64) {
        if !self.is_scrolling() {
            return;
        }
        let at_ms = self.last_at_ms.load(Ordering::Relaxed);
        if now_ms.saturating_sub(at_ms) >= self.idle_reset_ms {
            self.on_scroll_end();
        }
    }

    pub fn on_scroll_end(&self) {
        self.scrolling.store(false, Ordering::Release);
        self.velocity_x.store(0.0);
        self.velocity_y.store(0.0);
    }

    /// Overrides the velocity, for hosts that report pan velocity natively.
    pub fn set_velocity(&self, velocity: Velocity) {
        let snap = |v: f32| if v.abs() < self.dead_zone { 0.0 } else { v };
        self.velocity_x.store(snap(velocity.x));
        self.velocity_y.store(snap(velocity.y));
    }
}

impl ScrollHost for VelocitySampler {
    fn velocity(&self) -> Velocity {
        Velocity::new(self.velocity_x.load(), self.velocity_y.load())
    }
}
