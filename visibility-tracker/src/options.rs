use crate::ScrollDirection;

/// Configuration for [`crate::Tracker`].
///
/// Set at construction and adjustable afterwards through `Tracker::update_options` or the
/// individual setters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerOptions {
    /// Objective visible ratio used when the data source has no per-item override.
    ///
    /// Expected in `[0, 1]`; the builder and setters clamp it.
    pub default_visible_ratio: f32,

    /// Direction used when the pan velocity is zero and no direction has been resolved yet.
    pub default_scroll_direction: ScrollDirection,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            default_visible_ratio: 0.0,
            default_scroll_direction: ScrollDirection::Up,
        }
    }
}

impl TrackerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_visible_ratio(mut self, ratio: f32) -> Self {
        self.default_visible_ratio = clamp_ratio(ratio);
        self
    }

    pub fn with_default_scroll_direction(mut self, direction: ScrollDirection) -> Self {
        self.default_scroll_direction = direction;
        self
    }
}

pub(crate) fn clamp_ratio(ratio: f32) -> f32 {
    if ratio.is_nan() {
        twarn!("TrackerOptions: NaN visible ratio replaced with 0");
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}
