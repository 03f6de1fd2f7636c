use alloc::format;
use alloc::string::String;

use crate::TrackingItem;

fn percentage(ratio: f32) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// Human-readable labels for debug overlays.
impl<K> TrackingItem<K> {
    /// `0.8` renders as `"80.00%"`.
    pub fn current_visible_ratio_percentage(&self) -> String {
        percentage(self.current_visible_ratio)
    }

    pub fn objective_visible_ratio_percentage(&self) -> String {
        percentage(self.objective_visible_ratio)
    }

    /// Two-line label: the current ratio, then `Objective: <ratio>`.
    pub fn debug_description(&self) -> String {
        format!(
            "{}\nObjective: {}",
            self.current_visible_ratio_percentage(),
            self.objective_visible_ratio_percentage()
        )
    }
}
