// Example: drive a tracker from scroll offsets and drain impressions per frame.
use std::sync::Arc;

use visibility_tracker::{Rect, TrackerOptions};
use visibility_tracker_adapter::{Controller, DebugLabels, EventRecorder, TrackingEvent};

const ROW_HEIGHT: f32 = 80.0;
const VIEWPORT: Rect = Rect::new(0.0, 0.0, 320.0, 400.0);

/// Rows laid out for a given content offset, keeping only those near the viewport.
fn layout(offset: f32) -> Vec<(u32, Rect)> {
    (0..100u32)
        .map(|i| (i, Rect::new(0.0, i as f32 * ROW_HEIGHT - offset, 320.0, ROW_HEIGHT)))
        .filter(|(_, frame)| {
            frame.max_y() > -ROW_HEIGHT && frame.min_y() < VIEWPORT.height + ROW_HEIGHT
        })
        .collect()
}

fn main() {
    let recorder = Arc::new(EventRecorder::new());
    let labels = Arc::new(DebugLabels::new());

    let mut c = Controller::new(TrackerOptions::new().with_default_visible_ratio(0.6), VIEWPORT);
    c.set_delegate(&recorder);
    c.tracker_mut().register_debug_observer(Arc::clone(&labels));

    let mut offset = 0.0;
    for frame in 0..30u64 {
        let now_ms = frame * 16;
        offset += 25.0;
        c.on_scroll(0.0, offset, now_ms);
        c.tick(now_ms);
        if let Err(err) = c.on_layout_frames(layout(offset)) {
            eprintln!("tracking pass failed: {err}");
        }

        for event in recorder.drain() {
            match event {
                TrackingEvent::Began(item) => println!("t={now_ms}ms impression row {}", item.key),
                TrackingEvent::Ended(item) => println!("t={now_ms}ms recycled row {}", item.key),
            }
        }
    }

    if let Some(label) = labels.label(&12) {
        println!("row 12 overlay:\n{}", label.text);
    }
}
