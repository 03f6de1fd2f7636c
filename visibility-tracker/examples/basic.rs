// Example: minimal impression tracking with hand-written collaborators.
use std::sync::{Arc, Mutex};

use visibility_tracker::{
    Rect, ScrollHost, Tracker, TrackerDataSource, TrackerDelegate, TrackerOptions, TrackingItem,
    Velocity,
};

struct Host(Mutex<Velocity>);

impl ScrollHost for Host {
    fn velocity(&self) -> Velocity {
        *self.0.lock().unwrap()
    }
}

struct Screen;

impl TrackerDataSource<&'static str> for Screen {
    fn tracking_rect(&self, _: &Tracker<&'static str>) -> Rect {
        Rect::new(0.0, 0.0, 375.0, 600.0)
    }
}

struct Logger;

impl TrackerDelegate<&'static str> for Logger {
    fn will_begin_tracking(&self, _: &Tracker<&'static str>, item: &TrackingItem<&'static str>) {
        println!("impression: {}", item.key);
    }

    fn did_end_tracking(&self, _: &Tracker<&'static str>, item: &TrackingItem<&'static str>) {
        println!("gone: {} (tracked={})", item.key, item.is_tracked);
    }
}

fn main() {
    let host = Arc::new(Host(Mutex::new(Velocity::ZERO)));
    let screen = Arc::new(Screen);
    let logger = Arc::new(Logger);
    let mut tracker = Tracker::with_collaborators(
        TrackerOptions::new().with_default_visible_ratio(0.5),
        &host,
        &screen,
        &logger,
    );

    let card = |key, y| TrackingItem::new(key, Rect::new(0.0, y, 375.0, 200.0));

    // "banner" fully visible, "promo" 25% visible.
    tracker
        .recalculate([card("banner", 0.0), card("promo", 550.0)])
        .expect("collaborators are attached");

    // The user drags the list up; "promo" becomes 75% visible.
    *host.0.lock().unwrap() = Velocity::new(0.0, -120.0);
    tracker
        .recalculate([card("banner", -100.0), card("promo", 450.0)])
        .expect("collaborators are attached");

    // "banner" is recycled out of the list.
    tracker
        .recalculate([card("promo", 300.0)])
        .expect("collaborators are attached");

    println!("previous_direction={:?}", tracker.previous_direction());
}
