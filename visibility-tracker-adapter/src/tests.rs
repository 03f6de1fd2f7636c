use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use visibility_tracker::{
    Rect, ScrollDirection, ScrollHost, TrackerOptions, TrackingItem, Velocity,
};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 320.0, 480.0);

const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Controller<u64>>();
    assert_send_sync::<VelocitySampler>();
    assert_send_sync::<StaticDataSource<u64>>();
    assert_send_sync::<EventRecorder<u64>>();
    assert_send_sync::<DebugLabels<u64>>();
};

/// Rows of height 100 stacked from `top`, keyed by index.
fn rows(top: f32, count: u64) -> Vec<(u64, Rect)> {
    (0..count)
        .map(|i| (i, Rect::new(0.0, top + i as f32 * 100.0, 320.0, 100.0)))
        .collect()
}

fn began_keys(events: &[TrackingEvent<u64>]) -> Vec<u64> {
    let mut keys: Vec<u64> = events
        .iter()
        .filter(|e| e.is_begin())
        .map(|e| *e.key())
        .collect();
    keys.sort_unstable();
    keys
}

fn ended_keys(events: &[TrackingEvent<u64>]) -> Vec<u64> {
    let mut keys: Vec<u64> = events
        .iter()
        .filter(|e| !e.is_begin())
        .map(|e| *e.key())
        .collect();
    keys.sort_unstable();
    keys
}

#[test]
fn sampler_reports_pan_velocity_from_offsets() {
    let sampler = VelocitySampler::new();
    assert_eq!(sampler.velocity(), Velocity::ZERO);

    // First event only sets the baseline.
    sampler.on_scroll(0.0, 0.0, 1_000);
    assert_eq!(sampler.velocity(), Velocity::ZERO);
    assert!(sampler.is_scrolling());

    // Content offset grows by 20 in 10ms: finger drags up, pan velocity is negative.
    sampler.on_scroll(0.0, 20.0, 1_010);
    assert_eq!(sampler.velocity(), Velocity::new(0.0, -2_000.0));

    sampler.on_scroll(0.0, 10.0, 1_020);
    assert_eq!(sampler.velocity(), Velocity::new(0.0, 1_000.0));
}

#[test]
fn sampler_settles_to_zero_after_idle() {
    let sampler = VelocitySampler::new().with_idle_reset_ms(100);
    sampler.on_scroll(0.0, 0.0, 0);
    sampler.on_scroll(0.0, 5.0, 10);
    assert_ne!(sampler.velocity(), Velocity::ZERO);

    sampler.tick(50);
    assert_ne!(sampler.velocity(), Velocity::ZERO);

    sampler.tick(110);
    assert_eq!(sampler.velocity(), Velocity::ZERO);
    assert!(!sampler.is_scrolling());

    sampler.on_scroll(0.0, 5.0, 200);
    sampler.on_scroll_end();
    assert_eq!(sampler.velocity(), Velocity::ZERO);
}

#[test]
fn sampler_dead_zone_suppresses_cross_axis_jitter() {
    let sampler = VelocitySampler::new().with_dead_zone(50.0);
    sampler.on_scroll(0.0, 0.0, 0);
    // 0.2 horizontal drift per 10ms = 20pt/s, below the dead zone.
    sampler.on_scroll(0.2, 30.0, 10);
    assert_eq!(sampler.velocity(), Velocity::new(0.0, -3_000.0));

    sampler.set_velocity(Velocity::new(-80.0, 10.0));
    assert_eq!(sampler.velocity(), Velocity::new(-80.0, 0.0));
}

#[test]
fn static_data_source_clamps_objectives() {
    let source = StaticDataSource::<u64>::new(VIEWPORT);
    source.set_objective(1, 0.4);
    source.set_objective(2, 3.0);
    assert_eq!(source.objective(&1), Some(0.4));
    assert_eq!(source.objective(&2), Some(1.0));
    assert_eq!(source.clear_objective(&1), Some(0.4));
    assert_eq!(source.objective(&1), None);

    source.set_tracking_rect(Rect::new(0.0, 44.0, 320.0, 400.0));
    assert_eq!(source.tracking_rect(), Rect::new(0.0, 44.0, 320.0, 400.0));
}

#[test]
fn controller_reports_impressions_while_scrolling() {
    let recorder = Arc::new(EventRecorder::<u64>::new());
    let mut c = Controller::new(TrackerOptions::new().with_default_visible_ratio(0.5), VIEWPORT);
    c.set_delegate(&recorder);

    // Rows 0..4 fully visible, row 4 starts at 400 (80 of 100 visible), rows 5.. below.
    c.on_layout_frames(rows(0.0, 8)).unwrap();
    let events = recorder.drain();
    assert_eq!(began_keys(&events), [0, 1, 2, 3, 4]);
    assert!(ended_keys(&events).is_empty());

    // Scroll content down by 250: rows shift up, row 0 and 1 leave the item set.
    c.on_scroll(0.0, 0.0, 0);
    c.on_scroll(0.0, 250.0, 16);
    let shifted: Vec<(u64, Rect)> = rows(-250.0, 10).into_iter().skip(2).collect();
    c.on_layout_frames(shifted).unwrap();
    let events = recorder.drain();
    // Row 5 at 250..350 and row 6 at 350..450 are fully visible; row 7 at 450..550 shows 30%.
    assert_eq!(began_keys(&events), [5, 6]);
    assert_eq!(ended_keys(&events), [0, 1]);
    assert_eq!(
        c.tracker().previous_direction(),
        Some(ScrollDirection::Up)
    );

    c.tick(1_000);
    assert_eq!(c.sampler().velocity(), Velocity::ZERO);
}

#[test]
fn controller_skips_thresholds_while_scrolling_diagonally() {
    let recorder = Arc::new(EventRecorder::<u64>::new());
    let mut c = Controller::new(TrackerOptions::new(), VIEWPORT);
    c.set_delegate(&recorder);

    c.on_scroll(0.0, 0.0, 0);
    c.on_scroll(10.0, 10.0, 16);
    c.on_layout_frames(rows(0.0, 2)).unwrap();
    assert!(recorder.is_empty());

    c.on_scroll_end();
    c.on_layout_frames(rows(0.0, 2)).unwrap();
    assert_eq!(recorder.len(), 2);
}

#[test]
fn controller_respects_per_key_objectives_and_tracking_rect() {
    let recorder = Arc::new(EventRecorder::<u64>::new());
    let mut c = Controller::new(TrackerOptions::new().with_default_visible_ratio(0.1), VIEWPORT);
    c.set_delegate(&recorder);
    c.data_source().set_objective(4, 1.0);

    // Row 4 is 80% visible, below its 100% objective.
    c.on_layout_frames(rows(0.0, 5)).unwrap();
    assert_eq!(began_keys(&recorder.drain()), [0, 1, 2, 3]);

    c.set_tracking_rect(Rect::new(0.0, 0.0, 320.0, 600.0));
    c.on_layout_frames(rows(0.0, 5)).unwrap();
    assert_eq!(began_keys(&recorder.drain()), [4]);
}

#[test]
fn recorder_keeps_pre_mutation_snapshots() {
    let recorder = Arc::new(EventRecorder::<u64>::new());
    let mut c = Controller::new(TrackerOptions::new(), VIEWPORT);
    c.set_delegate(&recorder);

    c.on_layout([TrackingItem::new(9, Rect::new(0.0, 0.0, 320.0, 100.0))])
        .unwrap();
    c.on_layout([]).unwrap();

    let events = recorder.drain();
    assert_eq!(events.len(), 2);
    match &events[0] {
        TrackingEvent::Began(item) => assert!(!item.is_tracked),
        other => panic!("unexpected event {other:?}"),
    }
    match &events[1] {
        TrackingEvent::Ended(item) => assert!(item.is_tracked),
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn debug_labels_follow_the_cache() {
    let labels = Arc::new(DebugLabels::<u64>::new());
    let mut c = Controller::new(TrackerOptions::new().with_default_visible_ratio(0.5), VIEWPORT);
    c.tracker_mut().register_debug_observer(Arc::clone(&labels));

    c.on_layout_frames(rows(0.0, 5)).unwrap();
    assert_eq!(labels.len(), 5);
    assert_eq!(labels.update_count(), 1);
    assert_eq!(labels.scroll_direction(), Some(ScrollDirection::Up));

    let label = labels.label(&4).unwrap();
    assert_eq!(label.text, "80.00%\nObjective: 50.00%");
    assert!(label.is_tracked);

    c.on_layout_frames(rows(0.0, 1)).unwrap();
    assert_eq!(labels.len(), 1);
    assert!(labels.label(&4).is_none());
    assert_eq!(labels.update_count(), 2);
}

#[test]
fn controller_surfaces_missing_delegate_as_silence() {
    let mut c: Controller<u64> = Controller::new(TrackerOptions::new(), VIEWPORT);
    assert_eq!(c.on_layout_frames(rows(0.0, 3)), Ok(()));
    assert!(c.tracker().is_tracked(&0));

    let recorder = Arc::new(EventRecorder::<u64>::new());
    c.set_delegate(&recorder);
    drop(recorder);
    assert_eq!(c.on_layout_frames(rows(0.0, 1)), Ok(()));
    assert_eq!(c.tracker().len(), 1);
}

#[test]
fn controller_is_driven_from_a_worker_thread() {
    use std::sync::Mutex;

    let recorder = Arc::new(EventRecorder::<u64>::new());
    let controller = Arc::new(Mutex::new(Controller::new(
        TrackerOptions::new().with_default_visible_ratio(0.5),
        VIEWPORT,
    )));
    controller.lock().unwrap().set_delegate(&recorder);

    let worker = {
        let controller = Arc::clone(&controller);
        std::thread::spawn(move || {
            let mut c = controller.lock().unwrap();
            c.on_scroll(0.0, 0.0, 0);
            c.on_scroll(0.0, 40.0, 16);
            c.on_layout_frames(rows(-40.0, 6))
        })
    };
    assert_eq!(worker.join().unwrap(), Ok(()));

    // Row 0 at -40..60 shows 60%, row 4 at 360..460 is fully inside, row 5 at 460..560 shows 20%.
    assert_eq!(began_keys(&recorder.drain()), [0, 1, 2, 3, 4]);
    let c = controller.lock().unwrap();
    assert_eq!(c.tracker().previous_direction(), Some(ScrollDirection::Up));
    assert!(!c.tracker().is_tracked(&5));
}
