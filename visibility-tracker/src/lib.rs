//! A headless impression tracker.
//!
//! For adapter-level utilities (velocity sampling, event queues, debug labels), see the
//! `visibility-tracker-adapter` crate.
//!
//! Given the items currently laid out inside a scrolling container, the tracker decides which of
//! them have become "visible enough" and reports each visibility episode exactly once:
//! - `will_begin_tracking` when an item first reaches its objective visible ratio,
//! - `did_end_tracking` when the item leaves the item set.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the pan velocity of the scroll container ([`ScrollHost`])
//! - the tracking rectangle and optional per-item thresholds ([`TrackerDataSource`])
//! - the current item frames, passed to [`Tracker::recalculate`] on every layout/scroll tick
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod collaborators;
mod error;
mod format;
mod geometry;
mod key;
mod options;
mod tracker;
mod types;


pub use collaborators::{ScrollHost, TrackerDataSource, TrackerDebugObserver, TrackerDelegate};
pub use error::TrackerError;
pub use geometry::{resolve_scroll_direction, shrink_tracking_rect, visible_ratio};
pub use options::TrackerOptions;
pub use tracker::Tracker;
pub use types::{Rect, ScrollDirection, TrackingItem, Velocity};

#[doc(hidden)]
pub use key::TrackingKey;
